use anyhow::Result;
use clap::Parser;

use git_calver::config;
use git_calver::resolver::VersionResolver;
use git_calver::ui;
use git_calver::vcs::Git2Client;

#[derive(Parser)]
#[command(
    name = "git-calver",
    version,
    about = "Compute a calendar-based release version from git history"
)]
struct Args {
    #[arg(help = "Revision to compute the version for (defaults to HEAD)")]
    revision: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        short = 'b',
        long,
        help = "Release branch to check the current branch against"
    )]
    release_branch: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let release_branch = args.release_branch.unwrap_or(config.release_branch);

    let vcs = match Git2Client::discover() {
        Ok(client) => client,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    let resolver = VersionResolver::new(release_branch);
    let resolution = match resolver.resolve(&vcs, args.revision.as_deref()) {
        Ok(resolution) => resolution,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if let Some(advisory) = &resolution.advisory {
        ui::display_advisory(advisory);
    }

    println!("{}", resolution.version);

    Ok(())
}

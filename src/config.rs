use crate::error::{CalverError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Branch the current checkout is compared against when nothing overrides it
pub const DEFAULT_RELEASE_BRANCH: &str = "master";

/// Project configuration file, looked up in the working directory
const PROJECT_CONFIG_FILE: &str = "./gitcalver.toml";

/// Per-user configuration file inside the platform config directory
const USER_CONFIG_FILE: &str = ".gitcalver.toml";

/// Represents the complete configuration for git-calver.
///
/// Versions are derived from history alone; configuration only controls
/// which branch counts as the release branch for the advisory check.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_release_branch")]
    pub release_branch: String,
}

fn default_release_branch() -> String {
    DEFAULT_RELEASE_BRANCH.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            release_branch: default_release_branch(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitcalver.toml` in the current directory
/// 3. `.gitcalver.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(PROJECT_CONFIG_FILE).exists() {
        fs::read_to_string(PROJECT_CONFIG_FILE)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config =
        toml::from_str(&config_str).map_err(|e| CalverError::config(e.to_string()))?;
    Ok(config)
}

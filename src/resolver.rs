use crate::advisory::Advisory;
use crate::domain::CalVersion;
use crate::error::Result;
use crate::vcs::VcsClient;

/// Revision used when the caller does not supply one
pub const DEFAULT_TARGET_REVISION: &str = "HEAD";

/// Computes calendar versions from version-control history
pub struct VersionResolver {
    release_branch: String,
}

/// Outcome of a successful resolution: the version itself plus any advisory
/// raised along the way
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub version: CalVersion,
    pub advisory: Option<Advisory>,
}

impl VersionResolver {
    /// Create a resolver that checks the current branch against the given
    /// release branch
    pub fn new(release_branch: impl Into<String>) -> Self {
        VersionResolver {
            release_branch: release_branch.into(),
        }
    }

    /// The configured release branch name
    pub fn release_branch(&self) -> &str {
        &self.release_branch
    }

    /// Resolve the calendar version of a revision.
    ///
    /// Issues the three read-only queries in order: the current branch (for
    /// the advisory comparison only), the commit month of the target, and
    /// the count of ancestors inside that month's window. The count includes
    /// the target revision itself. A `None` target defaults to
    /// [DEFAULT_TARGET_REVISION].
    ///
    /// A failing query aborts the whole resolution; there is no retry, no
    /// fallback value and no partial result.
    pub fn resolve<V: VcsClient>(&self, vcs: &V, target: Option<&str>) -> Result<Resolution> {
        let target = target.unwrap_or(DEFAULT_TARGET_REVISION);

        let advisory = self.branch_advisory(vcs)?;

        let month = vcs.commit_month(target)?;
        let window = month.window()?;
        let ordinal = vcs.count_commits_in_window(target, &window)?;

        let version = CalVersion::new(month.short_year(), month.month, ordinal);

        Ok(Resolution { version, advisory })
    }

    /// Compare the current branch to the release branch, case-sensitively
    fn branch_advisory<V: VcsClient>(&self, vcs: &V) -> Result<Option<Advisory>> {
        Ok(match vcs.current_branch()? {
            Some(current) if current == self.release_branch => None,
            Some(current) => Some(Advisory::OffReleaseBranch {
                current,
                release: self.release_branch.clone(),
            }),
            None => Some(Advisory::DetachedHead {
                release: self.release_branch.clone(),
            }),
        })
    }
}

use std::fmt;

/// Non-fatal diagnostics raised while resolving a version.
/// These are reported to the user on the side channel and never change the
/// computed version or the exit status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    /// The current branch is not the designated release branch
    OffReleaseBranch { current: String, release: String },
    /// HEAD is detached, so there is no branch to check against the release
    /// branch
    DetachedHead { release: String },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::OffReleaseBranch { current, release } => {
                write!(
                    f,
                    "Current branch '{}' is not the release branch '{}'",
                    current, release
                )
            }
            Advisory::DetachedHead { release } => {
                write!(
                    f,
                    "HEAD is detached; not on the release branch '{}'",
                    release
                )
            }
        }
    }
}

//! Version-control access layer
//!
//! This module provides a trait-based abstraction over the read-only
//! queries git-calver issues, allowing for a real git2-backed client and a
//! mock implementation for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [VcsClient] trait. The concrete
//! implementations include:
//!
//! - [git::Git2Client]: a real implementation using the `git2` crate
//! - [mock::MockClient]: an in-memory implementation for tests
//!
//! Version computation should depend on the trait rather than a concrete
//! client.
//!
//! ```rust
//! # use git_calver::vcs::VcsClient;
//! # fn example<V: VcsClient>(vcs: &V) -> git_calver::Result<()> {
//! let month = vcs.commit_month("HEAD")?;
//! let ordinal = vcs.count_commits_in_window("HEAD", &month.window()?)?;
//! # Ok(())
//! # }
//! ```

pub mod git;
pub mod mock;

pub use git::Git2Client;
pub use mock::MockClient;

use crate::domain::{CommitMonth, MonthWindow};
use crate::error::Result;

/// Read-only version-control queries needed to compute a calendar version
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]. Implementations map
/// underlying failures (such as `git2::Error`) onto the matching
/// [crate::error::CalverError] variants; any query failure is final, with
/// no retry and no partial result.
pub trait VcsClient {
    /// Get the name of the currently checked-out branch
    ///
    /// # Returns
    /// * `Ok(Some(name))` - Short branch name (e.g. "master")
    /// * `Ok(None)` - HEAD is detached
    /// * `Err` - HEAD cannot be resolved at all
    fn current_branch(&self) -> Result<Option<String>>;

    /// Get the calendar year and month of a revision's committer timestamp,
    /// in the committer's recorded timezone
    ///
    /// # Arguments
    /// * `revision` - Any revision reference ("HEAD", a sha, a branch, a tag)
    ///
    /// # Returns
    /// * `Ok(CommitMonth)` - Year and month of the commit
    /// * `Err` - If the revision cannot be resolved to a commit
    fn commit_month(&self, revision: &str) -> Result<CommitMonth>;

    /// Count the commits reachable from `revision` (the revision itself
    /// included) whose committer wall-clock datetime falls inside `window`
    ///
    /// Ancestry follows every parent of merge commits; commits outside the
    /// revision's ancestry never count.
    ///
    /// # Arguments
    /// * `revision` - Revision whose ancestry is walked
    /// * `window` - Inclusive datetime range to match against
    fn count_commits_in_window(&self, revision: &str, window: &MonthWindow) -> Result<u64>;
}

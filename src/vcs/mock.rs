use crate::domain::{CommitMonth, MonthWindow};
use crate::error::{CalverError, Result};
use crate::vcs::VcsClient;
use chrono::NaiveDateTime;
use std::collections::HashMap;

/// Mock client for testing without a real repository.
///
/// Revisions are registered by name together with their commit month and the
/// committer datetimes of their ancestry. A fresh mock reports a detached
/// HEAD until a branch is set.
pub struct MockClient {
    branch: Option<String>,
    months: HashMap<String, CommitMonth>,
    ancestries: HashMap<String, Vec<NaiveDateTime>>,
}

impl MockClient {
    /// Create a new empty mock client
    pub fn new() -> Self {
        MockClient {
            branch: None,
            months: HashMap::new(),
            ancestries: HashMap::new(),
        }
    }

    /// Set the currently checked-out branch
    pub fn set_branch(&mut self, branch: impl Into<String>) {
        self.branch = Some(branch.into());
    }

    /// Register a revision with its commit month and the committer
    /// datetimes of its ancestry (the revision itself included)
    pub fn add_revision(
        &mut self,
        revision: impl Into<String>,
        month: CommitMonth,
        ancestry: Vec<NaiveDateTime>,
    ) {
        let revision = revision.into();
        self.months.insert(revision.clone(), month);
        self.ancestries.insert(revision, ancestry);
    }
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}

impl VcsClient for MockClient {
    fn current_branch(&self) -> Result<Option<String>> {
        Ok(self.branch.clone())
    }

    fn commit_month(&self, revision: &str) -> Result<CommitMonth> {
        self.months
            .get(revision)
            .copied()
            .ok_or_else(|| CalverError::revision(format!("Cannot resolve revision '{}'", revision)))
    }

    fn count_commits_in_window(&self, revision: &str, window: &MonthWindow) -> Result<u64> {
        let ancestry = self
            .ancestries
            .get(revision)
            .ok_or_else(|| CalverError::revision(format!("Cannot resolve revision '{}'", revision)))?;

        Ok(ancestry.iter().filter(|at| window.contains(**at)).count() as u64)
    }
}

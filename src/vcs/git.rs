use crate::domain::{CommitMonth, MonthWindow};
use crate::error::{CalverError, Result};
use chrono::{DateTime, Datelike, FixedOffset, NaiveDateTime};
use git2::{Commit, Repository, Time};
use std::path::Path;

/// Wrapper around git2::Repository implementing the read-only query trait.
///
/// All operations are local and observational; the repository is never
/// mutated and no remote is ever contacted.
pub struct Git2Client {
    repo: Repository,
}

impl Git2Client {
    /// Creates a client for the repository containing the current working
    /// directory.
    ///
    /// # Returns
    /// * `Ok(Git2Client)` - Successfully initialized client
    /// * `Err` - If not inside a git repository
    pub fn discover() -> Result<Self> {
        Self::open(".")
    }

    /// Opens a repository, discovering it from the given path upwards.
    ///
    /// # Arguments
    /// * `path` - Starting point for discovery (a repository or any
    ///   directory inside one)
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path)?;
        Ok(Git2Client { repo })
    }

    /// Resolves a revision reference to the commit it names.
    fn find_commit(&self, revision: &str) -> Result<Commit<'_>> {
        let object = self.repo.revparse_single(revision).map_err(|e| {
            CalverError::revision(format!("Cannot resolve revision '{}': {}", revision, e))
        })?;

        object.peel_to_commit().map_err(|e| {
            CalverError::revision(format!("'{}' does not name a commit: {}", revision, e))
        })
    }
}

/// Committer wall-clock datetime for a commit timestamp, reconstructed from
/// the recorded UTC seconds and timezone offset.
fn committer_datetime(time: Time) -> Result<NaiveDateTime> {
    let offset = FixedOffset::east_opt(time.offset_minutes() * 60).ok_or_else(|| {
        CalverError::date(format!(
            "Invalid timezone offset: {} minutes",
            time.offset_minutes()
        ))
    })?;

    let utc = DateTime::from_timestamp(time.seconds(), 0).ok_or_else(|| {
        CalverError::date(format!(
            "Commit timestamp out of range: {}",
            time.seconds()
        ))
    })?;

    Ok(utc.with_timezone(&offset).naive_local())
}

impl super::VcsClient for Git2Client {
    fn current_branch(&self) -> Result<Option<String>> {
        let head = self
            .repo
            .head()
            .map_err(|e| CalverError::branch(format!("Cannot resolve HEAD: {}", e)))?;

        if !head.is_branch() {
            return Ok(None);
        }

        let name = head
            .shorthand()
            .ok_or_else(|| CalverError::branch("Branch name is not valid UTF-8"))?;

        Ok(Some(name.to_string()))
    }

    fn commit_month(&self, revision: &str) -> Result<CommitMonth> {
        let commit = self.find_commit(revision)?;
        let when = committer_datetime(commit.time())?;

        Ok(CommitMonth::new(when.year(), when.month()))
    }

    fn count_commits_in_window(&self, revision: &str, window: &MonthWindow) -> Result<u64> {
        let commit = self.find_commit(revision)?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.push(commit.id())?;

        let mut count: u64 = 0;
        for oid in revwalk {
            let commit = self.repo.find_commit(oid?)?;
            if window.contains(committer_datetime(commit.time())?) {
                count += 1;
            }
        }

        Ok(count)
    }
}

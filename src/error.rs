use thiserror::Error;

/// Unified error type for git-calver operations
#[derive(Error, Debug)]
pub enum CalverError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Revision error: {0}")]
    Revision(String),

    #[error("Branch error: {0}")]
    Branch(String),

    #[error("Commit date error: {0}")]
    Date(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-calver
pub type Result<T> = std::result::Result<T, CalverError>;

impl CalverError {
    /// Create a revision error with context
    pub fn revision(msg: impl Into<String>) -> Self {
        CalverError::Revision(msg.into())
    }

    /// Create a branch error with context
    pub fn branch(msg: impl Into<String>) -> Self {
        CalverError::Branch(msg.into())
    }

    /// Create a commit date error with context
    pub fn date(msg: impl Into<String>) -> Self {
        CalverError::Date(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        CalverError::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CalverError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CalverError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(CalverError::revision("test")
            .to_string()
            .contains("Revision"));
        assert!(CalverError::branch("test").to_string().contains("Branch"));
        assert!(CalverError::date("test").to_string().contains("date"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (CalverError::revision("x"), "Revision error"),
            (CalverError::branch("x"), "Branch error"),
            (CalverError::date("x"), "Commit date error"),
            (CalverError::config("x"), "Configuration error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_error_empty_messages() {
        let errors = vec![
            CalverError::revision(""),
            CalverError::branch(""),
            CalverError::date(""),
            CalverError::config(""),
        ];

        for err in errors {
            // Even with empty message, the error type prefix should be present
            assert!(!err.to_string().is_empty());
        }
    }
}

pub mod advisory;
pub mod config;
pub mod domain;
pub mod error;
pub mod resolver;
pub mod ui;
pub mod vcs;

pub use error::{CalverError, Result};

//! Domain logic - calendar months, month windows and version identifiers,
//! independent of version-control access

pub mod month;
pub mod version;

pub use month::{CommitMonth, MonthWindow};
pub use version::CalVersion;

use std::fmt;

/// Calendar version identifier: short year, month, and the ordinal count of
/// commits within that month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CalVersion {
    pub year: u32,
    pub month: u32,
    pub ordinal: u64,
}

impl CalVersion {
    /// Create a new calendar version
    pub fn new(year: u32, month: u32, ordinal: u64) -> Self {
        CalVersion {
            year,
            month,
            ordinal,
        }
    }

    /// Bridge to a `semver::Version` with year, month and ordinal mapped
    /// onto major, minor and patch.
    ///
    /// All components are plain decimals without leading zeros, so the
    /// calendar identifier is always valid under three-component numeric
    /// version schemes.
    pub fn to_semver(&self) -> semver::Version {
        semver::Version::new(u64::from(self.year), u64::from(self.month), self.ordinal)
    }
}

impl fmt::Display for CalVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.year, self.month, self.ordinal)
    }
}

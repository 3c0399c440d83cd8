//! Semantic version value type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DomainError, DomainResult};

/// An immutable `major.minor.patch` version triple.
///
/// The textual form is exactly three dot-separated decimal numbers with no
/// pre-release or build-metadata suffix. Ordering is lexicographic by
/// `(major, minor, patch)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Version {
    /// Major component.
    pub major: u64,
    /// Minor component.
    pub minor: u64,
    /// Patch component.
    pub patch: u64,
}

impl Version {
    /// The `0.0.0` version, used as the starting point for projects that
    /// have no recorded version yet.
    pub const ZERO: Self = Self::new(0, 0, 0);

    /// Creates a version from its three components.
    #[must_use]
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Returns the next major version: `{major+1, 0, 0}`.
    #[must_use]
    pub const fn bump_major(self) -> Self {
        Self::new(self.major + 1, 0, 0)
    }

    /// Returns the next minor version: `{major, minor+1, 0}`.
    #[must_use]
    pub const fn bump_minor(self) -> Self {
        Self::new(self.major, self.minor + 1, 0)
    }

    /// Returns the next patch version: `{major, minor, patch+1}`.
    #[must_use]
    pub const fn bump_patch(self) -> Self {
        Self::new(self.major, self.minor, self.patch + 1)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Parses one dot-separated component. Rejects signs and embedded
/// whitespace; `u64::from_str` alone would accept a leading `+`.
fn parse_component(text: &str, full: &str) -> DomainResult<u64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DomainError::InvalidFormat(full.to_string()));
    }
    text.parse()
        .map_err(|_| DomainError::InvalidFormat(full.to_string()))
}

impl FromStr for Version {
    type Err = DomainError;

    /// Accepts exactly `<digits>.<digits>.<digits>`.
    ///
    /// Pre-release and build-metadata suffixes (`1.0.0-rc1`, `1.0.0+build`)
    /// are rejected rather than ignored.
    fn from_str(s: &str) -> DomainResult<Self> {
        let mut parts = s.split('.');
        let (Some(major), Some(minor), Some(patch), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(DomainError::InvalidFormat(s.to_string()));
        };

        Ok(Self::new(
            parse_component(major, s)?,
            parse_component(minor, s)?,
            parse_component(patch, s)?,
        ))
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

//! Release version comparison for update notifications.

use std::fmt;
use std::str::FromStr;

use crate::common::error::{FisherError, Result};

/// A `major.minor.patch` version. Ordering is numeric, field by field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl FromStr for Version {
    type Err = FisherError;

    /// Accepts an optional leading `v` (`v1.2.3`), as used by release tags.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || FisherError::InvalidVersion(s.to_string());
        let trimmed = s.trim();
        let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);

        let mut parts = trimmed.split('.');
        let mut next = || -> Result<u32> {
            parts
                .next()
                .and_then(|p| p.parse().ok())
                .ok_or_else(invalid)
        };
        let version = Version {
            major: next()?,
            minor: next()?,
            patch: next()?,
        };
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(version)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// A newer release than the running one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateInfo {
    pub version: Version,
    pub dist_url: String,
}

/// Compare the latest release tag with the running version.
pub fn check_update(latest_tag: &str, current: &str, dist_url: &str) -> Result<Option<UpdateInfo>> {
    let latest: Version = latest_tag.parse()?;
    let current: Version = current.parse()?;
    if latest > current {
        tracing::debug!(%latest, %current, "update available");
        Ok(Some(UpdateInfo {
            version: latest,
            dist_url: dist_url.to_string(),
        }))
    } else {
        Ok(None)
    }
}

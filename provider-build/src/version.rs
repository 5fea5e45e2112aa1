use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

use crate::{Error, Result};

/// A strict `major.minor.patch` version.
///
/// Parsing accepts nothing but three dot-separated decimal numbers; there is
/// no pre-release or build-metadata syntax.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Version {
    major: u32,
    minor: u32,
    patch: u32,
}

impl Version {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version out of a release ref such as `refs/tags/v1.2.3`.
    ///
    /// A leading `refs/tags/` is stripped first; what remains must be
    /// exactly `v<major>.<minor>.<patch>`.
    pub fn from_release_tag(git_ref: &str) -> Result<Self> {
        let tag = git_ref.strip_prefix("refs/tags/").unwrap_or(git_ref);
        tag.strip_prefix('v')
            .and_then(|rest| rest.parse().ok())
            .ok_or_else(|| {
                Box::new(Error::InvalidVersionTag {
                    tag: tag.to_string(),
                })
            })
    }
}

impl TryFrom<String> for Version {
    type Error = String;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        fn numeric(part: &str) -> std::result::Result<u32, String> {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(format!("non-numeric version component '{}'", part));
            }
            part.parse().map_err(|_| format!("component '{}' out of range", part))
        }

        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 3 {
            return Err(format!("invalid version '{}', expected 'X.Y.Z'", s));
        }
        Ok(Self {
            major: numeric(parts[0])?,
            minor: numeric(parts[1])?,
            patch: numeric(parts[2])?,
        })
    }
}

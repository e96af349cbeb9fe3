//! User-agent classification contract.
//!
//! The tracker treats user-agent parsing as a black box: a raw header value
//! goes in, optional OS / browser / device labels come out. Parsing options
//! are passed explicitly with every call.

use std::fmt;
use std::str::FromStr;

/// How many version components to keep in reported browser/OS versions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VersionTruncation {
    /// Keep the full version string.
    #[default]
    None,
    Major,
    Minor,
    Patch,
    Build,
}

impl VersionTruncation {
    /// Number of dot-separated components to keep, `None` for all.
    fn components(self) -> Option<usize> {
        match self {
            VersionTruncation::None => None,
            VersionTruncation::Major => Some(1),
            VersionTruncation::Minor => Some(2),
            VersionTruncation::Patch => Some(3),
            VersionTruncation::Build => Some(4),
        }
    }

    /// Truncates a dotted version string.
    ///
    /// ```ignore
    /// assert_eq!(VersionTruncation::Minor.apply("120.0.6099.71"), "120.0");
    /// ```
    pub fn apply(self, version: &str) -> String {
        match self.components() {
            None => version.to_string(),
            Some(n) => version.split('.').take(n).collect::<Vec<_>>().join("."),
        }
    }
}

impl FromStr for VersionTruncation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "major" => Ok(Self::Major),
            "minor" => Ok(Self::Minor),
            "patch" => Ok(Self::Patch),
            "build" => Ok(Self::Build),
            other => Err(format!(
                "expected one of none, major, minor, patch, build; got '{other}'"
            )),
        }
    }
}

impl fmt::Display for VersionTruncation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            VersionTruncation::None => "none",
            VersionTruncation::Major => "major",
            VersionTruncation::Minor => "minor",
            VersionTruncation::Patch => "patch",
            VersionTruncation::Build => "build",
        };
        f.write_str(s)
    }
}

/// Options applied to a single classification call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserAgentConfig {
    pub version_truncation: VersionTruncation,
}

/// Classification result. Any field may be unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserAgentInfo {
    pub os_name: Option<String>,
    pub os_version: Option<String>,
    pub browser_name: Option<String>,
    pub browser_version: Option<String>,
    /// Device class label such as `desktop` or `smartphone`.
    pub device_type: Option<String>,
}

/// Classifies raw user-agent strings.
///
/// Implementations must never fail: unrecognized input yields empty fields.
///
/// # Implementations
///
/// - [`crate::infrastructure::user_agent::WootheeClassifier`]
#[cfg_attr(test, mockall::automock)]
pub trait UserAgentClassifier: Send + Sync {
    fn classify(&self, user_agent: &str, config: &UserAgentConfig) -> UserAgentInfo;
}

//! Wire types for the version-switcher manifest.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum entries a published manifest may carry: `dev` plus the ten most
/// recent releases. Older entries drop out of the manifest but their built
/// documentation stays reachable at its original storage location.
pub const MAX_MANIFEST_ENTRIES: usize = 11;

/// Name of the perpetually updated unreleased build.
pub const DEV_NAME: &str = "dev";

/// Release sentinel carried by the `dev` entry.
pub const DEV_RELEASE: &str = "0.0.0+dev";

/// One published documentation version, as serialized in `versions.json`.
///
/// `version` carries the full release string (`1.4.2` or `0.0.0+dev`);
/// `name` is the directory label the docs are served under (`1.4` or `dev`).
/// `url` and `preferred` are recomputed on every publish, so they are
/// tolerated if absent when parsing an older manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionEntry {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub preferred: bool,
}

/// Parsed manifest entry name: the `dev` sentinel or a `MAJOR.MINOR` pair.
///
/// The `Ord` impl is the manifest order: `dev` sorts first regardless of its
/// release value, then releases newest-first by numeric comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionName {
    Dev,
    Release { major: u64, minor: u64 },
}

impl VersionName {
    /// Parse a manifest entry name. Returns `None` for anything that is
    /// neither `dev` nor two dot-separated non-negative integers.
    pub fn parse(s: &str) -> Option<Self> {
        if s == DEV_NAME {
            return Some(Self::Dev);
        }
        let (major, minor) = s.split_once('.')?;
        Some(Self::Release {
            major: parse_numeric(major)?,
            minor: parse_numeric(minor)?,
        })
    }
}

impl Ord for VersionName {
    fn cmp(&self, other: &Self) -> Ordering {
        use VersionName::*;
        match (self, other) {
            (Dev, Dev) => Ordering::Equal,
            (Dev, Release { .. }) => Ordering::Less,
            (Release { .. }, Dev) => Ordering::Greater,
            // Reversed operands: newer releases sort earlier.
            (Release { major: a, minor: b }, Release { major: c, minor: d }) => {
                (c, d).cmp(&(a, b))
            }
        }
    }
}

impl PartialOrd for VersionName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for VersionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dev => f.write_str(DEV_NAME),
            Self::Release { major, minor } => write!(f, "{major}.{minor}"),
        }
    }
}

/// Parse one version component: decimal digits only, no signs, no spaces.
pub(crate) fn parse_numeric(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

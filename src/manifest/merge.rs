//! Merge a resolved version into the published manifest.
//!
//! The merge is a pure function over the previously published entries:
//! insert or replace by name, re-sort, truncate, then recompute `url` and
//! `preferred` for every surviving entry. Running it twice with identical
//! input produces identical output.

use std::collections::BTreeMap;

use tracing::warn;

use super::schema::{DEV_NAME, MAX_MANIFEST_ENTRIES, VersionEntry, VersionName};
use crate::{SwitcherError, SwitcherResult};

/// Merge `(version, release)` into `existing` and rebuild the manifest.
///
/// Entries whose name is neither `dev` nor `MAJOR.MINOR` cannot be ordered
/// and are dropped with a warning. A `version` argument that itself fails to
/// parse is an error, since the new entry would otherwise vanish silently.
pub fn merge_manifest(
    existing: &[VersionEntry],
    version: &str,
    release: &str,
    base_url: &str,
) -> SwitcherResult<Vec<VersionEntry>> {
    let new_name = VersionName::parse(version).ok_or_else(|| {
        SwitcherError::Message(format!("not a publishable version label: {version:?}"))
    })?;

    // Keyed by parsed name; BTreeMap iteration order is the manifest order
    // (dev first, then newest release first).
    let mut releases: BTreeMap<VersionName, String> = BTreeMap::new();
    for entry in existing {
        match VersionName::parse(&entry.name) {
            Some(name) => {
                releases.insert(name, entry.version.clone());
            }
            None => warn!(name = %entry.name, "dropping manifest entry with unrecognized name"),
        }
    }
    releases.insert(new_name, release.to_string());

    let base = base_url.trim_end_matches('/');
    let mut entries: Vec<VersionEntry> = releases
        .into_iter()
        .take(MAX_MANIFEST_ENTRIES)
        .map(|(name, release)| VersionEntry {
            url: format!("{base}/{name}/"),
            name: name.to_string(),
            version: release,
            preferred: false,
        })
        .collect();

    // The preferred version is the newest real release, found by predicate
    // rather than by position so a dev-only manifest simply has none.
    if let Some(entry) = entries.iter_mut().find(|e| e.name != DEV_NAME) {
        entry.preferred = true;
    }

    Ok(entries)
}

/// URL the bare `index.html` redirect should point at: the preferred entry,
/// or the first entry when nothing is preferred yet (dev-only manifest).
pub fn redirect_target(entries: &[VersionEntry]) -> Option<&str> {
    entries
        .iter()
        .find(|e| e.preferred)
        .or_else(|| entries.first())
        .map(|e| e.url.as_str())
}

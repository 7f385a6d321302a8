//! Derives the documentation version label for a publish run.
//!
//! A release tag of the form `MAJOR.MINOR[.PATCH]` publishes under the
//! `MAJOR.MINOR` directory; every non-release trigger publishes the rolling
//! `dev` build. Anything else (pre-release tags, `v`-prefixed tags) resolves
//! to nothing and the publish step is skipped.

use crate::manifest::schema::{DEV_NAME, DEV_RELEASE, parse_numeric};

/// Kind of event that triggered the publish pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerEvent {
    /// A tagged release.
    Release,
    /// Anything else (branch push, manual dispatch); publishes `dev`.
    Other,
}

impl TriggerEvent {
    /// Map an orchestrator event name to a trigger kind. Only the literal
    /// `release` counts as a release.
    pub fn from_event_name(event: &str) -> Self {
        if event == "release" { Self::Release } else { Self::Other }
    }
}

/// Version label and release string for one publish run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVersion {
    /// Directory label the docs are served under (`dev` or `MAJOR.MINOR`).
    pub version: String,
    /// Full release string (`1.4.2`, or `0.0.0+dev` for unreleased builds).
    pub release: String,
}

/// Resolve the version for a trigger event.
///
/// Returns `None` when a release tag does not look like a plain
/// `MAJOR.MINOR[.PATCH]` version. That is a skip, not a failure: release
/// candidates and other suffixed tags stay under `dev` until the real
/// release lands.
pub fn resolve(event: TriggerEvent, tag: Option<&str>) -> Option<ResolvedVersion> {
    match event {
        TriggerEvent::Other => Some(ResolvedVersion {
            version: DEV_NAME.to_string(),
            release: DEV_RELEASE.to_string(),
        }),
        TriggerEvent::Release => {
            let tag = tag?;
            let (major, minor) = parse_release_tag(tag)?;
            Some(ResolvedVersion {
                version: format!("{major}.{minor}"),
                release: tag.to_string(),
            })
        }
    }
}

/// Accepts `MAJOR.MINOR.PATCH` and `MAJOR.MINOR`; rejects everything else,
/// including `v`-prefixed tags, pre-release suffixes, and trailing dots.
fn parse_release_tag(tag: &str) -> Option<(u64, u64)> {
    let mut parts = tag.split('.');
    let major = parse_numeric(parts.next()?)?;
    let minor = parse_numeric(parts.next()?)?;
    if let Some(patch) = parts.next() {
        parse_numeric(patch)?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some((major, minor))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_release_event_resolves_dev() {
        for event in ["push", "schedule", "workflow_dispatch", ""] {
            let resolved = resolve(TriggerEvent::from_event_name(event), None).unwrap();
            assert_eq!(resolved.version, "dev");
            assert_eq!(resolved.release, "0.0.0+dev");
        }
    }

    #[test]
    fn test_non_release_event_ignores_tag() {
        let resolved = resolve(TriggerEvent::Other, Some("1.2.3")).unwrap();
        assert_eq!(resolved.version, "dev");
        assert_eq!(resolved.release, "0.0.0+dev");
    }

    #[test]
    fn test_release_tag_full() {
        let resolved = resolve(TriggerEvent::Release, Some("1.4.2")).unwrap();
        assert_eq!(resolved.version, "1.4");
        assert_eq!(resolved.release, "1.4.2");
    }

    #[test]
    fn test_release_tag_without_patch() {
        // "2.0" is accepted and treated like "2.0.0"
        let resolved = resolve(TriggerEvent::Release, Some("2.0")).unwrap();
        assert_eq!(resolved.version, "2.0");
        assert_eq!(resolved.release, "2.0");
    }

    #[test]
    fn test_release_tag_rejected() {
        for tag in [
            "1.2.3-rc1",
            "v1.2.3",
            "abc",
            "1",
            "1.",
            "1.2.",
            ".1.2",
            "1.2.3.4",
            "1.2.x",
            "",
        ] {
            assert!(
                resolve(TriggerEvent::Release, Some(tag)).is_none(),
                "tag {tag:?} should be skipped"
            );
        }
    }

    #[test]
    fn test_release_event_without_tag_is_skipped() {
        assert!(resolve(TriggerEvent::Release, None).is_none());
    }

    #[test]
    fn test_leading_zeros_normalized() {
        let resolved = resolve(TriggerEvent::Release, Some("01.02.3")).unwrap();
        assert_eq!(resolved.version, "1.2");
        assert_eq!(resolved.release, "01.02.3");
    }

    #[test]
    fn test_event_name_mapping() {
        assert_eq!(TriggerEvent::from_event_name("release"), TriggerEvent::Release);
        assert_eq!(TriggerEvent::from_event_name("Release"), TriggerEvent::Other);
        assert_eq!(TriggerEvent::from_event_name("push"), TriggerEvent::Other);
    }
}

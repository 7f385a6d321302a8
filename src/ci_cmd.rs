//! CI command: resolve the trigger event and publish in one step.
//!
//! This is the entry point a pipeline job calls once per run. A tag that
//! does not resolve makes the whole run a no-op success, mirroring the
//! skip-not-fail contract of `resolve`.

use std::path::PathBuf;

use tracing::info;

use crate::SwitcherResult;
use crate::publish_cmd;
use crate::resolver::{TriggerEvent, resolve};

/// Run the `ci` command.
pub fn run(
    event: String,
    tag: Option<String>,
    base_url: String,
    out_dir: PathBuf,
) -> SwitcherResult<()> {
    let kind = TriggerEvent::from_event_name(&event);
    let Some(resolved) = resolve(kind, tag.as_deref()) else {
        info!(
            tag = tag.as_deref().unwrap_or(""),
            "tag is not a release version; nothing to publish"
        );
        return Ok(());
    };
    eprintln!(
        "Resolved version {} (release {})",
        resolved.version, resolved.release
    );
    publish_cmd::run(resolved.version, resolved.release, base_url, out_dir)
}

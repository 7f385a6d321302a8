//! CLI command handler for `resolve`.
//!
//! Prints `version=` and `release=` lines to stdout for the orchestrator to
//! capture. A release tag that is not a plain version prints nothing and
//! exits cleanly: downstream publish steps are skipped, not failed.

use tracing::info;

use crate::SwitcherResult;
use crate::resolver::{ResolvedVersion, TriggerEvent, resolve};

/// Render the stdout lines the orchestrator captures.
fn render_outputs(resolved: &ResolvedVersion) -> String {
    format!("version={}\nrelease={}\n", resolved.version, resolved.release)
}

/// Run the `resolve` command.
pub fn run(event: String, tag: Option<String>) -> SwitcherResult<()> {
    let kind = TriggerEvent::from_event_name(&event);
    match resolve(kind, tag.as_deref()) {
        Some(resolved) => {
            print!("{}", render_outputs(&resolved));
            Ok(())
        }
        None => {
            info!(
                tag = tag.as_deref().unwrap_or(""),
                "tag is not a release version; skipping publish"
            );
            Ok(())
        }
    }
}

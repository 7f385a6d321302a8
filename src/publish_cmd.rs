//! CLI command handler for `publish`.
//!
//! Fetches the published manifest, merges the resolved version, and writes
//! the new `versions.json` plus the `index.html` redirect. Uploading both
//! files to storage is the orchestrator's job.

use std::fs;
use std::path::PathBuf;

use crate::manifest::{
    MANIFEST_FILE, build_http_client, fetch_manifest, manifest_url, merge_manifest,
    redirect_target, render_redirect_html,
};
use crate::{SwitcherError, SwitcherResult};

/// File name of the redirect page at the storage root.
pub const REDIRECT_FILE: &str = "index.html";

/// Run the `publish` command.
///
/// # Arguments
/// * `version` - Directory label to publish under (`dev` or `MAJOR.MINOR`)
/// * `release` - Full release string recorded in the manifest
/// * `base_url` - Base URL the documentation is served from
/// * `out_dir` - Output directory for the two artifacts
pub fn run(
    version: String,
    release: String,
    base_url: String,
    out_dir: PathBuf,
) -> SwitcherResult<()> {
    let client = build_http_client()?;
    eprintln!("Fetching manifest from: {}", manifest_url(&base_url));
    let existing = fetch_manifest(&client, &base_url)?;
    eprintln!("Fetched {} published version(s)", existing.len());

    let entries = merge_manifest(&existing, &version, &release, &base_url)?;

    // Render both artifacts before touching the filesystem; a failure up to
    // here must leave no partial output behind. Compact JSON keeps the
    // manifest byte-identical across repeated publishes of the same input.
    let manifest_json = serde_json::to_string(&entries)
        .map_err(|e| SwitcherError::Message(format!("failed to serialize manifest: {e}")))?;
    let target = redirect_target(&entries)
        .ok_or_else(|| SwitcherError::Message("merged manifest is empty".to_string()))?;
    let redirect_html = render_redirect_html(target);

    if !out_dir.exists() {
        fs::create_dir_all(&out_dir).map_err(|e| {
            SwitcherError::Message(format!("failed to create output directory: {e}"))
        })?;
    }

    let manifest_path = out_dir.join(MANIFEST_FILE);
    fs::write(&manifest_path, manifest_json)
        .map_err(|e| SwitcherError::Message(format!("failed to write {MANIFEST_FILE}: {e}")))?;
    eprintln!("Wrote manifest to: {}", manifest_path.display());

    let redirect_path = out_dir.join(REDIRECT_FILE);
    fs::write(&redirect_path, redirect_html)
        .map_err(|e| SwitcherError::Message(format!("failed to write {REDIRECT_FILE}: {e}")))?;
    eprintln!("Wrote redirect to: {} -> {}", redirect_path.display(), target);

    Ok(())
}

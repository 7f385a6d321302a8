//! Version-switcher manifest: fetch, merge, and emit.
//!
//! The manifest (`versions.json`) is the list of publicly switchable
//! documentation versions. Each publish run reads it fresh from storage,
//! merges the resolved version in memory, and overwrites it entirely along
//! with an `index.html` redirect to the preferred version.

pub mod fetch;
pub mod html;
pub mod merge;
pub mod schema;

pub use fetch::{MANIFEST_FILE, build_http_client, fetch_manifest, manifest_url};
pub use html::{html_escape, render_redirect_html, write_redirect_html};
pub use merge::{merge_manifest, redirect_target};
pub use schema::{DEV_NAME, DEV_RELEASE, MAX_MANIFEST_ENTRIES, VersionEntry, VersionName};

//! Fetch the published manifest from the docs storage endpoint.
//!
//! One GET per run. Any transport failure or non-2xx status is fatal: the
//! run aborts before anything is written, so a half-read manifest can never
//! overwrite the published one.

use reqwest::blocking::Client;
use tracing::debug;

use super::schema::VersionEntry;
use crate::SwitcherResult;

/// File name of the manifest at the storage root.
pub const MANIFEST_FILE: &str = "versions.json";

/// Build the blocking HTTP client used for the single manifest GET.
pub fn build_http_client() -> SwitcherResult<Client> {
    let client = Client::builder()
        .user_agent(concat!("docs-switcher/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// Address of the manifest under `base_url`.
pub fn manifest_url(base_url: &str) -> String {
    format!("{}/{MANIFEST_FILE}", base_url.trim_end_matches('/'))
}

/// GET `{base_url}/versions.json` and parse it as a list of entries.
///
/// Transport and status failures surface as `Fetch`; a 2xx body that is not
/// a JSON array of entries surfaces as `Parse`.
pub fn fetch_manifest(client: &Client, base_url: &str) -> SwitcherResult<Vec<VersionEntry>> {
    let url = manifest_url(base_url);
    debug!(url = %url, "fetching manifest");
    let body = client
        .get(&url)
        .send()
        .and_then(|resp| resp.error_for_status())?
        .text()?;
    let entries: Vec<VersionEntry> = serde_json::from_str(&body)?;
    Ok(entries)
}

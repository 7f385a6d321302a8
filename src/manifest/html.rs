//! Redirect page pointing the bare docs URL at the preferred version.
//!
//! The page is a static meta-refresh redirect with no JavaScript; the target
//! URL is escaped for both the attribute and text positions it appears in.
//! Deterministic: the same target always renders identical bytes.

use std::fs;
use std::path::Path;

use crate::{SwitcherError, SwitcherResult};

/// Escape a string for HTML attribute and text contexts.
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the meta-refresh redirect page for `url`.
pub fn render_redirect_html(url: &str) -> String {
    let escaped = html_escape(url);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta http-equiv="refresh" content="0; url={escaped}">
<link rel="canonical" href="{escaped}">
<title>Redirecting</title>
</head>
<body>
<p>Redirecting to <a href="{escaped}">{escaped}</a></p>
</body>
</html>
"#
    )
}

/// Write the redirect page to `path`.
pub fn write_redirect_html(url: &str, path: &Path) -> SwitcherResult<()> {
    fs::write(path, render_redirect_html(url))
        .map_err(|e| SwitcherError::Message(format!("failed to write redirect page: {e}")))
}

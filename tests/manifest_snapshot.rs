//! Snapshot tests for manifest and redirect output determinism.

use docs_switcher::manifest::{
    DEV_RELEASE, VersionEntry, merge_manifest, redirect_target, render_redirect_html,
};

const BASE: &str = "https://docs.example.org";

fn entry(name: &str, version: &str) -> VersionEntry {
    VersionEntry {
        name: name.to_string(),
        version: version.to_string(),
        url: String::new(),
        preferred: false,
    }
}

#[test]
fn test_manifest_json_snapshot() {
    let existing = vec![entry("dev", DEV_RELEASE), entry("1.0", "1.0.0")];
    let merged = merge_manifest(&existing, "1.1", "1.1.2", BASE).unwrap();
    let json = serde_json::to_string(&merged).unwrap();

    assert_eq!(
        json,
        concat!(
            r#"[{"name":"dev","version":"0.0.0+dev","url":"https://docs.example.org/dev/","preferred":false},"#,
            r#"{"name":"1.1","version":"1.1.2","url":"https://docs.example.org/1.1/","preferred":true},"#,
            r#"{"name":"1.0","version":"1.0.0","url":"https://docs.example.org/1.0/","preferred":false}]"#
        )
    );
}

#[test]
fn test_redirect_html_snapshot() {
    let existing = vec![entry("dev", DEV_RELEASE)];
    let merged = merge_manifest(&existing, "2.0", "2.0.0", BASE).unwrap();
    let html = render_redirect_html(redirect_target(&merged).unwrap());

    assert_eq!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta http-equiv="refresh" content="0; url=https://docs.example.org/2.0/">
<link rel="canonical" href="https://docs.example.org/2.0/">
<title>Redirecting</title>
</head>
<body>
<p>Redirecting to <a href="https://docs.example.org/2.0/">https://docs.example.org/2.0/</a></p>
</body>
</html>
"#
    );
}

#[test]
fn test_merge_output_stable_across_runs() {
    let existing = vec![
        entry("0.9", "0.9.3"),
        entry("dev", DEV_RELEASE),
        entry("1.4", "1.4.1"),
    ];
    let first = serde_json::to_string(&merge_manifest(&existing, "1.5", "1.5.0", BASE).unwrap())
        .unwrap();
    let second = serde_json::to_string(&merge_manifest(&existing, "1.5", "1.5.0", BASE).unwrap())
        .unwrap();
    assert_eq!(first, second, "merge output must be deterministic");
}

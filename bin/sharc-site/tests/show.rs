//! Output contract of the `show` command.

use std::fs;

use sharc_site::cmd::show::render;

#[test]
fn test_builtin_output_contract() {
    let json: serde_json::Value =
        serde_json::from_str(&render(None, false).expect("render")).expect("valid json");

    for field in [
        "title",
        "tagline",
        "favicon",
        "url",
        "baseUrl",
        "organizationName",
        "projectName",
        "deploymentBranch",
        "trailingSlash",
        "onBrokenLinks",
        "onBrokenMarkdownLinks",
        "i18n",
        "presets",
        "themeConfig",
    ] {
        assert!(json.get(field).is_some(), "missing field {field}");
    }

    assert_eq!(json["url"], "https://tentemujin.github.io");
    assert_eq!(json["presets"][0][0], "classic");
    assert_eq!(json["presets"][0][1]["docs"]["sidebarPath"], "./sidebars.ts");
    assert_eq!(json["favicon"], "img/favicon.ico");
}

#[test]
fn test_pretty_output_from_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let config_path = dir.path().join("site.toml");
    fs::write(
        &config_path,
        r#"
title = "Staging"
url = "https://staging.example.com/"
base_url = "/sharc/"

[theme_config.footer]
copyright = "© {year} Staging"
"#,
    )
    .expect("write");

    let output = render(Some(&config_path), true).expect("render");
    assert!(output.contains('\n'));

    let json: serde_json::Value = serde_json::from_str(&output).expect("valid json");
    assert_eq!(json["baseUrl"], "/sharc/");
    assert_eq!(json["onBrokenLinks"], "throw");
    let copyright = json["themeConfig"]["footer"]["copyright"]
        .as_str()
        .expect("copyright");
    assert!(!copyright.contains("{year}"));
}

#[test]
fn test_missing_config_file() {
    let err = render(Some(std::path::Path::new("/nonexistent/site.toml")), false).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to load configuration"));
}

//! Integration tests for CLI commands
//!
//! These tests run the command handlers against throwaway projects on disk.

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use tidewind_cli::commands::{build::build, check::check, theme::theme_json};
use tidewind_cli::load_config;
use tidewind_engine::Generator;
use tidewind_plugins::PluginRegistry;

const CONFIG: &str = r#"{
    "content": { "relative": true, "files": ["*.html", "./**/src/**/*.rs"] },
    "theme": { "extend": {
        "fontFamily": { "content": ["Inter", "sans-serif"] },
        "spacing": { "2/5": "40%" }
    } },
    "plugins": ["line-clamp"]
}"#;

/// Helper to lay out a small project with a JSON config
fn setup_project() -> TempDir {
    let tmp = TempDir::new().expect("create temp dir");
    let root = tmp.path();
    fs::write(root.join("tailwind.config.json"), CONFIG).expect("write config");
    fs::write(
        root.join("index.html"),
        r#"<div class="p-2/5 font-content line-clamp-2">hi</div>"#,
    )
    .expect("write html");
    fs::create_dir_all(root.join("app/src")).expect("create src dir");
    fs::write(root.join("app/src/main.rs"), r#"let c = "m-4";"#).expect("write rs");
    tmp
}

fn generator_for(root: &Path) -> Generator {
    let loaded = load_config(None, root).expect("load config");
    Generator::new(loaded, &PluginRegistry::with_builtins())
        .expect("build generator")
        .with_cwd(root)
}

#[tokio::test]
async fn test_build_writes_stylesheet() {
    let tmp = setup_project();
    let generator = generator_for(tmp.path());
    let output = tmp.path().join("dist/app.css");

    let generation = build(&generator, Some(&output)).await.expect("build");

    let css = fs::read_to_string(&output).expect("read output");
    assert_eq!(css, generation.stylesheet.to_string());
    assert!(css.contains(".p-2\\/5 {\n  padding: 40%;\n}"));
    assert!(css.contains("font-family: Inter, sans-serif;"));
    assert!(css.contains("-webkit-line-clamp: 2;"));
    assert!(css.contains(".m-4 {\n  margin: 1rem;\n}"));
}

#[tokio::test]
async fn test_check_reports_counts() {
    let tmp = setup_project();
    let generator = generator_for(tmp.path());

    let report = check(&generator).await.expect("check");

    assert_eq!(report.config_path, tmp.path().join("tailwind.config.json"));
    assert!(report.relative);
    assert_eq!(report.patterns, 2);
    assert_eq!(report.plugins, 1);
    assert_eq!(report.files, 2);
    assert_eq!(report.rules, 4);
    assert!(report.to_string().contains("files:      2"));
}

#[test]
fn test_theme_includes_extension() {
    let tmp = setup_project();
    let generator = generator_for(tmp.path());

    let json = theme_json(&generator).expect("theme json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(value["spacing"]["2/5"], "40%");
    assert_eq!(value["spacing"]["4"], "1rem");
    assert_eq!(value["fontFamily"]["content"][0], "Inter");
    assert!(value["fontFamily"]["sans"].is_array());
}

#[test]
fn test_explicit_config_path() {
    let tmp = setup_project();
    fs::rename(
        tmp.path().join("tailwind.config.json"),
        tmp.path().join("site.json"),
    )
    .expect("rename config");

    assert!(load_config(None, tmp.path()).is_err());

    let loaded = load_config(Some(Path::new("site.json")), tmp.path()).expect("load config");
    assert_eq!(loaded.path, tmp.path().join("site.json"));
}

#[test]
fn test_unknown_plugin_is_reported() {
    let tmp = TempDir::new().expect("create temp dir");
    fs::write(
        tmp.path().join("tailwind.config.json"),
        r#"{ "content": [], "plugins": ["forms"] }"#,
    )
    .expect("write config");

    let loaded = load_config(None, tmp.path()).expect("load config");
    let err = Generator::new(loaded, &PluginRegistry::with_builtins()).unwrap_err();
    assert!(err.to_string().contains("forms"));
}

//! Runs the `marquee` binary end to end

use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn marquee() -> Command {
    Command::new(env!("CARGO_BIN_EXE_marquee"))
}

fn write_config(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("marquee-cli-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn themes_lists_catalog() {
    let output = marquee().arg("themes").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 16);
    assert!(stdout.contains("creative_terminal"));
}

#[test]
fn render_preview_fragment() {
    let config = write_config(
        "preview.json",
        r#"{
            "title": "Flash sale",
            "buttonText": "Shop",
            "themeId": "flash_sale",
            "size": "banner_top",
            "images": ["javascript:alert(1)", "https://cdn.example.com/a.png"],
            "countdownSeconds": 600
        }"#,
    );
    let output = marquee()
        .args(["render", "--mode", "preview", "--fragment", "--seed", "3"])
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let html = String::from_utf8(output.stdout).unwrap();
    assert!(html.contains(r#"data-marquee-layout="countdown""#));
    assert!(html.contains("https://cdn.example.com/a.png"));
    assert!(!html.contains("javascript:"));
    assert!(!html.contains("<!DOCTYPE html>"));
}

#[test]
fn render_document_to_file() {
    let config = write_config(
        "document.toml",
        r#"
        title = "Subscribe"
        themeId = "creative_mono"
        "#,
    );
    let out = config.with_extension("html");
    let status = marquee()
        .arg("render")
        .arg(&config)
        .arg("--out")
        .arg(&out)
        .status()
        .unwrap();
    assert!(status.success());

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Subscribe</title>"));
}

#[test]
fn resolve_prints_json() {
    let config = write_config("resolve.json", r#"{"themeId": "creative_mono"}"#);
    let output = marquee().arg("resolve").arg(&config).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["theme"]["layout"], "monolith");
    assert_eq!(json["mode"], "live");
    assert_eq!(json["media"]["type"], "placeholder");
}

#[test]
fn missing_config_fails() {
    let output = marquee()
        .args(["render", "/definitely/missing/overlay.json"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load overlay config"));
}

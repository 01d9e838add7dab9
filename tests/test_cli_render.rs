mod common;

use std::process::Output;

use common::Site;
use tokio::process::Command;

async fn mdpage(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mdpage"))
        .args(args)
        .env_remove("MDPAGE_LOG_LEVEL")
        .env_remove("MDPAGE_CONFIG_PATH")
        .env_remove("MDPAGE_README_PATH")
        .env_remove("MDPAGE_MARKER")
        .kill_on_drop(true)
        .output()
        .await
        .expect("failed to run mdpage")
}

#[tokio::test(flavor = "multi_thread")]
async fn render_writes_page_to_file() {
    let server = Site::standard().serve().await;
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("index.html");

    let output = mdpage(&["render", &server.base_url, "-o", out.to_str().unwrap()]).await;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>My Project</title>"));
    assert!(html.contains("<h1 id=\"theTitle\">📘 My Project</h1>"));
    assert!(html.contains("<p id=\"theSubtitle\">docs</p>"));
    assert!(html.contains("<h1>Hello</h1>"));
    assert!(!html.contains("preamble text"));
    assert!(!html.contains("class=\"loading\""));
    assert!(!html.contains("class=\"hide\""));
}

#[tokio::test(flavor = "multi_thread")]
async fn render_to_stdout() {
    let server = Site::standard().serve().await;

    let output = mdpage(&["render", &server.base_url, "--quiet"]).await;

    assert_eq!(output.status.code(), Some(0));
    let html = String::from_utf8(output.stdout).unwrap();
    assert!(html.contains("<h1>Hello</h1>"));
}

#[tokio::test(flavor = "multi_thread")]
async fn render_404_writes_error_page_and_fails() {
    let server = Site::standard().without("README.md").serve().await;

    let output = mdpage(&["render", &server.base_url]).await;

    assert_eq!(output.status.code(), Some(4));
    let html = String::from_utf8(output.stdout).unwrap();
    assert!(html.contains("<div class=\"error\">"));
    assert!(html.contains("404 Not Found"));
    assert!(html.contains("<title>README</title>"));
    assert!(html.contains("<header id=\"header\" class=\"hide\">"));
    assert!(!html.contains("class=\"loading\""));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("404"), "stderr: {stderr}");
}

#[tokio::test(flavor = "multi_thread")]
async fn quiet_still_logs_load_failure() {
    let server = Site::standard().without("README.md").serve().await;

    let output = mdpage(&["render", &server.base_url, "--quiet"]).await;

    assert_eq!(output.status.code(), Some(4));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("page load failed"), "stderr: {stderr}");
    assert!(stderr.contains("ERROR"), "stderr: {stderr}");
}

#[tokio::test(flavor = "multi_thread")]
async fn quiet_success_writes_no_logs() {
    let server = Site::standard().serve().await;

    let output = mdpage(&["render", &server.base_url, "--quiet", "-vv"]).await;

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
}

#[tokio::test]
async fn empty_marker_is_usage_error() {
    let output = mdpage(&["render", "http://127.0.0.1:1/", "--marker", ""]).await;

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn render_custom_paths_and_marker() {
    let server = Site::default()
        .file("site.json", common::CONF)
        .file("docs/intro.md", "intro%%body**bold**")
        .serve()
        .await;

    let output = mdpage(&[
        "render",
        &server.base_url,
        "--config-path",
        "site.json",
        "--readme-path",
        "docs/intro.md",
        "--marker",
        "%%body",
        "--no-cache-bust",
    ])
    .await;

    assert_eq!(output.status.code(), Some(0));
    let html = String::from_utf8(output.stdout).unwrap();
    assert!(html.contains("<strong>bold</strong>"));
    assert!(server.hits().iter().all(|hit| hit.query.is_none()));
}

#[tokio::test]
async fn invalid_base_url_is_config_error() {
    let output = mdpage(&["render", "not a url"]).await;

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid base URL"));
}

#[tokio::test]
async fn version_json() {
    let output = mdpage(&["version", "--format", "json"]).await;

    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["name"], "mdpage");
    assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(value["renderer"], "comrak");
}

#[tokio::test]
async fn version_human_names_renderer() {
    let output = mdpage(&["version"]).await;

    assert_eq!(output.status.code(), Some(0));
    let line = String::from_utf8(output.stdout).unwrap();
    assert_eq!(line.trim_end(), format!("mdpage {} (markdown: comrak)", env!("CARGO_PKG_VERSION")));
}

mod helper;

use std::path::Path;
use std::sync::Arc;

use mockito::Server;
use serde_json::{Value, json};
use tempfile::TempDir;

use binrelease::config::WrapperConfig;
use binrelease::install::{InstallError, Installer};
use binrelease::release::GitHubReleases;

use helper::archive::tar_gz;
use helper::release::MockReleaseSource;

fn package_dir() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir_all(temp_dir.path().join("npm")).unwrap();
    std::fs::write(
        temp_dir.path().join("npm/package.json"),
        r#"{"name": "@scope/tool", "version": "0.0.0", "scripts": {"postinstall": "node install.js"}}"#,
    )
    .unwrap();
    temp_dir
}

fn read_manifest(root: &Path) -> Value {
    let text = std::fs::read_to_string(root.join("npm/package.json")).unwrap();
    serde_json::from_str(&text).unwrap()
}

fn tool_config(base_url: &str) -> WrapperConfig {
    WrapperConfig::from_json(
        &json!({
            "repository": "owner/tool",
            "github": { "baseUrl": base_url },
            "assets": {
                "linux-x64": "tool-{tag}-x86_64-unknown-linux-gnu.tar.gz",
                "darwin-arm64": "tool-{tag}-aarch64-apple-darwin.tar.gz"
            },
            "executables": {
                "linux-x64": { "tool": "tool-{tag}/tool", "tool-helper": "tool-{tag}/helper" },
                "darwin-arm64": { "tool": "tool-{tag}/tool" }
            },
            "versionPrefix": "v",
            "installDir": "vendor",
            "manifest": "npm/package.json"
        })
        .to_string(),
    )
    .unwrap()
}

#[tokio::test]
async fn install_records_version_and_bin_from_mock_source() {
    let root = package_dir();
    let archive = tar_gz(&[
        ("tool-v2.1/tool", b"#!/bin/sh\necho tool\n"),
        ("tool-v2.1/helper", b"#!/bin/sh\necho helper\n"),
    ]);
    let source = MockReleaseSource::new().with_release(
        "owner/tool",
        "v2.1",
        vec![("tool-v2.1-x86_64-unknown-linux-gnu.tar.gz", archive)],
    );

    let installer = Installer::new(tool_config("unused"), root.path(), Arc::new(source));
    let outcome = installer.install("linux-x64").await.unwrap();

    assert_eq!(outcome.version, "2.1.0");
    assert_eq!(
        read_manifest(root.path()),
        json!({
            "name": "@scope/tool",
            "version": "2.1.0",
            "scripts": { "postinstall": "node install.js" },
            "bin": {
                "tool": "vendor/tool-v2.1/tool",
                "tool-helper": "vendor/tool-v2.1/helper"
            }
        })
    );
    assert!(root.path().join("npm/vendor/tool-v2.1/tool").is_file());
}

#[tokio::test]
async fn install_reports_unknown_repository() {
    let root = package_dir();
    let source = MockReleaseSource::new();

    let installer = Installer::new(tool_config("unused"), root.path(), Arc::new(source));
    let result = installer.install("linux-x64").await;

    assert!(matches!(result, Err(InstallError::Release(_))));
    assert_eq!(read_manifest(root.path())["version"], json!("0.0.0"));
}

#[tokio::test]
async fn install_downloads_from_github_api() {
    let root = package_dir();
    let mut server = Server::new_async().await;
    let archive = tar_gz(&[("tool-v3.0.0-rc.1/tool", b"#!/bin/sh\n")]);

    let release_mock = server
        .mock("GET", "/repos/owner/tool/releases/latest")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "tag_name": "v3.0.0-rc.1",
                "assets": [{
                    "name": "tool-v3.0.0-rc.1-aarch64-apple-darwin.tar.gz",
                    "browser_download_url": format!(
                        "{}/download/tool-v3.0.0-rc.1-aarch64-apple-darwin.tar.gz",
                        server.url()
                    )
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;
    let download_mock = server
        .mock(
            "GET",
            "/download/tool-v3.0.0-rc.1-aarch64-apple-darwin.tar.gz",
        )
        .with_status(200)
        .with_body(archive)
        .create_async()
        .await;

    let config = tool_config(&server.url());
    let source = GitHubReleases::new(&config.github.base_url);
    let installer = Installer::new(config, root.path(), Arc::new(source));
    let outcome = installer.install("darwin-arm64").await.unwrap();

    release_mock.assert_async().await;
    download_mock.assert_async().await;
    assert_eq!(outcome.tag, "v3.0.0-rc.1");
    assert_eq!(outcome.version, "3.0.0-rc.1");
    assert_eq!(
        read_manifest(root.path())["bin"],
        json!({ "tool": "vendor/tool-v3.0.0-rc.1/tool" })
    );
}

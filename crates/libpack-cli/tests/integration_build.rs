//! Integration tests for the build command, driving the real binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_project(dir: &Path) {
    let src = dir.join("src");
    fs::create_dir_all(&src).unwrap();
    fs::write(
        src.join("index.ts"),
        r#"
export interface Point {
    x: number;
    y: number;
}

export function origin(): Point {
    return { x: 0, y: 0 };
}
"#,
    )
    .unwrap();
    fs::write(
        dir.join("package.json"),
        r#"{
            "name": "sample",
            "version": "0.0.1",
            "dependencies": { "tslib": "^2.0.0" }
        }"#,
    )
    .unwrap();
}

#[test]
fn build_writes_all_artifacts() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path());

    Command::cargo_bin("libpack")
        .unwrap()
        .current_dir(temp.path())
        .args(["build", "--no-color"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Build completed"));

    let dist = temp.path().join("dist");
    assert!(dist.join("index.js").exists());
    assert!(dist.join("index.js.map").exists());
    assert!(dist.join("index.d.ts").exists());

    let dts = fs::read_to_string(dist.join("index.d.ts")).unwrap();
    assert!(dts.contains("interface Point"));

    let js = fs::read_to_string(dist.join("index.js")).unwrap();
    assert!(js.contains("sourceMappingURL=index.js.map"));
    assert!(!js.contains("interface"));
}

#[test]
fn rebuild_produces_identical_declarations() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path());

    let run = || {
        Command::cargo_bin("libpack")
            .unwrap()
            .current_dir(temp.path())
            .args(["build", "--quiet"])
            .assert()
            .success();
        fs::read(temp.path().join("dist/index.d.ts")).unwrap()
    };

    let first = run();
    let second = run();
    assert_eq!(first, second);
}

#[test]
fn no_color_strips_ansi_from_status_output() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path());

    Command::cargo_bin("libpack")
        .unwrap()
        .current_dir(temp.path())
        .args(["build", "--no-color"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\u{1b}[").not())
        .stderr(predicate::str::contains("Build completed"));
}

#[test]
fn missing_entry_exits_nonzero() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("package.json"), "{}").unwrap();

    Command::cargo_bin("libpack")
        .unwrap()
        .current_dir(temp.path())
        .args(["build", "--no-color"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Entry point not found"));

    assert!(!temp.path().join("dist").exists());
}

#[test]
fn missing_manifest_exits_nonzero() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src");
    fs::create_dir_all(&src).unwrap();
    fs::write(src.join("index.ts"), "export const a: number = 1;\n").unwrap();

    Command::cargo_bin("libpack")
        .unwrap()
        .current_dir(temp.path())
        .args(["build", "--no-color"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("package.json"));
}

#[test]
fn node_target_writes_to_node_dir() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path());

    Command::cargo_bin("libpack")
        .unwrap()
        .current_dir(temp.path())
        .args(["build", "--target", "node", "--no-color"])
        .assert()
        .success();

    assert!(temp.path().join("node/index.js").exists());
    assert!(temp.path().join("node/index.d.ts").exists());
    assert!(!temp.path().join("dist").exists());
}

#[test]
fn explicit_outdir_is_created_recursively() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path());

    Command::cargo_bin("libpack")
        .unwrap()
        .current_dir(temp.path())
        .args(["build", "--out-dir", "build/js/dist", "--no-color"])
        .assert()
        .success();

    assert!(temp.path().join("build/js/dist/index.js").exists());
}

#[test]
fn minify_none_emits_readable_code() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path());

    Command::cargo_bin("libpack")
        .unwrap()
        .current_dir(temp.path())
        .args(["build", "--minify", "none", "--no-color"])
        .assert()
        .success();
    let pretty = fs::read_to_string(temp.path().join("dist/index.js")).unwrap();

    Command::cargo_bin("libpack")
        .unwrap()
        .current_dir(temp.path())
        .args(["build", "--no-color"])
        .assert()
        .success();
    let minified = fs::read_to_string(temp.path().join("dist/index.js")).unwrap();

    assert!(minified.len() < pretty.len());
    assert_ne!(minified, pretty);
}

#[test]
fn invalid_minify_level_is_rejected() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path());

    Command::cargo_bin("libpack")
        .unwrap()
        .current_dir(temp.path())
        .args(["build", "--minify", "tiny", "--no-color"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid minify level"));
}

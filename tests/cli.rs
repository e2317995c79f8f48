//! Binary tests for the `render` command and configuration handling.
//!
//! Every test points `QR_SERVER_CONFIG` at a missing file so the user's own
//! config never leaks in.

use assert_cmd::Command;
use predicates::prelude::*;

const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

fn cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("qr-code-server");
    cmd.env("QR_SERVER_CONFIG", "/nonexistent/qr-code-server/config.toml")
        .env_remove("RUST_LOG")
        .env_remove("PORT")
        .env_remove("DEFAULT_QR_CODE_SIZE")
        .env_remove("MIN_QR_CODE_SIZE")
        .env_remove("MAX_QR_CODE_SIZE")
        .env_remove("LOG_LEVEL");
    cmd
}

#[test]
fn render_writes_png_file() {
    let out = std::env::temp_dir().join("qr_server_test_render.png");
    let _ = std::fs::remove_file(&out);

    cmd()
        .args(["render", "--size", "300", "--output", out.to_str().unwrap(), "hello"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Saved:"));

    let data = std::fs::read(&out).unwrap();
    assert_eq!(&data[..8], &PNG_SIGNATURE, "Output should be a valid PNG file");
    let img = image::load_from_memory(&data).unwrap();
    assert_eq!((img.width(), img.height()), (300, 300));

    let _ = std::fs::remove_file(&out);
}

#[test]
fn render_to_stdout() {
    let output = cmd().args(["render", "-o", "-", "hello"]).assert().success().get_output().clone();

    assert_eq!(&output.stdout[..8], &PNG_SIGNATURE);
    let img = image::load_from_memory(&output.stdout).unwrap();
    assert_eq!((img.width(), img.height()), (256, 256));
}

#[test]
fn render_auto_filename() {
    let work_dir = std::env::temp_dir().join("qr_server_test_autofile");
    let _ = std::fs::remove_dir_all(&work_dir);
    std::fs::create_dir_all(&work_dir).unwrap();

    cmd().args(["render", "Hello World"]).current_dir(&work_dir).assert().success();

    let files: Vec<_> = std::fs::read_dir(&work_dir).unwrap().flatten().collect();
    assert_eq!(files.len(), 1, "Exactly one file should be created");
    let name = files[0].file_name();
    let name = name.to_string_lossy();
    assert!(name.starts_with("hello-world-"), "unexpected file name: {name}");
    assert!(name.ends_with(".png"), "unexpected file name: {name}");

    let _ = std::fs::remove_dir_all(&work_dir);
}

#[test]
fn size_above_max_fails() {
    cmd()
        .args(["render", "--size", "4096", "-o", "-", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("size 4096 must be between 64 and 2048"));
}

#[test]
fn empty_data_fails() {
    cmd()
        .args(["render", "-o", "-", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("data must not be empty"));
}

#[test]
fn non_numeric_size_is_rejected_by_parser() {
    cmd().args(["render", "--size", "big", "hello"]).assert().failure();
}

#[test]
fn env_bounds_override_defaults() {
    cmd()
        .env("MAX_QR_CODE_SIZE", "300")
        .args(["render", "--size", "512", "-o", "-", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("size 512 must be between 64 and 300"));
}

#[test]
fn invalid_bounds_fail_at_startup() {
    cmd()
        .env("MIN_QR_CODE_SIZE", "1024")
        .args(["render", "-o", "-", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config error"));
}

#[test]
fn config_file_sets_default_size() {
    let dir = std::env::temp_dir().join("qr_server_test_config_file");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    std::fs::write(&path, "[qr]\ndefault_size = 128\n").unwrap();

    let output = cmd()
        .args(["--config", path.to_str().unwrap(), "render", "-o", "-", "hello"])
        .assert()
        .success()
        .get_output()
        .clone();
    let img = image::load_from_memory(&output.stdout).unwrap();
    assert_eq!(img.width(), 128);

    let _ = std::fs::remove_dir_all(&dir);
}

#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn pedidos_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("pedidos"));
    cmd.current_dir(dir.path());
    for var in [
        "PEDIDOS_BIND",
        "PEDIDOS_DATA_DIR",
        "PEDIDOS_DATA_FILE",
        "PEDIDOS_UPLOADS_DIR",
        "PEDIDOS_PUBLIC_DIR",
        "PEDIDOS_MAX_UPLOAD_BYTES",
        "PEDIDOS_LOG_JSON",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_help_lists_storage_flags() {
    let temp = TempDir::new().unwrap();

    pedidos_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--data-dir"))
        .stdout(predicate::str::contains("--uploads-dir"));
}

#[test]
fn test_missing_config_file_fails() {
    let temp = TempDir::new().unwrap();

    pedidos_cmd(&temp)
        .args(["--config", "nope.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load configuration"));
}

#[test]
fn test_unusable_data_dir_fails_before_listening() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("data");
    fs::write(&blocker, "not a directory").unwrap();

    pedidos_cmd(&temp)
        .args(["--data-dir", blocker.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to prepare"));
}

#[test]
fn test_bad_bind_address_fails_after_preparing_storage() {
    let temp = TempDir::new().unwrap();

    pedidos_cmd(&temp)
        .args(["--bind", "not-an-address"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to bind not-an-address"));

    let document = fs::read_to_string(temp.path().join("data/pedidos.json")).unwrap();
    assert_eq!(document, "{\n  \"pedidos\": []\n}");
    assert!(temp.path().join("uploads").is_dir());
}

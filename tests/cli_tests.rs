use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

fn refiner_node() -> Command {
    let mut cmd = Command::cargo_bin("refiner-node").expect("binary built");
    // Keep the test process environment out of credential resolution.
    cmd.env_remove("ENVIRONMENT")
        .env_remove("HOTKEY_KEYSTORE")
        .env_remove("HOTKEY_MNEMONIC")
        .env_remove("VANA_WALLET_PATH")
        .env_remove("VANA_COLDKEY_NAME")
        .env_remove("VANA_HOTKEY_NAME")
        .env_remove("RUST_LOG");
    cmd
}

fn write_keystore(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("refiner-cli-keystore-")
        .suffix(".json")
        .tempfile()
        .expect("create temp keystore");
    file.write_all(contents.as_bytes()).expect("write keystore");
    file
}

#[test]
fn configures_from_keystore_flag() {
    let file = write_keystore(r#"{"privateKey":"0xabc","address":"0x123"}"#);

    refiner_node()
        .arg("--wallet.keystore")
        .arg(file.path())
        .assert()
        .success()
        .stdout(contains("using wallet keystore").and(contains("0x123")));
}

#[test]
fn configures_from_keystore_env() {
    let file = write_keystore(r#"{"privateKey":"0xabc","address":"0x123"}"#);

    refiner_node()
        .env("HOTKEY_KEYSTORE", file.path())
        .assert()
        .success()
        .stdout(contains("refiner node configured"));
}

#[test]
fn keystore_beats_mnemonic_env() {
    let file = write_keystore(r#"{"privateKey":"0xabc","address":"0x123"}"#);

    refiner_node()
        .env("HOTKEY_MNEMONIC", "abandon abandon about")
        .arg("--wallet.keystore")
        .arg(file.path())
        .assert()
        .success()
        .stdout(contains("using wallet keystore"));
}

#[test]
fn empty_mnemonic_env_counts_as_absent() {
    refiner_node()
        .env("HOTKEY_MNEMONIC", "")
        .assert()
        .success()
        .stdout(contains("falling back to default wallet file"));
}

#[test]
fn falls_back_without_credentials() {
    refiner_node()
        .assert()
        .success()
        .stdout(contains("falling back to default wallet file"));
}

#[test]
fn nonzero_exit_on_missing_keystore() {
    refiner_node()
        .arg("--wallet.keystore")
        .arg("/nonexistent/refiner-keystore.json")
        .assert()
        .failure()
        .stderr(contains("not found"));
}

#[test]
fn nonzero_exit_on_invalid_keystore() {
    let file = write_keystore(r#"{"address":"0x123"}"#);

    refiner_node()
        .arg("--wallet.keystore")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(contains("privateKey"));
}

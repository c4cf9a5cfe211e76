// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fs;

use assert_cmd::Command;

const REGISTRY: &str = r#"[
  {
    "contractName": "VASMApp",
    "address": "0x00000000000000000000000000000000000000a1",
    "transactionHash": "0x1111111111111111111111111111111111111111111111111111111111111111"
  },
  {
    "contractName": "VASMApp",
    "address": "0x00000000000000000000000000000000000000a2"
  }
]"#;

fn vasm_migrate() -> Command {
    Command::cargo_bin("vasm-migrate").unwrap()
}

fn stdout(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {output:?}");
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn help_lists_commands() {
    let help = stdout(vasm_migrate().arg("--help"));
    assert!(help.contains("migrate"));
    assert!(help.contains("registry"));
}

#[test]
fn registry_latest_prints_last_address() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("1337.json"), REGISTRY).unwrap();

    let out = stdout(
        vasm_migrate()
            .args(["registry", "latest", "--network-id", "1337"])
            .args(["--contract", "VASMApp", "--registry-dir"])
            .arg(dir.path()),
    );
    assert_eq!(
        out.trim().to_lowercase(),
        "0x00000000000000000000000000000000000000a2"
    );
}

#[test]
fn registry_latest_fails_for_unknown_contract() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("1337.json"), REGISTRY).unwrap();

    let output = vasm_migrate()
        .args(["registry", "latest", "--network-id", "1337"])
        .args(["--contract", "Other", "--registry-dir"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("no deployment of Other"));
}

#[test]
fn registry_show_succeeds_on_empty_registry() {
    let dir = tempfile::tempdir().unwrap();
    vasm_migrate()
        .args(["registry", "show", "--network-id", "1"])
        .arg("--registry-dir")
        .arg(dir.path())
        .assert()
        .success();
}

#[test]
fn migrate_fails_when_node_is_unreachable() {
    let dir = tempfile::tempdir().unwrap();
    vasm_migrate()
        .current_dir(dir.path())
        .args(["migrate", "--network", "development"])
        .args(["--endpoint", "http://127.0.0.1:1"])
        .args([
            "--private-key",
            "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d",
        ])
        .assert()
        .failure();
    assert!(!dir.path().join("networks").exists());
}

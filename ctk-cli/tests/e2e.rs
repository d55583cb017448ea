//! End-to-end tests for ctk-cli
//!
//! These run the binary through cargo and are gated behind the `integration`
//! feature flag. Run with:
//!
//! ```sh
//! cargo test -p ctk-cli --features integration
//! ```

#![cfg(feature = "integration")]

use std::process::Command;

fn ctk_hooks(args: &[&str]) -> std::process::Output {
    Command::new("cargo")
        .args(["run", "-q", "-p", "ctk-cli", "--"])
        .args(args)
        .env("CTK_HOOKS_CONFIG", "/nonexistent/ctk-hooks.toml")
        .output()
        .expect("Failed to run ctk-hooks")
}

#[test]
fn help_lists_subcommands() {
    let output = ctk_hooks(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("resolve"));
    assert!(stdout.contains("symlinks"));
    assert!(stdout.contains("config"));
}

#[test]
fn resolve_absolute_path_is_echoed() {
    let output = ctk_hooks(&["resolve", "--nvidia-ctk-path", "/opt/bin/nvidia-ctk"]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "/opt/bin/nvidia-ctk"
    );
}

#[test]
fn symlinks_prints_container_edits() {
    let output = ctk_hooks(&[
        "symlinks",
        "--nvidia-ctk-path",
        "/usr/bin/nvidia-ctk",
        "--link",
        "/a->/b",
    ]);

    assert!(output.status.success());
    let edits: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(edits["hooks"][0]["hookName"], "createContainer");
    assert_eq!(
        edits["hooks"][0]["args"],
        serde_json::json!(["nvidia-ctk", "hook", "create-symlinks", "--link", "/a->/b"])
    );
}

#[test]
fn symlinks_without_links_prints_empty_edits() {
    let output = ctk_hooks(&["symlinks", "--nvidia-ctk-path", "/usr/bin/nvidia-ctk"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "{}");
}

#[test]
fn config_show_prints_defaults() {
    let output = ctk_hooks(&["config", "show"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[nvidia-ctk]"));
    assert!(stdout.contains("path = \"nvidia-ctk\""));
}

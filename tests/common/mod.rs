#![allow(dead_code)]

use assert_cmd::Command;

/// Creates a command for the battery-guard binary with logging pinned down
pub fn battery_guard_cmd() -> Command {
    let mut cmd = Command::cargo_bin("battery-guard").unwrap();
    cmd.env_remove("RUST_LOG").env("NO_COLOR", "1");
    cmd
}

/// Common assertion helper for report text
pub fn assert_output_contains(output: &str, expected_messages: &[&str]) {
    for msg in expected_messages {
        assert!(
            output.contains(msg),
            "Expected output to contain '{msg}', but got: {output}"
        );
    }
}

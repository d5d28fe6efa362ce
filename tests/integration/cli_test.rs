//! Integration tests for the command line interface

use crate::helpers::{run_playbar, run_playbar_with_config, temp_config};

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let out = run_playbar(&["--help"]);

    assert_eq!(out.exit_code, 0);
    for name in ["play", "format-time", "strip-accents", "share", "copy", "config", "completions"] {
        assert!(out.stdout.contains(name), "missing {name} in help:\n{}", out.stdout);
    }
}

#[test]
fn play_help_mentions_keys() {
    let out = run_playbar(&["play", "--help"]);

    assert_eq!(out.exit_code, 0);
    assert!(out.stdout.contains("--duration"));
    assert!(out.stdout.contains("--hide-seek-time"));
    assert!(out.stdout.contains("fullscreen"));
}

// ============================================================================
// format-time
// ============================================================================

#[test]
fn format_time_prints_one_line_per_value() {
    let out = run_playbar(&["format-time", "5", "65", "3723", "-1", "NaN", "86400"]);

    assert_eq!(out.exit_code, 0);
    insta::assert_snapshot!(out.stdout.trim_end(), @r"
    0:05
    1:05
    1:02:03
    0:00
    0:00
    24:00:00
    ");
}

#[test]
fn format_time_rejects_non_numbers() {
    let out = run_playbar(&["format-time", "soon"]);

    assert_eq!(out.exit_code, 2);
    assert!(out.stderr.contains("soon"));
}

#[test]
fn format_time_requires_a_value() {
    let out = run_playbar(&["format-time"]);

    assert_eq!(out.exit_code, 2);
    assert!(out.stderr.contains("required"));
}

// ============================================================================
// strip-accents
// ============================================================================

#[test]
fn strip_accents_joins_words() {
    let out = run_playbar(&["strip-accents", "Đà", "Nẵng", "đẹp"]);

    assert_eq!(out.exit_code, 0);
    assert_eq!(out.stdout, "Da Nang dep\n");
}

// ============================================================================
// share
// ============================================================================

#[test]
fn share_lists_every_provider() {
    let out = run_playbar(&["share", "https://a.b/c", "--title", "Hi there"]);

    assert_eq!(out.exit_code, 0);
    insta::assert_snapshot!(out.stdout.trim_end(), @r"
    Facebook  https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fa.b%2Fc&t=Hi%20there
    Twitter   http://twitter.com/share?text=Hi%20there&url=https%3A%2F%2Fa.b%2Fc
    Reddit    http://www.reddit.com/submit?url=https%3A%2F%2Fa.b%2Fc&title=Hi%20there
    Email     mailto:?subject=Hi%20there&body=https%3A%2F%2Fa.b%2Fc
    ");
}

#[test]
fn share_single_provider_prints_bare_link() {
    let out = run_playbar(&["share", "https://a.b/c", "--title", "Hi", "--provider", "Twitter"]);

    assert_eq!(out.exit_code, 0);
    assert_eq!(out.stdout, "http://twitter.com/share?text=Hi&url=https%3A%2F%2Fa.b%2Fc\n");
}

#[test]
fn share_uses_configured_default_title() {
    let (_dir, config) = temp_config("[share]\ndefault_title = \"Xem ngay\"\n");
    let out = run_playbar_with_config(
        &["share", "https://a.b", "--provider", "email"],
        &config,
    );

    assert_eq!(out.exit_code, 0);
    assert_eq!(out.stdout, "mailto:?subject=Xem%20ngay&body=https%3A%2F%2Fa.b\n");
}

#[test]
fn share_unknown_provider_exits_1() {
    let out = run_playbar(&["share", "https://a.b", "--provider", "myspace"]);

    assert_eq!(out.exit_code, 1);
    assert!(out.stderr.contains("Unknown share provider 'myspace'"));
}

// ============================================================================
// config
// ============================================================================

#[test]
fn config_path_honors_override() {
    let (_dir, config) = temp_config("");
    let out = run_playbar_with_config(&["config", "path"], &config);

    assert_eq!(out.exit_code, 0);
    assert_eq!(out.stdout.trim_end(), config.display().to_string());
}

#[test]
fn config_show_prints_defaults() {
    let out = run_playbar(&["config", "show"]);

    assert_eq!(out.exit_code, 0);
    assert!(out.stdout.contains("[controls]"));
    assert!(out.stdout.contains("show_seek_time = true"));
    assert!(out.stdout.contains("tick_ms = 250"));
    assert!(out.stdout.contains("name = \"default\""));
}

#[test]
fn invalid_config_is_reported() {
    let (_dir, config) = temp_config("[controls\n");
    let out = run_playbar_with_config(&["config", "show"], &config);

    assert_eq!(out.exit_code, 1);
    assert!(out.stderr.contains("Invalid config"));
}

// ============================================================================
// completions / copy
// ============================================================================

#[test]
fn completions_for_bash() {
    let out = run_playbar(&["completions", "bash"]);

    assert_eq!(out.exit_code, 0);
    assert!(out.stdout.contains("playbar"));
    assert!(out.stdout.contains("format-time"));
}

#[test]
fn copy_requires_text() {
    let out = run_playbar(&["copy"]);

    assert_eq!(out.exit_code, 2);
    assert!(out.stderr.contains("<TEXT>"));
}

#[test]
fn play_rejects_conflicting_duration_flags() {
    let out = run_playbar(&["play", "--duration", "10", "--unknown-duration"]);

    assert_eq!(out.exit_code, 2);
    assert!(out.stderr.contains("cannot be used with"));
}

#[test]
fn strip_accents_via_assert_cmd() {
    let dir = tempfile::TempDir::new().unwrap();
    assert_cmd::Command::cargo_bin("playbar")
        .unwrap()
        .env("NO_COLOR", "1")
        .env("PLAYBAR_CONFIG", dir.path().join("config.toml"))
        .args(["strip-accents", "Những khoảnh khắc"])
        .assert()
        .success()
        .stdout(predicates::str::diff("Nhung khoanh khac\n"));
}

#[test]
fn unknown_subcommand_exits_2() {
    let dir = tempfile::TempDir::new().unwrap();
    assert_cmd::Command::cargo_bin("playbar")
        .unwrap()
        .env("PLAYBAR_CONFIG", dir.path().join("config.toml"))
        .arg("rewind")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unrecognized subcommand"));
}

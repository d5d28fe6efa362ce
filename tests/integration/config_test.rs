//! Integration tests for config loading

use playbar::config::{Config, ConfigError};
use playbar::theme::Theme;

use crate::helpers::temp_config;

#[test]
fn full_config_round_trips_through_file() {
    let (_dir, path) = temp_config(
        r#"
[controls]
show_seek_time = false
seek_step_secs = 10.0
start_with_sound = true

[player]
tick_ms = 100
default_duration_secs = 30.0

[theme]
name = "classic"

[share]
default_title = "Clip"
"#,
    );

    let config = Config::load_from(&path).unwrap();

    assert!(!config.controls.show_seek_time);
    assert_eq!(config.controls.seek_step_secs, 10.0);
    assert!(config.controls.start_with_sound);
    assert_eq!(config.player.tick_ms, 100);
    assert_eq!(config.player.default_duration_secs, 30.0);
    assert_eq!(Theme::by_name(&config.theme.name), Some(Theme::classic()));
    assert_eq!(config.share.default_title, "Clip");
}

#[test]
fn unknown_keys_are_ignored() {
    let (_dir, path) = temp_config("[controls]\nautoplay = true\n");
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn parse_error_names_the_file() {
    let (_dir, path) = temp_config("controls = 3\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

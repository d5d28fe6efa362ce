//! Play command handler

use std::time::Duration;

use anyhow::{bail, Result};

use playbar::logging::{self, LogTarget};
use playbar::media::known_duration;
use playbar::player::ControlsConfig;
use playbar::theme::Theme;
use playbar::tui::{PlayerApp, PlayerOptions};
use playbar::Config;

/// Command line overrides for the player.
#[derive(Debug, Clone, Default)]
pub struct PlayArgs {
    pub duration: Option<f64>,
    pub unknown_duration: bool,
    pub hide_seek_time: bool,
    pub sound: bool,
    pub block_autoplay: bool,
}

/// Merge config and flags into player options.
pub fn build_options(config: &Config, args: &PlayArgs) -> Result<PlayerOptions> {
    let duration = if args.unknown_duration {
        None
    } else {
        let secs = args.duration.unwrap_or(config.player.default_duration_secs);
        if known_duration(secs).is_none() {
            bail!("Duration must be a positive number of seconds, got {}", secs);
        }
        Some(secs)
    };

    let theme = Theme::by_name(&config.theme.name).unwrap_or_else(|| {
        tracing::warn!(name = %config.theme.name, "unknown theme, using default");
        Theme::default()
    });

    Ok(PlayerOptions {
        duration,
        block_autoplay: args.block_autoplay,
        start_with_sound: args.sound || config.controls.start_with_sound,
        controls: if args.hide_seek_time {
            ControlsConfig::new(false)
        } else {
            config.controls.controls_config()
        },
        seek_step: config.controls.seek_step_secs,
        tick: Duration::from_millis(config.player.tick_ms.max(10)),
        theme,
    })
}

/// Run the terminal player.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: PlayArgs) -> Result<()> {
    let config = Config::load()?;
    let options = build_options(&config, &args)?;

    let _guard = match logging::default_log_dir() {
        Some(dir) => logging::init(LogTarget::File(dir))?,
        None => None,
    };
    tracing::info!(duration = ?options.duration, "starting player");

    PlayerApp::new(options).run()
}

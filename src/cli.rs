//! Command line interface definition.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(
    name = "playbar",
    version,
    about = "Media player control bar for the terminal",
    long_about = "Media player control bar for the terminal.\n\n\
        Runs a play/pause, seek and sound control bar against a simulated clip, \
        and exposes the helpers behind it: time formatting, accent stripping, \
        share links and clipboard copy."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the control bar against a simulated clip
    #[command(long_about = "Run the control bar against a simulated clip.\n\n\
        Keys: space/k play-pause, m sound, left/right seek, home/end jump, \
        f fullscreen, q quit. Click or drag the track to seek.")]
    Play {
        /// Clip length in seconds (defaults to the configured length)
        #[arg(long, value_name = "SECS", conflicts_with = "unknown_duration")]
        duration: Option<f64>,

        /// Simulate a stream whose length is not known
        #[arg(long)]
        unknown_duration: bool,

        /// Hide elapsed/total time and the seek track
        #[arg(long)]
        hide_seek_time: bool,

        /// Start with sound on
        #[arg(long)]
        sound: bool,

        /// Refuse playback as a browser blocking autoplay would
        #[arg(long)]
        block_autoplay: bool,
    },

    /// Format seconds as video time (M:SS or H:MM:SS)
    #[command(name = "format-time")]
    FormatTime {
        /// Seconds to format; invalid values print 0:00
        #[arg(required = true, allow_negative_numbers = true, value_name = "SECONDS")]
        seconds: Vec<f64>,
    },

    /// Strip Vietnamese accents from text
    #[command(name = "strip-accents")]
    StripAccents {
        /// Text to convert
        #[arg(required = true, value_name = "TEXT")]
        text: Vec<String>,
    },

    /// Print share links for a URL
    Share {
        /// Page URL to share
        url: String,

        /// Title to share with (defaults to the configured title)
        #[arg(long, short)]
        title: Option<String>,

        /// Only print the link for this provider (facebook, twitter, reddit, email)
        #[arg(long, short)]
        provider: Option<String>,
    },

    /// Copy text to the clipboard
    Copy {
        /// Text to copy
        text: String,
    },

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
}

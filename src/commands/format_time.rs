//! Format-time command handler

use anyhow::Result;

use playbar::format_video_time;

/// Print one formatted time per line.
pub fn handle(seconds: &[f64]) -> Result<()> {
    for value in seconds {
        println!("{}", format_video_time(*value));
    }
    Ok(())
}

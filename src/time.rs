//! Playback time formatting.
//!
//! Renders a position or duration in seconds the way a video player shows
//! it: `M:SS` under an hour, `H:MM:SS` above. Hours keep counting past a
//! day, so 86400 seconds is `24:00:00` rather than wrapping to `0:00`.

/// Returned for any input that cannot be rendered as a time.
pub const FALLBACK_TIME: &str = "0:00";

/// Format seconds as `H:MM:SS`, `M:SS` or `0:SS`.
///
/// Fractional seconds are truncated. NaN, infinite and negative inputs
/// produce [`FALLBACK_TIME`].
///
/// ```
/// use playbar::time::format_video_time;
///
/// assert_eq!(format_video_time(5.0), "0:05");
/// assert_eq!(format_video_time(65.0), "1:05");
/// assert_eq!(format_video_time(3723.0), "1:02:03");
/// assert_eq!(format_video_time(f64::NAN), "0:00");
/// ```
pub fn format_video_time(seconds: f64) -> String {
    match whole_seconds(seconds) {
        Some(total) => {
            let hours = total / 3600;
            let minutes = (total % 3600) / 60;
            let secs = total % 60;
            if hours > 0 {
                format!("{}:{:02}:{:02}", hours, minutes, secs)
            } else {
                format!("{}:{:02}", minutes, secs)
            }
        }
        None => FALLBACK_TIME.to_string(),
    }
}

/// Truncate to whole seconds, rejecting non-finite and negative values.
///
/// Values beyond `u64::MAX` saturate.
fn whole_seconds(seconds: f64) -> Option<u64> {
    if !seconds.is_finite() || seconds < 0.0 {
        return None;
    }
    Some(seconds.trunc() as u64)
}

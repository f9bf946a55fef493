//! Time formatting for player readouts.

/// Format a time in seconds as `M:SS`.
///
/// Minutes carry no leading zero; seconds are always two digits. Fractions
/// are truncated, not rounded. Anything that is not a finite, non-negative
/// number (NaN before metadata loads, for instance) renders as `"0:00"`.
///
/// # Arguments
/// * `seconds` - Time in seconds
///
/// # Returns
/// A string in M:SS format
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let total_secs = seconds as u64;
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    format!("{}:{:02}", mins, secs)
}

/// Build the `"<current> / <duration>"` readout shown next to the seek bar.
pub fn format_time_readout(current: f64, duration: f64) -> String {
    format!("{} / {}", format_duration(current), format_duration(duration))
}

//! Playback time labels

/// Format seconds as `m:ss`.
///
/// Fractions are truncated and minutes keep counting past an hour
/// (`3725` → `62:05`). Zero, negative and non-finite input give `0:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }

    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

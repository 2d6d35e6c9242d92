//! Video timecode formatting
//!
//! Highlight jump points are stored as whole seconds from the start of the
//! video and shown the way video players show them.

const SECONDS_PER_HOUR: u32 = 3600;

/// Format an offset in seconds as a player-style timecode.
///
/// - Under one hour: `M:SS`
/// - One hour or more: `H:MM:SS`
///
/// # Examples
///
/// ```
/// use fvm_common::timecode::format_timecode;
///
/// assert_eq!(format_timecode(0), "0:00");
/// assert_eq!(format_timecode(95), "1:35");
/// assert_eq!(format_timecode(3599), "59:59");
/// assert_eq!(format_timecode(3725), "1:02:05");
/// ```
pub fn format_timecode(seconds: u32) -> String {
    let hours = seconds / SECONDS_PER_HOUR;
    let mins = (seconds % SECONDS_PER_HOUR) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, mins, secs)
    } else {
        format!("{}:{:02}", mins, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_format() {
        assert_eq!(format_timecode(5), "0:05");
        assert_eq!(format_timecode(60), "1:00");
        assert_eq!(format_timecode(754), "12:34");
    }

    #[test]
    fn test_hours_format() {
        assert_eq!(format_timecode(3600), "1:00:00");
        assert_eq!(format_timecode(36061), "10:01:01");
    }
}

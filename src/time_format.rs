//! Compact human-readable formatting for timer durations.

use std::fmt::Write;

/// Formats a duration in seconds as e.g. `"1h 5m 3s"`, `"2m"` or `"0s"`.
///
/// The input is rounded to whole seconds and negative values (or NaN) are
/// shown as zero. Zero-valued hours and minutes are omitted; seconds are
/// omitted only when a larger unit is present and seconds are zero.
pub fn format_duration(seconds: f64) -> String {
    let total = whole_seconds(seconds);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    let mut out = String::with_capacity(12);
    if hours > 0 {
        let _ = write!(out, "{hours}h");
        if minutes > 0 {
            let _ = write!(out, " {minutes}m");
        }
        if secs > 0 {
            let _ = write!(out, " {secs}s");
        }
    } else if minutes > 0 {
        let _ = write!(out, "{minutes}m");
        if secs > 0 {
            let _ = write!(out, " {secs}s");
        }
    } else {
        let _ = write!(out, "{secs}s");
    }
    out
}

fn whole_seconds(seconds: f64) -> u64 {
    let rounded = seconds.round();
    if rounded.is_nan() || rounded <= 0.0 {
        0
    } else {
        // `as` saturates for values beyond u64::MAX
        rounded as u64
    }
}

#[cfg(test)]
mod tests {
    use super::format_duration;

    #[test]
    fn formats_zero() {
        assert_eq!(format_duration(0.0), "0s");
    }

    #[test]
    fn formats_seconds_only() {
        assert_eq!(format_duration(59.0), "59s");
    }

    #[test]
    fn formats_exact_minute() {
        assert_eq!(format_duration(60.0), "1m");
    }

    #[test]
    fn formats_minute_and_seconds() {
        assert_eq!(format_duration(65.0), "1m 5s");
    }

    #[test]
    fn formats_exact_hour() {
        assert_eq!(format_duration(3600.0), "1h");
    }

    #[test]
    fn formats_hour_minute_second() {
        assert_eq!(format_duration(3661.0), "1h 1m 1s");
    }

    #[test]
    fn omits_zero_minutes_between_hours_and_seconds() {
        assert_eq!(format_duration(3659.0), "1h 59s");
    }

    #[test]
    fn omits_zero_seconds_after_hours_and_minutes() {
        assert_eq!(format_duration(5400.0), "1h 30m");
    }

    #[test]
    fn formats_cumulative_hours() {
        assert_eq!(format_duration(90061.0), "25h 1m 1s");
    }

    #[test]
    fn clamps_negative() {
        assert_eq!(format_duration(-5.0), "0s");
    }

    #[test]
    fn rounds_fractional_input() {
        assert_eq!(format_duration(5.7), "6s");
        assert_eq!(format_duration(59.5), "1m");
        assert_eq!(format_duration(0.4), "0s");
    }

    #[test]
    fn treats_nan_as_zero() {
        assert_eq!(format_duration(f64::NAN), "0s");
    }
}

use chrono::{DateTime, Datelike, Utc};

/// Format an epoch-millis timestamp relative to `now_millis`:
/// - Relative for <7 days: "2h ago", "3d ago"
/// - Absolute for ≥7 days: "Jan 15", "Dec 3, 2024"
pub fn format_timestamp_millis(timestamp: i64, now_millis: i64) -> String {
    let (Some(ts), Some(now)) =
        (DateTime::from_timestamp_millis(timestamp), DateTime::from_timestamp_millis(now_millis))
    else {
        return timestamp.to_string();
    };

    let duration = now.signed_duration_since(ts);
    if duration.num_days() < 7 {
        format_relative(duration.num_seconds())
    } else {
        format_absolute(&ts, &now)
    }
}

fn format_relative(seconds: i64) -> String {
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if days > 0 {
        format!("{}d ago", days)
    } else if hours > 0 {
        format!("{}h ago", hours)
    } else if minutes > 0 {
        format!("{}m ago", minutes)
    } else {
        "just now".to_string()
    }
}

fn format_absolute(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    if timestamp.year() == now.year() {
        timestamp.format("%b %-d").to_string()
    } else {
        timestamp.format("%b %-d, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_762_076_480_016; // 2025-11-02T09:41:20.016Z
    const MINUTE: i64 = 60 * 1000;
    const HOUR: i64 = 60 * MINUTE;
    const DAY: i64 = 24 * HOUR;

    #[test]
    fn test_just_now() {
        assert_eq!(format_timestamp_millis(NOW - 30 * 1000, NOW), "just now");
    }

    #[test]
    fn test_future_timestamp_is_just_now() {
        assert_eq!(format_timestamp_millis(NOW + HOUR, NOW), "just now");
    }

    #[test]
    fn test_minutes_hours_days() {
        assert_eq!(format_timestamp_millis(NOW - 45 * MINUTE, NOW), "45m ago");
        assert_eq!(format_timestamp_millis(NOW - 3 * HOUR, NOW), "3h ago");
        assert_eq!(format_timestamp_millis(NOW - 2 * DAY, NOW), "2d ago");
    }

    #[test]
    fn test_absolute_same_year() {
        assert_eq!(format_timestamp_millis(NOW - 30 * DAY, NOW), "Oct 3");
    }

    #[test]
    fn test_absolute_different_year() {
        assert_eq!(format_timestamp_millis(NOW - 400 * DAY, NOW), "Sep 28, 2024");
    }
}

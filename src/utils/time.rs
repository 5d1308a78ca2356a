use chrono::{DateTime, Utc};

/// Format a timestamp as a coarse relative label ("3d", "5h", "12m", "now")
/// measured against `now`.
pub fn relative_label(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = (now - timestamp).num_seconds();

    if diff < 0 {
        return "now".to_string();
    }

    match diff {
        0..=59 => "now".to_string(),
        60..=3599 => format!("{}m", diff / 60),
        3600..=86399 => format!("{}h", diff / 3600),
        _ => format!("{}d", diff / 86400),
    }
}

/// Format a timestamp relative to the current wall clock
pub fn format_relative_time(timestamp: DateTime<Utc>) -> String {
    relative_label(timestamp, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_relative_label_thresholds() {
        let now = Utc::now();

        assert_eq!(relative_label(now - Duration::seconds(30), now), "now");
        assert_eq!(relative_label(now - Duration::minutes(90), now), "1h");
        assert_eq!(relative_label(now - Duration::days(2), now), "2d");
        assert_eq!(relative_label(now - Duration::minutes(5), now), "5m");
    }

    #[test]
    fn test_relative_label_boundaries() {
        let now = Utc::now();

        assert_eq!(relative_label(now - Duration::seconds(59), now), "now");
        assert_eq!(relative_label(now - Duration::seconds(60), now), "1m");
        assert_eq!(relative_label(now - Duration::minutes(59), now), "59m");
        assert_eq!(relative_label(now - Duration::hours(23), now), "23h");
        assert_eq!(relative_label(now - Duration::hours(24), now), "1d");
        // No date fallback for old posts, days keep counting
        assert_eq!(relative_label(now - Duration::days(40), now), "40d");
    }

    #[test]
    fn test_future_timestamp_is_now() {
        let now = Utc::now();
        assert_eq!(relative_label(now + Duration::minutes(3), now), "now");
    }
}

//! Relative upload-time strings for search hits.

use chrono::{DateTime, Utc};

use crate::types::{SearchResult, VideoHit};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

/// Describe how long ago `published` was, relative to `now`.
///
/// Timestamps in the future are reported as "just now".
pub fn relative_time(published: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - published).num_seconds();
    if secs < MINUTE {
        return "just now".to_string();
    }

    let (count, unit) = match secs {
        s if s < HOUR => (s / MINUTE, "minute"),
        s if s < DAY => (s / HOUR, "hour"),
        s if s < WEEK => (s / DAY, "day"),
        s if s < MONTH => (s / WEEK, "week"),
        s if s < YEAR => (s / MONTH, "month"),
        s => (s / YEAR, "year"),
    };

    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

/// Attach a `time_ago` string to every hit, keeping order.
pub fn annotate(hits: Vec<VideoHit>, now: DateTime<Utc>) -> Vec<SearchResult> {
    hits.into_iter()
        .map(|video| {
            let time_ago = relative_time(video.published_at, now);
            SearchResult { video, time_ago }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn ago(d: Duration) -> String {
        relative_time(now() - d, now())
    }

    #[test]
    fn under_a_minute_is_just_now() {
        assert_eq!(ago(Duration::seconds(0)), "just now");
        assert_eq!(ago(Duration::seconds(59)), "just now");
    }

    #[test]
    fn future_timestamps_are_just_now() {
        assert_eq!(relative_time(now() + Duration::hours(3), now()), "just now");
    }

    #[test]
    fn singular_and_plural_units() {
        assert_eq!(ago(Duration::seconds(60)), "1 minute ago");
        assert_eq!(ago(Duration::minutes(59)), "59 minutes ago");
        assert_eq!(ago(Duration::hours(1)), "1 hour ago");
        assert_eq!(ago(Duration::hours(23)), "23 hours ago");
        assert_eq!(ago(Duration::days(1)), "1 day ago");
        assert_eq!(ago(Duration::days(6)), "6 days ago");
    }

    #[test]
    fn weeks_months_years() {
        assert_eq!(ago(Duration::days(7)), "1 week ago");
        assert_eq!(ago(Duration::days(29)), "4 weeks ago");
        assert_eq!(ago(Duration::days(30)), "1 month ago");
        assert_eq!(ago(Duration::days(364)), "12 months ago");
        assert_eq!(ago(Duration::days(365)), "1 year ago");
        assert_eq!(ago(Duration::days(365 * 3 + 10)), "3 years ago");
    }

    #[test]
    fn annotate_keeps_order_and_fields() {
        let hits = vec![
            VideoHit {
                id: "a".to_string(),
                title: "First".to_string(),
                channel_title: "One".to_string(),
                thumbnail_url: String::new(),
                published_at: now() - Duration::hours(2),
            },
            VideoHit {
                id: "b".to_string(),
                title: "Second".to_string(),
                channel_title: "Two".to_string(),
                thumbnail_url: String::new(),
                published_at: now() - Duration::days(400),
            },
        ];

        let results = annotate(hits.clone(), now());
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].video, hits[0]);
        assert_eq!(results[0].time_ago, "2 hours ago");
        assert_eq!(results[1].video.id, "b");
        assert_eq!(results[1].time_ago, "1 year ago");
    }

    #[test]
    fn annotate_empty_is_empty() {
        assert!(annotate(Vec::new(), now()).is_empty());
    }
}

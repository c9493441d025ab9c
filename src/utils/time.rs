use chrono::{DateTime, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// "Jan 2, 2026" style date used on application and job cards.
pub fn format_date(dt: DateTime<Utc>) -> String {
    dt.format("%b %-d, %Y").to_string()
}

/// "Jan 2, 2026 3:05 PM" style datetime used for interview slots.
pub fn format_datetime(dt: DateTime<Utc>) -> String {
    dt.format("%b %-d, %Y %-I:%M %p").to_string()
}

pub fn days_since(dt: DateTime<Utc>) -> i64 {
    (Utc::now() - dt).num_days()
}

pub fn days_until(dt: DateTime<Utc>) -> i64 {
    (dt - Utc::now()).num_days()
}

/// Human-relative age of an event, bucketed the way the activity feed
/// displays it: under a minute, minutes, hours, days, then a plain date
/// once the event is over 30 days old.
pub fn time_ago(dt: DateTime<Utc>) -> String {
    let secs = (Utc::now() - dt).num_seconds();
    if secs < 60 {
        return "just now".to_string();
    }
    if secs < 3600 {
        return format!("{} minutes ago", secs / 60);
    }
    if secs < 86_400 {
        return format!("{} hours ago", secs / 3600);
    }
    if secs < 2_592_000 {
        return format!("{} days ago", secs / 86_400);
    }
    format_date(dt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn time_ago_buckets() {
        let now = Utc::now();
        assert_eq!(time_ago(now - Duration::seconds(5)), "just now");
        assert_eq!(time_ago(now - Duration::seconds(59)), "just now");
        assert_eq!(time_ago(now - Duration::seconds(60)), "1 minutes ago");
        assert_eq!(time_ago(now - Duration::minutes(45)), "45 minutes ago");
        assert_eq!(time_ago(now - Duration::hours(3)), "3 hours ago");
        assert_eq!(time_ago(now - Duration::hours(23)), "23 hours ago");
        assert_eq!(time_ago(now - Duration::days(6)), "6 days ago");
        assert_eq!(time_ago(now - Duration::days(29)), "29 days ago");
    }

    #[test]
    fn time_ago_falls_back_to_date_after_thirty_days() {
        let old = Utc::now() - Duration::days(40);
        assert_eq!(time_ago(old), format_date(old));
    }

    #[test]
    fn day_deltas() {
        let now = Utc::now();
        assert_eq!(days_since(now - Duration::days(3)), 3);
        assert_eq!(days_until(now + Duration::days(2) + Duration::hours(1)), 2);
    }
}

use chrono::{DateTime, Utc};

pub fn format_relative_time(timestamp: DateTime<Utc>) -> String {
    let delta = Utc::now().signed_duration_since(timestamp);
    if delta.num_minutes() < 1 {
        return "just now".to_string();
    }

    let (count, unit) = if delta.num_hours() < 1 {
        (delta.num_minutes(), "minute")
    } else if delta.num_days() < 1 {
        (delta.num_hours(), "hour")
    } else if delta.num_days() < 7 {
        (delta.num_days(), "day")
    } else if delta.num_days() < 35 {
        (delta.num_days() / 7, "week")
    } else if delta.num_days() < 365 {
        (delta.num_days() / 30, "month")
    } else {
        (delta.num_days() / 365, "year")
    };

    format!("{} {}{} ago", count, unit, if count == 1 { "" } else { "s" })
}

pub fn elide(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept.trim_end())
}

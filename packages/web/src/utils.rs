//! Formatting and small list helpers shared by pages

use chrono::{DateTime, Utc};

/// Absolute date, e.g. "Mar 1, 2024 at 10:05 AM"
pub fn format_date_string(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y at %-I:%M %p").to_string()
}

/// Relative time for recent timestamps, absolute date after 30 days.
///
/// Unparseable timestamps render as an empty string.
pub fn multi_format_date_string(timestamp: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(date) = timestamp
        .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
        .map(|d| d.with_timezone(&Utc))
    else {
        return String::new();
    };

    let diff = now.signed_duration_since(date);
    let days = diff.num_days();
    let hours = diff.num_hours();
    let minutes = diff.num_minutes();

    if days >= 30 {
        format_date_string(date)
    } else if days == 1 {
        "1 day ago".to_string()
    } else if days > 1 {
        format!("{} days ago", days)
    } else if hours >= 1 {
        format!("{} hours ago", hours)
    } else if minutes >= 1 {
        format!("{} minutes ago", minutes)
    } else {
        "Just now".to_string()
    }
}

/// Split a comma separated tag field. Spaces are dropped, as are empty tags.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .replace(' ', "")
        .split(',')
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Likes after `user_id` toggles their like
pub fn toggle_like(likes: &[String], user_id: &str) -> Vec<String> {
    if likes.iter().any(|id| id == user_id) {
        likes.iter().filter(|id| *id != user_id).cloned().collect()
    } else {
        let mut next = likes.to_vec();
        next.push(user_id.to_string());
        next
    }
}

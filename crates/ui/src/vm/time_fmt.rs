use chrono::Duration;

/// Formats an attempt duration as `M:SS`.
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let seconds = elapsed.num_seconds().max(0);
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

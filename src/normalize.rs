//! Text and timestamp normalization shared by every resolver

use chrono::{DateTime, Utc};

/// Sort key substituted for timestamps that fail to parse
pub const EARLIEST_INSTANT: DateTime<Utc> = DateTime::<Utc>::MIN_UTC;

/// Lowercased `subject + " " + body`, the haystack for all keyword checks.
#[must_use]
pub fn normalize_text(subject: &str, body: &str) -> String {
    let mut text = String::with_capacity(subject.len() + body.len() + 1);
    text.push_str(subject);
    text.push(' ');
    text.push_str(body);
    text.to_lowercase()
}

/// Parse an ISO-8601 timestamp with offset, falling back to RFC 2822.
///
/// Never fails: anything unparsable maps to [`EARLIEST_INSTANT`] so such
/// records sort first.
#[must_use]
pub fn parse_timestamp(raw: &str) -> DateTime<Utc> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_rfc2822(raw))
        .map_or(EARLIEST_INSTANT, |dt| dt.with_timezone(&Utc))
}

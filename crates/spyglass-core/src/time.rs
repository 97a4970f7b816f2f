use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Rendering style for the current-time tool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeFormat {
    #[default]
    Iso,
    Chinese,
    Us,
    Timestamp,
}

/// A point in time rendered for a requested timezone and format.
///
/// Raw Unix timestamps ride along regardless of the chosen format. An
/// unresolvable timezone name falls back to UTC; the rejected name is kept
/// in `fallback_from` so callers can surface a warning instead of failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeReport {
    pub formatted: String,
    pub timezone: String,
    pub unix_secs: i64,
    pub unix_millis: i64,
    pub fallback_from: Option<String>,
}

impl TimeReport {
    /// Render `now` in the given timezone and format.
    #[must_use]
    pub fn compute(now: DateTime<Utc>, timezone: &str, format: TimeFormat) -> Self {
        let (tz, fallback_from) = match timezone.parse::<Tz>() {
            Ok(tz) => (tz, None),
            Err(_) => (Tz::UTC, Some(timezone.to_string())),
        };

        let local = now.with_timezone(&tz);
        let formatted = match format {
            TimeFormat::Iso => local.to_rfc3339(),
            TimeFormat::Chinese => local.format("%Y年%m月%d日 %H时%M分%S秒").to_string(),
            TimeFormat::Us => local.format("%m/%d/%Y %I:%M:%S %p").to_string(),
            TimeFormat::Timestamp => now.timestamp().to_string(),
        };

        Self {
            formatted,
            timezone: tz.name().to_string(),
            unix_secs: now.timestamp(),
            unix_millis: now.timestamp_millis(),
            fallback_from,
        }
    }
}

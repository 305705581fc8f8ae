//! Route handlers organized by resource

pub mod health;
pub mod index;
pub mod content;
pub mod support;
pub mod analytics;

use chrono::{DateTime, SecondsFormat, Utc};

/// ISO-8601 timestamp in UTC with microsecond precision, e.g.
/// `2025-03-01T09:30:00.123456Z`.
pub(crate) fn timestamp(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

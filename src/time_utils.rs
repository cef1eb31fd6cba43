// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for epoch-millisecond timestamps.

use chrono::{DateTime, SecondsFormat, Utc};

/// Milliseconds in one hour.
pub const MILLIS_PER_HOUR: i64 = 60 * 60 * 1000;

/// Current wall-clock time as epoch milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Convert a whole number of hours to milliseconds.
pub fn hours_to_millis(hours: u32) -> i64 {
    i64::from(hours) * MILLIS_PER_HOUR
}

/// Format epoch milliseconds as RFC3339 using a `Z` suffix (for log fields).
///
/// Out-of-range values are rendered as the raw number.
pub fn format_millis_rfc3339(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|date| date.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_else(|| millis.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hours_to_millis() {
        assert_eq!(hours_to_millis(0), 0);
        assert_eq!(hours_to_millis(1), 3_600_000);
        assert_eq!(hours_to_millis(24), 86_400_000);
    }

    #[test]
    fn test_format_millis_rfc3339() {
        assert_eq!(format_millis_rfc3339(1_704_103_200_000), "2024-01-01T10:00:00Z");
    }
}

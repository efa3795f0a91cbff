use chrono::DateTime;

// ── Time buckets ──────────────────────────────────────────────────────────────

/// Truncate an epoch-millisecond timestamp to its whole-second bucket.
///
/// Floor division, so pre-epoch timestamps truncate toward negative
/// infinity like calendar seconds do.
///
/// # Examples
///
/// ```
/// use dash_core::time_utils::bucket_second;
///
/// assert_eq!(bucket_second(1_735_700_000_123), 1_735_700_000);
/// assert_eq!(bucket_second(999), 0);
/// assert_eq!(bucket_second(-1), -1);
/// ```
pub fn bucket_second(timestamp_ms: i64) -> i64 {
    timestamp_ms.div_euclid(1000)
}

// ── Labels ────────────────────────────────────────────────────────────────────

/// Format a second bucket as a `HH:MM:SS` UTC axis label.
///
/// Falls back to the raw number for buckets outside the representable
/// chrono range.
pub fn format_bucket(bucket: i64) -> String {
    match DateTime::from_timestamp(bucket, 0) {
        Some(ts) => ts.format("%H:%M:%S").to_string(),
        None => bucket.to_string(),
    }
}

/// Format a second bucket as a full `YYYY-MM-DD HH:MM:SS` UTC string.
pub fn format_bucket_full(bucket: i64) -> String {
    match DateTime::from_timestamp(bucket, 0) {
        Some(ts) => ts.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => bucket.to_string(),
    }
}

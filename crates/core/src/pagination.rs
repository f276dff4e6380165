//! Pagination clamping shared by list endpoints.

/// Default number of rows per page.
pub const DEFAULT_LIMIT: i64 = 25;

/// Maximum number of rows per page.
pub const MAX_LIMIT: i64 = 100;

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIMIT).max(1).min(MAX_LIMIT)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

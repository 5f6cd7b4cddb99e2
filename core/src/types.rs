//! Shared primitive types used across the roster.

/// A stable, unique identifier for a staff member (SQLite rowid).
pub type StaffId = i64;

/// A monetary amount. Salaries are rounded to cents at the end of each
/// computation, never in between.
pub type Amount = f64;

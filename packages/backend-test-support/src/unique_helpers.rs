//! Test helpers for generating unique test data
//!
//! ULID-suffixed strings keep rows from different test runs (and different
//! tests sharing a database file) from colliding on unique columns.

use ulid::Ulid;

/// Generate a unique string with the given prefix.
///
/// # Examples
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("manufacturer");
/// let b = unique_str("manufacturer");
/// assert_ne!(a, b);
/// assert!(a.starts_with("manufacturer-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate a unique contact address with the given prefix.
///
/// # Examples
/// ```
/// use backend_test_support::unique_helpers::unique_contact;
///
/// let contact = unique_contact("buyer");
/// assert!(contact.ends_with("@example.test"));
/// assert!(contact.starts_with("buyer-"));
/// ```
pub fn unique_contact(prefix: &str) -> String {
    format!("{}-{}@example.test", prefix, Ulid::new())
}

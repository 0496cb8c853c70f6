//! Test helpers for generating unique test data
//!
//! ULID-based generators keep concurrent test runs from colliding on the
//! unique username column.

use ulid::Ulid;

/// Generate a unique string with the given prefix.
///
/// # Examples
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("user");
/// let b = unique_str("user");
/// assert_ne!(a, b);
/// assert!(a.starts_with("user-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate a unique username with the given prefix.
///
/// Usernames are lowercased so fixtures look like real logins.
pub fn unique_username(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new()).to_lowercase()
}

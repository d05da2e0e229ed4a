//! Unique values for test fixtures.
//!
//! Every test runs against its own database, but emails still have to be
//! unique inside one test, and ULIDs make collisions impossible.

use ulid::Ulid;

/// `{prefix}-{ulid}@example.test`
///
/// ```
/// use backend_test_support::fixtures::unique_email;
///
/// let a = unique_email("worker");
/// let b = unique_email("worker");
/// assert_ne!(a, b);
/// assert!(a.starts_with("worker-"));
/// assert!(a.ends_with("@example.test"));
/// ```
pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.test", prefix, Ulid::new().to_string().to_lowercase())
}

/// A job title that is easy to pick out of a listing.
pub fn unique_title(prefix: &str) -> String {
    format!("{} #{}", prefix, Ulid::new())
}

//! Unique display names so concurrent tests never collide on a player name.

use ulid::Ulid;

/// `{prefix}-{ulid}`
///
/// ```
/// use backend_test_support::unique_helpers::unique_name;
///
/// let a = unique_name("Ana");
/// assert!(a.starts_with("Ana-"));
/// assert_ne!(a, unique_name("Ana"));
/// ```
pub fn unique_name(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Four distinct player names for a full table.
pub fn table_names(prefix: &str) -> [String; 4] {
    [0, 1, 2, 3].map(|seat| unique_name(&format!("{prefix}{seat}")))
}

/// Interprets an integer as a truth value.
///
/// ## Example
/// ```
/// use tinyl::util::num::int_to_bool;
///
/// assert!(int_to_bool(1));
/// assert!(int_to_bool(-7));
/// assert!(!int_to_bool(0));
/// ```
#[must_use]
pub const fn int_to_bool(value: i64) -> bool {
    value != 0
}

/// Encodes a truth value as `1` or `0`.
///
/// ## Example
/// ```
/// use tinyl::util::num::bool_to_int;
///
/// assert_eq!(bool_to_int(true), 1);
/// assert_eq!(bool_to_int(false), 0);
/// ```
#[must_use]
pub fn bool_to_int(value: bool) -> i64 {
    i64::from(value)
}

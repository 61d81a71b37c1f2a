/// Integer helpers.
///
/// Conversions between the language's integers and Rust booleans. The
/// language has no boolean type: comparisons and logical operators produce
/// `1` or `0`, and any nonzero value counts as true.
pub mod num;

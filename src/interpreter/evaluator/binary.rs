/// Operator dispatch.
///
/// Routes a binary operation to the handler for its operator class.
pub mod core;

/// Integer arithmetic: `+`, `-`, `*`, `/` and `%`.
pub mod arithmetic;

/// Relational operators producing `1` or `0`.
pub mod comparison;

/// Boolean operators over integers.
pub mod logic;

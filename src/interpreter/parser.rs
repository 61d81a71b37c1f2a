/// Core parsing entry points.
///
/// Defines the result type shared by the parser, the expression entry point
/// and the whole-program entry point.
pub mod core;

/// Binary operator tiers.
///
/// Implements the precedence ladder from `!!` down to `*`, `/` and `%`,
/// including the non-associative comparison tier.
pub mod binary;

/// Primary expressions.
///
/// Literals, variables and parenthesized expressions.
pub mod primary;

/// Statement parsing.
///
/// `read`, `write`, assignments and `;` sequences.
pub mod statement;

/// Small helpers shared by the parsing modules.
pub mod utils;

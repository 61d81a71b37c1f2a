/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code, together with the [`Position`] they are reported at.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating expressions
/// and running statements.
pub mod runtime_error;

pub use parse_error::{ParseError, Position};
pub use runtime_error::RuntimeError;

/// Core expression evaluation.
///
/// Contains the evaluation result type and [`State::eval`], which walks an
/// expression tree bottom-up.
///
/// [`State::eval`]: crate::interpreter::state::State::eval
pub mod core;

/// Binary operator evaluation logic.
///
/// Applies arithmetic, comparison and logical operators to two already
/// evaluated integers.
pub mod binary;

/// Statement execution.
///
/// Threads a configuration of state, input and output through `read`,
/// `write`, assignments and sequences.
pub mod statement;

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read a variable that has no binding.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// The right operand of `/` or `%` was zero.
    DivisionByZero,
    /// An operator symbol outside the language's operator set.
    UnknownOperator {
        /// The rejected symbol.
        op: String,
    },
    /// `read` ran with no input left.
    EmptyInputStream,
    /// Arithmetic operation overflowed.
    Overflow,
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedVariable { name } => {
                write!(f, "Runtime error: Undefined variable '{name}'.")
            },
            Self::DivisionByZero => write!(f, "Runtime error: Division by zero."),
            Self::UnknownOperator { op } => write!(f, "Runtime error: Unknown operator '{op}'."),
            Self::EmptyInputStream => {
                write!(f, "Runtime error: Tried to read from an empty input stream.")
            },
            Self::Overflow => {
                write!(f, "Runtime error: Integer overflow while trying to compute result.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}

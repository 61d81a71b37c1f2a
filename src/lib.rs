//! # tinyl
//!
//! tinyl is an interpreter for a small imperative language over integers.
//! Programs read integers from an input stream, compute with arithmetic,
//! comparison and logical operators, assign variables and write integers to
//! an output stream.
//!
//! ```text
//! read(n); square := n * n; write(square); write(square > 100)
//! ```
//!
//! The language has no booleans: comparisons yield `1` or `0` and the logical
//! operators `&&` and `!!` treat any nonzero value as true.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    ast::Statement,
    error::{ParseError, RuntimeError},
    interpreter::{evaluator::statement::run_program, lexer::tokenize, parser::core::parse_program},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and the closed set of
/// binary operators. The AST is built by the parser and walked by the
/// evaluator. A parsed program prints back as source text that parses to the
/// same tree. Negative constants, which the parser never builds, print as a
/// subtraction with the same value.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing or
/// running a program.
///
/// # Responsibilities
/// - Defines one error enum per phase.
/// - Attaches source positions to syntax errors.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, variable state and evaluation.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General helpers shared across modules.
///
/// # Responsibilities
/// - Convert between the language's integer truth values and `bool`.
pub mod util;

/// Parses source text into a program.
///
/// # Errors
/// Returns a `ParseError` for the first lexical or syntax error found.
///
/// # Examples
/// ```
/// use tinyl::{ast::Statement, parse};
///
/// let program = parse("x := 1; write(x)").unwrap();
/// assert!(matches!(program, Statement::Seq(..)));
///
/// assert!(parse("write(1 < 2 < 3)").is_err());
/// ```
pub fn parse(source: &str) -> Result<Statement, ParseError> {
    let tokens = tokenize(source)?;
    debug!(tokens = tokens.len(), "tokenized source");
    parse_program(&mut tokens.iter().peekable())
}

/// Runs a parsed program against an input sequence and returns its output.
///
/// # Errors
/// Returns the first `RuntimeError` raised; no partial output is returned.
///
/// # Examples
/// ```
/// use tinyl::{error::RuntimeError, eval, parse};
///
/// let program = parse("read(a); write(a * 2)").unwrap();
/// assert_eq!(eval(&program, [21]), Ok(vec![42]));
/// assert_eq!(eval(&program, []), Err(RuntimeError::EmptyInputStream));
/// ```
pub fn eval(program: &Statement, input: impl IntoIterator<Item = i64>) -> Result<Vec<i64>, RuntimeError> {
    run_program(program, input)
}

/// Parses and runs source text in one call.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use tinyl::run_source;
///
/// let output = run_source("x := 3; y := x + 4; write(y)", []).unwrap();
/// assert_eq!(output, vec![7]);
///
/// // `z` is never assigned.
/// assert!(run_source("write(z)", []).is_err());
/// ```
pub fn run_source(source: &str,
                  input: impl IntoIterator<Item = i64>)
                  -> Result<Vec<i64>, Box<dyn std::error::Error>> {
    let program = parse(source)?;
    Ok(eval(&program, input)?)
}

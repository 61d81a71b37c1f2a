/// The evaluator module runs parsed programs.
///
/// The evaluator computes expression values against a [`State`] and executes
/// statements, threading the variable bindings together with the input and
/// output streams.
///
/// # Responsibilities
/// - Evaluates expressions, with every operand evaluated (no short-circuit).
/// - Executes `read`, `write`, assignment and sequencing.
/// - Reports runtime errors such as undefined variables or division by zero.
///
/// [`State`]: crate::interpreter::state::State
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// paired with the line and column it starts at. Whitespace and comments are
/// skipped here.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source positions.
/// - Recognizes keywords, identifiers, decimal literals and operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive descent over the token stream with one function
/// per precedence tier. It stops at the first error.
///
/// # Responsibilities
/// - Converts tokens into [`Expr`](crate::ast::Expr) and
///   [`Statement`](crate::ast::Statement) nodes.
/// - Enforces precedence and associativity, including non-associative
///   comparisons.
/// - Reports syntax errors with their position.
pub mod parser;
/// Variable bindings.
///
/// Defines the persistent [`State`](crate::interpreter::state::State) map
/// from names to integers.
pub mod state;

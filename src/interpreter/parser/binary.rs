use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, OperatorClass},
    error::{ParseError, Position},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, primary::parse_primary},
    },
};

/// Consumes the next token if it maps to one of `accepted`.
///
/// Returns the operator and its position, or `None` (consuming nothing) when
/// the next token is not one of the accepted operators.
fn next_operator<'a, I>(tokens: &mut Peekable<I>,
                        accepted: impl Fn(BinaryOperator) -> bool)
                        -> Option<(BinaryOperator, Position)>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let (token, position) = tokens.peek()?;
    let op = token_to_binary_operator(token).filter(|op| accepted(*op))?;
    let position = *position;
    tokens.next();
    Some((op, position))
}

/// Folds `operand (op operand)*` into a left-leaning tree.
///
/// Shared by every left-associative tier.
fn parse_left_assoc<'a, I>(tokens: &mut Peekable<I>,
                           accepted: impl Fn(BinaryOperator) -> bool,
                           operand: fn(&mut Peekable<I>) -> ParseResult<Expr>)
                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let mut left = operand(tokens)?;
    while let Some((op, _)) = next_operator(tokens, &accepted) {
        let right = operand(tokens)?;
        left = Expr::Binop { op,
                             left: Box::new(left),
                             right: Box::new(right) };
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*`, `/` and `%`.
///
/// The rule is: `multiplicative := primary (("*" | "/" | "%") primary)*`
///
/// # Parameters
/// - `tokens`: Token stream with positions.
///
/// # Returns
/// A binary expression tree combining primary nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    parse_left_assoc(tokens,
                     |op| {
                         matches!(op,
                                  BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
                     },
                     parse_primary)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with positions.
///
/// # Returns
/// An `Expr::Binop` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    parse_left_assoc(tokens,
                     |op| matches!(op, BinaryOperator::Add | BinaryOperator::Sub),
                     parse_multiplicative)
}

/// Parses relational and equality operators.
///
/// This tier is non-associative: `a < b` is accepted, but the result may not
/// be the operand of a further comparison without parentheses. Both `a < b <
/// c` and `a < b == c` fail with `ChainedComparison`.
///
/// The rule is: `relational := additive (("<" | ">" | "<=" | ">=" | "==" |
/// "!=") additive)?`
///
/// # Parameters
/// - `tokens`: Token stream (token + position) wrapped in a `Peekable`.
///
/// # Returns
/// An additive expression, or a single comparison node over two of them.
///
/// # Errors
/// `ChainedComparison` at the second comparison operator.
pub fn parse_relational<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let left = parse_additive(tokens)?;

    let Some((op, _)) = next_operator(tokens, is_relational_op) else {
        return Ok(left);
    };
    let right = parse_additive(tokens)?;

    if let Some((extra, position)) = next_operator(tokens, is_relational_op) {
        return Err(ParseError::ChainedComparison { operator: extra.to_string(),
                                                   position });
    }

    Ok(Expr::Binop { op,
                     left: Box::new(left),
                     right: Box::new(right) })
}

/// Parses logical AND expressions.
///
/// Handles left-associative chains of `&&`.
/// Precedence is higher than OR and lower than the comparisons.
///
/// Grammar: `and := relational ("&&" relational)*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Position)` pairs.
///
/// # Returns
/// A binary expression tree with `BinaryOperator::And` nodes.
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    parse_left_assoc(tokens,
                     |op| matches!(op, BinaryOperator::And),
                     parse_relational)
}

/// Parses logical OR expressions.
///
/// Handles left-associative chains of `!!`, the lowest precedence tier.
///
/// Grammar: `or := and ("!!" and)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// A binary expression tree using `BinaryOperator::Or`.
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    parse_left_assoc(tokens,
                     |op| matches!(op, BinaryOperator::Or),
                     parse_logical_and)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary operator
/// and `None` for all other tokens.
///
/// # Example
/// ```
/// use tinyl::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::DoubleBang),
///            Some(BinaryOperator::Or));
/// assert_eq!(token_to_binary_operator(&Token::Assign), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::DoubleBang => Some(BinaryOperator::Or),
        Token::DoubleAmpersand => Some(BinaryOperator::And),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::Less => Some(BinaryOperator::Less),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        _ => None,
    }
}

/// Determines whether a binary operator belongs to the relational class.
///
/// # Example
/// ```
/// use tinyl::{ast::BinaryOperator, interpreter::parser::binary::is_relational_op};
///
/// assert!(is_relational_op(BinaryOperator::Less));
/// assert!(is_relational_op(BinaryOperator::NotEqual));
/// assert!(!is_relational_op(BinaryOperator::And));
/// ```
#[must_use]
pub fn is_relational_op(op: BinaryOperator) -> bool {
    op.class() == OperatorClass::Relational
}

use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::{ParseError, Position},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, parse_identifier, unexpected},
        },
    },
};

/// Parses a statement: one or more primary statements separated by `;`.
///
/// The list is folded into a right-leaning chain, so `s1; s2; s3` becomes
/// `Seq(s1, Seq(s2, s3))`. A `;` must be followed by another primary
/// statement, which rules out trailing separators.
///
/// Grammar: `statement := primary (";" primary)*`
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, Position)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let mut statements = vec![parse_primary_statement(tokens)?];

    while let Some((Token::Semicolon, _)) = tokens.peek() {
        tokens.next();
        statements.push(parse_primary_statement(tokens)?);
    }

    Statement::sequence(statements).ok_or(ParseError::EmptyProgram)
}

/// Parses a single primary statement.
///
/// A primary statement may be one of:
/// - `read(x)`,
/// - `write(expression)`,
/// - an assignment `x := expression`.
///
/// The leading token decides which one is parsed.
///
/// Grammar:
/// ```text
///     primary := "read" "(" IDENT ")"
///              | "write" "(" expression ")"
///              | IDENT ":=" expression
/// ```
pub fn parse_primary_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Position)>
{
    match tokens.peek() {
        Some((Token::Read, _)) => parse_read(tokens),
        Some((Token::Write, _)) => parse_write(tokens),
        Some((Token::Identifier(_), _)) => parse_assignment(tokens),
        _ => Err(unexpected("statement", tokens.next())),
    }
}

/// Parses `read(x)`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `read`.
fn parse_read<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Position)>
{
    expect(tokens, &Token::Read)?;
    expect(tokens, &Token::LParen)?;
    let name = parse_identifier(tokens)?;
    expect(tokens, &Token::RParen)?;

    Ok(Statement::Read(name))
}

/// Parses `write(expression)`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `write`.
fn parse_write<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Position)>
{
    expect(tokens, &Token::Write)?;
    expect(tokens, &Token::LParen)?;
    let expr = parse_expression(tokens)?;
    expect(tokens, &Token::RParen)?;

    Ok(Statement::Write(expr))
}

/// Parses an assignment of the form `name := expression`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the target identifier.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let name = parse_identifier(tokens)?;
    expect(tokens, &Token::Assign)?;
    let expr = parse_expression(tokens)?;

    Ok(Statement::Assign(name, expr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::{BinaryOperator, Expr},
        interpreter::{lexer::tokenize, parser::core::parse_program},
    };

    fn program(source: &str) -> ParseResult<Statement> {
        let tokens = tokenize(source)?;
        parse_program(&mut tokens.iter().peekable())
    }

    #[test]
    fn primary_statements() {
        assert_eq!(program("read(a)").unwrap(), Statement::Read("a".to_string()));
        assert_eq!(program("write(a)").unwrap(),
                   Statement::Write(Expr::Var("a".to_string())));
        assert_eq!(program("a := 1 % 2").unwrap(),
                   Statement::Assign("a".to_string(),
                                     Expr::Binop { op:    BinaryOperator::Mod,
                                                   left:  Box::new(Expr::Const(1)),
                                                   right: Box::new(Expr::Const(2)), }));
    }

    #[test]
    fn sequence_is_right_leaning() {
        let parsed = program("read(a); read(b); write(a)").unwrap();
        match &parsed {
            Statement::Seq(first, rest) => {
                assert_eq!(**first, Statement::Read("a".to_string()));
                assert!(matches!(**rest, Statement::Seq(..)));
            },
            other => panic!("expected a sequence, got {other:?}"),
        }
    }

    #[test]
    fn trailing_semicolon_is_rejected() {
        assert!(matches!(program("write(1);"),
                         Err(ParseError::UnexpectedEndOfInput { .. })));
    }

    #[test]
    fn leading_semicolon_is_rejected() {
        assert_eq!(program("; write(1)"),
                   Err(ParseError::UnexpectedToken { expected: "statement".to_string(),
                                                     found:    "';'".to_string(),
                                                     position: Position::new(1, 1), }));
    }

    #[test]
    fn keyword_cannot_be_assigned() {
        assert!(matches!(program("read := 1"), Err(ParseError::UnexpectedToken { .. })));
    }

    #[test]
    fn read_requires_an_identifier() {
        assert_eq!(program("read(1)"),
                   Err(ParseError::UnexpectedToken { expected: "identifier".to_string(),
                                                     found:    "number 1".to_string(),
                                                     position: Position::new(1, 6), }));
    }

    #[test]
    fn assignment_requires_walrus() {
        assert!(matches!(program("x = 1"), Err(ParseError::UnexpectedCharacter { .. })));
        assert!(matches!(program("x 1"), Err(ParseError::UnexpectedToken { .. })));
    }

    #[test]
    fn printed_program_parses_back() {
        let source = "read(n); total := n * (n + 1) / 2; write(total >= 10 && n != 0 !! 0)";
        let parsed = program(source).unwrap();
        assert_eq!(program(&parsed.to_string()).unwrap(), parsed);
    }
}

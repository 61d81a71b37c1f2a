use std::{fmt, str::FromStr};

use crate::error::RuntimeError;

/// An abstract syntax tree (AST) node representing an expression.
///
/// Expressions are integer valued. Comparison and boolean operators produce
/// `1` or `0`, so every variant reduces to a single `i64`.
///
/// A chain such as `1 + 1 + ... + 1` is as deep as it is long, so dropping,
/// comparing and printing walk it with an explicit stack or loop.
#[derive(Debug, Clone)]
pub enum Expr {
    /// An integer literal.
    Const(i64),
    /// Reference to a variable by name.
    Var(String),
    /// A binary operation.
    Binop {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Builds a binary expression from an operator symbol.
    ///
    /// This is the only way to build an `Expr` from untyped operator text, so
    /// it is where unknown operators are rejected.
    ///
    /// # Example
    /// ```
    /// use tinyl::{ast::Expr, error::RuntimeError};
    ///
    /// let sum = Expr::binop("+", Expr::Const(1), Expr::Const(2)).unwrap();
    /// assert_eq!(sum.to_string(), "1 + 2");
    ///
    /// let err = Expr::binop("^", Expr::Const(1), Expr::Const(2)).unwrap_err();
    /// assert!(matches!(err, RuntimeError::UnknownOperator { .. }));
    /// ```
    pub fn binop(symbol: &str, left: Self, right: Self) -> Result<Self, RuntimeError> {
        Ok(Self::Binop { op:    symbol.parse()?,
                         left:  Box::new(left),
                         right: Box::new(right), })
    }

    /// Moves the `Binop` children of `self` onto `pending`, leaving constants
    /// in their place.
    fn detach_children(&mut self, pending: &mut Vec<Self>) {
        if let Self::Binop { left, right, .. } = self {
            for child in [left, right] {
                if matches!(**child, Self::Binop { .. }) {
                    pending.push(std::mem::replace(child.as_mut(), Self::Const(0)));
                }
            }
        }
    }

    /// Writes `expr`, parenthesised unless it binds tighter than `tier`.
    fn fmt_operand(expr: &Self, tier: u8, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match expr {
            Self::Binop { op, .. } if op.precedence() <= tier => write!(f, "({expr})"),
            _ => write!(f, "{expr}"),
        }
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.detach_children(&mut pending);
        }
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some(pair) = pending.pop() {
            match pair {
                (Self::Const(a), Self::Const(b)) if a == b => {},
                (Self::Var(a), Self::Var(b)) if a == b => {},
                (Self::Binop { op: a,
                               left: a_left,
                               right: a_right, },
                 Self::Binop { op: b,
                               left: b_left,
                               right: b_right, }) if a == b => {
                    pending.push((&**a_left, &**b_left));
                    pending.push((&**a_right, &**b_right));
                },
                _ => return false,
            }
        }
        true
    }
}

impl Eq for Expr {}

/// A statement of the language.
///
/// A program is a single statement; sequences are encoded as a right-leaning
/// chain of [`Statement::Seq`] nodes.
#[derive(Debug, Clone)]
pub enum Statement {
    /// `read(x)`: pops one value from the input into `x`.
    Read(String),
    /// `write(e)`: appends the value of `e` to the output.
    Write(Expr),
    /// `x := e`: binds `x` to the value of `e`.
    Assign(String, Expr),
    /// `s1; s2`: runs `s1` and then `s2`.
    Seq(Box<Self>, Box<Self>),
}

impl Statement {
    /// Chains statements into a right-leaning `Seq` tree.
    ///
    /// Returns `None` for an empty list.
    ///
    /// # Example
    /// ```
    /// use tinyl::ast::{Expr, Statement};
    ///
    /// let program = Statement::sequence(vec![Statement::Read("a".into()),
    ///                                        Statement::Write(Expr::Var("a".into()))]);
    ///
    /// assert_eq!(program.unwrap().to_string(), "read(a); write(a)");
    /// ```
    #[must_use]
    pub fn sequence(statements: Vec<Self>) -> Option<Self> {
        let mut iter = statements.into_iter().rev();
        let last = iter.next()?;
        Some(iter.fold(last, |rest, statement| Self::Seq(Box::new(statement), Box::new(rest))))
    }

    /// Counts the primary (non-`Seq`) statements.
    #[must_use]
    pub fn primary_count(&self) -> usize {
        let mut count = 0;
        let mut current = self;
        while let Self::Seq(first, rest) = current {
            count += first.primary_count();
            current = rest;
        }
        count + 1
    }
}

impl Drop for Statement {
    // Unlinks the right spine one node at a time; the derived drop would
    // recurse once per statement of a sequence.
    fn drop(&mut self) {
        let Self::Seq(_, rest) = self else {
            return;
        };
        let mut next = std::mem::replace(rest.as_mut(), Self::Read(String::new()));
        while let Self::Seq(_, rest) = &mut next {
            let following = std::mem::replace(rest.as_mut(), Self::Read(String::new()));
            next = following;
        }
    }
}

impl PartialEq for Statement {
    fn eq(&self, other: &Self) -> bool {
        let (mut a, mut b) = (self, other);
        loop {
            match (a, b) {
                (Self::Seq(a_first, a_rest), Self::Seq(b_first, b_rest)) => {
                    if a_first != b_first {
                        return false;
                    }
                    a = a_rest;
                    b = b_rest;
                },
                (Self::Read(x), Self::Read(y)) => return x == y,
                (Self::Write(x), Self::Write(y)) => return x == y,
                (Self::Assign(x, e), Self::Assign(y, g)) => return x == y && e == g,
                _ => return false,
            }
        }
    }
}

impl Eq for Statement {}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Logical or (`!!`)
    Or,
    /// Logical and (`&&`)
    And,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Less than (`<`)
    Less,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Greater than (`>`)
    Greater,
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Remainder (`%`)
    Mod,
}

/// The semantic family an operator belongs to.
///
/// The evaluator picks one of three interpretations of the operands from the
/// class alone.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OperatorClass {
    /// `+ - * / %`
    Arithmetic,
    /// `< > <= >= == !=`, producing `1` or `0`.
    Relational,
    /// `&& !!`, treating nonzero as true and producing `1` or `0`.
    Boolean,
}

impl BinaryOperator {
    /// Every operator, lowest precedence first.
    pub const ALL: [Self; 13] = [Self::Or,
                                 Self::And,
                                 Self::Equal,
                                 Self::NotEqual,
                                 Self::LessEqual,
                                 Self::Less,
                                 Self::GreaterEqual,
                                 Self::Greater,
                                 Self::Add,
                                 Self::Sub,
                                 Self::Mul,
                                 Self::Div,
                                 Self::Mod];

    /// Returns the class that selects the operator's semantics.
    ///
    /// # Example
    /// ```
    /// use tinyl::ast::{BinaryOperator, OperatorClass};
    ///
    /// assert_eq!(BinaryOperator::Mod.class(), OperatorClass::Arithmetic);
    /// assert_eq!(BinaryOperator::LessEqual.class(), OperatorClass::Relational);
    /// assert_eq!(BinaryOperator::Or.class(), OperatorClass::Boolean);
    /// ```
    #[must_use]
    pub const fn class(self) -> OperatorClass {
        match self {
            Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Mod => OperatorClass::Arithmetic,
            Self::Equal
            | Self::NotEqual
            | Self::LessEqual
            | Self::Less
            | Self::GreaterEqual
            | Self::Greater => OperatorClass::Relational,
            Self::And | Self::Or => OperatorClass::Boolean,
        }
    }

    /// Binding strength, from `1` for `!!` up to `5` for `*`, `/` and `%`.
    ///
    /// # Example
    /// ```
    /// use tinyl::ast::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Mul.precedence() > BinaryOperator::Sub.precedence());
    /// assert_eq!(BinaryOperator::Less.precedence(), BinaryOperator::NotEqual.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Or => 1,
            Self::And => 2,
            Self::Equal
            | Self::NotEqual
            | Self::LessEqual
            | Self::Less
            | Self::GreaterEqual
            | Self::Greater => 3,
            Self::Add | Self::Sub => 4,
            Self::Mul | Self::Div | Self::Mod => 5,
        }
    }

    /// The operator's source symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Or => "!!",
            Self::And => "&&",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::LessEqual => "<=",
            Self::Less => "<",
            Self::GreaterEqual => ">=",
            Self::Greater => ">",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        }
    }
}

impl FromStr for BinaryOperator {
    type Err = RuntimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter()
                 .find(|op| op.symbol() == s)
                 .ok_or_else(|| RuntimeError::UnknownOperator { op: s.to_string() })
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // No unary minus in the grammar, and no literal for -i64::MIN.
            Self::Const(i64::MIN) => write!(f, "((0 - {}) - 1)", i64::MAX),
            Self::Const(n) if *n < 0 => write!(f, "(0 - {})", n.unsigned_abs()),
            Self::Const(n) => write!(f, "{n}"),
            Self::Var(name) => write!(f, "{name}"),
            Self::Binop { op, .. } => {
                let tier = op.precedence();
                let chains = op.class() != OperatorClass::Relational;

                // Same-tier left operands need no parentheses.
                let mut tail = Vec::new();
                let mut current = self;
                while let Self::Binop { op, left, right } = current
                      && op.precedence() == tier
                      && (tail.is_empty() || chains)
                {
                    tail.push((*op, right));
                    current = left;
                }

                Self::fmt_operand(current, tier, f)?;
                for (op, right) in tail.iter().rev() {
                    write!(f, " {op} ")?;
                    Self::fmt_operand(right, tier, f)?;
                }
                Ok(())
            },
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(name) => write!(f, "read({name})"),
            Self::Write(expr) => write!(f, "write({expr})"),
            Self::Assign(name, expr) => write!(f, "{name} := {expr}"),
            Self::Seq(..) => {
                let mut current = self;
                while let Self::Seq(first, rest) = current {
                    write!(f, "{first}; ")?;
                    current = rest;
                }
                write!(f, "{current}")
            },
        }
    }
}

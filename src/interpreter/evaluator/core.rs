use tracing::trace;

use crate::{ast::Expr, error::RuntimeError, interpreter::state::State};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

impl State {
    /// Evaluates an expression in this state.
    ///
    /// This is the main entry point for expression evaluation. Constants
    /// evaluate to themselves and variables are looked up. For binary
    /// operations the left operand is evaluated first, then the right one,
    /// and only then is the operator applied. Both operands are always
    /// evaluated, so `0 && x` still fails when `x` is unbound.
    ///
    /// Left-leaning chains such as `1 + 1 + ... + 1` run in a loop, so their
    /// length does not deepen the call stack.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The integer value of the expression.
    ///
    /// # Example
    /// ```
    /// use tinyl::{ast::Expr, interpreter::state::State};
    ///
    /// let state = State::new().update("x", 4);
    /// let expr = Expr::binop("*", Expr::Var("x".to_string()), Expr::Const(3)).unwrap();
    ///
    /// assert_eq!(state.eval(&expr).unwrap(), 12);
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<i64> {
        // Descend the left spine in a loop, then apply the operators on the
        // way back up. Right operands are evaluated recursively.
        let mut pending = Vec::new();
        let mut current = expr;
        let mut value = loop {
            match current {
                Expr::Const(n) => break *n,
                Expr::Var(name) => break self.lookup(name)?,
                Expr::Binop { op, left, right } => {
                    pending.push((*op, right));
                    current = left;
                },
            }
        };

        for (op, right) in pending.into_iter().rev() {
            let right = self.eval(right)?;
            let result = Self::eval_binary(op, value, right)?;
            trace!(%op, left = value, right, value = result, "applied operator");
            value = result;
        }

        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::BinaryOperator;

    fn binop(op: BinaryOperator, left: Expr, right: Expr) -> Expr {
        Expr::Binop { op,
                      left: Box::new(left),
                      right: Box::new(right) }
    }

    fn var(name: &str) -> Expr {
        Expr::Var(name.to_string())
    }

    #[test]
    fn constants_and_variables() {
        let state = State::new().update("a", -3);
        assert_eq!(state.eval(&Expr::Const(11)), Ok(11));
        assert_eq!(state.eval(&var("a")), Ok(-3));
        assert_eq!(state.eval(&var("b")),
                   Err(RuntimeError::UndefinedVariable { name: "b".to_string() }));
    }

    #[test]
    fn and_evaluates_both_operands() {
        let expr = binop(BinaryOperator::And, Expr::Const(0), var("x"));
        assert_eq!(State::new().eval(&expr),
                   Err(RuntimeError::UndefinedVariable { name: "x".to_string() }));
    }

    #[test]
    fn or_evaluates_both_operands() {
        let expr = binop(BinaryOperator::Or, Expr::Const(1), var("x"));
        assert_eq!(State::new().eval(&expr),
                   Err(RuntimeError::UndefinedVariable { name: "x".to_string() }));
    }

    #[test]
    fn left_operand_fails_first() {
        let expr = binop(BinaryOperator::Add, var("left"), var("right"));
        assert_eq!(State::new().eval(&expr),
                   Err(RuntimeError::UndefinedVariable { name: "left".to_string() }));
    }

    #[test]
    fn long_left_chain_evaluates_in_order() {
        // x - 1 - 1 - ... - 1, with an unbound variable at the far right.
        let chain = (0..200_000).fold(var("x"), |acc, _| {
                                    binop(BinaryOperator::Sub, acc, Expr::Const(1))
                                });
        assert_eq!(State::new().update("x", 200_000).eval(&chain), Ok(0));

        let failing = binop(BinaryOperator::Add, chain, var("y"));
        assert_eq!(State::new().update("x", 0).eval(&failing),
                   Err(RuntimeError::UndefinedVariable { name: "y".to_string() }));
    }

    #[test]
    fn nested_expression() {
        // (x + 1) * (x - 1) > 20 with x = 5
        let x = || var("x");
        let expr = binop(BinaryOperator::Greater,
                         binop(BinaryOperator::Mul,
                               binop(BinaryOperator::Add, x(), Expr::Const(1)),
                               binop(BinaryOperator::Sub, x(), Expr::Const(1))),
                         Expr::Const(20));
        assert_eq!(State::new().update("x", 5).eval(&expr), Ok(1));
    }
}

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, state::State},
};

impl State {
    /// Evaluates an arithmetic operation on two integers.
    ///
    /// All operations are checked. Division truncates toward zero and the
    /// remainder takes the sign of the dividend, so `-7 / 2 == -3` and
    /// `-7 % 2 == -1`.
    ///
    /// # Parameters
    /// - `op`: One of `Add`, `Sub`, `Mul`, `Div` or `Mod`.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Errors
    /// - `DivisionByZero` when `right` is zero for `/` or `%`.
    /// - `Overflow` when the result does not fit in an `i64`.
    /// - `UnknownOperator` when `op` is not arithmetic.
    ///
    /// # Example
    /// ```
    /// use tinyl::{ast::BinaryOperator, error::RuntimeError, interpreter::state::State};
    ///
    /// assert_eq!(State::eval_arithmetic(BinaryOperator::Div, -7, 2).unwrap(), -3);
    /// assert_eq!(State::eval_arithmetic(BinaryOperator::Mod, 1, 0),
    ///            Err(RuntimeError::DivisionByZero));
    /// ```
    pub fn eval_arithmetic(op: BinaryOperator, left: i64, right: i64) -> EvalResult<i64> {
        use BinaryOperator::{Add, Div, Mod, Mul, Sub};

        let result = match op {
            Add => left.checked_add(right),
            Sub => left.checked_sub(right),
            Mul => left.checked_mul(right),
            Div | Mod if right == 0 => return Err(RuntimeError::DivisionByZero),
            Div => left.checked_div(right),
            Mod => left.checked_rem(right),
            _ => return Err(RuntimeError::UnknownOperator { op: op.to_string() }),
        };

        result.ok_or(RuntimeError::Overflow)
    }
}

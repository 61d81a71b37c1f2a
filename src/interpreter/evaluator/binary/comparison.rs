use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, state::State},
    util::num::bool_to_int,
};

impl State {
    /// Evaluates a comparison of the form `left <op> right`.
    ///
    /// Uses native integer ordering and produces `1` when the relation holds
    /// and `0` otherwise.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    ///
    /// # Errors
    /// `UnknownOperator` when `op` is not relational.
    ///
    /// # Example
    /// ```
    /// use tinyl::{ast::BinaryOperator, interpreter::state::State};
    ///
    /// assert_eq!(State::eval_comparison(BinaryOperator::Less, 3, 5).unwrap(), 1);
    /// assert_eq!(State::eval_comparison(BinaryOperator::Equal, 3, 5).unwrap(), 0);
    /// ```
    pub fn eval_comparison(op: BinaryOperator, left: i64, right: i64) -> EvalResult<i64> {
        use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        let holds = match op {
            Less => left < right,
            Greater => left > right,
            LessEqual => left <= right,
            GreaterEqual => left >= right,
            Equal => left == right,
            NotEqual => left != right,
            _ => return Err(RuntimeError::UnknownOperator { op: op.to_string() }),
        };

        Ok(bool_to_int(holds))
    }
}

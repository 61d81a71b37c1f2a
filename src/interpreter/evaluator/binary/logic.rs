use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, state::State},
    util::num::{bool_to_int, int_to_bool},
};

impl State {
    /// Evaluates a logical operation between two integers.
    ///
    /// The operands are converted to booleans with `int_to_bool` (nonzero is
    /// true). Supported operators are logical AND (`&&`) and OR (`!!`). Both
    /// operands have already been evaluated by the caller.
    ///
    /// # Parameters
    /// - `op`: The logical operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Errors
    /// `UnknownOperator` when `op` is not a boolean operator.
    ///
    /// # Example
    /// ```
    /// use tinyl::{ast::BinaryOperator, interpreter::state::State};
    ///
    /// assert_eq!(State::eval_logic(BinaryOperator::And, 2, 0).unwrap(), 0);
    /// assert_eq!(State::eval_logic(BinaryOperator::Or, 2, 0).unwrap(), 1);
    /// ```
    pub fn eval_logic(op: BinaryOperator, left: i64, right: i64) -> EvalResult<i64> {
        let (left, right) = (int_to_bool(left), int_to_bool(right));

        match op {
            BinaryOperator::And => Ok(bool_to_int(left && right)),
            BinaryOperator::Or => Ok(bool_to_int(left || right)),
            _ => Err(RuntimeError::UnknownOperator { op: op.to_string() }),
        }
    }
}

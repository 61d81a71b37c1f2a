use crate::{
    ast::{BinaryOperator, OperatorClass},
    interpreter::{evaluator::core::EvalResult, state::State},
};

impl State {
    /// Evaluates a binary operation between two values.
    ///
    /// The operator's class selects the semantics: arithmetic operators go to
    /// `eval_arithmetic`, relational operators to `eval_comparison` and the
    /// boolean operators to `eval_logic`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<i64>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use tinyl::{ast::BinaryOperator, interpreter::state::State};
    ///
    /// assert_eq!(State::eval_binary(BinaryOperator::Add, 3, 4).unwrap(), 7);
    /// assert_eq!(State::eval_binary(BinaryOperator::Less, 3, 4).unwrap(), 1);
    /// assert_eq!(State::eval_binary(BinaryOperator::And, 3, 0).unwrap(), 0);
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: i64, right: i64) -> EvalResult<i64> {
        match op.class() {
            OperatorClass::Arithmetic => Self::eval_arithmetic(op, left, right),
            OperatorClass::Relational => Self::eval_comparison(op, left, right),
            OperatorClass::Boolean => Self::eval_logic(op, left, right),
        }
    }
}

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::{
    ast::Statement,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, state::State},
};

/// The state of a running program.
///
/// A configuration holds the variable [`State`], the input that has not been
/// read yet and the output written so far. Running a statement consumes the
/// configuration and returns the next one, so each configuration is used
/// exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    state:  State,
    input:  VecDeque<i64>,
    output: Vec<i64>,
}

impl Configuration {
    /// Creates the initial configuration: no bindings, the given input and no
    /// output.
    pub fn new(input: impl IntoIterator<Item = i64>) -> Self {
        Self::with_state(State::new(), input)
    }

    /// Creates a configuration that starts from an existing state.
    ///
    /// # Example
    /// ```
    /// use tinyl::{
    ///     interpreter::{evaluator::statement::Configuration, state::State},
    ///     parse,
    /// };
    ///
    /// let program = parse("read(y); write(x + y)").unwrap();
    /// let done = Configuration::with_state(State::new().update("x", 40), [2]).run(&program)
    ///                                                                          .unwrap();
    ///
    /// assert_eq!(done.output(), &[42]);
    /// ```
    pub fn with_state(state: State, input: impl IntoIterator<Item = i64>) -> Self {
        Self { state,
               input: input.into_iter().collect(),
               output: Vec::new() }
    }

    /// The current variable bindings.
    #[must_use]
    pub const fn state(&self) -> &State {
        &self.state
    }

    /// Input values not yet consumed, front first.
    #[must_use]
    pub const fn input(&self) -> &VecDeque<i64> {
        &self.input
    }

    /// Values written so far, in order.
    #[must_use]
    pub fn output(&self) -> &[i64] {
        &self.output
    }

    /// Drops the state and remaining input, keeping the output.
    #[must_use]
    pub fn into_output(self) -> Vec<i64> {
        self.output
    }

    /// Runs a statement and returns the resulting configuration.
    ///
    /// Sequences run left to right and stop at the first error. The right
    /// spine of a `Seq` chain is walked in a loop, so long programs do not
    /// deepen the call stack.
    ///
    /// # Errors
    /// - `EmptyInputStream` if `read` runs with no input left.
    /// - Any error raised while evaluating an expression.
    ///
    /// # Example
    /// ```
    /// use tinyl::{interpreter::evaluator::statement::Configuration, parse};
    ///
    /// let program = parse("read(x); y := x * 2; write(y)").unwrap();
    /// let done = Configuration::new([21]).run(&program).unwrap();
    ///
    /// assert_eq!(done.output(), &[42]);
    /// assert_eq!(done.state().lookup("y").unwrap(), 42);
    /// assert!(done.input().is_empty());
    /// ```
    pub fn run(mut self, statement: &Statement) -> EvalResult<Self> {
        let mut current = statement;
        loop {
            match current {
                Statement::Seq(first, rest) => {
                    self = self.run(first)?;
                    current = rest;
                },
                primary => return self.step(primary),
            }
        }
    }

    /// Runs one primary statement.
    fn step(mut self, statement: &Statement) -> EvalResult<Self> {
        trace!(%statement, "running statement");

        match statement {
            Statement::Read(name) => {
                let value = self.input
                                .pop_front()
                                .ok_or(RuntimeError::EmptyInputStream)?;
                self.state = self.state.with_binding(name, value);
                Ok(self)
            },
            Statement::Write(expr) => {
                let value = self.state.eval(expr)?;
                self.output.push(value);
                Ok(self)
            },
            Statement::Assign(name, expr) => {
                let value = self.state.eval(expr)?;
                self.state = self.state.with_binding(name, value);
                Ok(self)
            },
            Statement::Seq(..) => self.run(statement),
        }
    }
}

/// Runs a program from the initial configuration and returns its output.
///
/// The final state and any unread input are discarded.
///
/// # Errors
/// Any `RuntimeError` raised while running the program.
pub fn run_program(program: &Statement, input: impl IntoIterator<Item = i64>) -> EvalResult<Vec<i64>> {
    let done = Configuration::new(input).run(program)?;
    debug!(outputs = done.output.len(),
           unread_inputs = done.input.len(),
           "program finished");
    Ok(done.into_output())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ast::Expr, parse};

    fn var(name: &str) -> Expr {
        Expr::Var(name.to_string())
    }

    #[test]
    fn read_consumes_input_from_the_front() {
        let program = Statement::sequence(vec![Statement::Read("a".into()),
                                               Statement::Read("b".into())]).unwrap();
        let done = Configuration::new([1, 2, 3]).run(&program).unwrap();

        assert_eq!(done.state().lookup("a"), Ok(1));
        assert_eq!(done.state().lookup("b"), Ok(2));
        assert_eq!(done.input(), &VecDeque::from([3]));
        assert!(done.output().is_empty());
    }

    #[test]
    fn write_appends_to_the_back() {
        let program = Statement::sequence(vec![Statement::Write(Expr::Const(1)),
                                               Statement::Write(Expr::Const(2))]).unwrap();
        assert_eq!(run_program(&program, []), Ok(vec![1, 2]));
    }

    #[test]
    fn read_on_empty_input_fails() {
        assert_eq!(run_program(&Statement::Read("a".into()), []),
                   Err(RuntimeError::EmptyInputStream));
    }

    #[test]
    fn assignment_rebinds() {
        let program =
            Statement::sequence(vec![Statement::Assign("x".into(), Expr::Const(1)),
                                     Statement::Assign("x".into(),
                                                       Expr::binop("+", var("x"), Expr::Const(1)).unwrap()),
                                     Statement::Write(var("x"))]).unwrap();
        assert_eq!(run_program(&program, []), Ok(vec![2]));
    }

    #[test]
    fn failure_stops_the_sequence() {
        let program = Statement::sequence(vec![Statement::Write(Expr::Const(1)),
                                               Statement::Write(var("missing")),
                                               Statement::Read("never".into())]).unwrap();
        let config = Configuration::new([7]);

        assert_eq!(config.clone().run(&program),
                   Err(RuntimeError::UndefinedVariable { name: "missing".to_string() }));
        assert_eq!(config.input(), &VecDeque::from([7]));
    }

    #[test]
    fn left_leaning_sequences_run_in_order() {
        let left = Statement::Seq(Box::new(Statement::Seq(Box::new(Statement::Read("a".into())),
                                                          Box::new(Statement::Read("b".into())))),
                                  Box::new(Statement::Write(Expr::binop("-", var("a"), var("b")).unwrap())));
        assert_eq!(run_program(&left, [10, 3]), Ok(vec![7]));
    }

    #[test]
    fn long_programs_run_without_deep_recursion() {
        let mut statements = vec![Statement::Assign("n".into(), Expr::Const(0))];
        statements.extend((0..100_000).map(|_| {
                                          Statement::Assign("n".into(),
                                                            Expr::binop("+", var("n"), Expr::Const(1)).unwrap())
                                      }));
        statements.push(Statement::Write(var("n")));
        let program = Statement::sequence(statements).unwrap();

        assert_eq!(run_program(&program, []), Ok(vec![100_000]));
    }

    #[test]
    fn long_expressions_run_without_deep_recursion() {
        let source = format!("write(1{})", "+1".repeat(199_999));
        let program = parse(&source).unwrap();

        assert_eq!(run_program(&program, []), Ok(vec![200_000]));
        assert_eq!(parse(&program.to_string()).unwrap(), program);
    }

    #[test]
    fn runs_continue_from_a_given_state() {
        let first = parse("read(total); write(total)").unwrap();
        let second = parse("read(n); total := total + n; write(total)").unwrap();

        let after_first = Configuration::new([5]).run(&first).unwrap();
        let after_second =
            Configuration::with_state(after_first.state().clone(), [7]).run(&second)
                                                                         .unwrap();

        assert_eq!(after_second.output(), &[12]);
        assert_eq!(after_second.state().lookup("total"), Ok(12));
        assert_eq!(after_first.state().lookup("total"), Ok(5));
        assert!(after_second.input().is_empty());
    }
}

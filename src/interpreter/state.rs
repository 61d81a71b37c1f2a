use std::{collections::HashMap, rc::Rc};

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// A persistent mapping from variable names to values.
///
/// `State` has value semantics: [`State::update`] returns a new state and
/// leaves the one it was called on untouched. Clones share one `Rc` map and
/// the map is copied the first time a shared state is updated.
///
/// ## Example
/// ```
/// use tinyl::interpreter::state::State;
///
/// let before = State::new();
/// let after = before.update("x", 5);
///
/// assert!(before.lookup("x").is_err());
/// assert_eq!(after.lookup("x").unwrap(), 5);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    bindings: Rc<HashMap<String, i64>>,
}

impl State {
    /// Creates a state with no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value bound to `name`.
    ///
    /// # Errors
    /// `RuntimeError::UndefinedVariable` if `name` has no binding.
    pub fn lookup(&self, name: &str) -> EvalResult<i64> {
        self.bindings
            .get(name)
            .copied()
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string() })
    }

    /// Returns a state in which `name` is bound to `value`.
    ///
    /// All other bindings are carried over, and `self` is unchanged.
    #[must_use]
    pub fn update(&self, name: &str, value: i64) -> Self {
        self.clone().with_binding(name, value)
    }

    /// Consuming form of [`State::update`].
    ///
    /// Mutates in place when this state holds the only reference to its map,
    /// which is the common case while a program runs.
    #[must_use]
    pub fn with_binding(mut self, name: &str, value: i64) -> Self {
        Rc::make_mut(&mut self.bindings).insert(name.to_string(), value);
        self
    }

    /// Whether `name` has a binding.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no variable is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

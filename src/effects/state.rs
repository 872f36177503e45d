//! State definitions with effectful work, routing, and error hooks.

use crate::core::Values;
use crate::effects::error::StepError;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use stillwater::effect::BoxedEffect;

/// Work bound to a state.
/// Receives incoming results followed by params, and creates a fresh effect per step.
pub type Work<Env> = Arc<dyn Fn(Values) -> BoxedEffect<Values, StepError, Env> + Send + Sync>;

/// Computes the next state's name from the current state's results.
pub type NextResolver<Env> =
    Arc<dyn Fn(Values) -> BoxedEffect<String, StepError, Env> + Send + Sync>;

/// Decides what a step's error means.
/// Succeeding clears the error, failing replaces it with the decided one.
pub type ErrorHook<Env> =
    Arc<dyn Fn(Option<StepError>) -> BoxedEffect<(), StepError, Env> + Send + Sync>;

/// How a state picks its successor.
#[derive(Default)]
pub enum NextSpec<Env> {
    /// Terminal state: the walk succeeds with this state's results.
    #[default]
    Absent,

    /// Always route to the named state.
    Static(String),

    /// Ask a resolver, which may do its own async work first.
    Dynamic(NextResolver<Env>),

    /// A `next` the walker cannot route with, e.g. a number in a declarative table.
    Invalid(Value),
}

impl<Env> NextSpec<Env> {
    /// Wrap a resolver closure.
    pub fn resolver<F>(resolver: F) -> Self
    where
        F: Fn(Values) -> BoxedEffect<String, StepError, Env> + Send + Sync + 'static,
    {
        Self::Dynamic(Arc::new(resolver))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl<Env> Clone for NextSpec<Env> {
    fn clone(&self) -> Self {
        match self {
            Self::Absent => Self::Absent,
            Self::Static(name) => Self::Static(name.clone()),
            Self::Dynamic(resolver) => Self::Dynamic(Arc::clone(resolver)),
            Self::Invalid(value) => Self::Invalid(value.clone()),
        }
    }
}

impl<Env> fmt::Debug for NextSpec<Env> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("Absent"),
            Self::Static(name) => f.debug_tuple("Static").field(name).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
            Self::Invalid(value) => f.debug_tuple("Invalid").field(value).finish(),
        }
    }
}

impl<Env> From<&str> for NextSpec<Env> {
    fn from(name: &str) -> Self {
        Self::Static(name.to_string())
    }
}

impl<Env> From<String> for NextSpec<Env> {
    fn from(name: String) -> Self {
        Self::Static(name)
    }
}

impl<Env> From<Value> for NextSpec<Env> {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Absent,
            Value::String(name) => Self::Static(name),
            other => Self::Invalid(other),
        }
    }
}

/// One entry of a [`StateTable`](crate::effects::StateTable).
///
/// Build it fluently:
///
/// ```rust
/// use statewalk::effects::State;
/// use serde_json::json;
/// use stillwater::prelude::*;
///
/// let state: State<()> = State::new(|args| pure(args).boxed())
///     .params([json!("problem-a")])
///     .next("render");
/// assert!(state.has_work());
/// assert_eq!(state.params, vec![json!("problem-a")]);
/// ```
pub struct State<Env> {
    pub work: Option<Work<Env>>,
    pub params: Values,
    pub next: NextSpec<Env>,
    pub check_error: Option<ErrorHook<Env>>,
}

impl<Env> State<Env> {
    /// Create a terminal state with the given work and no params.
    pub fn new<F>(work: F) -> Self
    where
        F: Fn(Values) -> BoxedEffect<Values, StepError, Env> + Send + Sync + 'static,
    {
        Self {
            work: Some(Arc::new(work)),
            ..Self::default()
        }
    }

    /// Replace the work.
    pub fn work<F>(mut self, work: F) -> Self
    where
        F: Fn(Values) -> BoxedEffect<Values, StepError, Env> + Send + Sync + 'static,
    {
        self.work = Some(Arc::new(work));
        self
    }

    /// Static arguments appended after incoming results.
    pub fn params<I>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        self.params = params.into_iter().collect();
        self
    }

    /// Route to a fixed successor (or any other [`NextSpec`]).
    pub fn next(mut self, next: impl Into<NextSpec<Env>>) -> Self {
        self.next = next.into();
        self
    }

    /// Route through a resolver closure.
    pub fn next_with<F>(mut self, resolver: F) -> Self
    where
        F: Fn(Values) -> BoxedEffect<String, StepError, Env> + Send + Sync + 'static,
    {
        self.next = NextSpec::resolver(resolver);
        self
    }

    /// Attach an error-decision hook.
    pub fn check_error<F>(mut self, hook: F) -> Self
    where
        F: Fn(Option<StepError>) -> BoxedEffect<(), StepError, Env> + Send + Sync + 'static,
    {
        self.check_error = Some(Arc::new(hook));
        self
    }

    pub fn has_work(&self) -> bool {
        self.work.is_some()
    }
}

impl<Env> Default for State<Env> {
    fn default() -> Self {
        Self {
            work: None,
            params: Values::new(),
            next: NextSpec::Absent,
            check_error: None,
        }
    }
}

impl<Env> Clone for State<Env> {
    fn clone(&self) -> Self {
        Self {
            work: self.work.clone(),
            params: self.params.clone(),
            next: self.next.clone(),
            check_error: self.check_error.clone(),
        }
    }
}

impl<Env> fmt::Debug for State<Env> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("has_work", &self.work.is_some())
            .field("params", &self.params)
            .field("next", &self.next)
            .field("has_check_error", &self.check_error.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use stillwater::prelude::*;

    #[test]
    fn default_state_has_no_work() {
        let state: State<()> = State::default();
        assert!(!state.has_work());
        assert!(state.next.is_absent());
        assert!(state.check_error.is_none());
    }

    #[test]
    fn next_accepts_names_and_json() {
        let named: NextSpec<()> = "render".into();
        assert!(matches!(named, NextSpec::Static(ref n) if n == "render"));

        let from_json: NextSpec<()> = json!("loadImages").into();
        assert!(matches!(from_json, NextSpec::Static(ref n) if n == "loadImages"));

        let null: NextSpec<()> = json!(null).into();
        assert!(null.is_absent());

        let number: NextSpec<()> = json!(3).into();
        assert!(matches!(number, NextSpec::Invalid(ref v) if *v == json!(3)));
    }

    #[test]
    fn fluent_builder_sets_every_field() {
        let state: State<()> = State::new(|args| pure(args).boxed())
            .params([json!(1), json!(2)])
            .next_with(|_| pure("done".to_string()).boxed())
            .check_error(|_| pure(()).boxed());

        assert!(state.has_work());
        assert_eq!(state.params.len(), 2);
        assert!(matches!(state.next, NextSpec::Dynamic(_)));
        assert!(state.check_error.is_some());
    }

    #[test]
    fn clone_shares_callables() {
        let state: State<()> = State::new(|args| pure(args).boxed()).next("b");
        let cloned = state.clone();

        let (Some(a), Some(b)) = (&state.work, &cloned.work) else {
            panic!("work missing after clone");
        };
        assert!(Arc::ptr_eq(a, b));
        assert_eq!(format!("{:?}", cloned.next), "Static(\"b\")");
    }
}

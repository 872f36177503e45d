//! Named callables that blueprints refer to.

use crate::core::Values;
use crate::effects::{ErrorHook, NextResolver, StepError, Work};
use std::collections::HashMap;
use std::sync::Arc;
use stillwater::effect::BoxedEffect;

/// Maps the names used in a blueprint to work, resolvers, and error hooks.
///
/// Each kind has its own namespace, so a work and a resolver may share a name.
pub struct Registry<Env> {
    works: HashMap<String, Work<Env>>,
    resolvers: HashMap<String, NextResolver<Env>>,
    hooks: HashMap<String, ErrorHook<Env>>,
}

impl<Env> Registry<Env> {
    pub fn new() -> Self {
        Self {
            works: HashMap::new(),
            resolvers: HashMap::new(),
            hooks: HashMap::new(),
        }
    }

    /// Register work under `name`.
    pub fn work<F>(mut self, name: impl Into<String>, work: F) -> Self
    where
        F: Fn(Values) -> BoxedEffect<Values, StepError, Env> + Send + Sync + 'static,
    {
        self.works.insert(name.into(), Arc::new(work));
        self
    }

    /// Register a next resolver under `name`.
    pub fn resolver<F>(mut self, name: impl Into<String>, resolver: F) -> Self
    where
        F: Fn(Values) -> BoxedEffect<String, StepError, Env> + Send + Sync + 'static,
    {
        self.resolvers.insert(name.into(), Arc::new(resolver));
        self
    }

    /// Register an error hook under `name`.
    pub fn hook<F>(mut self, name: impl Into<String>, hook: F) -> Self
    where
        F: Fn(Option<StepError>) -> BoxedEffect<(), StepError, Env> + Send + Sync + 'static,
    {
        self.hooks.insert(name.into(), Arc::new(hook));
        self
    }

    pub fn get_work(&self, name: &str) -> Option<Work<Env>> {
        self.works.get(name).cloned()
    }

    pub fn get_resolver(&self, name: &str) -> Option<NextResolver<Env>> {
        self.resolvers.get(name).cloned()
    }

    pub fn get_hook(&self, name: &str) -> Option<ErrorHook<Env>> {
        self.hooks.get(name).cloned()
    }
}

impl<Env> Default for Registry<Env> {
    fn default() -> Self {
        Self::new()
    }
}

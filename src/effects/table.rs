//! Named state tables.

use crate::effects::state::State;
use std::collections::HashMap;
use std::fmt;

/// Name of the entry every walk begins at.
pub const START: &str = "start";

/// Mapping from unique state names to [`State`]s.
///
/// A walk only ever borrows the table, so one table can back any number of
/// walks, concurrent or not.
pub struct StateTable<Env> {
    states: HashMap<String, State<Env>>,
}

impl<Env> StateTable<Env> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
        }
    }

    /// Add a state, replacing any previous state of the same name.
    pub fn state(mut self, name: impl Into<String>, state: State<Env>) -> Self {
        self.insert(name, state);
        self
    }

    /// Insert a state, returning the one it replaced.
    pub fn insert(&mut self, name: impl Into<String>, state: State<Env>) -> Option<State<Env>> {
        self.states.insert(name.into(), state)
    }

    pub fn get(&self, name: &str) -> Option<&State<Env>> {
        self.states.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    /// The `start` entry, if present.
    pub fn start(&self) -> Option<&State<Env>> {
        self.get(START)
    }

    /// State names in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.states.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl<Env> Default for StateTable<Env> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Env> Clone for StateTable<Env> {
    fn clone(&self) -> Self {
        Self {
            states: self.states.clone(),
        }
    }
}

impl<Env> fmt::Debug for StateTable<Env> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.states.iter()).finish()
    }
}

impl<Env, N: Into<String>> FromIterator<(N, State<Env>)> for StateTable<Env> {
    fn from_iter<I: IntoIterator<Item = (N, State<Env>)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (name, state) in iter {
            table.insert(name, state);
        }
        table
    }
}

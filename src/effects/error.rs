//! Error types reported by state callables and by walks.

use crate::core::Values;
use serde_json::Value;
use thiserror::Error;

/// Error reported by a work, next resolver, or error hook.
///
/// The walker treats it as opaque and hands it back unchanged inside a
/// [`WalkError`]. A failing work may attach the values it produced anyway;
/// if the state's error hook recovers, those values are routed onward.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct StepError {
    message: String,
    values: Values,
}

impl StepError {
    /// Create a step error with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            values: Values::new(),
        }
    }

    /// Attach the values produced alongside the error.
    pub fn with_values(mut self, values: Values) -> Self {
        self.values = values;
        self
    }

    /// The message the callable reported.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Values reported together with the error.
    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

impl From<String> for StepError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for StepError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

/// Reasons a walk ends in failure.
///
/// Only [`WalkError::Work`] is recoverable, and only by a state's error hook
/// before it ever becomes a `WalkError`.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum WalkError {
    #[error("No work for state '{state}'")]
    MissingWork { state: String },

    #[error("Invalid `next` in state '{state}': {next}")]
    InvalidNext { state: String, next: Value },

    #[error("Work failed in state '{state}': {error}")]
    Work { state: String, error: StepError },

    #[error("Error hook of state '{state}' decided: {error}")]
    Decided { state: String, error: StepError },

    #[error("Next resolver of state '{state}' failed: {error}")]
    Resolve { state: String, error: StepError },
}

impl WalkError {
    /// Name of the state the walk failed in.
    pub fn state(&self) -> &str {
        match self {
            Self::MissingWork { state }
            | Self::InvalidNext { state, .. }
            | Self::Work { state, .. }
            | Self::Decided { state, .. }
            | Self::Resolve { state, .. } => state,
        }
    }

    /// The callable's own error, if a callable produced this failure.
    pub fn step_error(&self) -> Option<&StepError> {
        match self {
            Self::Work { error, .. } | Self::Decided { error, .. } | Self::Resolve { error, .. } => {
                Some(error)
            }
            Self::MissingWork { .. } | Self::InvalidNext { .. } => None,
        }
    }

    /// Whether the table itself is malformed, as opposed to a callable failing.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingWork { .. } | Self::InvalidNext { .. })
    }
}

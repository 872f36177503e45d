//! Blueprint error types.

use thiserror::Error;

/// Errors that can occur while loading or binding a blueprint
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BlueprintError {
    /// The JSON document could not be parsed
    #[error("Blueprint parsing failed: {0}")]
    ParseFailed(String),

    /// The blueprint could not be written out as JSON
    #[error("Blueprint serialization failed: {0}")]
    SerializationFailed(String),

    /// A state names work the registry does not know
    #[error("State '{state}' uses unknown work '{work}'")]
    UnknownWork { state: String, work: String },

    /// A state names a next resolver the registry does not know
    #[error("State '{state}' uses unknown next resolver '{resolver}'")]
    UnknownResolver { state: String, resolver: String },

    /// A state names an error hook the registry does not know
    #[error("State '{state}' uses unknown error hook '{hook}'")]
    UnknownHook { state: String, hook: String },
}

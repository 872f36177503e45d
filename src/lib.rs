//! Statewalk: a minimal asynchronous state-table walker
//!
//! Statewalk runs a table of named states one at a time. Each state carries
//! an effectful unit of work; its results, or its error hook's verdict,
//! decide which state runs next. The walk ends in a single outcome.
//!
//! Like the rest of the Stillwater family it keeps a "pure core, imperative
//! shell" split: values and history are plain data, while work, resolvers,
//! and error hooks are `BoxedEffect`s run against a caller environment.
//!
//! # Core Concepts
//!
//! - **State**: work, static params, an optional `next`, an optional error hook
//! - **StateTable**: named states, entered at `start`
//! - **StateWalker**: the engine, deferring through a `Scheduler` between states
//! - **Blueprint**: the same table described as JSON and bound through a `Registry`
//!
//! # Example
//!
//! ```rust
//! use statewalk::effects::{State, StateTable, StateWalker, START};
//! use serde_json::json;
//! use stillwater::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let table = StateTable::new()
//!     .state(
//!         START,
//!         State::new(|args| pure(vec![json!({ "id": args[0] })]).boxed())
//!             .params([json!("problem-a")])
//!             .next("render"),
//!     )
//!     .state("render", State::new(|_| pure(vec![json!("render value")]).boxed()));
//!
//! let result = StateWalker::new(&table).walk(&()).await;
//! assert_eq!(result, Ok(vec![json!("render value")]));
//! # }
//! ```

pub mod blueprint;
pub mod core;
pub mod effects;

// Re-export commonly used types
pub use blueprint::{Blueprint, BlueprintError, Registry};
pub use crate::core::{StateHop, Values, WalkHistory};
pub use effects::{
    walk, NextSpec, Scheduler, State, StateTable, StateWalker, StepError, TokioScheduler,
    WalkError, WalkReport, START,
};

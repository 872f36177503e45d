//! Effectful state walking using Stillwater 0.11.0.
//!
//! This module is the "imperative shell" around the pure core: state tables
//! whose work, next resolvers, and error hooks are Stillwater effects, and
//! the walker that runs them.
//!
//! # Key Concepts
//!
//! - **State**: work plus optional params, `next`, and error hook
//! - **StateTable**: named states, entered at `start`
//! - **StateWalker**: runs one state at a time, deferring between states
//! - **Scheduler**: host-supplied deferral primitive
//!
//! Callables are factories returning `BoxedEffect`, so every step gets a
//! fresh effect that runs against the caller's environment.

mod error;
mod scheduler;
mod state;
mod table;
mod walker;

pub use error::{StepError, WalkError};
pub use scheduler::{Scheduler, TokioScheduler};
pub use state::{ErrorHook, NextResolver, NextSpec, State, Work};
pub use table::{StateTable, START};
pub use walker::{walk, StateWalker, WalkReport};

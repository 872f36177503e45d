//! Core data threaded through a walk.
//!
//! This module contains the pure parts of the walker:
//! - Opaque value lists passed from state to state
//! - Immutable history of the hops a walk takes
//!
//! Nothing here runs effects; the engine lives in [`crate::effects`].

mod history;
pub mod values;

pub use history::{StateHop, WalkHistory};
pub use values::{concat_args, Values};

//! Walk history tracking.
//!
//! Records every hop a walk makes from one table state to another, following
//! the same immutable-record style as the rest of the core.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single hop between states.
///
/// # Example
///
/// ```rust
/// use statewalk::core::StateHop;
/// use chrono::Utc;
///
/// let hop = StateHop {
///     from: "start".to_string(),
///     to: "render".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(hop.to, "render");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateHop {
    /// The state whose work just finished
    pub from: String,
    /// The state about to run
    pub to: String,
    /// When the hop was taken
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of hops taken by one walk.
///
/// `record` returns a new history and leaves the original untouched.
///
/// # Example
///
/// ```rust
/// use statewalk::core::{StateHop, WalkHistory};
/// use chrono::Utc;
///
/// let history = WalkHistory::new()
///     .record(StateHop {
///         from: "start".into(),
///         to: "loadImages".into(),
///         timestamp: Utc::now(),
///     })
///     .record(StateHop {
///         from: "loadImages".into(),
///         to: "render".into(),
///         timestamp: Utc::now(),
///     });
///
/// assert_eq!(history.get_path(), vec!["start", "loadImages", "render"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WalkHistory {
    hops: Vec<StateHop>,
}

impl WalkHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self { hops: Vec::new() }
    }

    /// Record a hop, returning a new history.
    pub fn record(&self, hop: StateHop) -> Self {
        let mut hops = self.hops.clone();
        hops.push(hop);
        Self { hops }
    }

    /// Names of the states visited, in order.
    ///
    /// Empty until the first hop; a walk that finished in `start` leaves no hops.
    pub fn get_path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        if let Some(first) = self.hops.first() {
            path.push(first.from.as_str());
        }
        for hop in &self.hops {
            path.push(hop.to.as_str());
        }
        path
    }

    /// Time between the first and last hop.
    ///
    /// Returns `None` if there are no hops.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.hops.first(), self.hops.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    pub fn hops(&self) -> &[StateHop] {
        &self.hops
    }

    pub fn len(&self) -> usize {
        self.hops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }
}

//! Deferral primitive the walker uses between states.
//!
//! Every hop across a state boundary waits for [`Scheduler::defer`], so a
//! walk never resolves a multi-step chain within a single turn.

use std::future::Future;
use std::sync::Arc;

/// Host-supplied "run later" service.
///
/// `defer` must complete on a later scheduling turn than the one it was
/// called on. Deferrals issued by one walk are awaited one at a time, so
/// their order is preserved.
pub trait Scheduler: Send + Sync {
    fn defer(&self) -> impl Future<Output = ()> + Send;
}

/// Defers by yielding the current task back to the tokio runtime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    fn defer(&self) -> impl Future<Output = ()> + Send {
        tokio::task::yield_now()
    }
}

impl<S: Scheduler> Scheduler for Arc<S> {
    fn defer(&self) -> impl Future<Output = ()> + Send {
        (**self).defer()
    }
}

impl<S: Scheduler> Scheduler for &S {
    fn defer(&self) -> impl Future<Output = ()> + Send {
        (**self).defer()
    }
}

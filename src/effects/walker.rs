//! State walker that runs a [`StateTable`] one state at a time.

use crate::core::{concat_args, StateHop, Values, WalkHistory};
use crate::effects::error::{StepError, WalkError};
use crate::effects::scheduler::{Scheduler, TokioScheduler};
use crate::effects::state::{NextSpec, State};
use crate::effects::table::{StateTable, START};
use chrono::Utc;
use stillwater::effect::Effect;
use tracing::{debug, trace, warn, Instrument};
use uuid::Uuid;

/// Result of a walk together with the hops it took.
#[derive(Clone, Debug)]
pub struct WalkReport {
    pub walk_id: Uuid,
    pub result: Result<Values, WalkError>,
    pub history: WalkHistory,
}

impl WalkReport {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Walk-local execution context: the state about to run and what it receives.
#[derive(Debug)]
struct Cursor {
    state: String,
    incoming: Values,
}

impl Cursor {
    fn at_start() -> Self {
        Self {
            state: START.to_string(),
            incoming: Values::new(),
        }
    }
}

/// How control leaves a state once its work and error routing are done.
enum Routing {
    /// `next` is absent, the walk succeeds with these values
    Finish(Values),

    /// A successor was named (or naming it failed); handled on a later turn
    Followup {
        decision: Result<String, StepError>,
        results: Values,
    },
}

/// Runs a state table from `start` until it succeeds or fails.
///
/// The walker only borrows the table. Everything that changes during a walk
/// lives in a walk-local cursor, so the same table can serve concurrent walks.
pub struct StateWalker<'t, Env, S = TokioScheduler> {
    table: &'t StateTable<Env>,
    scheduler: S,
}

impl<'t, Env> StateWalker<'t, Env, TokioScheduler> {
    /// Create a walker that defers through the tokio runtime.
    pub fn new(table: &'t StateTable<Env>) -> Self {
        Self {
            table,
            scheduler: TokioScheduler,
        }
    }
}

impl<'t, Env, S> StateWalker<'t, Env, S>
where
    Env: Clone + Send + Sync + 'static,
    S: Scheduler,
{
    /// Replace the deferral primitive.
    pub fn with_scheduler<T: Scheduler>(self, scheduler: T) -> StateWalker<'t, Env, T> {
        StateWalker {
            table: self.table,
            scheduler,
        }
    }

    pub fn table(&self) -> &'t StateTable<Env> {
        self.table
    }

    /// Walk the table and return the final state's results.
    pub async fn walk(&self, env: &Env) -> Result<Values, WalkError> {
        self.run(env).await.result
    }

    /// Walk the table and hand the outcome to `done`, exactly once.
    pub async fn walk_with<F>(&self, env: &Env, done: F)
    where
        F: FnOnce(Result<Values, WalkError>),
    {
        done(self.walk(env).await);
    }

    /// Walk the table, keeping the history of hops alongside the outcome.
    pub async fn run(&self, env: &Env) -> WalkReport {
        let walk_id = Uuid::new_v4();
        let mut history = WalkHistory::new();

        let result = self
            .drive(env, &mut history)
            .instrument(tracing::debug_span!("walk", %walk_id))
            .await;

        match &result {
            Ok(values) => debug!(%walk_id, values = values.len(), hops = history.len(), "walk succeeded"),
            Err(error) => warn!(%walk_id, state = error.state(), %error, "walk failed"),
        }

        WalkReport {
            walk_id,
            result,
            history,
        }
    }

    async fn drive(&self, env: &Env, history: &mut WalkHistory) -> Result<Values, WalkError> {
        let mut cursor = Cursor::at_start();

        loop {
            let Cursor {
                state: name,
                incoming,
            } = cursor;
            let state = self.table.get(&name).ok_or_else(|| WalkError::MissingWork {
                state: name.clone(),
            })?;

            let outcome = self.execute(&name, state, incoming, env).await?;
            let results = self.route_from_error(&name, state, outcome, env).await?;

            let (decision, results) = match self.route_to_next(&name, state, results, env).await? {
                Routing::Finish(values) => {
                    debug!(state = %name, "terminal state reached");
                    return Ok(values);
                }
                Routing::Followup { decision, results } => (decision, results),
            };

            self.scheduler.defer().await;

            let target = decision.map_err(|error| WalkError::Resolve {
                state: name.clone(),
                error,
            })?;

            if !self.table.contains(&target) {
                debug!(state = %name, next = %target, "next state not in table, finishing");
                return Ok(results);
            }

            trace!(from = %name, to = %target, "following to next state");
            *history = history.record(StateHop {
                from: name,
                to: target.clone(),
                timestamp: Utc::now(),
            });
            cursor = Cursor {
                state: target,
                incoming: results,
            };
        }
    }

    /// Run a state's work with incoming results followed by its params.
    async fn execute(
        &self,
        name: &str,
        state: &State<Env>,
        incoming: Values,
        env: &Env,
    ) -> Result<Result<Values, StepError>, WalkError> {
        let work = state.work.as_ref().ok_or_else(|| WalkError::MissingWork {
            state: name.to_string(),
        })?;

        let args = concat_args(incoming, &state.params);
        trace!(state = name, args = args.len(), "running work");
        Ok(work(args).run(env).await)
    }

    async fn route_from_error(
        &self,
        name: &str,
        state: &State<Env>,
        outcome: Result<Values, StepError>,
        env: &Env,
    ) -> Result<Values, WalkError> {
        match (&state.check_error, outcome) {
            (Some(hook), outcome) => {
                let (error, results) = match outcome {
                    Ok(values) => (None, values),
                    Err(error) => {
                        let values = error.values().to_vec();
                        (Some(error), values)
                    }
                };
                let had_error = error.is_some();

                match hook(error).run(env).await {
                    Ok(()) => {
                        if had_error {
                            debug!(state = name, "error hook recovered from work error");
                        }
                        Ok(results)
                    }
                    Err(error) => Err(WalkError::Decided {
                        state: name.to_string(),
                        error,
                    }),
                }
            }
            (None, Err(error)) => Err(WalkError::Work {
                state: name.to_string(),
                error,
            }),
            (None, Ok(results)) => Ok(results),
        }
    }

    async fn route_to_next(
        &self,
        name: &str,
        state: &State<Env>,
        results: Values,
        env: &Env,
    ) -> Result<Routing, WalkError> {
        match &state.next {
            NextSpec::Absent => Ok(Routing::Finish(results)),
            NextSpec::Static(target) => Ok(Routing::Followup {
                decision: Ok(target.clone()),
                results,
            }),
            NextSpec::Dynamic(resolver) => {
                let decision = resolver(results.clone()).run(env).await;
                Ok(Routing::Followup { decision, results })
            }
            NextSpec::Invalid(next) => Err(WalkError::InvalidNext {
                state: name.to_string(),
                next: next.clone(),
            }),
        }
    }
}

/// Walk `table` with the default scheduler and report through `done`.
///
/// `done` receives `Err` on failure or `Ok` with the final results, and is
/// called exactly once.
pub async fn walk<Env, F>(table: &StateTable<Env>, env: &Env, done: F)
where
    Env: Clone + Send + Sync + 'static,
    F: FnOnce(Result<Values, WalkError>),
{
    StateWalker::new(table).walk_with(env, done).await;
}

//! Scheduler seams: deferred execution and fire-and-forget spawning.
//!
//! The engine has no opinion on how deferral or spawning is implemented
//! (timer wheel, coroutine, OS thread) — it only consumes these two traits.
//! `ix-engine` ships a tick-based `TickTimerWheel` for deferral and a
//! Rayon-backed spawner behind its `parallel` feature; hosts may substitute
//! their own.

use std::time::Duration;

/// A boxed one-shot job.  `Send` so deferred and spawned work can cross
/// execution contexts.
pub type DeferredJob = Box<dyn FnOnce() + Send + 'static>;

/// Deferred-call facility: run `job` once, `delay` after now.
///
/// Contract (tested in ix-engine):
/// - `schedule_after` never blocks the caller.
/// - Every call schedules an independent job.  Scheduling the same logical
///   work twice before the first delay elapses yields two executions — there
///   is no de-duplication and no cancellation handle.
/// - A job never runs before its delay has fully elapsed.
pub trait DelayScheduler: Send + Sync {
    fn schedule_after(&self, delay: Duration, job: DeferredJob);
}

/// Fire-and-forget task spawner used for `ActionsControl::Parallel` dispatch.
///
/// Spawned jobs are not tracked, joined, or cancellable, and a panicking job
/// must not propagate back to the caller's context.  This lack of
/// synchronization is a deliberate contract, not an accident: concurrent
/// actions that mutate overlapping scene state race, and the result is
/// undefined unless the actions are commutative.
pub trait TaskSpawner: Send + Sync {
    fn spawn(&self, job: DeferredJob);
}

/// A [`TaskSpawner`] that runs the job immediately on the calling context.
///
/// The deterministic fallback used when no concurrent spawner is configured
/// (and in tests, where effect ordering must be observable).
pub struct InlineSpawner;

impl TaskSpawner for InlineSpawner {
    fn spawn(&self, job: DeferredJob) {
        job();
    }
}

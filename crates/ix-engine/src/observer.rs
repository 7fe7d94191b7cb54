//! Per-tick observation hooks.

use ix_core::{ActivationControl, BehaviorId, Tick};

/// Hooks the engine calls while running.
///
/// All methods default to no-ops so observers implement only what they
/// watch.  Called synchronously from the orchestrator context — anything
/// slow belongs behind a channel.
pub trait EngineObserver {
    /// Called before any behavior is polled this tick.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called for each behavior whose activation state matched its policy
    /// this tick (after its actions were invoked).
    fn on_behavior_fired(&mut self, _tick: Tick, _behavior: BehaviorId, _state: ActivationControl) {
    }

    /// Called after behavior polling and deferred-job draining.
    fn on_tick_end(&mut self, _tick: Tick) {}

    /// Called once when a bounded run finishes.
    fn on_engine_end(&mut self, _final_tick: Tick) {}
}

/// An [`EngineObserver`] that watches nothing.
pub struct NoopObserver;

impl EngineObserver for NoopObserver {}

//! Engine event pub/sub seam.
//!
//! Triggers, actions, and behaviors announce occurrences keyed by their
//! registry index.  The engine publishes unconditionally and never depends
//! on subscribers existing; hosts wire a sink to drive UI, analytics, or
//! haptic middleware.

use crate::{ActionId, ActivationControl, BehaviorId, TriggerId};

/// A typed occurrence published by the engine core.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum EngineEvent {
    /// A trigger's per-tick sample came back `true`.
    TriggerActivated { trigger: TriggerId },

    /// An action's `invoke` entry point was called (before any delay).
    ActionInvoked { action: ActionId },

    /// A behavior's activation state matched its policy this tick.
    BehaviorFired {
        behavior: BehaviorId,
        state: ActivationControl,
    },

    /// A behavior was interrupted and will never run again.
    BehaviorInterrupted { behavior: BehaviorId },
}

/// Receiver for [`EngineEvent`]s.
///
/// Implementations must tolerate being called from the orchestrator context
/// every tick; anything slow belongs behind a channel.
pub trait EventSink: Send + Sync {
    fn publish(&self, event: EngineEvent);
}

/// An [`EventSink`] that discards everything.  The default when the host
/// registers no subscriber.
pub struct NoopSink;

impl EventSink for NoopSink {
    fn publish(&self, _event: EngineEvent) {}
}

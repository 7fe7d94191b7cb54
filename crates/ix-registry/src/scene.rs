//! The scene-wide capability registry.

use std::sync::Arc;

use ix_action::Action;
use ix_core::{ActionId, BehaviorId, TriggerId};
use ix_trigger::Trigger;
use rustc_hash::FxHashMap;

use crate::{CapabilityTable, RegistryResult};

/// One registry per loaded scene: every trigger, action, and behavior slot.
///
/// Built once at load time by the engine builder, then read-only for the
/// scene's lifetime.  `clear_all` is the teardown path: it disposes every
/// registered capability before dropping the tables.
#[derive(Default)]
pub struct SceneRegistry {
    triggers:  CapabilityTable<dyn Trigger>,
    actions:   CapabilityTable<dyn Action>,
    /// Behavior id → position in the engine's polling order.
    behaviors: FxHashMap<BehaviorId, usize>,
}

impl SceneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Triggers ──────────────────────────────────────────────────────────

    pub fn register_trigger(
        &mut self,
        id: TriggerId,
        trigger: Arc<dyn Trigger>,
    ) -> RegistryResult<()> {
        self.triggers.register(id.0, trigger)
    }

    pub fn trigger(&self, id: TriggerId) -> RegistryResult<Arc<dyn Trigger>> {
        self.triggers.resolve(id.0)
    }

    pub fn trigger_id(&self, trigger: &Arc<dyn Trigger>) -> RegistryResult<TriggerId> {
        self.triggers.reverse_resolve(trigger).map(TriggerId)
    }

    pub fn trigger_count(&self) -> usize {
        self.triggers.len()
    }

    // ── Actions ───────────────────────────────────────────────────────────

    pub fn register_action(
        &mut self,
        id: ActionId,
        action: Arc<dyn Action>,
    ) -> RegistryResult<()> {
        self.actions.register(id.0, action)
    }

    pub fn action(&self, id: ActionId) -> RegistryResult<Arc<dyn Action>> {
        self.actions.resolve(id.0)
    }

    pub fn action_id(&self, action: &Arc<dyn Action>) -> RegistryResult<ActionId> {
        self.actions.reverse_resolve(action).map(ActionId)
    }

    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    // ── Behavior slots ────────────────────────────────────────────────────

    /// Record where a behavior sits in the engine's polling order.
    pub fn set_behavior_slot(&mut self, id: BehaviorId, slot: usize) {
        self.behaviors.insert(id, slot);
    }

    pub fn behavior_slot(&self, id: BehaviorId) -> Option<usize> {
        self.behaviors.get(&id).copied()
    }

    pub fn behavior_count(&self) -> usize {
        self.behaviors.len()
    }

    // ── Teardown ──────────────────────────────────────────────────────────

    /// Dispose every capability, then empty the registry.
    ///
    /// Pending deferred invocations are not cancelled; a disposed action's
    /// `execute` must tolerate running after teardown.
    pub fn clear_all(&mut self) {
        for (_, trigger) in self.triggers.iter() {
            trigger.dispose();
        }
        for (_, action) in self.actions.iter() {
            action.dispose();
        }
        self.triggers.clear();
        self.actions.clear();
        self.behaviors.clear();
    }
}

//! Unit tests for ix-registry.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use ix_action::Action;
use ix_core::{ActionId, ActionKind, BehaviorId, TriggerId, TriggerKind};
use ix_trigger::Trigger;

use crate::{CapabilityTable, RegistryError, SceneRegistry};

// ── Helpers ───────────────────────────────────────────────────────────────────

struct FlagTrigger {
    disposed: Arc<AtomicBool>,
}

impl Trigger for FlagTrigger {
    fn kind(&self) -> TriggerKind {
        TriggerKind::Custom(0)
    }
    fn sample(&self) -> bool {
        false
    }
    fn dispose(&self) {
        self.disposed.store(true, Ordering::Relaxed);
    }
}

struct FlagAction {
    disposed: Arc<AtomicBool>,
}

impl Action for FlagAction {
    fn kind(&self) -> ActionKind {
        ActionKind::Custom(0)
    }
    fn execute(&self) {}
    fn dispose(&self) {
        self.disposed.store(true, Ordering::Relaxed);
    }
}

fn flag_trigger() -> (Arc<dyn Trigger>, Arc<AtomicBool>) {
    let flag = Arc::new(AtomicBool::new(false));
    let trigger = Arc::new(FlagTrigger {
        disposed: Arc::clone(&flag),
    });
    (trigger, flag)
}

fn flag_action() -> (Arc<dyn Action>, Arc<AtomicBool>) {
    let flag = Arc::new(AtomicBool::new(false));
    let action = Arc::new(FlagAction {
        disposed: Arc::clone(&flag),
    });
    (action, flag)
}

// ── CapabilityTable ───────────────────────────────────────────────────────────

#[cfg(test)]
mod table_tests {
    use super::*;

    #[test]
    fn register_and_resolve() {
        let mut table: CapabilityTable<dyn Trigger> = CapabilityTable::new();
        let (trigger, _) = flag_trigger();
        table.register(3, Arc::clone(&trigger)).unwrap();

        let resolved = table.resolve(3).unwrap();
        assert!(Arc::ptr_eq(&resolved, &trigger));
        assert_eq!(
            table.resolve(4).map(|_| ()),
            Err(RegistryError::NotFound { index: 4 })
        );
    }

    #[test]
    fn duplicate_index_is_rejected() {
        let mut table: CapabilityTable<dyn Trigger> = CapabilityTable::new();
        let (a, _) = flag_trigger();
        let (b, _) = flag_trigger();
        table.register(0, a).unwrap();
        assert_eq!(
            table.register(0, b),
            Err(RegistryError::DuplicateIndex { index: 0 })
        );
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn reverse_resolve_uses_identity() {
        let mut table: CapabilityTable<dyn Trigger> = CapabilityTable::new();
        let (registered, _) = flag_trigger();
        let (stranger, _) = flag_trigger();
        table.register(7, Arc::clone(&registered)).unwrap();

        assert_eq!(table.reverse_resolve(&registered), Ok(7));
        assert_eq!(
            table.reverse_resolve(&stranger),
            Err(RegistryError::Unregistered)
        );
    }
}

// ── SceneRegistry ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod scene_tests {
    use super::*;

    #[test]
    fn round_trips_ids() {
        let mut registry = SceneRegistry::new();
        let (trigger, _) = flag_trigger();
        let (action, _) = flag_action();

        registry
            .register_trigger(TriggerId(0), Arc::clone(&trigger))
            .unwrap();
        registry
            .register_action(ActionId(5), Arc::clone(&action))
            .unwrap();

        assert_eq!(registry.trigger_id(&trigger), Ok(TriggerId(0)));
        assert_eq!(registry.action_id(&action), Ok(ActionId(5)));
        assert!(registry.trigger(TriggerId(1)).is_err());
    }

    #[test]
    fn behavior_slots() {
        let mut registry = SceneRegistry::new();
        registry.set_behavior_slot(BehaviorId(2), 0);
        registry.set_behavior_slot(BehaviorId(9), 1);

        assert_eq!(registry.behavior_slot(BehaviorId(9)), Some(1));
        assert_eq!(registry.behavior_slot(BehaviorId(1)), None);
        assert_eq!(registry.behavior_count(), 2);
    }

    #[test]
    fn clear_all_disposes_everything() {
        let mut registry = SceneRegistry::new();
        let (trigger, trigger_disposed) = flag_trigger();
        let (action, action_disposed) = flag_action();

        registry.register_trigger(TriggerId(0), trigger).unwrap();
        registry.register_action(ActionId(0), action).unwrap();
        registry.set_behavior_slot(BehaviorId(0), 0);

        registry.clear_all();

        assert!(trigger_disposed.load(Ordering::Relaxed));
        assert!(action_disposed.load(Ordering::Relaxed));
        assert_eq!(registry.trigger_count(), 0);
        assert_eq!(registry.action_count(), 0);
        assert_eq!(registry.behavior_count(), 0);
    }
}

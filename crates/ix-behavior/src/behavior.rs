//! The behavior unit: resolved triggers and actions plus run state.

use std::sync::Arc;

use ix_action::{Action, ActionExt};
use ix_core::{
    ActionId, ActionsControl, ActivationControl, BehaviorId, DelayScheduler, EngineEvent,
    EventSink, TaskSpawner, TriggerId,
};
use ix_trigger::Trigger;

use crate::activation::ActivationMachine;
use crate::combine::{Combination, EvalMode};
use crate::{BehaviorError, BehaviorResult};

/// Ambient collaborators a behavior needs while polling and dispatching.
///
/// Borrowed from the engine each tick; the engine owns the `Arc`s.
pub struct DispatchCtx<'a> {
    pub timers:  &'a Arc<dyn DelayScheduler>,
    pub spawner: &'a Arc<dyn TaskSpawner>,
    pub events:  &'a Arc<dyn EventSink>,
}

/// Callback the engine attaches to a behavior out-of-band (not part of the
/// authored action list), run synchronously after every fire.
pub type EngineCallback = Box<dyn Fn() + Send + Sync>;

/// One live behavior: resolved handles, compiled combination, run state.
///
/// Immutable after construction except for the activation machine, the
/// per-tick scratch results, and `is_running` (permanently false once
/// interrupted).
pub struct Behavior {
    id: BehaviorId,

    trigger_ids: Vec<TriggerId>,
    triggers:    Vec<Arc<dyn Trigger>>,
    action_ids:  Vec<ActionId>,
    actions:     Vec<Arc<dyn Action>>,

    combination:       Combination,
    eval_mode:         EvalMode,
    activation_policy: ActivationControl,
    actions_policy:    ActionsControl,
    interrupt_action:  Option<Arc<dyn Action>>,
    priority:          i32,
    shared:            bool,

    machine:    ActivationMachine,
    /// Scratch, rewritten every tick.  Kept allocated between ticks.
    results:    Vec<bool>,
    is_running: bool,

    engine_callbacks: Vec<EngineCallback>,
}

impl Behavior {
    /// Assemble a behavior from already-resolved handles.
    ///
    /// The id lists and handle lists run parallel (same index, same
    /// capability); the engine builder produces them together.  Fail-fast:
    /// a behavior needs at least one trigger, and the combination must fit
    /// the trigger count (checked by [`Combination::parse`] upstream but
    /// re-checked here for programmatic construction).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: BehaviorId,
        trigger_ids: Vec<TriggerId>,
        triggers: Vec<Arc<dyn Trigger>>,
        action_ids: Vec<ActionId>,
        actions: Vec<Arc<dyn Action>>,
        combination: Combination,
        eval_mode: EvalMode,
        activation_policy: ActivationControl,
        actions_policy: ActionsControl,
        interrupt_action: Option<Arc<dyn Action>>,
        priority: i32,
        shared: bool,
    ) -> BehaviorResult<Self> {
        if triggers.is_empty() {
            return Err(BehaviorError::Config(format!(
                "behavior {id} has no triggers"
            )));
        }
        if triggers.len() != trigger_ids.len() || actions.len() != action_ids.len() {
            return Err(BehaviorError::Config(format!(
                "behavior {id}: id and handle lists are not parallel"
            )));
        }
        if combination.ops().len() > triggers.len() - 1 {
            return Err(BehaviorError::TooManyOperators {
                ops:      combination.ops().len(),
                triggers: triggers.len(),
                max:      triggers.len() - 1,
            });
        }
        let results = vec![false; triggers.len()];
        Ok(Self {
            id,
            trigger_ids,
            triggers,
            action_ids,
            actions,
            combination,
            eval_mode,
            activation_policy,
            actions_policy,
            interrupt_action,
            priority,
            shared,
            machine: ActivationMachine::new(),
            results,
            is_running: true,
            engine_callbacks: Vec::new(),
        })
    }

    pub fn id(&self) -> BehaviorId {
        self.id
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    /// Advisory only; exposed for external conflict resolution.
    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn shared(&self) -> bool {
        self.shared
    }

    pub fn activation_policy(&self) -> ActivationControl {
        self.activation_policy
    }

    /// Attach an engine-side callback, run synchronously after every fire,
    /// in attachment order.
    pub fn add_engine_callback(&mut self, callback: EngineCallback) {
        self.engine_callbacks.push(callback);
    }

    /// One tick: resample triggers, fold, step the machine, fire on match.
    ///
    /// Returns the computed activation symbol, or `None` when the behavior
    /// is stopped.
    pub fn poll(&mut self, ctx: &DispatchCtx<'_>) -> Option<ActivationControl> {
        if !self.is_running {
            return None;
        }

        for (slot, (trigger, &id)) in self
            .results
            .iter_mut()
            .zip(self.triggers.iter().zip(&self.trigger_ids))
        {
            *slot = trigger.sample();
            if *slot {
                ctx.events.publish(EngineEvent::TriggerActivated { trigger: id });
            }
        }

        let combined = self.combination.evaluate(self.eval_mode, &mut self.results);
        let state = self.machine.step(combined);

        if state == self.activation_policy {
            self.fire_actions(ctx);
            ctx.events.publish(EngineEvent::BehaviorFired {
                behavior: self.id,
                state,
            });
        }
        Some(state)
    }

    fn fire_actions(&self, ctx: &DispatchCtx<'_>) {
        match self.actions_policy {
            ActionsControl::Sequential => {
                for (action, &id) in self.actions.iter().zip(&self.action_ids) {
                    ctx.events.publish(EngineEvent::ActionInvoked { action: id });
                    action.invoke(ctx.timers);
                }
            }
            ActionsControl::Parallel => {
                for (action, &id) in self.actions.iter().zip(&self.action_ids) {
                    ctx.events.publish(EngineEvent::ActionInvoked { action: id });
                    let action = Arc::clone(action);
                    let timers = Arc::clone(ctx.timers);
                    ctx.spawner.spawn(Box::new(move || action.invoke(&timers)));
                }
            }
        }
        for callback in &self.engine_callbacks {
            callback();
        }
    }

    /// Stop the behavior permanently, firing its interrupt action once.
    ///
    /// Idempotent: a second interrupt is a no-op.  Deferred or parallel
    /// invocations already dispatched are not cancelled.
    pub fn interrupt(&mut self, ctx: &DispatchCtx<'_>) {
        if !self.is_running {
            return;
        }
        self.is_running = false;
        if let Some(action) = &self.interrupt_action {
            action.invoke(ctx.timers);
        }
        ctx.events.publish(EngineEvent::BehaviorInterrupted { behavior: self.id });
    }

    /// Stop without firing the interrupt action.  Capability disposal runs
    /// through the registry at scene teardown, not here.
    pub fn dispose(&mut self) {
        self.is_running = false;
    }
}

//! Engine assembly with fail-fast validation.

use std::sync::Arc;

use ix_action::{ActionContext, ActionDesc, ActionFactory, SceneSink};
use ix_behavior::{Behavior, BehaviorDesc, Combination};
use ix_core::{
    ActionId, BehaviorId, EngineConfig, EventSink, InlineSpawner, NoopSink, TaskSpawner,
    TriggerId,
};
use ix_registry::SceneRegistry;
use ix_trigger::{SceneInputs, TriggerDesc, TriggerFactory};

use crate::engine::Engine;
use crate::timer::TickTimerWheel;
use crate::{EngineError, EngineResult};

/// Assembles an [`Engine`] from pre-parsed scene descriptors.
///
/// Descriptors are registered under their array position: the first trigger
/// added is `TriggerId(0)`, and so on, matching how the authoring format
/// cross-references them.  `build` is fail-fast: any unresolved index,
/// unrecognized kind, or malformed combination aborts the whole build with
/// a descriptive error — the engine never substitutes a default capability.
///
/// A [`SceneSink`] is the one mandatory collaborator; everything else has a
/// deterministic default (no-op events, inline spawner, fresh inputs,
/// standard factories).
pub struct EngineBuilder {
    config:          EngineConfig,
    sink:            Option<Arc<dyn SceneSink>>,
    inputs:          Option<Arc<SceneInputs>>,
    events:          Option<Arc<dyn EventSink>>,
    spawner:         Option<Arc<dyn TaskSpawner>>,
    trigger_factory: TriggerFactory,
    action_factory:  ActionFactory,
    triggers:        Vec<TriggerDesc>,
    actions:         Vec<ActionDesc>,
    behaviors:       Vec<BehaviorDesc>,
}

impl EngineBuilder {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            sink: None,
            inputs: None,
            events: None,
            spawner: None,
            trigger_factory: TriggerFactory::default(),
            action_factory: ActionFactory::default(),
            triggers: Vec::new(),
            actions: Vec::new(),
            behaviors: Vec::new(),
        }
    }

    /// Where actions submit their scene effects.  Mandatory.
    pub fn with_sink(mut self, sink: Arc<dyn SceneSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Share a pre-existing sensor-state instance (e.g. one the host is
    /// already feeding).  Default: a fresh empty one.
    pub fn with_inputs(mut self, inputs: Arc<SceneInputs>) -> Self {
        self.inputs = Some(inputs);
        self
    }

    /// Subscriber for engine events.  Default: discard.
    pub fn with_events(mut self, events: Arc<dyn EventSink>) -> Self {
        self.events = Some(events);
        self
    }

    /// Execution contexts for parallel action dispatch.  Default: inline
    /// (deterministic, single-threaded).
    pub fn with_spawner(mut self, spawner: Arc<dyn TaskSpawner>) -> Self {
        self.spawner = Some(spawner);
        self
    }

    /// Replace the trigger factory (e.g. to add custom variants).
    pub fn with_trigger_factory(mut self, factory: TriggerFactory) -> Self {
        self.trigger_factory = factory;
        self
    }

    /// Replace the action factory.
    pub fn with_action_factory(mut self, factory: ActionFactory) -> Self {
        self.action_factory = factory;
        self
    }

    pub fn add_trigger(mut self, desc: TriggerDesc) -> Self {
        self.triggers.push(desc);
        self
    }

    pub fn add_action(mut self, desc: ActionDesc) -> Self {
        self.actions.push(desc);
        self
    }

    pub fn add_behavior(mut self, desc: BehaviorDesc) -> Self {
        self.behaviors.push(desc);
        self
    }

    pub fn with_triggers(mut self, descs: Vec<TriggerDesc>) -> Self {
        self.triggers.extend(descs);
        self
    }

    pub fn with_actions(mut self, descs: Vec<ActionDesc>) -> Self {
        self.actions.extend(descs);
        self
    }

    pub fn with_behaviors(mut self, descs: Vec<BehaviorDesc>) -> Self {
        self.behaviors.extend(descs);
        self
    }

    /// Validate everything and assemble the engine.
    pub fn build(self) -> EngineResult<Engine> {
        let sink = self
            .sink
            .ok_or_else(|| EngineError::Config("a scene sink is required".into()))?;
        let inputs = self.inputs.unwrap_or_default();
        let events: Arc<dyn EventSink> = self.events.unwrap_or_else(|| Arc::new(NoopSink));
        let spawner: Arc<dyn TaskSpawner> =
            self.spawner.unwrap_or_else(|| Arc::new(InlineSpawner));

        let mut registry = SceneRegistry::new();

        for (i, desc) in self.triggers.iter().enumerate() {
            let trigger = self.trigger_factory.build(desc, Arc::clone(&inputs))?;
            registry.register_trigger(TriggerId(i as u32), trigger)?;
        }

        let action_ctx = ActionContext {
            sink:   Arc::clone(&sink),
            inputs: Arc::clone(&inputs),
        };
        for (i, desc) in self.actions.iter().enumerate() {
            let action = self.action_factory.build(desc, &action_ctx)?;
            registry.register_action(ActionId(i as u32), action)?;
        }

        let mut behaviors = Vec::with_capacity(self.behaviors.len());
        for (i, desc) in self.behaviors.iter().enumerate() {
            let id = BehaviorId(i as u32);
            let triggers = desc
                .triggers
                .iter()
                .map(|&tid| registry.trigger(tid))
                .collect::<Result<Vec<_>, _>>()?;
            let actions = desc
                .actions
                .iter()
                .map(|&aid| registry.action(aid))
                .collect::<Result<Vec<_>, _>>()?;
            let interrupt_action = desc
                .interrupt_action
                .map(|aid| registry.action(aid))
                .transpose()?;
            let combination =
                Combination::parse(&desc.combination_control, desc.triggers.len())?;

            let behavior = Behavior::new(
                id,
                desc.triggers.clone(),
                triggers,
                desc.actions.clone(),
                actions,
                combination,
                desc.eval_mode,
                desc.activation_policy,
                desc.actions_policy,
                interrupt_action,
                desc.priority,
                desc.shared,
            )?;
            registry.set_behavior_slot(id, i);
            behaviors.push(behavior);
        }

        let timer_wheel = Arc::new(TickTimerWheel::new(self.config.tick_duration));
        Ok(Engine::new(
            self.config,
            registry,
            behaviors,
            inputs,
            timer_wheel,
            spawner,
            events,
        ))
    }
}

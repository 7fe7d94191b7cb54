//! The orchestrator.

use std::sync::Arc;

use ix_behavior::{Behavior, DispatchCtx, EngineCallback};
use ix_core::{
    BehaviorId, DelayScheduler, EngineConfig, EventSink, TaskSpawner, Tick, TickClock,
};
use ix_registry::SceneRegistry;
use ix_trigger::SceneInputs;

use crate::observer::EngineObserver;
use crate::timer::TickTimerWheel;
use crate::{EngineError, EngineResult};

/// The per-scene rule engine: behaviors, capabilities, and the tick loop.
///
/// Built by [`EngineBuilder`](crate::EngineBuilder).  The host drives it at
/// a fixed cadence — either frame-by-frame via [`Engine::tick`] or as a
/// bounded run via [`Engine::run`] — and feeds sensor facts into
/// [`Engine::inputs`] between ticks.
///
/// Trigger sampling and state-machine evaluation are single-threaded and
/// never suspend within a tick; the only true concurrency is parallel
/// action dispatch through the configured spawner.
pub struct Engine {
    config:    EngineConfig,
    clock:     TickClock,
    registry:  SceneRegistry,
    behaviors: Vec<Behavior>,
    inputs:    Arc<SceneInputs>,

    timer_wheel: Arc<TickTimerWheel>,
    timers:      Arc<dyn DelayScheduler>,
    spawner:     Arc<dyn TaskSpawner>,
    events:      Arc<dyn EventSink>,
}

impl Engine {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        config: EngineConfig,
        registry: SceneRegistry,
        behaviors: Vec<Behavior>,
        inputs: Arc<SceneInputs>,
        timer_wheel: Arc<TickTimerWheel>,
        spawner: Arc<dyn TaskSpawner>,
        events: Arc<dyn EventSink>,
    ) -> Self {
        let clock = config.make_clock();
        let timers: Arc<dyn DelayScheduler> = Arc::clone(&timer_wheel) as _;
        Self {
            config,
            clock,
            registry,
            behaviors,
            inputs,
            timer_wheel,
            timers,
            spawner,
            events,
        }
    }

    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The sensor state the host writes between ticks.
    pub fn inputs(&self) -> &Arc<SceneInputs> {
        &self.inputs
    }

    pub fn registry(&self) -> &SceneRegistry {
        &self.registry
    }

    pub fn behavior_count(&self) -> usize {
        self.behaviors.len()
    }

    pub fn is_running(&self, id: BehaviorId) -> EngineResult<bool> {
        Ok(self.behavior(id)?.is_running())
    }

    fn behavior(&self, id: BehaviorId) -> EngineResult<&Behavior> {
        let slot = self
            .registry
            .behavior_slot(id)
            .ok_or(EngineError::BehaviorNotFound(id))?;
        Ok(&self.behaviors[slot])
    }

    fn behavior_mut(&mut self, id: BehaviorId) -> EngineResult<&mut Behavior> {
        let slot = self
            .registry
            .behavior_slot(id)
            .ok_or(EngineError::BehaviorNotFound(id))?;
        Ok(&mut self.behaviors[slot])
    }

    /// Attach an engine-side callback to a behavior, run synchronously after
    /// each of its fires.
    pub fn add_engine_callback(
        &mut self,
        id: BehaviorId,
        callback: EngineCallback,
    ) -> EngineResult<()> {
        self.behavior_mut(id)?.add_engine_callback(callback);
        Ok(())
    }

    /// One fixed-timestep frame.
    ///
    /// The timer wheel moves with the clock first, running deferred
    /// invocations that came due (a job scheduled with an n-tick delay
    /// runs at the start of tick `scheduled + n`, never early).  Then
    /// behaviors are polled in registration order; no behavior's tick is
    /// skipped because an earlier one mutated shared scene state.
    pub fn tick(&mut self, observer: &mut dyn EngineObserver) {
        self.clock.advance();
        let tick = self.clock.current_tick;
        observer.on_tick_start(tick);
        self.timer_wheel.advance(tick);

        let ctx = DispatchCtx {
            timers:  &self.timers,
            spawner: &self.spawner,
            events:  &self.events,
        };
        for behavior in &mut self.behaviors {
            if let Some(state) = behavior.poll(&ctx) {
                if state == behavior.activation_policy() {
                    observer.on_behavior_fired(tick, behavior.id(), state);
                }
            }
        }

        observer.on_tick_end(tick);
    }

    /// Run `n` ticks.
    pub fn run_ticks(&mut self, n: u64, observer: &mut dyn EngineObserver) {
        for _ in 0..n {
            self.tick(observer);
        }
    }

    /// Run until the configured end tick, then notify the observer.
    pub fn run(&mut self, observer: &mut dyn EngineObserver) {
        while self.clock.current_tick < self.config.end_tick() {
            self.tick(observer);
        }
        observer.on_engine_end(self.clock.current_tick);
    }

    /// Permanently stop a behavior, firing its interrupt action once.
    ///
    /// In-flight deferred or parallel invocations it already dispatched are
    /// not cancelled.
    pub fn interrupt(&mut self, id: BehaviorId) -> EngineResult<()> {
        let ctx = DispatchCtx {
            timers:  &self.timers,
            spawner: &self.spawner,
            events:  &self.events,
        };
        let slot = self
            .registry
            .behavior_slot(id)
            .ok_or(EngineError::BehaviorNotFound(id))?;
        self.behaviors[slot].interrupt(&ctx);
        Ok(())
    }

    /// Scene teardown: stop every behavior, then dispose and clear every
    /// registered capability.  Deferred invocations already scheduled are
    /// not cancelled; a disposed action must tolerate a late `execute`.
    pub fn dispose(&mut self) {
        for behavior in &mut self.behaviors {
            behavior.dispose();
        }
        self.behaviors.clear();
        self.registry.clear_all();
    }
}

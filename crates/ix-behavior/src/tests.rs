//! Unit tests for ix-behavior.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use ix_action::Action;
use ix_core::{
    ActionId, ActionKind, ActionsControl, ActivationControl, BehaviorId, DeferredJob,
    DelayScheduler, EngineEvent, EventSink, InlineSpawner, NoopSink, TaskSpawner, TriggerId,
    TriggerKind,
};
use ix_trigger::Trigger;

use crate::{
    ActivationMachine, Behavior, BehaviorError, Combination, CombineOp, DispatchCtx, EvalMode,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// A trigger whose sample value the test flips between ticks.
struct Switch(Mutex<bool>);

impl Switch {
    fn new() -> Arc<Self> {
        Arc::new(Self(Mutex::new(false)))
    }

    fn set(&self, value: bool) {
        *self.0.lock().unwrap() = value;
    }
}

impl Trigger for Switch {
    fn kind(&self) -> TriggerKind {
        TriggerKind::Custom(0)
    }
    fn sample(&self) -> bool {
        *self.0.lock().unwrap()
    }
}

/// An action that counts its executions.
struct Counter {
    count: AtomicUsize,
    delay: Duration,
}

impl Counter {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            count: AtomicUsize::new(0),
            delay: Duration::ZERO,
        })
    }

    fn delayed(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            count: AtomicUsize::new(0),
            delay,
        })
    }

    fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl Action for Counter {
    fn kind(&self) -> ActionKind {
        ActionKind::Custom(0)
    }
    fn delay(&self) -> Duration {
        self.delay
    }
    fn execute(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}

/// A scheduler that holds jobs until released.
#[derive(Default)]
struct ManualScheduler {
    pending: Mutex<Vec<DeferredJob>>,
}

impl ManualScheduler {
    fn run_all(&self) {
        let jobs = std::mem::take(&mut *self.pending.lock().unwrap());
        for job in jobs {
            job();
        }
    }
}

impl DelayScheduler for ManualScheduler {
    fn schedule_after(&self, _delay: Duration, job: DeferredJob) {
        self.pending.lock().unwrap().push(job);
    }
}

/// Records published events for assertions.
#[derive(Default)]
struct RecordingEvents(Mutex<Vec<EngineEvent>>);

impl RecordingEvents {
    fn drain(&self) -> Vec<EngineEvent> {
        std::mem::take(&mut *self.0.lock().unwrap())
    }
}

impl EventSink for RecordingEvents {
    fn publish(&self, event: EngineEvent) {
        self.0.lock().unwrap().push(event);
    }
}

struct TestCtx {
    timers:  Arc<dyn DelayScheduler>,
    spawner: Arc<dyn TaskSpawner>,
    events:  Arc<dyn EventSink>,
}

impl TestCtx {
    fn new() -> Self {
        Self {
            timers:  Arc::new(ManualScheduler::default()),
            spawner: Arc::new(InlineSpawner),
            events:  Arc::new(NoopSink),
        }
    }

    fn ctx(&self) -> DispatchCtx<'_> {
        DispatchCtx {
            timers:  &self.timers,
            spawner: &self.spawner,
            events:  &self.events,
        }
    }
}

fn behavior_with(
    triggers: Vec<Arc<dyn Trigger>>,
    actions: Vec<Arc<dyn Action>>,
    ops: Vec<CombineOp>,
    policy: ActivationControl,
    actions_policy: ActionsControl,
) -> Behavior {
    let trigger_ids = (0..triggers.len() as u32).map(TriggerId).collect();
    let action_ids = (0..actions.len() as u32).map(ActionId).collect();
    let combination = Combination::from_ops(ops, triggers.len()).unwrap();
    Behavior::new(
        BehaviorId(0),
        trigger_ids,
        triggers,
        action_ids,
        actions,
        combination,
        EvalMode::Legacy,
        policy,
        actions_policy,
        None,
        0,
        false,
    )
    .unwrap()
}

// ── Combination ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod combine_tests {
    use super::*;

    fn eval(ops: &[CombineOp], results: &[bool]) -> bool {
        let combination = Combination::from_ops(ops.to_vec(), results.len()).unwrap();
        let mut scratch = results.to_vec();
        combination.evaluate(EvalMode::Legacy, &mut scratch)
    }

    #[test]
    fn parse_strips_references_and_whitespace() {
        let c = Combination::parse("#0 & #1 | #2", 3).unwrap();
        assert_eq!(c.ops(), &[CombineOp::And, CombineOp::Or]);

        let c = Combination::parse("", 1).unwrap();
        assert!(c.ops().is_empty());
    }

    #[test]
    fn parse_rejects_unknown_operator() {
        assert_eq!(
            Combination::parse("#0+#1", 2),
            Err(BehaviorError::UnknownOperator('+'))
        );
    }

    #[test]
    fn parse_rejects_operator_surplus() {
        assert!(matches!(
            Combination::parse("#0&#1|", 2),
            Err(BehaviorError::TooManyOperators { ops: 2, triggers: 2, max: 1 })
        ));
    }

    #[test]
    fn single_trigger_passes_through() {
        assert!(eval(&[], &[true]));
        assert!(!eval(&[], &[false]));
    }

    #[test]
    fn pairwise_false_aborts_evaluation() {
        // The documented soundness quirk: step0 true OR false = true
        // (continue), step1 false AND true = false (abort).
        assert!(!eval(&[CombineOp::Or, CombineOp::And], &[true, false, true]));
    }

    #[test]
    fn last_index_value_is_the_result() {
        // Both pairwise steps hold, so the fold returns results[2].
        assert!(eval(&[CombineOp::Or, CombineOp::Or], &[true, true, true]));
        assert!(!eval(&[CombineOp::Or, CombineOp::Or], &[true, true, false]));
    }

    #[test]
    fn not_is_pairwise_inequality() {
        assert!(eval(&[CombineOp::Not], &[true, false]));
        assert!(!eval(&[CombineOp::Not], &[true, true]));
    }

    #[test]
    fn xor_toggles_in_place_without_leaking() {
        let combination = Combination::from_ops(vec![CombineOp::Xor], 2).unwrap();
        let mut scratch = [true, true];
        assert!(!combination.evaluate(EvalMode::Legacy, &mut scratch));
        // The toggle mutated the scratch array; a fresh resample restores it.
        scratch = [true, false];
        assert!(combination.evaluate(EvalMode::Legacy, &mut scratch));
    }

    #[test]
    fn missing_operators_end_the_fold() {
        // Three triggers, one operator: the fold stops at index 1 and
        // returns results[1].
        let combination = Combination::from_ops(vec![CombineOp::And], 3).unwrap();
        let mut scratch = [true, true, false];
        assert!(combination.evaluate(EvalMode::Legacy, &mut scratch));
    }

    #[test]
    fn corrected_mode_is_a_sound_fold() {
        let combination =
            Combination::from_ops(vec![CombineOp::Or, CombineOp::Or], 3).unwrap();
        // A OR B OR C with only B true: the legacy fold ends on the last
        // value (false), the corrected fold accumulates true.
        let mut scratch = [false, true, false];
        assert!(!combination.evaluate(EvalMode::Legacy, &mut scratch));
        let mut scratch = [false, true, false];
        assert!(combination.evaluate(EvalMode::Corrected, &mut scratch));
    }
}

// ── Activation machine ────────────────────────────────────────────────────────

#[cfg(test)]
mod activation_tests {
    use super::*;

    #[test]
    fn documented_lifecycle() {
        let mut machine = ActivationMachine::new();
        assert_eq!(machine.step(true), ActivationControl::FirstEnter);
        assert_eq!(machine.step(true), ActivationControl::ActiveOn);
        assert_eq!(machine.step(false), ActivationControl::FirstExit);
    }

    #[test]
    fn enter_exit_edges_after_the_first() {
        let mut machine = ActivationMachine::new();
        machine.step(true); // FirstEnter
        machine.step(false); // FirstExit
        assert_eq!(machine.step(true), ActivationControl::EachEnter);
        assert_eq!(machine.step(false), ActivationControl::EachExit);
        assert_eq!(machine.step(false), ActivationControl::Off);
    }

    #[test]
    fn starts_off() {
        let mut machine = ActivationMachine::new();
        assert_eq!(machine.step(false), ActivationControl::Off);
        assert_eq!(machine.step(false), ActivationControl::Off);
        assert!(!machine.has_ever_entered());
    }

    #[test]
    fn history_flags_are_monotonic() {
        let mut machine = ActivationMachine::new();
        machine.step(true);
        machine.step(false);
        machine.step(true);
        machine.step(false);
        assert!(machine.has_ever_entered());
        assert!(machine.has_ever_exited());
    }

    #[test]
    fn last_result_tracks_every_step() {
        let mut machine = ActivationMachine::new();
        machine.step(true);
        assert!(machine.last_result());
        machine.step(false);
        assert!(!machine.last_result());
    }
}

// ── Behavior ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod behavior_tests {
    use super::*;

    #[test]
    fn rejects_zero_triggers() {
        let result = Behavior::new(
            BehaviorId(0),
            vec![],
            vec![],
            vec![],
            vec![],
            Combination::from_ops(vec![], 0).unwrap(),
            EvalMode::Legacy,
            ActivationControl::ActiveOn,
            ActionsControl::Sequential,
            None,
            0,
            false,
        );
        assert!(matches!(result, Err(BehaviorError::Config(_))));
    }

    #[test]
    fn active_on_fires_every_true_tick() {
        let switch = Switch::new();
        let counter = Counter::new();
        let env = TestCtx::new();
        let mut behavior = behavior_with(
            vec![Arc::clone(&switch) as _],
            vec![Arc::clone(&counter) as _],
            vec![],
            ActivationControl::ActiveOn,
            ActionsControl::Sequential,
        );

        // First true tick is FirstEnter, not ActiveOn.
        switch.set(true);
        assert_eq!(behavior.poll(&env.ctx()), Some(ActivationControl::FirstEnter));
        assert_eq!(counter.count(), 0);

        assert_eq!(behavior.poll(&env.ctx()), Some(ActivationControl::ActiveOn));
        assert_eq!(behavior.poll(&env.ctx()), Some(ActivationControl::ActiveOn));
        assert_eq!(counter.count(), 2);

        switch.set(false);
        behavior.poll(&env.ctx());
        assert_eq!(counter.count(), 2);
    }

    #[test]
    fn first_enter_fires_exactly_once() {
        let switch = Switch::new();
        let counter = Counter::new();
        let env = TestCtx::new();
        let mut behavior = behavior_with(
            vec![Arc::clone(&switch) as _],
            vec![Arc::clone(&counter) as _],
            vec![],
            ActivationControl::FirstEnter,
            ActionsControl::Sequential,
        );

        switch.set(true);
        behavior.poll(&env.ctx());
        switch.set(false);
        behavior.poll(&env.ctx());
        switch.set(true);
        behavior.poll(&env.ctx()); // EachEnter, not FirstEnter
        behavior.poll(&env.ctx());
        assert_eq!(counter.count(), 1);
    }

    #[test]
    fn sequential_actions_run_in_listed_order() {
        let order: Arc<Mutex<Vec<u8>>> = Arc::new(Mutex::new(Vec::new()));

        struct Tagged(u8, Arc<Mutex<Vec<u8>>>);
        impl Action for Tagged {
            fn kind(&self) -> ActionKind {
                ActionKind::Custom(0)
            }
            fn execute(&self) {
                self.1.lock().unwrap().push(self.0);
            }
        }

        let switch = Switch::new();
        let env = TestCtx::new();
        let mut behavior = behavior_with(
            vec![Arc::clone(&switch) as _],
            vec![
                Arc::new(Tagged(1, Arc::clone(&order))) as _,
                Arc::new(Tagged(2, Arc::clone(&order))) as _,
                Arc::new(Tagged(3, Arc::clone(&order))) as _,
            ],
            vec![],
            ActivationControl::FirstEnter,
            ActionsControl::Sequential,
        );

        switch.set(true);
        behavior.poll(&env.ctx());
        assert_eq!(*order.lock().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn parallel_dispatch_invokes_every_action() {
        let switch = Switch::new();
        let a = Counter::new();
        let b = Counter::new();
        let env = TestCtx::new();
        let mut behavior = behavior_with(
            vec![Arc::clone(&switch) as _],
            vec![Arc::clone(&a) as _, Arc::clone(&b) as _],
            vec![],
            ActivationControl::FirstEnter,
            ActionsControl::Parallel,
        );

        switch.set(true);
        behavior.poll(&env.ctx());
        assert_eq!(a.count(), 1);
        assert_eq!(b.count(), 1);
    }

    #[test]
    fn delayed_action_fires_after_release() {
        let switch = Switch::new();
        let counter = Counter::delayed(Duration::from_millis(100));
        let scheduler = Arc::new(ManualScheduler::default());
        let env = TestCtx {
            timers:  Arc::clone(&scheduler) as _,
            spawner: Arc::new(InlineSpawner),
            events:  Arc::new(NoopSink),
        };
        let mut behavior = behavior_with(
            vec![Arc::clone(&switch) as _],
            vec![Arc::clone(&counter) as _],
            vec![],
            ActivationControl::FirstEnter,
            ActionsControl::Sequential,
        );

        switch.set(true);
        behavior.poll(&env.ctx());
        assert_eq!(counter.count(), 0);
        scheduler.run_all();
        assert_eq!(counter.count(), 1);
    }

    #[test]
    fn engine_callbacks_run_after_actions() {
        let order: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));

        struct Tagged(Arc<Mutex<Vec<&'static str>>>);
        impl Action for Tagged {
            fn kind(&self) -> ActionKind {
                ActionKind::Custom(0)
            }
            fn execute(&self) {
                self.0.lock().unwrap().push("action");
            }
        }

        let switch = Switch::new();
        let env = TestCtx::new();
        let mut behavior = behavior_with(
            vec![Arc::clone(&switch) as _],
            vec![Arc::new(Tagged(Arc::clone(&order))) as _],
            vec![],
            ActivationControl::FirstEnter,
            ActionsControl::Sequential,
        );
        let cb_order = Arc::clone(&order);
        behavior.add_engine_callback(Box::new(move || {
            cb_order.lock().unwrap().push("callback");
        }));

        switch.set(true);
        behavior.poll(&env.ctx());
        assert_eq!(*order.lock().unwrap(), vec!["action", "callback"]);
    }

    #[test]
    fn interrupt_is_idempotent_and_stops_polling() {
        let switch = Switch::new();
        let counter = Counter::new();
        let interrupt_counter = Counter::new();
        let env = TestCtx::new();

        let combination = Combination::from_ops(vec![], 1).unwrap();
        let mut behavior = Behavior::new(
            BehaviorId(4),
            vec![TriggerId(0)],
            vec![Arc::clone(&switch) as _],
            vec![ActionId(0)],
            vec![Arc::clone(&counter) as _],
            combination,
            EvalMode::Legacy,
            ActivationControl::ActiveOn,
            ActionsControl::Sequential,
            Some(Arc::clone(&interrupt_counter) as _),
            0,
            false,
        )
        .unwrap();

        behavior.interrupt(&env.ctx());
        behavior.interrupt(&env.ctx());
        assert_eq!(interrupt_counter.count(), 1);
        assert!(!behavior.is_running());

        switch.set(true);
        assert_eq!(behavior.poll(&env.ctx()), None);
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn events_are_published_with_registry_ids() {
        let switch = Switch::new();
        let counter = Counter::new();
        let events = Arc::new(RecordingEvents::default());
        let env = TestCtx {
            timers:  Arc::new(ManualScheduler::default()),
            spawner: Arc::new(InlineSpawner),
            events:  Arc::clone(&events) as _,
        };

        let combination = Combination::from_ops(vec![], 1).unwrap();
        let mut behavior = Behavior::new(
            BehaviorId(9),
            vec![TriggerId(3)],
            vec![Arc::clone(&switch) as _],
            vec![ActionId(7)],
            vec![Arc::clone(&counter) as _],
            combination,
            EvalMode::Legacy,
            ActivationControl::FirstEnter,
            ActionsControl::Sequential,
            None,
            0,
            false,
        )
        .unwrap();

        switch.set(true);
        behavior.poll(&env.ctx());

        let published = events.drain();
        assert!(published.contains(&EngineEvent::TriggerActivated { trigger: TriggerId(3) }));
        assert!(published.contains(&EngineEvent::ActionInvoked { action: ActionId(7) }));
        assert!(published.contains(&EngineEvent::BehaviorFired {
            behavior: BehaviorId(9),
            state:    ActivationControl::FirstEnter,
        }));
    }
}

//! escape-room — smallest end-to-end example for the rust_ix rule engine.
//!
//! A player wanders a one-room escape scene.  Three authored behaviors
//! react to what the host feeds into `SceneInputs` each frame:
//!
//! 1. Walk up to the pedestal *and* press the hand trigger → the door
//!    unlocks (activate + door animation, the animation 0.5 s later).
//! 2. Drop the key onto the lock plate (collision) → a chime plays.
//! 3. Spot the hidden painting (visibility) → a one-time haptic hint.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use ix_action::{ActionDesc, RecordingSink, SceneSink};
use ix_behavior::BehaviorDesc;
use ix_core::{
    ActionId, ActionKind, ActivationControl, ActivationStatus, AnimationControl, AnimationId,
    BehaviorId, EngineConfig, MediaControl, MediaId, NodeId, Tick, TriggerId, TriggerKind,
};
use ix_engine::{EngineBuilder, EngineObserver};
use ix_trigger::TriggerDesc;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:            u64 = 42;
const TOTAL_TICKS:     u64 = 300;   // 6 s at 50 Hz
const TICK_MILLIS:     u64 = 20;
const PEDESTAL_RADIUS: f32 = 1.5;

// Scene nodes.
const PLAYER:   NodeId = NodeId(0);
const PEDESTAL: NodeId = NodeId(1);
const DOOR:     NodeId = NodeId(2);
const KEY:      NodeId = NodeId(3);
const LOCK:     NodeId = NodeId(4);
const PAINTING: NodeId = NodeId(5);

const PRESS_PATH: &str = "/user/hand/right/trigger";

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct PrintObserver {
    fires: usize,
}

impl EngineObserver for PrintObserver {
    fn on_behavior_fired(&mut self, tick: Tick, behavior: BehaviorId, state: ActivationControl) {
        self.fires += 1;
        println!("{tick}: {behavior} fired ({state})");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== escape-room — rust_ix interactivity engine ===");
    println!("Ticks: {TOTAL_TICKS}  |  Seed: {SEED}");
    println!();

    // 1. Scene descriptors, the way a loader would hand them over.
    let triggers = vec![
        // 0: player near the pedestal
        TriggerDesc::new(TriggerKind::Proximity)
            .with_nodes(vec![PLAYER])
            .with_reference_node(PEDESTAL)
            .with_distance_band(0.0, PEDESTAL_RADIUS),
        // 1: hand trigger pressed
        TriggerDesc::new(TriggerKind::UserInput).with_user_input(PRESS_PATH),
        // 2: key touching the lock plate
        TriggerDesc::new(TriggerKind::Collision).with_nodes(vec![KEY, LOCK]),
        // 3: hidden painting in view
        TriggerDesc::new(TriggerKind::Visibility).with_nodes(vec![PAINTING]),
    ];

    let actions = vec![
        // 0: unlock the door
        ActionDesc::new(ActionKind::Activate)
            .with_nodes(vec![DOOR])
            .with_activation_status(ActivationStatus::Enabled),
        // 1: swing it open shortly after
        ActionDesc::new(ActionKind::Animation)
            .with_animation(AnimationId(0), AnimationControl::Play)
            .with_delay_secs(0.5),
        // 2: chime
        ActionDesc::new(ActionKind::Media).with_media(MediaId(0), MediaControl::Play),
        // 3: haptic hint on the player's controller
        ActionDesc::new(ActionKind::SetHaptic).with_nodes(vec![PLAYER]),
    ];

    let behaviors = vec![
        BehaviorDesc::new(vec![TriggerId(0), TriggerId(1)], vec![ActionId(0), ActionId(1)])
            .with_combination_control("#0&#1")
            .with_activation_policy(ActivationControl::FirstEnter),
        BehaviorDesc::new(vec![TriggerId(2)], vec![ActionId(2)])
            .with_activation_policy(ActivationControl::EachEnter),
        BehaviorDesc::new(vec![TriggerId(3)], vec![ActionId(3)])
            .with_activation_policy(ActivationControl::FirstEnter),
    ];

    // 2. Assemble the engine.
    let sink = Arc::new(RecordingSink::new());
    let config = EngineConfig {
        tick_duration: Duration::from_millis(TICK_MILLIS),
        total_ticks:   TOTAL_TICKS,
    };
    let mut engine = EngineBuilder::new(config)
        .with_sink(Arc::clone(&sink) as Arc<dyn SceneSink>)
        .with_triggers(triggers)
        .with_actions(actions)
        .with_behaviors(behaviors)
        .build()?;
    println!(
        "Scene: {} triggers, {} actions, {} behaviors",
        engine.registry().trigger_count(),
        engine.registry().action_count(),
        engine.behavior_count(),
    );
    println!();

    // 3. Static scene facts.
    let inputs = Arc::clone(engine.inputs());
    inputs.set_position(PEDESTAL, [4.0, 0.0, 4.0]);

    // 4. Drive the tick loop, pushing simulated sensor data each frame.
    let mut rng = SmallRng::seed_from_u64(SEED);
    let mut observer = PrintObserver::default();
    let mut player = [0.0_f32, 0.0, 0.0];
    let mut commands = 0usize;

    for tick in 0..TOTAL_TICKS {
        // The player drifts toward the pedestal with a little jitter.
        player[0] += 0.03 + rng.gen_range(-0.01..0.01);
        player[2] += 0.03 + rng.gen_range(-0.01..0.01);
        inputs.set_position(PLAYER, player);
        inputs.set_viewer(Some(player));

        // Near the pedestal the player mashes the hand trigger.
        let dx = player[0] - 4.0;
        let dz = player[2] - 4.0;
        let near = (dx * dx + dz * dz).sqrt() <= PEDESTAL_RADIUS;
        inputs.set_input(PRESS_PATH, near && rng.gen_bool(0.4));

        // Halfway through, the key lands on the lock plate for a moment.
        inputs.set_contact(KEY, LOCK, (150..155).contains(&tick));

        // The painting comes into view near the end.
        inputs.set_visible(PAINTING, tick >= 250);

        engine.tick(&mut observer);

        for command in sink.drain() {
            commands += 1;
            println!("    -> {command:?}");
        }
    }

    // 5. Summary.
    println!();
    println!("Behavior fires:   {}", observer.fires);
    println!("Scene commands:   {commands}");
    println!("Deferred pending: none (all delays elapsed in-run)");

    engine.dispose();
    Ok(())
}

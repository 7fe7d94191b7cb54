//! `ix-engine` — the orchestrator: tick loop, builder, deferral.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`engine`]   | `Engine` — per-tick polling loop, interrupts, teardown     |
//! | [`builder`]  | `EngineBuilder` — fail-fast descriptor validation + wiring |
//! | [`timer`]    | `TickTimerWheel` — tick-quantized `DelayScheduler`         |
//! | [`observer`] | `EngineObserver` hooks + `NoopObserver`                    |
//! | [`spawn`]    | `RayonSpawner` (behind the `parallel` feature)             |
//! | [`error`]    | `EngineError`, `EngineResult<T>`                           |
//!
//! # Quick start
//!
//! ```no_run
//! use std::sync::Arc;
//! use ix_action::{ActionDesc, RecordingSink};
//! use ix_behavior::BehaviorDesc;
//! use ix_core::{
//!     ActionId, ActionKind, ActivationControl, EngineConfig, NodeId, TriggerId, TriggerKind,
//! };
//! use ix_engine::{EngineBuilder, NoopObserver};
//! use ix_trigger::TriggerDesc;
//!
//! let sink = Arc::new(RecordingSink::new());
//! let mut engine = EngineBuilder::new(EngineConfig::default())
//!     .with_sink(sink.clone())
//!     .add_trigger(
//!         TriggerDesc::new(TriggerKind::Visibility).with_nodes(vec![NodeId(0)]),
//!     )
//!     .add_action(ActionDesc::new(ActionKind::Activate).with_nodes(vec![NodeId(1)]))
//!     .add_behavior(
//!         BehaviorDesc::new(vec![TriggerId(0)], vec![ActionId(0)])
//!             .with_activation_policy(ActivationControl::FirstEnter),
//!     )
//!     .build()
//!     .unwrap();
//!
//! engine.inputs().set_visible(NodeId(0), true);
//! engine.tick(&mut NoopObserver);
//! for command in sink.drain() {
//!     println!("{command:?}");
//! }
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod observer;
pub mod timer;

#[cfg(feature = "parallel")]
pub mod spawn;


pub use builder::EngineBuilder;
pub use engine::Engine;
pub use error::{EngineError, EngineResult};
pub use observer::{EngineObserver, NoopObserver};
pub use timer::TickTimerWheel;

#[cfg(feature = "parallel")]
pub use spawn::RayonSpawner;

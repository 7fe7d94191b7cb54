//! `ix-core` — foundational types for the `rust_ix` interactivity engine.
//!
//! This crate is a dependency of every other `ix-*` crate.  It intentionally
//! has no `ix-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `TriggerId`, `ActionId`, `BehaviorId`, `NodeId`, …        |
//! | [`time`]    | `Tick`, `TickClock`, `EngineConfig`                       |
//! | [`control`] | Authoring vocabulary enums (activation, kinds, controls)  |
//! | [`defer`]   | `DelayScheduler` / `TaskSpawner` seams, `InlineSpawner`   |
//! | [`event`]   | `EngineEvent`, `EventSink`, `NoopSink`                    |
//! | [`error`]   | `IxError`, `IxResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public vocabulary.    |

pub mod control;
pub mod defer;
pub mod error;
pub mod event;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use control::{
    ActionKind, ActionsControl, ActivationControl, ActivationStatus, AnimationControl,
    ManipulateKind, MediaControl, TriggerKind,
};
pub use defer::{DeferredJob, DelayScheduler, InlineSpawner, TaskSpawner};
pub use error::{IxError, IxResult};
pub use event::{EngineEvent, EventSink, NoopSink};
pub use ids::{ActionId, AnchorId, AnimationId, BehaviorId, MaterialId, MediaId, NodeId, TriggerId};
pub use time::{EngineConfig, Tick, TickClock, ticks_for};

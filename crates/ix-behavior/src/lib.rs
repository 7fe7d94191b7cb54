//! `ix-behavior` — the rule unit: triggers, combination, activation, actions.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`combine`]    | `CombineOp`, `EvalMode`, `Combination` — control-string   |
//! |                | compiler and the pairwise fold evaluator                  |
//! | [`activation`] | `ActivationMachine` — the six-state edge/level machine    |
//! | [`behavior`]   | `Behavior` — run state, per-tick polling, dispatch        |
//! | [`descriptor`] | `BehaviorDesc` — pre-parsed authoring data                |
//! | [`error`]      | `BehaviorError`, `BehaviorResult<T>`                      |

pub mod activation;
pub mod behavior;
pub mod combine;
pub mod descriptor;
pub mod error;

#[cfg(test)]
mod tests;

pub use activation::ActivationMachine;
pub use behavior::{Behavior, DispatchCtx, EngineCallback};
pub use combine::{Combination, CombineOp, EvalMode};
pub use descriptor::BehaviorDesc;
pub use error::{BehaviorError, BehaviorResult};

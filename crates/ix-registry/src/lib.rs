//! `ix-registry` — index ↔ handle tables for scene capabilities.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                |
//! |------------|---------------------------------------------------------|
//! | [`table`]  | `CapabilityTable<T: ?Sized>` — bidirectional index table |
//! | [`scene`]  | `SceneRegistry` — triggers, actions, behavior slots      |
//! | [`error`]  | `RegistryError`, `RegistryResult<T>`                     |
//!
//! Behaviors reference triggers and actions by array index, the way the
//! authoring format stores them.  The registry resolves indices to shared
//! handles at load time and answers the reverse question (which index is
//! this handle?) for diagnostics and event publication.

pub mod error;
pub mod scene;
pub mod table;

#[cfg(test)]
mod tests;

pub use error::{RegistryError, RegistryResult};
pub use scene::SceneRegistry;
pub use table::CapabilityTable;

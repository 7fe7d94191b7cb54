//! `ix-action` — action capability trait and the standard variants.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`action`]     | `Action` trait + `ActionExt::invoke` (the delay branch)   |
//! | [`command`]    | `SceneCommand` effects, `SceneSink`, `RecordingSink`      |
//! | [`descriptor`] | `ActionDesc` — pre-parsed authoring data                  |
//! | [`variants`]   | the nine standard variants                                |
//! | [`factory`]    | `ActionFactory` — kind-keyed construction + validation    |
//! | [`error`]      | `ActionError`, `ActionResult<T>`                          |
//!
//! # Design notes
//!
//! Actions never touch host scene state directly.  Each variant reduces its
//! authored parameters to one or more [`SceneCommand`] values and submits
//! them to the host's [`SceneSink`]; applying a command (toggling a node,
//! seeking media, re-binding a material) is the host's concern.  That keeps
//! every variant testable with a [`RecordingSink`] and keeps `execute`
//! cheap enough to call from deferred and parallel contexts.

pub mod action;
pub mod command;
pub mod descriptor;
pub mod error;
pub mod factory;
pub mod variants;

#[cfg(test)]
mod tests;

pub use action::{Action, ActionExt};
pub use command::{RecordingSink, SceneCommand, SceneSink};
pub use descriptor::ActionDesc;
pub use error::{ActionError, ActionResult};
pub use factory::{ActionContext, ActionFactory};

//! Framework error type.
//!
//! Sub-crates define their own error enums and either convert into `IxError`
//! via `From` impls or keep them separate.  Both patterns are acceptable;
//! prefer whichever keeps error sites clean.

use thiserror::Error;

use crate::{ActionId, NodeId, TriggerId};

/// The top-level error type for `ix-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum IxError {
    #[error("trigger {0} not found")]
    TriggerNotFound(TriggerId),

    #[error("action {0} not found")]
    ActionNotFound(ActionId),

    #[error("node {0} not found")]
    NodeNotFound(NodeId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `ix-*` crates.
pub type IxResult<T> = Result<T, IxError>;

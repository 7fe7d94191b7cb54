use ix_core::ActionKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("action configuration error: {0}")]
    Config(String),

    #[error("no factory registered for action kind {0:?}")]
    UnknownKind(ActionKind),
}

pub type ActionResult<T> = Result<T, ActionError>;

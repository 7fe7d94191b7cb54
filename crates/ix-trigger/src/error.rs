use ix_core::TriggerKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TriggerError {
    #[error("trigger configuration error: {0}")]
    Config(String),

    #[error("no factory registered for trigger kind {0:?}")]
    UnknownKind(TriggerKind),
}

pub type TriggerResult<T> = Result<T, TriggerError>;

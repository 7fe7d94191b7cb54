use ix_action::ActionError;
use ix_behavior::BehaviorError;
use ix_core::BehaviorId;
use ix_registry::RegistryError;
use ix_trigger::TriggerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("engine configuration error: {0}")]
    Config(String),

    #[error("no behavior registered with id {0}")]
    BehaviorNotFound(BehaviorId),

    #[error(transparent)]
    Trigger(#[from] TriggerError),

    #[error(transparent)]
    Action(#[from] ActionError),

    #[error(transparent)]
    Behavior(#[from] BehaviorError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

pub type EngineResult<T> = Result<T, EngineError>;

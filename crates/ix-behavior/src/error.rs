use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BehaviorError {
    #[error("behavior configuration error: {0}")]
    Config(String),

    #[error("unrecognized combination operator {0:?}")]
    UnknownOperator(char),

    #[error("combination has {ops} operators for {triggers} triggers (at most {max} fit)")]
    TooManyOperators {
        ops:      usize,
        triggers: usize,
        max:      usize,
    },
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;

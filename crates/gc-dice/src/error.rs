//! Error types for the dice engine.

/// Errors that can occur while assembling, rolling, or resolving dice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiceError {
    /// A die kind that does not exist was requested.
    #[error("invalid die kind: {0}")]
    InvalidDieKind(String),

    /// A pool specification was rejected before rolling.
    #[error("invalid pool spec: {0}")]
    InvalidPoolSpec(String),

    /// The random source could not produce a usable face index.
    #[error("random source exhausted")]
    RandomSourceExhausted,

    /// A face table entry violates the table invariants.
    #[error("corrupt face data: {0}")]
    CorruptFaceData(String),
}

/// Convenience result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;

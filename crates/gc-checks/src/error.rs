//! Error types for skill checks.

use thiserror::Error;

/// Result type for check operations.
pub type RulesResult<T> = Result<T, RulesError>;

/// Errors that can occur while configuring or performing a check.
#[derive(Debug, Error)]
pub enum RulesError {
    /// The dice engine rejected the pool or roll.
    #[error("{0}")]
    Dice(#[from] gc_dice::DiceError),

    /// The check configuration could not be loaded.
    #[error("invalid check config: {0}")]
    InvalidConfig(String),
}

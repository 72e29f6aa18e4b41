//! Engine error types.
//!
//! Validation failures are fatal to the current call and are returned to the
//! caller unmodified. Missing or malformed *answers* are never errors; they
//! score as incorrect.

/// Errors produced while loading or validating a game definition.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EngineError {
    /// Game record carries no usable `gameId`
    #[error("invalid game data: missing gameId")]
    MissingGameId,

    /// `type` is absent or not one of quiz / coding / simulation
    #[error("unsupported game type: {0}")]
    UnsupportedGameType(String),

    /// Item list cannot be interpreted for the declared game type
    #[error("malformed item list: {0}")]
    MalformedItems(String),
}

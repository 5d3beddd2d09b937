use thiserror::Error;

/// Errors surfaced by the league engine. No internal retries: every
/// variant is returned to the caller synchronously, and conflict
/// variants are safe to treat as no-ops on retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("fixture {0} not found")]
    FixtureNotFound(u32),

    #[error("season {0} not found")]
    SeasonNotFound(u32),

    #[error("club {0} not found")]
    ClubNotFound(u32),

    #[error("fixture {0} is already completed")]
    FixtureAlreadyCompleted(u32),

    #[error("season {0} is already initialized")]
    SeasonAlreadyInitialized(u32),

    #[error("no scheduled fixtures remain in gameweek {gameweek} of season {season_id}")]
    GameweekExhausted { season_id: u32, gameweek: u8 },
}

impl EngineError {
    /// Conflict errors mean the requested transition already happened.
    /// Callers may treat them as successful no-ops when retrying.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            EngineError::FixtureAlreadyCompleted(_) | EngineError::SeasonAlreadyInitialized(_)
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            EngineError::FixtureNotFound(_)
                | EngineError::SeasonNotFound(_)
                | EngineError::ClubNotFound(_)
        )
    }
}

pub type EngineResult<T> = Result<T, EngineError>;

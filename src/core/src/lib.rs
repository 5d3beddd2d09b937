pub mod simulator;
pub use simulator::*;

pub mod club;
pub mod error;
pub mod league;
pub mod r#match;
pub mod repository;

pub mod utils;

// Re-export club items
pub use club::{
    Club, ClubTotals,
    FanDeltaTable, RewardTable,
    // Player exports
    Player, PlayerPositionType,
    PerformanceClass, PlayerConditionUpdater,
    FORM_MAX, FORM_MIN, LEVEL_CAP,
};

pub use error::{EngineError, EngineResult};

pub use league::{Fixture, FixtureStatus, LeagueTable, LeagueTableRow, Schedule};

pub use r#match::{
    ClubMatchResult, MatchEvent, MatchEventType, MatchResolver, MatchResult, ScoreGenerator,
    StrengthModel,
};

pub use repository::LeagueStore;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FixtureStatus {
    Scheduled,
    Completed,
}

/// One entry of a season's schedule. A fixture transitions exactly
/// once, scheduled to completed, and completed is terminal: scores are
/// set during that transition and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    /// Assigned by the store when the schedule is persisted.
    pub id: u32,
    pub season_id: u32,
    pub gameweek: u8,

    pub home_club_id: u32,
    pub away_club_id: u32,

    pub date: NaiveDate,

    pub status: FixtureStatus,
    pub home_score: Option<u8>,
    pub away_score: Option<u8>,
}

impl Fixture {
    pub fn scheduled(
        season_id: u32,
        gameweek: u8,
        home_club_id: u32,
        away_club_id: u32,
        date: NaiveDate,
    ) -> Self {
        Fixture {
            id: 0,
            season_id,
            gameweek,
            home_club_id,
            away_club_id,
            date,
            status: FixtureStatus::Scheduled,
            home_score: None,
            away_score: None,
        }
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        self.status == FixtureStatus::Completed
    }

    #[inline]
    pub fn involves(&self, club_id: u32) -> bool {
        self.home_club_id == club_id || self.away_club_id == club_id
    }

    /// Unordered pairing key, venue-independent.
    pub fn pairing(&self) -> (u32, u32) {
        if self.home_club_id < self.away_club_id {
            (self.home_club_id, self.away_club_id)
        } else {
            (self.away_club_id, self.home_club_id)
        }
    }
}

use crate::r#match::MatchEvent;
use serde::Serialize;

/// One club's view of a final scoreline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ClubMatchResult {
    Win,
    Draw,
    Loss,
}

impl ClubMatchResult {
    pub fn from_scores(goals_for: u8, goals_against: u8) -> Self {
        if goals_for > goals_against {
            ClubMatchResult::Win
        } else if goals_for == goals_against {
            ClubMatchResult::Draw
        } else {
            ClubMatchResult::Loss
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            ClubMatchResult::Win => ClubMatchResult::Loss,
            ClubMatchResult::Draw => ClubMatchResult::Draw,
            ClubMatchResult::Loss => ClubMatchResult::Win,
        }
    }
}

/// Outcome of a resolved fixture: the persisted scoreline plus the
/// display-only event log.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub fixture_id: u32,
    pub season_id: u32,
    pub gameweek: u8,

    pub home_club_id: u32,
    pub away_club_id: u32,

    pub home_score: u8,
    pub away_score: u8,

    pub events: Vec<MatchEvent>,
}

impl MatchResult {
    pub fn result_for(&self, club_id: u32) -> ClubMatchResult {
        if club_id == self.home_club_id {
            ClubMatchResult::from_scores(self.home_score, self.away_score)
        } else {
            ClubMatchResult::from_scores(self.away_score, self.home_score)
        }
    }

    pub fn is_draw(&self) -> bool {
        self.home_score == self.away_score
    }
}

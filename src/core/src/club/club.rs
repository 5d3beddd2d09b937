use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

/// A league participant for one season. Clubs are created at season
/// initialization and never deleted within a season; only their
/// running totals change, and only as the consequence of a completed
/// fixture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Club {
    pub id: u32,
    pub season_id: u32,
    pub name: String,

    /// Reference to the owning user. `None` for computer-run clubs.
    pub owner_id: Option<u32>,

    pub totals: ClubTotals,
}

impl Club {
    pub fn new(id: u32, season_id: u32, name: String, owner_id: Option<u32>) -> Self {
        Club {
            id,
            season_id,
            name,
            owner_id,
            totals: ClubTotals::default(),
        }
    }

    #[inline]
    pub fn is_human(&self) -> bool {
        self.owner_id.is_some()
    }
}

impl PartialEq for Club {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Display for Club {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// Accumulated season record. `points` is derived, never stored.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ClubTotals {
    pub played: u8,
    pub win: u8,
    pub draw: u8,
    pub lost: u8,
    pub goals_for: i32,
    pub goals_against: i32,
}

impl ClubTotals {
    #[inline]
    pub fn points(&self) -> u16 {
        u16::from(self.win) * 3 + u16::from(self.draw)
    }

    #[inline]
    pub fn goal_difference(&self) -> i32 {
        self.goals_for - self.goals_against
    }

    pub fn apply_result(&mut self, goals_for: u8, goals_against: u8) {
        self.played += 1;
        self.goals_for += goals_for as i32;
        self.goals_against += goals_against as i32;

        if goals_for > goals_against {
            self.win += 1;
        } else if goals_for == goals_against {
            self.draw += 1;
        } else {
            self.lost += 1;
        }
    }
}

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

pub const FORM_MIN: f32 = 1.0;
pub const FORM_MAX: f32 = 10.0;
pub const LEVEL_CAP: u8 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerPositionType {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

/// Roster member as seen by the league engine. The roster is owned by
/// the club systems outside this engine; after a match the engine only
/// adjusts the bounded condition quantities and the contract counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub position: PlayerPositionType,

    pub rating: u8,
    pub market_value: u32,

    /// 0..=max_fitness, ceiling supplied by the roster's quality tier.
    pub fitness: f32,
    /// Continuous 1..=10.
    pub form: f32,

    pub level: u8,
    pub experience: u32,

    pub matches_played: u16,
    pub contract_matches_remaining: u16,
}

impl Player {
    pub fn is_contract_expired(&self) -> bool {
        self.contract_matches_remaining == 0
    }

    pub fn clamp_condition(&mut self, max_fitness: f32) {
        self.fitness = self.fitness.clamp(0.0, max_fitness);
        self.form = self.form.clamp(FORM_MIN, FORM_MAX);
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} (lvl {}, form {:.1})", self.name, self.level, self.form)
    }
}

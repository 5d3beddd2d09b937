use crate::club::player::{FORM_MAX, FORM_MIN, LEVEL_CAP, Player};
use crate::r#match::ClubMatchResult;
use log::debug;
use rand::{Rng, RngExt};

/// Coarse bucket for a club's showing in one match, driving post-match
/// form and experience changes for its roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceClass {
    Excellent,
    Good,
    Average,
    Poor,
}

impl PerformanceClass {
    /// A win by three or more is excellent, any win is good, a loss by
    /// three or more is poor. Everything else, draws included, is
    /// average.
    pub fn from_result(result: ClubMatchResult, goals_for: u8, goals_against: u8) -> Self {
        match result {
            ClubMatchResult::Win if goals_for >= 3 => PerformanceClass::Excellent,
            ClubMatchResult::Win => PerformanceClass::Good,
            ClubMatchResult::Loss if goals_against >= 3 => PerformanceClass::Poor,
            _ => PerformanceClass::Average,
        }
    }

    fn experience_bonus(&self) -> u32 {
        match self {
            PerformanceClass::Excellent => 15,
            PerformanceClass::Good => 10,
            PerformanceClass::Average => 5,
            PerformanceClass::Poor => 0,
        }
    }
}

pub const BASE_MATCH_EXPERIENCE: u32 = 10;

/// Players in the first lineup-size filled slots are treated as having
/// played; the remaining slots rest and recover.
pub const MATCH_LINEUP_SIZE: usize = 11;

/// Cumulative experience required to hold `level`. Advancing from
/// level L to L+1 costs 100 * L, so the table grows quadratically up
/// to the level cap.
pub fn experience_for_level(level: u8) -> u32 {
    let level = level.clamp(1, LEVEL_CAP) as u32;
    50 * level * (level - 1)
}

pub fn level_for_experience(experience: u32) -> u8 {
    let mut level = 1;

    while level < LEVEL_CAP && experience >= experience_for_level(level + 1) {
        level += 1;
    }

    level
}

pub struct PlayerConditionUpdater;

impl PlayerConditionUpdater {
    /// Post-match roster update. Empty slots are skipped, never
    /// treated as players. Fitness and form stay clamped to their
    /// domains on every call; experience only grows.
    pub fn apply_post_match<R: Rng>(
        roster: &mut [Option<Player>],
        class: PerformanceClass,
        result: ClubMatchResult,
        max_fitness: f32,
        days_since_last_match: u8,
        rng: &mut R,
    ) {
        let mut fielded = 0;

        for slot in roster.iter_mut() {
            let Some(player) = slot else {
                continue;
            };

            if fielded < MATCH_LINEUP_SIZE {
                fielded += 1;
                Self::apply_to_played(player, class, result, max_fitness, rng);
            } else {
                Self::apply_to_rested(player, days_since_last_match, max_fitness, rng);
            }
        }

        debug!(
            "post-match roster update: {:?} performance, {} fielded",
            class, fielded
        );
    }

    pub fn apply_to_played<R: Rng>(
        player: &mut Player,
        class: PerformanceClass,
        result: ClubMatchResult,
        max_fitness: f32,
        rng: &mut R,
    ) {
        player.fitness -= rng.random_range(5.0..=15.0);

        let form_change = match class {
            PerformanceClass::Excellent => rng.random_range(1.0..=2.0),
            PerformanceClass::Good => rng.random_range(0.0..=1.0),
            PerformanceClass::Average => rng.random_range(-0.5..=0.5),
            PerformanceClass::Poor => -rng.random_range(1.0..=2.0),
        };
        player.form += form_change;

        player.matches_played += 1;
        player.contract_matches_remaining = player.contract_matches_remaining.saturating_sub(1);

        let result_bonus = match result {
            ClubMatchResult::Win => 5,
            ClubMatchResult::Draw => 2,
            ClubMatchResult::Loss => 0,
        };

        Self::grant_experience(
            player,
            BASE_MATCH_EXPERIENCE + class.experience_bonus() + result_bonus,
        );

        player.clamp_condition(max_fitness);
    }

    pub fn apply_to_rested<R: Rng>(
        player: &mut Player,
        days_since_last_match: u8,
        max_fitness: f32,
        rng: &mut R,
    ) {
        let recovery = (3.0 + 2.0 * days_since_last_match as f32).min(10.0);
        player.fitness += recovery;

        // Unused players slowly lose sharpness
        if rng.random_bool(0.33) {
            player.form -= 0.1;
        }

        player.clamp_condition(max_fitness);
    }

    pub fn grant_experience(player: &mut Player, amount: u32) {
        player.experience += amount;

        let level = level_for_experience(player.experience);
        if level > player.level {
            debug!(
                "player {} reached level {} ({} xp)",
                player.id, level, player.experience
            );
            player.level = level;
        }
    }
}

use crate::club::ClubTotals;
use rand::{Rng, RngExt};

pub const BASE_STRENGTH: f32 = 50.0;
pub const MIN_STRENGTH: f32 = 10.0;
pub const MAX_STRENGTH: f32 = 100.0;

pub const HOME_ADVANTAGE: f32 = 5.0;

/// Weight of the season form rate around its neutral point of 1/3
/// (a club drawing every match sits exactly at neutral).
pub const FORM_WEIGHT: f32 = 0.5;
pub const NEUTRAL_FORM_RATE: f32 = 1.0 / 3.0;

/// Symmetric per-match jitter so equal inputs still vary.
pub const STRENGTH_JITTER: f32 = 10.0;

/// Converts a club's season record and venue into the scalar the goal
/// generator consumes.
///
/// The jitter draw makes this non-idempotent on purpose: call it once
/// per side per match, and pin the RNG in tests that need exact
/// values.
pub struct StrengthModel;

impl StrengthModel {
    pub fn strength<R: Rng>(totals: &ClubTotals, is_home: bool, rng: &mut R) -> f32 {
        let mut strength = BASE_STRENGTH;

        if totals.played > 0 {
            let form_rate = totals.points() as f32 / (totals.played as f32 * 3.0);
            strength += (form_rate - NEUTRAL_FORM_RATE) * FORM_WEIGHT;
        }

        if is_home {
            strength += HOME_ADVANTAGE;
        }

        strength += rng.random_range(-STRENGTH_JITTER..=STRENGTH_JITTER);

        strength.clamp(MIN_STRENGTH, MAX_STRENGTH)
    }
}

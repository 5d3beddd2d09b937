use crate::club::player::Player;
use itertools::Itertools;
use rand::{Rng, RngExt};
use serde::Serialize;

/// Maximum scoring attempts per side; goal counts can never exceed it.
pub const GOAL_ATTEMPT_CEILING: u8 = 6;

/// Multiplier applied to the scoring chance after every goal, giving
/// the right-skewed goal distribution without a true Poisson draw.
pub const ATTEMPT_DECAY: f64 = 0.7;

pub const RED_CARD_CHANCE: f64 = 0.10;
pub const YELLOW_CARD_CHANCE: f64 = 0.33;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchEventType {
    Goal,
    YellowCard,
    RedCard,
}

/// Minute-tagged display event. Events are synthesized only after the
/// score is final and never feed back into it.
#[derive(Debug, Clone, Serialize)]
pub struct MatchEvent {
    pub minute: u8,
    pub event_type: MatchEventType,
    pub club_id: u32,
    pub player_id: u32,
}

/// Generates final scorelines from two side strengths, each side
/// independently.
pub struct ScoreGenerator;

impl ScoreGenerator {
    pub fn score<R: Rng>(home_strength: f32, away_strength: f32, rng: &mut R) -> (u8, u8) {
        let home_goals = Self::side_goals(home_strength, rng);
        let away_goals = Self::side_goals(away_strength, rng);

        (home_goals, away_goals)
    }

    /// Bounded decaying-chance goal loop: the chance starts at twice
    /// the strength fraction and shrinks after every goal.
    fn side_goals<R: Rng>(strength: f32, rng: &mut R) -> u8 {
        let mut chance = (strength as f64 / 100.0) * 2.0;
        let mut goals = 0;

        for _ in 0..GOAL_ATTEMPT_CEILING {
            if rng.random::<f64>() < chance {
                goals += 1;
                chance *= ATTEMPT_DECAY;
            }
        }

        goals
    }

    /// Cosmetic event log for a finished match: one goal event per
    /// goal and at most one card, all attributed to random roster
    /// members and sorted by minute. Empty rosters produce no events
    /// for their side.
    pub fn events<R: Rng>(
        home_club_id: u32,
        home_roster: &[Option<Player>],
        away_club_id: u32,
        away_roster: &[Option<Player>],
        home_score: u8,
        away_score: u8,
        rng: &mut R,
    ) -> Vec<MatchEvent> {
        let mut events = Vec::with_capacity(home_score as usize + away_score as usize + 1);

        Self::push_goal_events(&mut events, home_club_id, home_roster, home_score, rng);
        Self::push_goal_events(&mut events, away_club_id, away_roster, away_score, rng);
        Self::push_card_event(
            &mut events,
            home_club_id,
            home_roster,
            away_club_id,
            away_roster,
            rng,
        );

        events.into_iter().sorted_by_key(|e| e.minute).collect()
    }

    fn push_goal_events<R: Rng>(
        events: &mut Vec<MatchEvent>,
        club_id: u32,
        roster: &[Option<Player>],
        goals: u8,
        rng: &mut R,
    ) {
        for _ in 0..goals {
            let Some(player_id) = Self::random_player(roster, rng) else {
                return;
            };

            events.push(MatchEvent {
                minute: rng.random_range(1..=90),
                event_type: MatchEventType::Goal,
                club_id,
                player_id,
            });
        }
    }

    fn push_card_event<R: Rng>(
        events: &mut Vec<MatchEvent>,
        home_club_id: u32,
        home_roster: &[Option<Player>],
        away_club_id: u32,
        away_roster: &[Option<Player>],
        rng: &mut R,
    ) {
        let draw = rng.random::<f64>();

        let event_type = if draw < RED_CARD_CHANCE {
            MatchEventType::RedCard
        } else if draw < RED_CARD_CHANCE + YELLOW_CARD_CHANCE {
            MatchEventType::YellowCard
        } else {
            return;
        };

        let (club_id, roster) = if rng.random_bool(0.5) {
            (home_club_id, home_roster)
        } else {
            (away_club_id, away_roster)
        };

        if let Some(player_id) = Self::random_player(roster, rng) {
            events.push(MatchEvent {
                minute: rng.random_range(1..=90),
                event_type,
                club_id,
                player_id,
            });
        }
    }

    fn random_player<R: Rng>(roster: &[Option<Player>], rng: &mut R) -> Option<u32> {
        let players: Vec<&Player> = roster.iter().flatten().collect();

        if players.is_empty() {
            return None;
        }

        Some(players[rng.random_range(0..players.len())].id)
    }
}

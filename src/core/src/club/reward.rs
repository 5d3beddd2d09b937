use crate::r#match::ClubMatchResult;

/// Budget rewards for a human-owned club after a completed fixture.
///
/// Losses still pay a participation floor so weaker clubs are never
/// starved out of the game. The table is a pure lookup: callers apply
/// the returned delta to the club's budget ledger themselves.
#[derive(Debug, Clone)]
pub struct RewardTable {
    pub win: i32,
    pub draw: i32,
    pub loss: i32,
    pub per_goal: i32,
    pub home_bonus: i32,
}

impl Default for RewardTable {
    fn default() -> Self {
        RewardTable {
            win: 5_000_000,
            draw: 2_000_000,
            loss: 1_000_000,
            per_goal: 500_000,
            home_bonus: 1_000_000,
        }
    }
}

impl RewardTable {
    pub fn reward(&self, result: ClubMatchResult, goals_for: u8, is_home: bool) -> i32 {
        let base = match result {
            ClubMatchResult::Win => self.win,
            ClubMatchResult::Draw => self.draw,
            ClubMatchResult::Loss => self.loss,
        };

        let mut amount = base + goals_for as i32 * self.per_goal;

        if is_home {
            amount += self.home_bonus;
        }

        amount
    }
}

/// Fan-count changes driven by the same result classification as the
/// budget rewards. Magnitudes are adjusted by the goal difference of
/// the match.
#[derive(Debug, Clone)]
pub struct FanDeltaTable {
    pub win: i32,
    pub draw: i32,
    pub loss: i32,
    pub per_goal_difference: i32,
}

impl Default for FanDeltaTable {
    fn default() -> Self {
        FanDeltaTable {
            win: 125,
            draw: 12,
            loss: -62,
            per_goal_difference: 10,
        }
    }
}

impl FanDeltaTable {
    pub fn fan_delta(&self, result: ClubMatchResult, goal_difference: i32) -> i32 {
        let base = match result {
            ClubMatchResult::Win => self.win,
            ClubMatchResult::Draw => self.draw,
            ClubMatchResult::Loss => self.loss,
        };

        base + goal_difference * self.per_goal_difference
    }
}

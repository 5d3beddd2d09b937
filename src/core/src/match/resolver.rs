use crate::club::{Club, FanDeltaTable, PerformanceClass, PlayerConditionUpdater, RewardTable};
use crate::error::{EngineError, EngineResult};
use crate::league::Fixture;
use crate::r#match::{ClubMatchResult, MatchResult, ScoreGenerator, StrengthModel};
use crate::repository::LeagueStore;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

/// Fixtures are spaced one week apart, so that is the rest window the
/// condition updater sees for unused players.
const DAYS_BETWEEN_GAMEWEEKS: u8 = 7;

/// Orchestrates one fixture: strengths, score, events, the terminal
/// scheduled-to-completed transition, and the post-match fan-out
/// (club totals, and budget/fans/roster for human-owned sides).
///
/// Resolution is idempotent-safe: the store's compare-and-swap on
/// fixture status rejects a second resolution instead of re-simulating,
/// so nothing is ever double-applied.
pub struct MatchResolver<'s, S: LeagueStore> {
    store: &'s S,
    rewards: RewardTable,
    fans: FanDeltaTable,
}

impl<'s, S: LeagueStore> MatchResolver<'s, S> {
    pub fn new(store: &'s S) -> Self {
        MatchResolver {
            store,
            rewards: RewardTable::default(),
            fans: FanDeltaTable::default(),
        }
    }

    pub fn with_tables(store: &'s S, rewards: RewardTable, fans: FanDeltaTable) -> Self {
        MatchResolver {
            store,
            rewards,
            fans,
        }
    }

    pub fn resolve<R: Rng>(&self, fixture_id: u32, rng: &mut R) -> EngineResult<MatchResult> {
        let fixture = self
            .store
            .fixture(fixture_id)?
            .ok_or(EngineError::FixtureNotFound(fixture_id))?;

        if fixture.is_completed() {
            return Err(EngineError::FixtureAlreadyCompleted(fixture_id));
        }

        let result = self.simulate_fixture(&fixture, rng)?;
        self.apply(&result, rng)?;

        Ok(result)
    }

    /// Resolves every scheduled fixture of one gameweek. Scores are
    /// simulated in parallel with per-fixture RNGs derived from the
    /// base seed, then the fan-out is applied sequentially; fixtures
    /// within a gameweek never share a club, so order does not matter.
    pub fn resolve_gameweek(
        &self,
        season_id: u32,
        gameweek: u8,
        base_seed: u64,
    ) -> EngineResult<Vec<MatchResult>> {
        let season_fixtures = self.store.season_fixtures(season_id)?;

        if season_fixtures.is_empty() {
            return Err(EngineError::SeasonNotFound(season_id));
        }

        let pending: Vec<Fixture> = season_fixtures
            .into_iter()
            .filter(|f| f.gameweek == gameweek && !f.is_completed())
            .collect();

        if pending.is_empty() {
            return Err(EngineError::GameweekExhausted {
                season_id,
                gameweek,
            });
        }

        let simulated: Vec<(MatchResult, StdRng)> = pending
            .par_iter()
            .map(|fixture| {
                let mut rng = StdRng::seed_from_u64(base_seed ^ fixture.id as u64);
                let result = self.simulate_fixture(fixture, &mut rng)?;
                Ok((result, rng))
            })
            .collect::<EngineResult<Vec<_>>>()?;

        let mut results = Vec::with_capacity(simulated.len());

        for (result, mut rng) in simulated {
            self.apply(&result, &mut rng)?;
            results.push(result);
        }

        info!(
            "gameweek {} of season {} resolved: {} matches",
            gameweek,
            season_id,
            results.len()
        );

        Ok(results)
    }

    fn simulate_fixture<R: Rng>(&self, fixture: &Fixture, rng: &mut R) -> EngineResult<MatchResult> {
        let home = self.club(fixture.home_club_id)?;
        let away = self.club(fixture.away_club_id)?;

        let home_strength = StrengthModel::strength(&home.totals, true, rng);
        let away_strength = StrengthModel::strength(&away.totals, false, rng);

        let (home_score, away_score) = ScoreGenerator::score(home_strength, away_strength, rng);

        // Score is final before any event is synthesized
        let home_roster = self.store.roster(home.id)?;
        let away_roster = self.store.roster(away.id)?;

        let events = ScoreGenerator::events(
            home.id,
            &home_roster,
            away.id,
            &away_roster,
            home_score,
            away_score,
            rng,
        );

        debug!(
            "simulated fixture {}: {} {} - {} {} (strengths {:.1} vs {:.1})",
            fixture.id, home.name, home_score, away_score, away.name, home_strength, away_strength
        );

        Ok(MatchResult {
            fixture_id: fixture.id,
            season_id: fixture.season_id,
            gameweek: fixture.gameweek,
            home_club_id: home.id,
            away_club_id: away.id,
            home_score,
            away_score,
            events,
        })
    }

    /// Post-match fan-out, guarded by the terminal fixture transition:
    /// if the compare-and-swap rejects the completion, nothing below
    /// it runs.
    fn apply<R: Rng>(&self, result: &MatchResult, rng: &mut R) -> EngineResult<()> {
        self.store
            .complete_fixture(result.fixture_id, result.home_score, result.away_score)?;

        let mut home = self.club(result.home_club_id)?;
        let mut away = self.club(result.away_club_id)?;

        home.totals.apply_result(result.home_score, result.away_score);
        away.totals.apply_result(result.away_score, result.home_score);

        self.store.update_club_totals(home.id, home.totals)?;
        self.store.update_club_totals(away.id, away.totals)?;

        let home_result = ClubMatchResult::from_scores(result.home_score, result.away_score);

        self.post_match(
            &home,
            home_result,
            result.home_score,
            result.away_score,
            true,
            rng,
        )?;
        self.post_match(
            &away,
            home_result.opposite(),
            result.away_score,
            result.home_score,
            false,
            rng,
        )?;

        Ok(())
    }

    /// Rewards and roster condition apply to human-owned clubs only.
    fn post_match<R: Rng>(
        &self,
        club: &Club,
        result: ClubMatchResult,
        goals_for: u8,
        goals_against: u8,
        is_home: bool,
        rng: &mut R,
    ) -> EngineResult<()> {
        if !club.is_human() {
            return Ok(());
        }

        let reward = self.rewards.reward(result, goals_for, is_home);
        self.store.apply_budget_delta(club.id, reward)?;

        let fan_delta = self
            .fans
            .fan_delta(result, goals_for as i32 - goals_against as i32);
        self.store.apply_fan_delta(club.id, fan_delta)?;

        debug!(
            "club {}: budget delta {}, fan delta {}",
            club.name, reward, fan_delta
        );

        let mut roster = self.store.roster(club.id)?;
        let max_fitness = self.store.roster_max_fitness(club.id)?;
        let class = PerformanceClass::from_result(result, goals_for, goals_against);

        PlayerConditionUpdater::apply_post_match(
            &mut roster,
            class,
            result,
            max_fitness,
            DAYS_BETWEEN_GAMEWEEKS,
            rng,
        );

        self.store.update_roster(club.id, roster)?;

        Ok(())
    }

    fn club(&self, club_id: u32) -> EngineResult<Club> {
        self.store
            .club(club_id)?
            .ok_or(EngineError::ClubNotFound(club_id))
    }
}

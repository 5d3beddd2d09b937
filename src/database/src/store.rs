use core::club::player::Player;
use core::{Club, ClubTotals, EngineError, EngineResult, Fixture, FixtureStatus, LeagueStore};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::atomic::{AtomicU32, Ordering};

/// HashMap-backed `LeagueStore`. Every map sits behind its own mutex
/// so readers of different concerns do not contend; the fixture map's
/// lock is what makes `complete_fixture` an atomic compare-and-swap.
pub struct InMemoryStore {
    fixtures: Mutex<HashMap<u32, Fixture>>,
    next_fixture_id: AtomicU32,

    clubs: Mutex<HashMap<u32, Club>>,
    rosters: Mutex<HashMap<u32, Vec<Option<Player>>>>,
    roster_max_fitness: Mutex<HashMap<u32, f32>>,

    budgets: Mutex<HashMap<u32, i64>>,
    fans: Mutex<HashMap<u32, i64>>,
}

const DEFAULT_ROSTER_MAX_FITNESS: f32 = 100.0;

impl InMemoryStore {
    pub fn new() -> Self {
        InMemoryStore {
            fixtures: Mutex::new(HashMap::new()),
            next_fixture_id: AtomicU32::new(1),
            clubs: Mutex::new(HashMap::new()),
            rosters: Mutex::new(HashMap::new()),
            roster_max_fitness: Mutex::new(HashMap::new()),
            budgets: Mutex::new(HashMap::new()),
            fans: Mutex::new(HashMap::new()),
        }
    }

    pub fn set_roster(&self, club_id: u32, roster: Vec<Option<Player>>) {
        lock(&self.rosters).insert(club_id, roster);
    }

    pub fn set_roster_max_fitness(&self, club_id: u32, max_fitness: f32) {
        lock(&self.roster_max_fitness).insert(club_id, max_fitness);
    }

    pub fn budget(&self, club_id: u32) -> i64 {
        lock(&self.budgets).get(&club_id).copied().unwrap_or(0)
    }

    pub fn fan_count(&self, club_id: u32) -> i64 {
        lock(&self.fans).get(&club_id).copied().unwrap_or(0)
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        InMemoryStore::new()
    }
}

fn lock<'m, T>(mutex: &'m Mutex<T>) -> MutexGuard<'m, T> {
    mutex.lock().expect("store mutex poisoned")
}

impl LeagueStore for InMemoryStore {
    fn create_fixtures(&self, fixtures: Vec<Fixture>) -> EngineResult<Vec<Fixture>> {
        let mut stored = lock(&self.fixtures);

        let mut created = Vec::with_capacity(fixtures.len());

        for mut fixture in fixtures {
            fixture.id = self.next_fixture_id.fetch_add(1, Ordering::SeqCst);
            stored.insert(fixture.id, fixture.clone());
            created.push(fixture);
        }

        Ok(created)
    }

    fn fixture(&self, fixture_id: u32) -> EngineResult<Option<Fixture>> {
        Ok(lock(&self.fixtures).get(&fixture_id).cloned())
    }

    fn season_fixtures(&self, season_id: u32) -> EngineResult<Vec<Fixture>> {
        let mut fixtures: Vec<Fixture> = lock(&self.fixtures)
            .values()
            .filter(|f| f.season_id == season_id)
            .cloned()
            .collect();

        fixtures.sort_by_key(|f| (f.gameweek, f.id));

        Ok(fixtures)
    }

    fn complete_fixture(
        &self,
        fixture_id: u32,
        home_score: u8,
        away_score: u8,
    ) -> EngineResult<Fixture> {
        let mut fixtures = lock(&self.fixtures);

        let fixture = fixtures
            .get_mut(&fixture_id)
            .ok_or(EngineError::FixtureNotFound(fixture_id))?;

        // Compare-and-swap under the map lock: completed is terminal
        if fixture.status == FixtureStatus::Completed {
            return Err(EngineError::FixtureAlreadyCompleted(fixture_id));
        }

        fixture.status = FixtureStatus::Completed;
        fixture.home_score = Some(home_score);
        fixture.away_score = Some(away_score);

        Ok(fixture.clone())
    }

    fn register_clubs(&self, clubs: Vec<Club>) -> EngineResult<()> {
        let mut stored = lock(&self.clubs);

        for club in clubs {
            stored.insert(club.id, club);
        }

        Ok(())
    }

    fn club(&self, club_id: u32) -> EngineResult<Option<Club>> {
        Ok(lock(&self.clubs).get(&club_id).cloned())
    }

    fn season_clubs(&self, season_id: u32) -> EngineResult<Vec<Club>> {
        let mut clubs: Vec<Club> = lock(&self.clubs)
            .values()
            .filter(|c| c.season_id == season_id)
            .cloned()
            .collect();

        clubs.sort_by_key(|c| c.id);

        Ok(clubs)
    }

    fn update_club_totals(&self, club_id: u32, totals: ClubTotals) -> EngineResult<()> {
        let mut clubs = lock(&self.clubs);

        let club = clubs
            .get_mut(&club_id)
            .ok_or(EngineError::ClubNotFound(club_id))?;

        club.totals = totals;

        Ok(())
    }

    fn apply_budget_delta(&self, club_id: u32, amount: i32) -> EngineResult<()> {
        *lock(&self.budgets).entry(club_id).or_insert(0) += amount as i64;

        Ok(())
    }

    fn apply_fan_delta(&self, club_id: u32, amount: i32) -> EngineResult<()> {
        *lock(&self.fans).entry(club_id).or_insert(0) += amount as i64;

        Ok(())
    }

    fn roster(&self, club_id: u32) -> EngineResult<Vec<Option<Player>>> {
        Ok(lock(&self.rosters).get(&club_id).cloned().unwrap_or_default())
    }

    fn update_roster(&self, club_id: u32, roster: Vec<Option<Player>>) -> EngineResult<()> {
        lock(&self.rosters).insert(club_id, roster);

        Ok(())
    }

    fn roster_max_fitness(&self, club_id: u32) -> EngineResult<f32> {
        Ok(lock(&self.roster_max_fitness)
            .get(&club_id)
            .copied()
            .unwrap_or(DEFAULT_ROSTER_MAX_FITNESS))
    }
}

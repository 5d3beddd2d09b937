use crate::club::Club;
use crate::error::{EngineError, EngineResult};
use crate::league::{Fixture, LeagueTable, Schedule};
use crate::r#match::{MatchResolver, MatchResult};
use crate::repository::LeagueStore;
use chrono::NaiveDate;
use itertools::Itertools;
use log::info;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// Public face of the league engine. Owns a store and a base seed;
/// every operation the presentation layer needs goes through here.
///
/// Season state is fully derived from the store: the current gameweek
/// is simply the lowest gameweek that still has a scheduled fixture.
pub struct LeagueSimulator<S: LeagueStore> {
    store: S,
    seed: u64,
}

impl<S: LeagueStore> LeagueSimulator<S> {
    pub fn new(store: S) -> Self {
        LeagueSimulator {
            store,
            seed: rand::rng().random(),
        }
    }

    /// Fixes the base seed so resolutions are reproducible.
    pub fn with_seed(store: S, seed: u64) -> Self {
        LeagueSimulator { store, seed }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Creates the season: registers the clubs and persists the full
    /// double round-robin schedule. A season can only be initialized
    /// while no fixtures exist for its id.
    pub fn initialize_season(
        &self,
        season_id: u32,
        clubs: Vec<Club>,
        start_date: NaiveDate,
    ) -> EngineResult<Vec<Fixture>> {
        if !self.store.season_fixtures(season_id)?.is_empty() {
            return Err(EngineError::SeasonAlreadyInitialized(season_id));
        }

        let club_ids: Vec<u32> = clubs.iter().map(|club| club.id).collect();

        if club_ids.iter().duplicates().next().is_some() {
            return Err(EngineError::Validation(
                "duplicate club ids in season roster".to_string(),
            ));
        }

        let fixtures = Schedule::generate(season_id, &club_ids, start_date)?;

        self.store.register_clubs(clubs)?;
        let created = self.store.create_fixtures(fixtures)?;

        info!(
            "season {} initialized: {} clubs, {} fixtures",
            season_id,
            club_ids.len(),
            created.len()
        );

        Ok(created)
    }

    /// Lowest gameweek with a scheduled fixture; `None` once the
    /// season is fully played.
    pub fn current_gameweek(&self, season_id: u32) -> EngineResult<Option<u8>> {
        let fixtures = self.season_fixtures(season_id)?;

        Ok(fixtures
            .iter()
            .filter(|f| !f.is_completed())
            .map(|f| f.gameweek)
            .min())
    }

    pub fn resolve(&self, fixture_id: u32) -> EngineResult<MatchResult> {
        let mut rng = StdRng::seed_from_u64(self.seed ^ fixture_id as u64);

        MatchResolver::new(&self.store).resolve(fixture_id, &mut rng)
    }

    pub fn resolve_gameweek(&self, season_id: u32, gameweek: u8) -> EngineResult<Vec<MatchResult>> {
        MatchResolver::new(&self.store).resolve_gameweek(season_id, gameweek, self.seed)
    }

    pub fn standings(&self, season_id: u32) -> EngineResult<LeagueTable> {
        let clubs = self.store.season_clubs(season_id)?;

        if clubs.is_empty() {
            return Err(EngineError::SeasonNotFound(season_id));
        }

        Ok(LeagueTable::from_clubs(&clubs))
    }

    /// Next `window` scheduled fixtures for a club, in gameweek order.
    pub fn upcoming_fixtures(
        &self,
        season_id: u32,
        club_id: u32,
        window: usize,
    ) -> EngineResult<Vec<Fixture>> {
        let fixtures = self.club_fixtures(season_id, club_id)?;

        Ok(fixtures
            .into_iter()
            .filter(|f| !f.is_completed())
            .sorted_by_key(|f| f.gameweek)
            .take(window)
            .collect())
    }

    pub fn completed_fixtures(&self, season_id: u32, club_id: u32) -> EngineResult<Vec<Fixture>> {
        let fixtures = self.club_fixtures(season_id, club_id)?;

        Ok(fixtures
            .into_iter()
            .filter(|f| f.is_completed())
            .sorted_by_key(|f| f.gameweek)
            .collect())
    }

    fn club_fixtures(&self, season_id: u32, club_id: u32) -> EngineResult<Vec<Fixture>> {
        self.store
            .club(club_id)?
            .ok_or(EngineError::ClubNotFound(club_id))?;

        let fixtures = self.season_fixtures(season_id)?;

        Ok(fixtures.into_iter().filter(|f| f.involves(club_id)).collect())
    }

    fn season_fixtures(&self, season_id: u32) -> EngineResult<Vec<Fixture>> {
        let fixtures = self.store.season_fixtures(season_id)?;

        if fixtures.is_empty() {
            return Err(EngineError::SeasonNotFound(season_id));
        }

        Ok(fixtures)
    }
}

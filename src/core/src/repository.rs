use crate::club::player::Player;
use crate::club::{Club, ClubTotals};
use crate::error::EngineResult;
use crate::league::Fixture;

/// Persistence seam for the league engine; the only mutation path for
/// fixtures, club totals and rosters.
///
/// Methods take `&self` and implementations lock internally, so
/// resolutions of different fixtures may run concurrently. The one
/// coordination point is `complete_fixture`: it must perform the
/// scheduled-to-completed transition as a compare-and-swap and reject
/// a fixture that is already completed, which is what keeps duplicate
/// resolution requests from double-applying rewards.
///
/// Transactional boundaries are the implementation's responsibility;
/// the engine assumes the post-match writes of one resolution either
/// all succeed or the caller retries the whole resolution (safe,
/// because the status guard rejects the retry's re-application).
pub trait LeagueStore: Send + Sync {
    /// Persists a generated schedule, assigning fixture identities.
    fn create_fixtures(&self, fixtures: Vec<Fixture>) -> EngineResult<Vec<Fixture>>;

    fn fixture(&self, fixture_id: u32) -> EngineResult<Option<Fixture>>;

    fn season_fixtures(&self, season_id: u32) -> EngineResult<Vec<Fixture>>;

    /// Atomic scheduled-to-completed transition. Fails with a conflict
    /// when the fixture is already completed and not-found when it
    /// does not exist.
    fn complete_fixture(
        &self,
        fixture_id: u32,
        home_score: u8,
        away_score: u8,
    ) -> EngineResult<Fixture>;

    fn register_clubs(&self, clubs: Vec<Club>) -> EngineResult<()>;

    fn club(&self, club_id: u32) -> EngineResult<Option<Club>>;

    fn season_clubs(&self, season_id: u32) -> EngineResult<Vec<Club>>;

    fn update_club_totals(&self, club_id: u32, totals: ClubTotals) -> EngineResult<()>;

    /// Applies a budget change to the club's ledger, kept outside this
    /// engine.
    fn apply_budget_delta(&self, club_id: u32, amount: i32) -> EngineResult<()>;

    fn apply_fan_delta(&self, club_id: u32, amount: i32) -> EngineResult<()>;

    /// Full squad including empty slots; `None` entries are empty
    /// positions and are skipped by every consumer.
    fn roster(&self, club_id: u32) -> EngineResult<Vec<Option<Player>>>;

    fn update_roster(&self, club_id: u32, roster: Vec<Option<Player>>) -> EngineResult<()>;

    /// Fitness ceiling granted by the roster's quality tier. The
    /// engine treats it as an input bound and never hardcodes 100.
    fn roster_max_fitness(&self, club_id: u32) -> EngineResult<f32>;
}

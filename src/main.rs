use chrono::NaiveDate;
use core::LeagueSimulator;
use core::utils::{Logging, TimeEstimation};
use database::{DatabaseGenerator, InMemoryStore};
use env_logger::Env;
use log::info;

const SEASON_ID: u32 = 1;
const CLUB_COUNT: usize = 16;
const HUMAN_OWNER_ID: u32 = 1;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let league = Logging::estimate_result(
        || DatabaseGenerator::generate_league(SEASON_ID, CLUB_COUNT, Some(HUMAN_OWNER_ID)),
        "league generation",
    );

    info!("league generated: {} clubs", league.clubs.len());

    let store = InMemoryStore::new();
    league.seed_store(&store);

    let human_club_id = league.clubs[0].id;
    let simulator = LeagueSimulator::new(store);

    let season_start = NaiveDate::from_ymd_opt(2026, 8, 1).expect("valid season start");
    let fixtures = simulator.initialize_season(SEASON_ID, league.clubs, season_start)?;

    info!("season initialized: {} fixtures", fixtures.len());

    let (season_outcome, estimated) = TimeEstimation::estimate(|| -> color_eyre::Result<()> {
        while let Some(gameweek) = simulator.current_gameweek(SEASON_ID)? {
            let results = simulator.resolve_gameweek(SEASON_ID, gameweek)?;

            for result in &results {
                info!(
                    "gameweek {:>2}: fixture {:>3} finished {} - {}",
                    gameweek, result.fixture_id, result.home_score, result.away_score
                );
            }
        }

        Ok(())
    });
    season_outcome?;

    info!("season simulated: {} ms", estimated);

    let table = simulator.standings(SEASON_ID)?;

    info!("final standings:");
    for (position, row) in table.rows.iter().enumerate() {
        info!(
            "{:>2}. {:<24} {:>2} pts (gd {:+}, {}-{}-{})",
            position + 1,
            row.name,
            row.points,
            row.goal_difference,
            row.win,
            row.draw,
            row.lost
        );
    }

    if let Some(position) = table.position_of(human_club_id) {
        info!("your club finished in position {}", position + 1);
    }

    Ok(())
}

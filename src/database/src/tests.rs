use crate::generators::DatabaseGenerator;
use crate::store::InMemoryStore;
use core::{EngineError, FanDeltaTable, LeagueSimulator, LeagueStore, RewardTable};
use chrono::NaiveDate;

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 1).unwrap()
}

fn simulator(
    season_id: u32,
    club_count: usize,
    human_owner_id: Option<u32>,
) -> LeagueSimulator<InMemoryStore> {
    let league = DatabaseGenerator::generate_league(season_id, club_count, human_owner_id);
    let store = InMemoryStore::new();
    league.seed_store(&store);

    let simulator = LeagueSimulator::with_seed(store, 0xC0FFEE);
    simulator
        .initialize_season(season_id, league.clubs, start_date())
        .unwrap();

    simulator
}

#[test]
fn season_initialization_creates_full_double_round_robin() {
    let simulator = simulator(1, 6, None);

    let fixtures = simulator.store().season_fixtures(1).unwrap();

    assert_eq!(fixtures.len(), 6 * 5);
    assert_eq!(simulator.current_gameweek(1).unwrap(), Some(1));
}

#[test]
fn season_cannot_be_initialized_twice() {
    let simulator = simulator(2, 4, None);
    let league = DatabaseGenerator::generate_league(2, 4, None);

    let second = simulator.initialize_season(2, league.clubs, start_date());

    assert!(matches!(
        second,
        Err(EngineError::SeasonAlreadyInitialized(2))
    ));
}

#[test]
fn resolve_is_idempotent_safe() {
    let simulator = simulator(3, 4, Some(1));
    let fixture_id = simulator.store().season_fixtures(3).unwrap()[0].id;

    simulator.resolve(fixture_id).unwrap();

    let totals_before: Vec<_> = simulator
        .store()
        .season_clubs(3)
        .unwrap()
        .iter()
        .map(|c| (c.id, c.totals.played, c.totals.points()))
        .collect();
    let budgets_before: Vec<i64> = totals_before
        .iter()
        .map(|(id, _, _)| simulator.store().budget(*id))
        .collect();

    let error = simulator.resolve(fixture_id).unwrap_err();
    assert!(matches!(
        error,
        EngineError::FixtureAlreadyCompleted(id) if id == fixture_id
    ));
    assert!(error.is_conflict());

    let totals_after: Vec<_> = simulator
        .store()
        .season_clubs(3)
        .unwrap()
        .iter()
        .map(|c| (c.id, c.totals.played, c.totals.points()))
        .collect();
    let budgets_after: Vec<i64> = totals_after
        .iter()
        .map(|(id, _, _)| simulator.store().budget(*id))
        .collect();

    assert_eq!(totals_before, totals_after);
    assert_eq!(budgets_before, budgets_after);
}

#[test]
fn resolving_unknown_fixture_is_not_found() {
    let simulator = simulator(4, 4, None);

    let error = simulator.resolve(99_999).unwrap_err();

    assert!(matches!(error, EngineError::FixtureNotFound(99_999)));
    assert!(error.is_not_found());
}

#[test]
fn points_accounting_holds_after_every_gameweek() {
    let simulator = simulator(5, 6, Some(9));

    while let Some(gameweek) = simulator.current_gameweek(5).unwrap() {
        simulator.resolve_gameweek(5, gameweek).unwrap();

        for club in simulator.store().season_clubs(5).unwrap() {
            assert_eq!(
                club.totals.points(),
                u16::from(club.totals.win) * 3 + u16::from(club.totals.draw)
            );
            assert_eq!(
                club.totals.played,
                club.totals.win + club.totals.draw + club.totals.lost
            );
        }
    }
}

#[test]
fn exhausted_gameweek_is_a_precondition_failure() {
    let simulator = simulator(6, 4, None);

    simulator.resolve_gameweek(6, 1).unwrap();
    let again = simulator.resolve_gameweek(6, 1);

    assert!(matches!(
        again,
        Err(EngineError::GameweekExhausted {
            season_id: 6,
            gameweek: 1
        })
    ));
}

#[test]
fn unknown_season_is_rejected() {
    let simulator = simulator(7, 4, None);

    assert!(matches!(
        simulator.resolve_gameweek(777, 1),
        Err(EngineError::SeasonNotFound(777))
    ));
    assert!(matches!(
        simulator.standings(777),
        Err(EngineError::SeasonNotFound(777))
    ));
}

#[test]
fn full_season_runs_to_completion() {
    let club_count = 8;
    let simulator = simulator(8, club_count, Some(4));

    let mut gameweeks_played = 0;
    let mut drawn_matches = 0u32;
    while let Some(gameweek) = simulator.current_gameweek(8).unwrap() {
        let results = simulator.resolve_gameweek(8, gameweek).unwrap();
        assert_eq!(results.len(), club_count / 2);

        drawn_matches += results.iter().filter(|r| r.is_draw()).count() as u32;
        gameweeks_played += 1;
    }

    assert_eq!(gameweeks_played, (club_count - 1) * 2);

    let fixtures = simulator.store().season_fixtures(8).unwrap();
    assert!(fixtures.iter().all(|f| f.is_completed()));

    let expected_matches = (club_count as u8 - 1) * 2;
    for club in simulator.store().season_clubs(8).unwrap() {
        assert_eq!(club.totals.played, expected_matches);
    }

    // Every drawn match contributes one draw to each side's totals
    let total_draws: u32 = simulator
        .store()
        .season_clubs(8)
        .unwrap()
        .iter()
        .map(|c| u32::from(c.totals.draw))
        .sum();
    assert_eq!(total_draws, drawn_matches * 2);

    let table = simulator.standings(8).unwrap();
    assert_eq!(table.rows.len(), club_count);
    for window in table.rows.windows(2) {
        assert!(window[0].points >= window[1].points);
    }
}

#[test]
fn human_club_receives_rewards_and_roster_updates() {
    let simulator = simulator(9, 4, Some(77));

    let clubs = simulator.store().season_clubs(9).unwrap();
    let human = clubs.iter().find(|c| c.is_human()).unwrap();
    let computer = clubs.iter().find(|c| !c.is_human()).unwrap();

    let fixture = simulator
        .store()
        .season_fixtures(9)
        .unwrap()
        .into_iter()
        .find(|f| f.gameweek == 1 && f.involves(human.id))
        .unwrap();

    let roster_before = simulator.store().roster(human.id).unwrap();
    let result = simulator.resolve(fixture.id).unwrap();

    // Budget matches the reward table applied to the actual scoreline
    let (goals_for, goals_against, is_home) = if result.home_club_id == human.id {
        (result.home_score, result.away_score, true)
    } else {
        (result.away_score, result.home_score, false)
    };
    let classification = result.result_for(human.id);

    let expected_reward =
        RewardTable::default().reward(classification, goals_for, is_home) as i64;
    assert_eq!(simulator.store().budget(human.id), expected_reward);

    let expected_fans = FanDeltaTable::default()
        .fan_delta(classification, goals_for as i32 - goals_against as i32)
        as i64;
    assert_eq!(simulator.store().fan_count(human.id), expected_fans);

    // Computer-run opponent gets no reward fan-out
    assert_eq!(simulator.store().budget(computer.id), 0);
    assert_eq!(simulator.store().fan_count(computer.id), 0);

    // Fielded players played one match and burned one contract match
    let roster_after = simulator.store().roster(human.id).unwrap();
    let fielded: Vec<_> = roster_after.iter().flatten().take(11).collect();
    assert!(fielded.iter().all(|p| p.matches_played == 1));

    for (before, after) in roster_before
        .iter()
        .flatten()
        .zip(roster_after.iter().flatten())
        .take(11)
    {
        assert_eq!(
            after.contract_matches_remaining,
            before.contract_matches_remaining - 1
        );
        assert!(after.experience > before.experience);
    }
}

#[test]
fn seeded_resolution_is_reproducible() {
    let first = simulator(10, 6, None);
    let second = simulator(11, 6, None);

    let first_results = first.resolve_gameweek(10, 1).unwrap();
    let second_results = second.resolve_gameweek(11, 1).unwrap();

    let first_scores: Vec<(u8, u8)> = first_results
        .iter()
        .map(|r| (r.home_score, r.away_score))
        .collect();
    let second_scores: Vec<(u8, u8)> = second_results
        .iter()
        .map(|r| (r.home_score, r.away_score))
        .collect();

    assert_eq!(first_scores, second_scores);
}

#[test]
fn fixture_windows_for_a_club() {
    let simulator = simulator(12, 6, None);
    let club_id = simulator.store().season_clubs(12).unwrap()[0].id;

    let upcoming = simulator.upcoming_fixtures(12, club_id, 3).unwrap();
    assert_eq!(upcoming.len(), 3);
    assert_eq!(upcoming[0].gameweek, 1);
    assert!(upcoming.windows(2).all(|w| w[0].gameweek <= w[1].gameweek));

    assert!(simulator.completed_fixtures(12, club_id).unwrap().is_empty());

    simulator.resolve_gameweek(12, 1).unwrap();

    let completed = simulator.completed_fixtures(12, club_id).unwrap();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].gameweek, 1);

    let upcoming_after = simulator.upcoming_fixtures(12, club_id, 10).unwrap();
    assert!(upcoming_after.iter().all(|f| f.gameweek > 1));
}

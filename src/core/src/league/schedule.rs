use crate::error::{EngineError, EngineResult};
use crate::league::Fixture;
use chrono::{Duration, NaiveDate};
use log::debug;

/// Upper bound keeping gameweek numbers (2 * (N - 1)) and per-club
/// match counts inside their u8 domains.
pub const MAX_CLUBS: usize = 128;

/// Double round-robin schedule construction via the circle method.
///
/// The first club stays fixed while the rest rotate around it, giving
/// N-1 rounds that cover every unordered pair exactly once. The second
/// half mirrors the first with venues swapped, so gameweek g and
/// gameweek g + (N-1) feature the same pairings. Construction is fully
/// deterministic for a given club ordering.
pub struct Schedule;

impl Schedule {
    pub fn generate(
        season_id: u32,
        club_ids: &[u32],
        start_date: NaiveDate,
    ) -> EngineResult<Vec<Fixture>> {
        let club_count = club_ids.len();

        if club_count < 2 {
            return Err(EngineError::Validation(format!(
                "league needs at least 2 clubs, got {}",
                club_count
            )));
        }

        if club_count % 2 != 0 {
            return Err(EngineError::Validation(format!(
                "league needs an even club count, got {}",
                club_count
            )));
        }

        if club_count > MAX_CLUBS {
            return Err(EngineError::Validation(format!(
                "league supports at most {} clubs, got {}",
                MAX_CLUBS, club_count
            )));
        }

        let rounds = Self::build_rounds(club_ids);
        let rounds_per_half = rounds.len() as u8;

        let mut fixtures = Vec::with_capacity(club_count * (club_count - 1));

        for (round_index, pairings) in rounds.iter().enumerate() {
            let gameweek = round_index as u8 + 1;

            for &(home, away) in pairings {
                fixtures.push(Fixture::scheduled(
                    season_id,
                    gameweek,
                    home,
                    away,
                    Self::gameweek_date(start_date, gameweek),
                ));
            }
        }

        // Second half: same pairing order, venues swapped
        for (round_index, pairings) in rounds.iter().enumerate() {
            let gameweek = round_index as u8 + 1 + rounds_per_half;

            for &(home, away) in pairings {
                fixtures.push(Fixture::scheduled(
                    season_id,
                    gameweek,
                    away,
                    home,
                    Self::gameweek_date(start_date, gameweek),
                ));
            }
        }

        debug!(
            "schedule generated: season {}, {} clubs, {} fixtures across {} gameweeks",
            season_id,
            club_count,
            fixtures.len(),
            rounds_per_half * 2
        );

        Ok(fixtures)
    }

    /// Circle-method rounds for the first half of the season.
    fn build_rounds(club_ids: &[u32]) -> Vec<Vec<(u32, u32)>> {
        let club_count = club_ids.len();
        let anchor = club_ids[0];
        let mut rotation: Vec<u32> = club_ids[1..].to_vec();

        let mut rounds = Vec::with_capacity(club_count - 1);

        for round in 0..club_count - 1 {
            let mut pairings = Vec::with_capacity(club_count / 2);

            // Anchor plays the head of the rotation, alternating venue
            // by round so its home/away split stays balanced
            let opponent = rotation[0];
            if round % 2 == 0 {
                pairings.push((anchor, opponent));
            } else {
                pairings.push((opponent, anchor));
            }

            // Remaining pairs fold the rotation onto itself
            for i in 1..club_count / 2 {
                let first = rotation[i];
                let second = rotation[rotation.len() - i];

                if i % 2 == 0 {
                    pairings.push((first, second));
                } else {
                    pairings.push((second, first));
                }
            }

            rounds.push(pairings);
            rotation.rotate_left(1);
        }

        rounds
    }

    fn gameweek_date(start_date: NaiveDate, gameweek: u8) -> NaiveDate {
        start_date + Duration::weeks(gameweek as i64 - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::collections::HashSet;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 1).unwrap()
    }

    #[test]
    fn rejects_odd_club_count() {
        let result = Schedule::generate(1, &[1, 2, 3], start());

        assert!(matches!(result, Err(EngineError::Validation(_))));
    }

    #[test]
    fn rejects_single_club() {
        assert!(Schedule::generate(1, &[1], start()).is_err());
    }

    #[test]
    fn rejects_league_larger_than_gameweek_domain() {
        let clubs: Vec<u32> = (1..=130).collect();

        let result = Schedule::generate(1, &clubs, start());

        assert!(matches!(result, Err(EngineError::Validation(_))));
    }

    #[test]
    fn maximum_league_size_stays_in_gameweek_domain() {
        let clubs: Vec<u32> = (1..=MAX_CLUBS as u32).collect();

        let fixtures = Schedule::generate(1, &clubs, start()).unwrap();

        assert_eq!(fixtures.len(), MAX_CLUBS * (MAX_CLUBS - 1));
        assert_eq!(
            fixtures.iter().map(|f| f.gameweek).max(),
            Some((MAX_CLUBS as u8 - 1) * 2)
        );
    }

    #[test]
    fn two_clubs_play_home_and_away() {
        let fixtures = Schedule::generate(1, &[10, 20], start()).unwrap();

        assert_eq!(fixtures.len(), 2);
        assert_eq!(fixtures[0].gameweek, 1);
        assert_eq!(fixtures[1].gameweek, 2);
        assert_eq!(
            (fixtures[0].home_club_id, fixtures[0].away_club_id),
            (fixtures[1].away_club_id, fixtures[1].home_club_id)
        );
    }

    #[test]
    fn each_pair_meets_twice_with_swapped_venues() {
        let clubs = [1, 2, 3, 4, 5, 6];
        let fixtures = Schedule::generate(1, &clubs, start()).unwrap();

        assert_eq!(fixtures.len(), clubs.len() * (clubs.len() - 1));

        let mut ordered_pairs: HashMap<(u32, u32), u32> = HashMap::new();
        for fixture in &fixtures {
            *ordered_pairs
                .entry((fixture.home_club_id, fixture.away_club_id))
                .or_default() += 1;
        }

        // Every ordered pair exactly once means every unordered pair
        // twice with venues swapped
        assert_eq!(ordered_pairs.len(), clubs.len() * (clubs.len() - 1));
        assert!(ordered_pairs.values().all(|&count| count == 1));
    }

    #[test]
    fn each_club_appears_once_per_gameweek() {
        let clubs = [1, 2, 3, 4, 5, 6, 7, 8];
        let fixtures = Schedule::generate(1, &clubs, start()).unwrap();

        let gameweeks = (clubs.len() - 1) as u8 * 2;

        for gameweek in 1..=gameweeks {
            let mut seen = HashSet::new();

            for fixture in fixtures.iter().filter(|f| f.gameweek == gameweek) {
                assert!(seen.insert(fixture.home_club_id));
                assert!(seen.insert(fixture.away_club_id));
            }

            assert_eq!(seen.len(), clubs.len());
        }
    }

    #[test]
    fn second_half_mirrors_first_half_pairing_order() {
        let clubs = [1, 2, 3, 4];
        let fixtures = Schedule::generate(1, &clubs, start()).unwrap();
        let rounds_per_half = (clubs.len() - 1) as u8;

        for fixture in fixtures.iter().filter(|f| f.gameweek <= rounds_per_half) {
            let mirrored = fixtures
                .iter()
                .find(|f| {
                    f.gameweek == fixture.gameweek + rounds_per_half
                        && f.home_club_id == fixture.away_club_id
                        && f.away_club_id == fixture.home_club_id
                })
                .unwrap();

            assert_eq!(mirrored.pairing(), fixture.pairing());
        }
    }

    #[test]
    fn fixture_dates_advance_weekly() {
        let fixtures = Schedule::generate(1, &[1, 2, 3, 4], start()).unwrap();

        for fixture in &fixtures {
            let expected = start() + Duration::weeks(fixture.gameweek as i64 - 1);
            assert_eq!(fixture.date, expected);
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let clubs = [4, 8, 15, 16, 23, 42];

        let first = Schedule::generate(7, &clubs, start()).unwrap();
        let second = Schedule::generate(7, &clubs, start()).unwrap();

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.gameweek, b.gameweek);
            assert_eq!(a.home_club_id, b.home_club_id);
            assert_eq!(a.away_club_id, b.away_club_id);
        }
    }
}

use crate::generators::PlayerGenerator;
use crate::store::InMemoryStore;
use core::club::player::{Player, PlayerPositionType};
use core::utils::IntegerUtils;
use core::Club;
use log::debug;
use std::sync::LazyLock;
use std::sync::atomic::{AtomicU32, Ordering};

static CLUB_ID_SEQUENCE: LazyLock<AtomicU32> = LazyLock::new(|| AtomicU32::new(1));

const CLUB_NAMES: &[&str] = &[
    "Athletic Riverside",
    "Borough United",
    "Capital City",
    "Dockyard Rovers",
    "Eastport Town",
    "Forest Albion",
    "Garrison Athletic",
    "Harborview FC",
    "Ironbridge City",
    "Juniper Vale",
    "Kingsfield Wanderers",
    "Lakeshore United",
    "Millbrook Rangers",
    "Northgate FC",
    "Oakhill County",
    "Pierhead Orient",
    "Quarry Lane",
    "Redstone Victoria",
    "Southdown Spartans",
    "Westcliff Corinthians",
];

/// Squad slots per club: two full lineups minus a few, with trailing
/// empty slots to exercise the null-skipping contract.
const ROSTER_FILLED_SLOTS: usize = 16;
const ROSTER_EMPTY_SLOTS: usize = 2;

/// World generation for demos and integration tests: a season's worth
/// of clubs with filled rosters.
#[derive(Debug)]
pub struct GeneratedLeague {
    pub season_id: u32,
    pub clubs: Vec<Club>,
    pub rosters: Vec<(u32, Vec<Option<Player>>)>,
}

impl GeneratedLeague {
    /// Loads the generated world into a store. Clubs themselves are
    /// registered later by season initialization.
    pub fn seed_store(&self, store: &InMemoryStore) {
        for (club_id, roster) in &self.rosters {
            store.set_roster(*club_id, roster.clone());
        }
    }
}

pub struct DatabaseGenerator;

impl DatabaseGenerator {
    /// Generates `club_count` clubs for a season. The first club is
    /// assigned to `human_owner_id` when present; the rest are
    /// computer-run.
    pub fn generate_league(
        season_id: u32,
        club_count: usize,
        human_owner_id: Option<u32>,
    ) -> GeneratedLeague {
        let mut clubs = Vec::with_capacity(club_count);
        let mut rosters = Vec::with_capacity(club_count);

        for index in 0..club_count {
            let id = CLUB_ID_SEQUENCE.fetch_add(1, Ordering::SeqCst);
            let owner_id = if index == 0 { human_owner_id } else { None };

            let name = if index < CLUB_NAMES.len() {
                CLUB_NAMES[index].to_string()
            } else {
                format!("{} II", CLUB_NAMES[index % CLUB_NAMES.len()])
            };

            clubs.push(Club::new(id, season_id, name, owner_id));
            rosters.push((id, Self::generate_roster()));
        }

        debug!(
            "generated league: season {}, {} clubs",
            season_id, club_count
        );

        GeneratedLeague {
            season_id,
            clubs,
            rosters,
        }
    }

    fn generate_roster() -> Vec<Option<Player>> {
        let quality = IntegerUtils::random(30, 80) as u8;

        let mut roster: Vec<Option<Player>> = Vec::with_capacity(ROSTER_FILLED_SLOTS + ROSTER_EMPTY_SLOTS);

        for index in 0..ROSTER_FILLED_SLOTS {
            let position = match index {
                0 | 1 => PlayerPositionType::Goalkeeper,
                2..=6 => PlayerPositionType::Defender,
                7..=11 => PlayerPositionType::Midfielder,
                _ => PlayerPositionType::Forward,
            };

            roster.push(Some(PlayerGenerator::generate(position, quality)));
        }

        for _ in 0..ROSTER_EMPTY_SLOTS {
            roster.push(None);
        }

        roster
    }
}

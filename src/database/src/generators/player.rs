use core::club::player::{Player, PlayerPositionType};
use core::utils::{FloatUtils, IntegerUtils};
use std::sync::LazyLock;
use std::sync::atomic::{AtomicU32, Ordering};

static PLAYER_ID_SEQUENCE: LazyLock<AtomicU32> = LazyLock::new(|| AtomicU32::new(1));

const FIRST_NAMES: &[&str] = &[
    "Alex", "Bruno", "Carlos", "Diego", "Emil", "Felix", "Gustavo", "Hugo", "Ivan", "Jonas",
    "Karim", "Luca", "Mateo", "Nico", "Oscar", "Pavel", "Rafael", "Sergio", "Thiago", "Victor",
];

const LAST_NAMES: &[&str] = &[
    "Almeida", "Becker", "Costa", "Dubois", "Eriksen", "Ferreira", "Gomez", "Hansen", "Ibanez",
    "Jankovic", "Kovac", "Lindberg", "Moreau", "Novak", "Oliveira", "Petrov", "Rossi", "Silva",
    "Torres", "Varga",
];

pub struct PlayerGenerator;

impl PlayerGenerator {
    /// Generates one roster member. `quality` (0..=100) shifts the
    /// rating band the way team reputation does in bigger worlds.
    pub fn generate(position: PlayerPositionType, quality: u8) -> Player {
        let id = PLAYER_ID_SEQUENCE.fetch_add(1, Ordering::SeqCst);

        let quality_bonus = (quality as i32 * 30) / 100;
        let rating = IntegerUtils::random(40 + quality_bonus, 65 + quality_bonus).clamp(1, 99) as u8;

        // Value scales quadratically with rating
        let market_value = rating as u32 * rating as u32 * 1_000;

        Player {
            id,
            name: Self::random_name(),
            position,
            rating,
            market_value,
            fitness: FloatUtils::random(85.0, 100.0),
            form: FloatUtils::random(4.0, 7.0),
            level: 1,
            experience: 0,
            matches_played: 0,
            contract_matches_remaining: IntegerUtils::random(20, 60) as u16,
        }
    }

    fn random_name() -> String {
        let first = FIRST_NAMES[IntegerUtils::random(0, FIRST_NAMES.len() as i32 - 1) as usize];
        let last = LAST_NAMES[IntegerUtils::random(0, LAST_NAMES.len() as i32 - 1) as usize];

        format!("{} {}", first, last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_players_have_unique_ids() {
        let first = PlayerGenerator::generate(PlayerPositionType::Forward, 50);
        let second = PlayerGenerator::generate(PlayerPositionType::Forward, 50);

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn generated_players_start_within_domains() {
        for _ in 0..100 {
            let player = PlayerGenerator::generate(PlayerPositionType::Defender, 80);

            assert!(player.rating >= 1 && player.rating <= 99);
            assert!(player.fitness >= 85.0 && player.fitness <= 100.0);
            assert!(player.form >= 4.0 && player.form <= 7.0);
            assert_eq!(player.level, 1);
            assert!(player.contract_matches_remaining >= 20);
        }
    }
}

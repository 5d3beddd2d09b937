use crate::club::Club;
use itertools::Itertools;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct LeagueTableRow {
    pub club_id: u32,
    pub name: String,
    pub played: u8,
    pub win: u8,
    pub draw: u8,
    pub lost: u8,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
    pub points: u16,
}

/// Ranked standings derived from club totals. A pure read: the table
/// can be recomputed at any time without replaying fixtures, and
/// identical totals always produce identical rows.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LeagueTable {
    pub rows: Vec<LeagueTableRow>,
}

impl LeagueTable {
    pub fn from_clubs<'c>(clubs: impl IntoIterator<Item = &'c Club>) -> Self {
        let rows = clubs
            .into_iter()
            .map(|club| LeagueTableRow {
                club_id: club.id,
                name: club.name.clone(),
                played: club.totals.played,
                win: club.totals.win,
                draw: club.totals.draw,
                lost: club.totals.lost,
                goals_for: club.totals.goals_for,
                goals_against: club.totals.goals_against,
                goal_difference: club.totals.goal_difference(),
                points: club.totals.points(),
            })
            .sorted_by(|a, b| {
                b.points
                    .cmp(&a.points)
                    .then(b.goal_difference.cmp(&a.goal_difference))
                    .then(b.goals_for.cmp(&a.goals_for))
                    // Name ascending keeps full ties deterministic
                    .then(a.name.cmp(&b.name))
            })
            .collect();

        LeagueTable { rows }
    }

    pub fn position_of(&self, club_id: u32) -> Option<usize> {
        self.rows.iter().position(|row| row.club_id == club_id)
    }

    pub fn leader(&self) -> Option<&LeagueTableRow> {
        self.rows.first()
    }
}

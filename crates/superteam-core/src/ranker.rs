// Player ranking and five-player selection.
//
// Both selections rank on season aggregates (mean across every team a player
// appeared for). A team filter only decides eligibility; it never narrows the
// numbers used for ranking or reported on the roster.

use tracing::{debug, info};

use crate::roster::{RosterEntry, Selection, ROSTER_SIZE};
use crate::stats::keys::{Position, Statistic, TeamCode};
use crate::stats::table::{PlayerRecord, StatsTable};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SelectionError {
    #[error("only {found} qualifying players (team filter: {team:?})")]
    InsufficientPlayers {
        team: Option<TeamCode>,
        found: usize,
    },

    #[error("table exhausted after filling positions {filled:?}")]
    InsufficientPositions { filled: Vec<Position> },
}

/// Ranks aggregated players from a season table.
#[derive(Debug, Clone, Copy)]
pub struct PlayerRanker<'a> {
    table: &'a StatsTable,
}

impl<'a> PlayerRanker<'a> {
    pub fn new(table: &'a StatsTable) -> Self {
        PlayerRanker { table }
    }

    /// Top five players by `statistic`, optionally restricted to players who
    /// logged at least one row for `team`.
    pub fn select_top_unrestricted(
        &self,
        statistic: Statistic,
        team: Option<TeamCode>,
    ) -> Result<Selection, SelectionError> {
        let ranked = self.table.ranked_by(statistic);

        let entries: Vec<RosterEntry> = match team {
            None => ranked
                .iter()
                .take(ROSTER_SIZE)
                .map(|p| entry(p, statistic, None))
                .collect(),
            Some(code) => {
                let members = self.table.team_members(code);
                ranked
                    .iter()
                    .filter(|p| members.contains(p.key.as_str()))
                    .take(ROSTER_SIZE)
                    .map(|p| entry(p, statistic, None))
                    .collect()
            }
        };

        if entries.len() < ROSTER_SIZE {
            return Err(SelectionError::InsufficientPlayers {
                team,
                found: entries.len(),
            });
        }

        info!(
            "Selected top {} by {}{}: {:?}",
            ROSTER_SIZE,
            statistic.column(),
            team.map(|t| format!(" ({t})")).unwrap_or_default(),
            entries.iter().map(|e| e.name.as_str()).collect::<Vec<_>>()
        );

        Ok(Selection {
            statistic,
            team,
            entries,
        })
    }

    /// Top players by `statistic` with one player per canonical position.
    ///
    /// A candidate's position comes from their first table row, looked up by
    /// exact player key.
    pub fn select_top_balanced(&self, statistic: Statistic) -> Result<Selection, SelectionError> {
        let mut taken: Vec<Position> = Vec::with_capacity(ROSTER_SIZE);
        let mut entries: Vec<RosterEntry> = Vec::with_capacity(ROSTER_SIZE);

        for player in self.table.ranked_by(statistic) {
            let Some(pos) = self.table.first_position(&player.key) else {
                continue;
            };
            if taken.contains(&pos) {
                debug!("skipping '{}': {} already filled", player.name, pos);
                continue;
            }
            taken.push(pos);
            entries.push(entry(player, statistic, Some(pos)));
            if entries.len() == ROSTER_SIZE {
                break;
            }
        }

        if entries.len() < ROSTER_SIZE {
            return Err(SelectionError::InsufficientPositions { filled: taken });
        }

        info!(
            "Selected balanced five by {}: {:?}",
            statistic.column(),
            entries
                .iter()
                .map(|e| format!(
                    "{} ({})",
                    e.name,
                    e.position.map(|p| p.display_str()).unwrap_or("?")
                ))
                .collect::<Vec<_>>()
        );

        Ok(Selection {
            statistic,
            team: None,
            entries,
        })
    }
}

fn entry(player: &PlayerRecord, statistic: Statistic, position: Option<Position>) -> RosterEntry {
    RosterEntry {
        name: player.name.clone(),
        stat: player.averages.get(statistic),
        position,
        points: player.averages.pts,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

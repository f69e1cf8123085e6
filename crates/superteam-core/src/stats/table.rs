// Season statistics table: CSV loading and per-player aggregation.
//
// Reads a basketball-reference style per-game CSV. A player traded during the
// season has one row per team (plus any "TOT" summary row the export carries);
// those rows are averaged into a single PlayerRecord.

use crate::stats::keys::{Position, Statistic, TeamCode};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Per-game averages for the five tracked statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatLine {
    pub pts: f64,
    pub ast: f64,
    pub trb: f64,
    pub stl: f64,
    pub blk: f64,
}

impl StatLine {
    pub fn get(&self, stat: Statistic) -> f64 {
        match stat {
            Statistic::Points => self.pts,
            Statistic::Assists => self.ast,
            Statistic::Rebounds => self.trb,
            Statistic::Steals => self.stl,
            Statistic::Blocks => self.blk,
        }
    }

    fn values(&self) -> [f64; 5] {
        [self.pts, self.ast, self.trb, self.stl, self.blk]
    }
}

/// One raw table row: a player's line for a single team in the season.
#[derive(Debug, Clone)]
pub struct SeasonRow {
    /// Raw player name, including any `\suffix` disambiguator.
    pub player: String,
    /// Team code as written in the table ("LAL", "TOT", ...).
    pub team: String,
    /// Canonical position; `None` when the table's string has no mapping
    /// (e.g. "G"). Such rows still count toward the player's aggregate.
    pub position: Option<Position>,
    pub stats: StatLine,
}

/// A player's season aggregated across every row they appear in.
#[derive(Debug, Clone)]
pub struct PlayerRecord {
    /// Aggregation key: the raw name exactly as it appears in the table.
    pub key: String,
    /// Display name with any `\suffix` stripped.
    pub name: String,
    /// Canonical position from the player's first row, if it has one.
    pub position: Option<Position>,
    /// Arithmetic mean of every row's averages.
    pub averages: StatLine,
    /// Number of rows that were averaged.
    pub rows: usize,
}

/// In-memory, read-only season table.
#[derive(Debug, Clone, Default)]
pub struct StatsTable {
    rows: Vec<SeasonRow>,
    players: Vec<PlayerRecord>,
    index: HashMap<String, usize>,
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("validation error: {0}")]
    Validation(String),
}

// ---------------------------------------------------------------------------
// Raw CSV serde struct (private)
// ---------------------------------------------------------------------------

/// Season CSV row. Only the columns the simulator needs are named; extra
/// columns (Rk, Age, G, MP, ...) are ignored by the deserializer.
#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
struct RawSeasonRow {
    Player: String,
    Pos: String,
    #[serde(alias = "Team")]
    Tm: String,
    PTS: f64,
    AST: f64,
    TRB: f64,
    STL: f64,
    BLK: f64,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Strip the `\suffix` disambiguator from a raw table name.
pub fn display_name(raw: &str) -> &str {
    raw.split('\\').next().unwrap_or(raw).trim()
}

fn valid_stats(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite() && *v >= 0.0)
}

// ---------------------------------------------------------------------------
// Reader-based loader (private, enables testing without temp files)
// ---------------------------------------------------------------------------

fn load_rows_from_reader<R: Read>(rdr: R) -> Result<Vec<SeasonRow>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(rdr);
    let mut rows = Vec::new();
    for result in reader.deserialize::<RawSeasonRow>() {
        match result {
            Ok(raw) => {
                if raw.Player.is_empty() {
                    warn!("skipping row with empty player name");
                    continue;
                }
                let stats = StatLine {
                    pts: raw.PTS,
                    ast: raw.AST,
                    trb: raw.TRB,
                    stl: raw.STL,
                    blk: raw.BLK,
                };
                if !valid_stats(&stats.values()) {
                    warn!("skipping '{}': non-finite or negative stat value", raw.Player);
                    continue;
                }
                let position = match raw.Pos.parse::<Position>() {
                    Ok(pos) => Some(pos),
                    Err(e) => {
                        warn!("'{}': {}; not eligible for balanced selection", raw.Player, e);
                        None
                    }
                };
                rows.push(SeasonRow {
                    player: raw.Player,
                    team: raw.Tm,
                    position,
                    stats,
                });
            }
            Err(e) => {
                warn!("skipping malformed season row: {}", e);
            }
        }
    }
    Ok(rows)
}

// ---------------------------------------------------------------------------
// Public loaders
// ---------------------------------------------------------------------------

/// Load and aggregate a season table from a CSV file.
pub fn load_season(path: &Path) -> Result<StatsTable, StatsError> {
    let file = std::fs::File::open(path).map_err(|e| StatsError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let table = load_season_from_reader(file).map_err(|e| match e {
        StatsError::Csv { source, .. } => StatsError::Csv {
            path: path.display().to_string(),
            source,
        },
        other => other,
    })?;
    info!(
        "Loaded {} rows ({} players) from {}",
        table.rows.len(),
        table.players.len(),
        path.display()
    );
    Ok(table)
}

/// Load and aggregate a season table from any reader.
pub fn load_season_from_reader<R: Read>(rdr: R) -> Result<StatsTable, StatsError> {
    let rows = load_rows_from_reader(rdr).map_err(|e| StatsError::Csv {
        path: "<reader>".into(),
        source: e,
    })?;
    if rows.is_empty() {
        return Err(StatsError::Validation(
            "season CSV produced zero valid rows".into(),
        ));
    }
    Ok(StatsTable::from_rows(rows))
}

// ---------------------------------------------------------------------------
// StatsTable
// ---------------------------------------------------------------------------

impl StatsTable {
    /// Build a table from raw rows, aggregating per raw player name.
    ///
    /// Players are listed in the order they first appear; this order is the
    /// tie-break for every ranking over the table.
    pub fn from_rows(rows: Vec<SeasonRow>) -> Self {
        let mut players: Vec<PlayerRecord> = Vec::new();
        let mut sums: Vec<StatLine> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for row in &rows {
            let idx = *index.entry(row.player.clone()).or_insert_with(|| {
                players.push(PlayerRecord {
                    key: row.player.clone(),
                    name: display_name(&row.player).to_string(),
                    position: row.position,
                    averages: StatLine::default(),
                    rows: 0,
                });
                sums.push(StatLine::default());
                players.len() - 1
            });
            let sum = &mut sums[idx];
            sum.pts += row.stats.pts;
            sum.ast += row.stats.ast;
            sum.trb += row.stats.trb;
            sum.stl += row.stats.stl;
            sum.blk += row.stats.blk;
            players[idx].rows += 1;
        }

        for (player, sum) in players.iter_mut().zip(&sums) {
            let n = player.rows as f64;
            player.averages = StatLine {
                pts: sum.pts / n,
                ast: sum.ast / n,
                trb: sum.trb / n,
                stl: sum.stl / n,
                blk: sum.blk / n,
            };
            if player.rows > 1 {
                debug!("aggregated {} rows for '{}'", player.rows, player.key);
            }
        }

        StatsTable {
            rows,
            players,
            index,
        }
    }

    /// Raw rows in table order.
    pub fn rows(&self) -> &[SeasonRow] {
        &self.rows
    }

    /// Aggregated players in first-appearance order.
    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    /// Look up an aggregated player by exact raw key.
    pub fn player(&self, key: &str) -> Option<&PlayerRecord> {
        self.index.get(key).map(|&i| &self.players[i])
    }

    /// Canonical position from the first raw row of the given player.
    pub fn first_position(&self, key: &str) -> Option<Position> {
        self.player(key).and_then(|p| p.position)
    }

    /// Raw keys of every player with at least one row for `team`.
    pub fn team_members(&self, team: TeamCode) -> HashSet<&str> {
        self.rows
            .iter()
            .filter(|r| r.team == team.code())
            .map(|r| r.player.as_str())
            .collect()
    }

    /// Aggregated players sorted descending by `stat`.
    ///
    /// The sort is stable, so equal values keep first-appearance order.
    pub fn ranked_by(&self, stat: Statistic) -> Vec<&PlayerRecord> {
        let mut ranked: Vec<&PlayerRecord> = self.players.iter().collect();
        ranked.sort_by(|a, b| {
            b.averages
                .get(stat)
                .partial_cmp(&a.averages.get(stat))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

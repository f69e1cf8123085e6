// Five-player rosters built from a ranker selection.

use serde::{Deserialize, Serialize};

use crate::stats::keys::{Position, Statistic, TeamCode};

/// Every roster holds exactly this many players.
pub const ROSTER_SIZE: usize = 5;

/// Label used for an unrestricted roster when the user gives no name.
pub const DEFAULT_SUPER_TEAM_LABEL: &str = "Superteam";

/// One selected player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Display name (suffix stripped).
    pub name: String,
    /// Season average of the focus statistic.
    pub stat: f64,
    /// Canonical position; only set by balanced selection.
    pub position: Option<Position>,
    /// Season average points per game.
    pub points: f64,
}

/// Ordered output of a ranking pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub statistic: Statistic,
    /// The team the selection was scoped to, if any.
    pub team: Option<TeamCode>,
    /// Selected players in selection order.
    pub entries: Vec<RosterEntry>,
}

impl Selection {
    /// (name, stat, position) for each player, in selection order.
    pub fn players(&self) -> impl Iterator<Item = (&str, f64, Option<Position>)> + '_ {
        self.entries
            .iter()
            .map(|e| (e.name.as_str(), e.stat, e.position))
    }

    /// Average points per game, parallel to `players()`.
    pub fn points(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.points).collect()
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RosterError {
    #[error("a roster needs exactly {expected} players, got {found}")]
    WrongSize { expected: usize, found: usize },

    #[error("player '{player}' has an invalid average {value}")]
    InvalidValue { player: String, value: f64 },
}

/// An immutable five-player roster.
///
/// Unrestricted ("super team") and team-scoped rosters share this type; the
/// only difference is the label chosen when none is supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    label: String,
    statistic: Statistic,
    team: Option<TeamCode>,
    entries: Vec<RosterEntry>,
}

impl Roster {
    /// Build a roster from a selection, defaulting an unscoped roster's label
    /// to [`DEFAULT_SUPER_TEAM_LABEL`].
    pub fn from_selection(selection: Selection, label: Option<&str>) -> Result<Self, RosterError> {
        Self::with_default_label(selection, label, DEFAULT_SUPER_TEAM_LABEL)
    }

    /// Build a roster from a selection.
    ///
    /// Label resolution: an explicit non-blank `label` wins, then the team
    /// code for team-scoped selections, then `default_label`.
    pub fn with_default_label(
        selection: Selection,
        label: Option<&str>,
        default_label: &str,
    ) -> Result<Self, RosterError> {
        let label = match label.map(str::trim).filter(|l| !l.is_empty()) {
            Some(l) => l.to_string(),
            None => match selection.team {
                Some(team) => team.code().to_string(),
                None => default_label.to_string(),
            },
        };
        Self::new(label, selection.statistic, selection.team, selection.entries)
    }

    /// Build a roster from explicit parts, checking size and values.
    pub fn new(
        label: String,
        statistic: Statistic,
        team: Option<TeamCode>,
        entries: Vec<RosterEntry>,
    ) -> Result<Self, RosterError> {
        if entries.len() != ROSTER_SIZE {
            return Err(RosterError::WrongSize {
                expected: ROSTER_SIZE,
                found: entries.len(),
            });
        }
        for entry in &entries {
            for value in [entry.stat, entry.points] {
                if !value.is_finite() || value < 0.0 {
                    return Err(RosterError::InvalidValue {
                        player: entry.name.clone(),
                        value,
                    });
                }
            }
        }
        Ok(Roster {
            label,
            statistic,
            team,
            entries,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn statistic(&self) -> Statistic {
        self.statistic
    }

    pub fn team(&self) -> Option<TeamCode> {
        self.team
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    /// Whether the roster was built by balanced selection.
    pub fn is_balanced(&self) -> bool {
        self.entries.iter().all(|e| e.position.is_some())
    }

    /// Player names in selection order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// (name, stat, position) for each player, in selection order.
    pub fn players(&self) -> impl Iterator<Item = (&str, f64, Option<Position>)> + '_ {
        self.entries
            .iter()
            .map(|e| (e.name.as_str(), e.stat, e.position))
    }

    /// Average points per game, parallel to `players()`.
    pub fn points(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.points).collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

// Single-game simulation between two rosters.
//
// Every player's contribution is one triangular draw centred on their season
// average. Points always decide the game; the focus-statistic totals are
// reported alongside but never break ties.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Triangular};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::roster::Roster;
use crate::stats::keys::Statistic;

/// Half-width of the points distribution around a player's average.
pub const POINT_SPREAD: f64 = 15.0;

/// Half-width of the focus-statistic distribution around a player's average.
pub const STAT_SPREAD: f64 = 3.0;

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Which side won a simulated game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    TeamA,
    TeamB,
    Tie,
}

impl Outcome {
    /// Strictly more points wins; equal points is a tie.
    pub fn decide(team_a_points: u32, team_b_points: u32) -> Self {
        match team_a_points.cmp(&team_b_points) {
            std::cmp::Ordering::Greater => Outcome::TeamA,
            std::cmp::Ordering::Less => Outcome::TeamB,
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }
}

/// One side's line in a game result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamLine {
    pub label: String,
    pub points: u32,
    /// Simulated focus-statistic total; `None` for points games.
    pub stat: Option<u32>,
}

/// The outcome of one simulated game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub statistic: Statistic,
    pub team_a: TeamLine,
    pub team_b: TeamLine,
    pub outcome: Outcome,
    /// Absolute points difference.
    pub margin: u32,
}

impl GameResult {
    pub fn is_tie(&self) -> bool {
        self.outcome == Outcome::Tie
    }

    pub fn winner(&self) -> Option<&TeamLine> {
        match self.outcome {
            Outcome::TeamA => Some(&self.team_a),
            Outcome::TeamB => Some(&self.team_b),
            Outcome::Tie => None,
        }
    }

    pub fn loser(&self) -> Option<&TeamLine> {
        match self.outcome {
            Outcome::TeamA => Some(&self.team_b),
            Outcome::TeamB => Some(&self.team_a),
            Outcome::Tie => None,
        }
    }

    /// (team A, team B) focus-statistic totals, present for non-points games.
    pub fn stat_comparison(&self) -> Option<(u32, u32)> {
        match (self.team_a.stat, self.team_b.stat) {
            (Some(a), Some(b)) => Some((a, b)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    #[error("cannot sample around average {value}: {message}")]
    Distribution { value: f64, message: String },

    #[error("roster '{roster}' was selected by {selected}, cannot play a {requested} game")]
    StatisticMismatch {
        roster: String,
        selected: Statistic,
        requested: Statistic,
    },
}

// ---------------------------------------------------------------------------
// Simulator
// ---------------------------------------------------------------------------

/// Plays simulated games. Owns its random source.
#[derive(Debug, Clone)]
pub struct GameSimulator {
    rng: ChaCha8Rng,
}

impl GameSimulator {
    /// Seed from OS entropy.
    pub fn from_entropy() -> Self {
        GameSimulator {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Reproducible simulator: the same seed yields the same games.
    pub fn seeded(seed: u64) -> Self {
        GameSimulator {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seeded when `seed` is given, entropy otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::seeded(s),
            None => Self::from_entropy(),
        }
    }

    /// Simulated points total: one draw per player from
    /// Triangular(max(0, avg - 15), avg + 15, avg), summed and truncated.
    pub fn simulate_points(&mut self, roster: &Roster) -> Result<u32, SimulationError> {
        let total = sample_total(&mut self.rng, roster.points(), POINT_SPREAD)?;
        debug!("{} simulated {} points", roster.label(), total);
        Ok(total)
    }

    /// Simulated focus-statistic total: one draw per player from
    /// Triangular(max(0, v - 3), v + 3, v), summed and truncated.
    pub fn simulate_stat(&mut self, roster: &Roster) -> Result<u32, SimulationError> {
        let values: Vec<f64> = roster.players().map(|(_, stat, _)| stat).collect();
        let total = sample_total(&mut self.rng, values, STAT_SPREAD)?;
        debug!(
            "{} simulated {} {}",
            roster.label(),
            total,
            roster.statistic().column()
        );
        Ok(total)
    }

    /// Play one game. Points are simulated for both sides; when `statistic`
    /// is not Points the focus statistic is simulated for both sides as well,
    /// and both rosters must have been selected by that statistic.
    pub fn play_game(
        &mut self,
        team_a: &Roster,
        team_b: &Roster,
        statistic: Statistic,
    ) -> Result<GameResult, SimulationError> {
        if statistic != Statistic::Points {
            for roster in [team_a, team_b] {
                if roster.statistic() != statistic {
                    return Err(SimulationError::StatisticMismatch {
                        roster: roster.label().to_string(),
                        selected: roster.statistic(),
                        requested: statistic,
                    });
                }
            }
        }

        let a_points = self.simulate_points(team_a)?;
        let b_points = self.simulate_points(team_b)?;

        let (a_stat, b_stat) = if statistic == Statistic::Points {
            (None, None)
        } else {
            (
                Some(self.simulate_stat(team_a)?),
                Some(self.simulate_stat(team_b)?),
            )
        };

        let outcome = Outcome::decide(a_points, b_points);
        let result = GameResult {
            statistic,
            team_a: TeamLine {
                label: team_a.label().to_string(),
                points: a_points,
                stat: a_stat,
            },
            team_b: TeamLine {
                label: team_b.label().to_string(),
                points: b_points,
                stat: b_stat,
            },
            outcome,
            margin: a_points.abs_diff(b_points),
        };

        info!(
            "{} {} - {} {} ({:?})",
            result.team_a.label, a_points, b_points, result.team_b.label, outcome
        );
        Ok(result)
    }

    /// Replay the same fixture `games` times. Games are independent.
    pub fn play_series(
        &mut self,
        team_a: &Roster,
        team_b: &Roster,
        statistic: Statistic,
        games: usize,
    ) -> Result<Vec<GameResult>, SimulationError> {
        (0..games)
            .map(|_| self.play_game(team_a, team_b, statistic))
            .collect()
    }
}

fn triangular(average: f64, spread: f64) -> Result<Triangular<f64>, SimulationError> {
    let low = (average - spread).max(0.0);
    let high = average + spread;
    Triangular::new(low, high, average).map_err(|e| SimulationError::Distribution {
        value: average,
        message: e.to_string(),
    })
}

fn sample_total<R: Rng>(
    rng: &mut R,
    averages: impl IntoIterator<Item = f64>,
    spread: f64,
) -> Result<u32, SimulationError> {
    let mut total = 0.0;
    for average in averages {
        total += triangular(average, spread)?.sample(rng);
    }
    Ok(total.trunc() as u32)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

// Library root: season table, player ranking, rosters and game simulation.

pub mod config;
pub mod ranker;
pub mod roster;
pub mod sim;
pub mod stats;

pub use ranker::{PlayerRanker, SelectionError};
pub use roster::{Roster, RosterEntry, RosterError, Selection};
pub use sim::{GameResult, GameSimulator, Outcome, SimulationError, TeamLine};
pub use stats::keys::{KeyError, Position, Statistic, TeamCode};
pub use stats::table::{StatsError, StatsTable};

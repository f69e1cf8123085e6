// Command-line surface for the `superteam` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use superteam_core::{Statistic, TeamCode};

#[derive(Debug, Parser)]
#[command(name = "superteam")]
#[command(about = "Build a five-player NBA super team and play it against a real roster")]
#[command(version)]
pub struct Cli {
    /// Season per-game CSV; overrides data.season_csv from the config file
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the 30 teams with their codes
    Teams,

    /// Print the five best players for a statistic
    Top {
        /// Focus statistic: name or column key (Points, AST, trb, ...)
        #[arg(short, long)]
        stat: Statistic,

        /// Restrict to one team (full name or code)
        #[arg(short, long, conflicts_with = "balanced")]
        team: Option<TeamCode>,

        /// One player per position (PG, SG, SF, PF, C)
        #[arg(short, long)]
        balanced: bool,
    },

    /// Build a super team and play it against a real team
    Play {
        /// Focus statistic for both rosters
        #[arg(short, long)]
        stat: Statistic,

        /// Opponent team (full name or code)
        #[arg(short, long)]
        opponent: TeamCode,

        /// Build the super team with one player per position
        #[arg(short, long)]
        balanced: bool,

        /// Name for the super team
        #[arg(short, long)]
        name: Option<String>,

        /// Number of games to play
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
        games: u64,

        /// RNG seed; overrides simulation.seed from the config file
        #[arg(long)]
        seed: Option<u64>,

        /// Print results as JSON instead of narration
        #[arg(long)]
        json: bool,
    },
}

// Subcommand handlers. Each writes its output to the given writer so the
// binary and the tests share one code path.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use serde::Serialize;
use superteam_core::config::Config;
use superteam_core::stats::table::load_season;
use superteam_core::{
    GameResult, GameSimulator, Outcome, PlayerRanker, Roster, Statistic, StatsTable, TeamCode,
};

use crate::cli::Commands;
use crate::report;

/// Values resolved from the config file and global CLI flags.
#[derive(Debug, Clone)]
pub struct Settings {
    pub season_csv: PathBuf,
    pub default_label: String,
    pub seed: Option<u64>,
}

impl Settings {
    /// `--data` wins over `data.season_csv`.
    pub fn resolve(config: &Config, data: Option<PathBuf>) -> Self {
        Settings {
            season_csv: data.unwrap_or_else(|| PathBuf::from(&config.data.season_csv)),
            default_label: config.roster.default_label.clone(),
            seed: config.simulation.seed,
        }
    }
}

#[derive(Serialize)]
struct PlayReport<'a> {
    super_team: &'a Roster,
    opponent: &'a Roster,
    games: &'a [GameResult],
}

pub fn run(command: &Commands, settings: &Settings, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        Commands::Teams => {
            writeln!(out, "{}", report::team_list())?;
        }
        Commands::Top {
            stat,
            team,
            balanced,
        } => {
            let table = load_table(settings)?;
            let roster = build_roster(&table, settings, *stat, *team, *balanced, None)?;
            writeln!(out, "{}", report::roster_table(&roster))?;
        }
        Commands::Play {
            stat,
            opponent,
            balanced,
            name,
            games,
            seed,
            json,
        } => {
            let table = load_table(settings)?;
            let mine = build_roster(&table, settings, *stat, None, *balanced, name.as_deref())?;
            let theirs = build_roster(&table, settings, *stat, Some(*opponent), false, None)?;

            let seed = seed.or(settings.seed);
            let mut sim = GameSimulator::new(seed);
            let games = usize::try_from(*games).context("game count too large")?;
            let results = sim
                .play_series(&mine, &theirs, *stat, games)
                .context("simulation failed")?;

            if *json {
                let report = PlayReport {
                    super_team: &mine,
                    opponent: &theirs,
                    games: &results,
                };
                serde_json::to_writer_pretty(&mut *out, &report)?;
                writeln!(out)?;
            } else {
                write_narration(out, *opponent, &mine, &theirs, &results)?;
            }
        }
    }
    Ok(())
}

fn load_table(settings: &Settings) -> anyhow::Result<StatsTable> {
    load_season(&settings.season_csv).with_context(|| {
        format!(
            "failed to load season data from {}",
            settings.season_csv.display()
        )
    })
}

fn build_roster(
    table: &StatsTable,
    settings: &Settings,
    stat: Statistic,
    team: Option<TeamCode>,
    balanced: bool,
    label: Option<&str>,
) -> anyhow::Result<Roster> {
    let ranker = PlayerRanker::new(table);
    let selection = match balanced {
        true => ranker.select_top_balanced(stat),
        false => ranker.select_top_unrestricted(stat, team),
    };
    let selection = selection.with_context(|| format!("could not select five players by {stat}"))?;

    Ok(Roster::with_default_label(
        selection,
        label,
        &settings.default_label,
    )?)
}

fn write_narration(
    out: &mut impl Write,
    opponent: TeamCode,
    mine: &Roster,
    theirs: &Roster,
    results: &[GameResult],
) -> anyhow::Result<()> {
    writeln!(out, "{}", report::super_team_created(mine))?;
    writeln!(out, "{}", report::opponent_created(opponent, theirs))?;

    let numbered = results.len() > 1;
    for (i, result) in results.iter().enumerate() {
        writeln!(out)?;
        if numbered {
            writeln!(out, "Game {}:", i + 1)?;
        }
        writeln!(out, "{}", report::game_summary(result))?;
    }

    if numbered {
        let count = |o: Outcome| results.iter().filter(|r| r.outcome == o).count();
        writeln!(out)?;
        writeln!(
            out,
            "Series: {} won {}, {} won {}, {} tied.",
            mine.label(),
            count(Outcome::TeamA),
            theirs.label(),
            count(Outcome::TeamB),
            count(Outcome::Tie)
        )?;
    }
    Ok(())
}

// Text narration for selections and game results.

use superteam_core::{GameResult, Roster, Statistic, TeamCode, TeamLine};

fn name_list(roster: &Roster) -> String {
    roster.names().join(", ")
}

/// Announce the user's freshly built super team.
pub fn super_team_created(roster: &Roster) -> String {
    format!(
        "Great! You are responsible for the team: {}.\n\
         The players that had the best {} and who are on your team are: {}",
        roster.label(),
        roster.statistic(),
        name_list(roster)
    )
}

/// Announce the opponent's selected five.
pub fn opponent_created(team: TeamCode, roster: &Roster) -> String {
    format!(
        "The {}'s players with the best {} are: {}",
        team.full_name(),
        roster.statistic(),
        name_list(roster)
    )
}

/// One line per selected player, with position when the roster is balanced.
pub fn roster_table(roster: &Roster) -> String {
    let column = roster.statistic().column();
    let mode = if roster.is_balanced() {
        ", one per position"
    } else {
        ""
    };
    let mut lines = vec![format!(
        "{} ({} focus{})",
        roster.label(),
        roster.statistic(),
        mode
    )];
    for (i, entry) in roster.entries().iter().enumerate() {
        let pos = entry
            .position
            .map(|p| format!(" [{}]", p.display_str()))
            .unwrap_or_default();
        lines.push(format!(
            "  {}. {}{} - {:.1} {}, {:.1} PTS",
            i + 1,
            entry.name,
            pos,
            entry.stat,
            column,
            entry.points
        ));
    }
    lines.join("\n")
}

fn stat_line(first: &TeamLine, second: &TeamLine, statistic: Statistic) -> Option<String> {
    Some(format!(
        "Also, {} had {} {} and {} had {} {}.",
        first.label,
        first.stat?,
        statistic,
        second.label,
        second.stat?,
        statistic
    ))
}

/// Narrate a game: the score line, then the focus-statistic line for
/// non-points games. The winner is always named first.
pub fn game_summary(result: &GameResult) -> String {
    let (first, second) = match (result.winner(), result.loser()) {
        (Some(w), Some(l)) => (w, l),
        _ => (&result.team_a, &result.team_b),
    };

    let score = if result.is_tie() {
        format!(
            "The game ended in a tie with a score of {} to {}.",
            result.team_a.points, result.team_b.points
        )
    } else {
        format!(
            "With a final score of {} to {}, {} beat {} by {} points.",
            first.points, second.points, first.label, second.label, result.margin
        )
    };

    match stat_line(first, second, result.statistic) {
        Some(line) => format!("{score}\n{line}"),
        None => score,
    }
}

/// The 30 teams, one "Full Name (CODE)" per line.
pub fn team_list() -> String {
    TeamCode::ALL
        .iter()
        .map(|t| format!("{} ({})", t.full_name(), t.code()))
        .collect::<Vec<_>>()
        .join("\n")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use superteam_core::{Outcome, Position, RosterEntry, Selection};

    fn line(label: &str, points: u32, stat: Option<u32>) -> TeamLine {
        TeamLine {
            label: label.into(),
            points,
            stat,
        }
    }

    fn result(a: TeamLine, b: TeamLine, statistic: Statistic) -> GameResult {
        let outcome = Outcome::decide(a.points, b.points);
        let margin = a.points.abs_diff(b.points);
        GameResult {
            statistic,
            team_a: a,
            team_b: b,
            outcome,
            margin,
        }
    }

    fn roster(team: Option<TeamCode>, balanced: bool) -> Roster {
        let positions = [
            Position::PointGuard,
            Position::ShootingGuard,
            Position::SmallForward,
            Position::PowerForward,
            Position::Center,
        ];
        let entries = positions
            .iter()
            .enumerate()
            .map(|(i, p)| RosterEntry {
                name: format!("Player {}", i + 1),
                stat: 5.0,
                position: balanced.then_some(*p),
                points: 20.0,
            })
            .collect();
        let selection = Selection {
            statistic: Statistic::Assists,
            team,
            entries,
        };
        Roster::from_selection(selection, None).unwrap()
    }

    #[test]
    fn team_a_win_points_only() {
        let r = result(line("Superteam", 120, None), line("LAL", 110, None), Statistic::Points);
        assert_eq!(
            game_summary(&r),
            "With a final score of 120 to 110, Superteam beat LAL by 10 points."
        );
    }

    #[test]
    fn team_b_win_names_winner_first() {
        let r = result(
            line("Superteam", 98, Some(30)),
            line("LAL", 104, Some(25)),
            Statistic::Assists,
        );
        assert_eq!(
            game_summary(&r),
            "With a final score of 104 to 98, LAL beat Superteam by 6 points.\n\
             Also, LAL had 25 Assists and Superteam had 30 Assists."
        );
    }

    #[test]
    fn tie_keeps_team_a_first() {
        let r = result(
            line("Superteam", 100, Some(12)),
            line("BOS", 100, Some(9)),
            Statistic::Steals,
        );
        assert_eq!(
            game_summary(&r),
            "The game ended in a tie with a score of 100 to 100.\n\
             Also, Superteam had 12 Steals and BOS had 9 Steals."
        );
    }

    #[test]
    fn creation_messages_list_players() {
        let mine = roster(None, true);
        assert_eq!(
            super_team_created(&mine),
            "Great! You are responsible for the team: Superteam.\n\
             The players that had the best Assists and who are on your team are: \
             Player 1, Player 2, Player 3, Player 4, Player 5"
        );

        let theirs = roster(Some(TeamCode::LAL), false);
        assert_eq!(
            opponent_created(TeamCode::LAL, &theirs),
            "The Los Angeles Lakers's players with the best Assists are: \
             Player 1, Player 2, Player 3, Player 4, Player 5"
        );
    }

    #[test]
    fn roster_table_shows_positions_only_when_balanced() {
        let balanced = roster_table(&roster(None, true));
        assert!(balanced.starts_with("Superteam (Assists focus, one per position)"));
        assert!(balanced.contains("1. Player 1 [PG] - 5.0 AST, 20.0 PTS"));

        let plain = roster_table(&roster(Some(TeamCode::LAL), false));
        assert!(plain.starts_with("LAL (Assists focus)"));
        assert!(plain.contains("5. Player 5 - 5.0 AST, 20.0 PTS"));
        assert!(!plain.contains('['));
    }

    #[test]
    fn team_list_has_thirty_lines() {
        let list = team_list();
        assert_eq!(list.lines().count(), 30);
        assert!(list.contains("Golden State Warriors (GSW)"));
    }
}

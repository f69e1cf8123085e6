// Fixed enumerations: statistics, teams and positions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    #[error("unknown statistic '{0}' (expected Points, Assists, Rebounds, Steals or Blocks)")]
    UnknownStatistic(String),

    #[error("unknown team '{0}'")]
    UnknownTeam(String),

    #[error("unknown position '{0}'")]
    UnknownPosition(String),
}

// ---------------------------------------------------------------------------
// Statistic
// ---------------------------------------------------------------------------

/// The five per-game statistics a roster can be selected by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Statistic {
    Points,
    Assists,
    Rebounds,
    Steals,
    Blocks,
}

impl Statistic {
    pub const ALL: [Statistic; 5] = [
        Statistic::Points,
        Statistic::Assists,
        Statistic::Rebounds,
        Statistic::Steals,
        Statistic::Blocks,
    ];

    /// Column key in the season table (e.g. "PTS").
    pub fn column(&self) -> &'static str {
        match self {
            Statistic::Points => "PTS",
            Statistic::Assists => "AST",
            Statistic::Rebounds => "TRB",
            Statistic::Steals => "STL",
            Statistic::Blocks => "BLK",
        }
    }

    /// Human-readable name (e.g. "Points").
    pub fn display_name(&self) -> &'static str {
        match self {
            Statistic::Points => "Points",
            Statistic::Assists => "Assists",
            Statistic::Rebounds => "Rebounds",
            Statistic::Steals => "Steals",
            Statistic::Blocks => "Blocks",
        }
    }

    /// Parse either the display name or the column key, ignoring case.
    pub fn parse(s: &str) -> Result<Self, KeyError> {
        let needle = s.trim();
        Statistic::ALL
            .into_iter()
            .find(|stat| {
                stat.display_name().eq_ignore_ascii_case(needle)
                    || stat.column().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| KeyError::UnknownStatistic(s.to_string()))
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Statistic {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Statistic::parse(s)
    }
}

// ---------------------------------------------------------------------------
// TeamCode
// ---------------------------------------------------------------------------

/// One of the 30 league teams, identified by its three-letter table code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamCode {
    ATL,
    BOS,
    BRK,
    CHO,
    CHI,
    CLE,
    DAL,
    DEN,
    DET,
    GSW,
    HOU,
    IND,
    LAC,
    LAL,
    MEM,
    MIA,
    MIL,
    MIN,
    NOP,
    NYK,
    OKC,
    ORL,
    PHI,
    PHO,
    POR,
    SAC,
    SAS,
    TOR,
    UTA,
    WAS,
}

impl TeamCode {
    /// All teams in alphabetical order of their full names.
    pub const ALL: [TeamCode; 30] = [
        TeamCode::ATL,
        TeamCode::BOS,
        TeamCode::BRK,
        TeamCode::CHO,
        TeamCode::CHI,
        TeamCode::CLE,
        TeamCode::DAL,
        TeamCode::DEN,
        TeamCode::DET,
        TeamCode::GSW,
        TeamCode::HOU,
        TeamCode::IND,
        TeamCode::LAC,
        TeamCode::LAL,
        TeamCode::MEM,
        TeamCode::MIA,
        TeamCode::MIL,
        TeamCode::MIN,
        TeamCode::NOP,
        TeamCode::NYK,
        TeamCode::OKC,
        TeamCode::ORL,
        TeamCode::PHI,
        TeamCode::PHO,
        TeamCode::POR,
        TeamCode::SAC,
        TeamCode::SAS,
        TeamCode::TOR,
        TeamCode::UTA,
        TeamCode::WAS,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            TeamCode::ATL => "ATL",
            TeamCode::BOS => "BOS",
            TeamCode::BRK => "BRK",
            TeamCode::CHO => "CHO",
            TeamCode::CHI => "CHI",
            TeamCode::CLE => "CLE",
            TeamCode::DAL => "DAL",
            TeamCode::DEN => "DEN",
            TeamCode::DET => "DET",
            TeamCode::GSW => "GSW",
            TeamCode::HOU => "HOU",
            TeamCode::IND => "IND",
            TeamCode::LAC => "LAC",
            TeamCode::LAL => "LAL",
            TeamCode::MEM => "MEM",
            TeamCode::MIA => "MIA",
            TeamCode::MIL => "MIL",
            TeamCode::MIN => "MIN",
            TeamCode::NOP => "NOP",
            TeamCode::NYK => "NYK",
            TeamCode::OKC => "OKC",
            TeamCode::ORL => "ORL",
            TeamCode::PHI => "PHI",
            TeamCode::PHO => "PHO",
            TeamCode::POR => "POR",
            TeamCode::SAC => "SAC",
            TeamCode::SAS => "SAS",
            TeamCode::TOR => "TOR",
            TeamCode::UTA => "UTA",
            TeamCode::WAS => "WAS",
        }
    }

    pub fn full_name(&self) -> &'static str {
        match self {
            TeamCode::ATL => "Atlanta Hawks",
            TeamCode::BOS => "Boston Celtics",
            TeamCode::BRK => "Brooklyn Nets",
            TeamCode::CHO => "Charlotte Hornets",
            TeamCode::CHI => "Chicago Bulls",
            TeamCode::CLE => "Cleveland Cavaliers",
            TeamCode::DAL => "Dallas Mavericks",
            TeamCode::DEN => "Denver Nuggets",
            TeamCode::DET => "Detroit Pistons",
            TeamCode::GSW => "Golden State Warriors",
            TeamCode::HOU => "Houston Rockets",
            TeamCode::IND => "Indiana Pacers",
            TeamCode::LAC => "Los Angeles Clippers",
            TeamCode::LAL => "Los Angeles Lakers",
            TeamCode::MEM => "Memphis Grizzlies",
            TeamCode::MIA => "Miami Heat",
            TeamCode::MIL => "Milwaukee Bucks",
            TeamCode::MIN => "Minnesota Timberwolves",
            TeamCode::NOP => "New Orleans Pelicans",
            TeamCode::NYK => "New York Knicks",
            TeamCode::OKC => "Oklahoma City Thunder",
            TeamCode::ORL => "Orlando Magic",
            TeamCode::PHI => "Philadelphia 76ers",
            TeamCode::PHO => "Phoenix Suns",
            TeamCode::POR => "Portland Trail Blazers",
            TeamCode::SAC => "Sacramento Kings",
            TeamCode::SAS => "San Antonio Spurs",
            TeamCode::TOR => "Toronto Raptors",
            TeamCode::UTA => "Utah Jazz",
            TeamCode::WAS => "Washington Wizards",
        }
    }

    /// Parse a full team name or a code, ignoring case.
    pub fn parse(s: &str) -> Result<Self, KeyError> {
        let needle = s.trim();
        TeamCode::ALL
            .into_iter()
            .find(|t| {
                t.full_name().eq_ignore_ascii_case(needle) || t.code().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| KeyError::UnknownTeam(s.to_string()))
    }
}

impl fmt::Display for TeamCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for TeamCode {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TeamCode::parse(s)
    }
}

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// Canonical basketball positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    PointGuard,
    ShootingGuard,
    SmallForward,
    PowerForward,
    Center,
}

impl Position {
    /// Parse a table position string. Composite strings ("PG-SG") resolve to
    /// their first component.
    pub fn from_str_pos(s: &str) -> Option<Self> {
        let canonical = s.split('-').next().unwrap_or_default().trim();
        match canonical.to_uppercase().as_str() {
            "PG" => Some(Position::PointGuard),
            "SG" => Some(Position::ShootingGuard),
            "SF" => Some(Position::SmallForward),
            "PF" => Some(Position::PowerForward),
            "C" => Some(Position::Center),
            _ => None,
        }
    }

    pub fn display_str(&self) -> &'static str {
        match self {
            Position::PointGuard => "PG",
            Position::ShootingGuard => "SG",
            Position::SmallForward => "SF",
            Position::PowerForward => "PF",
            Position::Center => "C",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_str())
    }
}

impl FromStr for Position {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_str_pos(s).ok_or_else(|| KeyError::UnknownPosition(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DashboardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Qb,
    Rb,
    Wr,
    Te,
}

impl Position {
    /// Tab order on the dashboard.
    pub const ALL: [Position; 4] = [Position::Qb, Position::Rb, Position::Wr, Position::Te];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Position::Qb => "qb",
            Position::Rb => "rb",
            Position::Wr => "wr",
            Position::Te => "te",
        }
    }

    #[must_use]
    pub fn display_plural(self) -> &'static str {
        match self {
            Position::Qb => "Quarterbacks",
            Position::Rb => "Running Backs",
            Position::Wr => "Wide Receivers",
            Position::Te => "Tight Ends",
        }
    }

    #[must_use]
    pub fn display_singular(self) -> &'static str {
        match self {
            Position::Qb => "Quarterback",
            Position::Rb => "Running Back",
            Position::Wr => "Wide Receiver",
            Position::Te => "Tight End",
        }
    }

    /// Lowercase noun used in status sentences ("select at least one quarterback").
    #[must_use]
    pub fn noun_singular(self) -> String {
        self.display_singular().to_lowercase()
    }

    #[must_use]
    pub fn noun_plural(self) -> String {
        self.display_plural().to_lowercase()
    }

    #[must_use]
    pub fn legend_title(self) -> &'static str {
        self.display_plural()
    }

    #[must_use]
    pub fn source_file_name(self) -> String {
        format!("{}_stats.csv", self.slug())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Position {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "qb" => Ok(Position::Qb),
            "rb" => Ok(Position::Rb),
            "wr" => Ok(Position::Wr),
            "te" => Ok(Position::Te),
            _ => Err(DashboardError::UnknownPosition(s.to_string())),
        }
    }
}

use serde::{Serialize, Serializer};
use std::fmt;

/// Canonical column names shared by every position table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Year,
    Rank,
    Name,
    Age,
    Experience,
    GamesPlayed,
    Completions,
    Attempts,
    CompletionPercentage,
    PassingYards,
    YardsPerAttempt,
    PassingTouchdowns,
    Interceptions,
    RushingAttempts,
    RushingYards,
    YardsPerRush,
    RushingTouchdowns,
    Receptions,
    ReceivingYards,
    YardsPerReception,
    ReceivingTouchdowns,
    FantasyPointsPerGame,
    TotalFantasyPoints,
    Team,
}

impl Field {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Year => "Year",
            Field::Rank => "Rank",
            Field::Name => "Name",
            Field::Age => "Age",
            Field::Experience => "Experience",
            Field::GamesPlayed => "Games_Played",
            Field::Completions => "Completions",
            Field::Attempts => "Attempts",
            Field::CompletionPercentage => "Completion_Percentage",
            Field::PassingYards => "Passing_Yards",
            Field::YardsPerAttempt => "Yards_Per_Attempt",
            Field::PassingTouchdowns => "Passing_Touchdowns",
            Field::Interceptions => "Interceptions",
            Field::RushingAttempts => "Rushing_Attempts",
            Field::RushingYards => "Rushing_Yards",
            Field::YardsPerRush => "Yards_Per_Rush",
            Field::RushingTouchdowns => "Rushing_Touchdowns",
            Field::Receptions => "Receptions",
            Field::ReceivingYards => "Receiving_Yards",
            Field::YardsPerReception => "Yards_Per_Reception",
            Field::ReceivingTouchdowns => "Receiving_Touchdowns",
            Field::FantasyPointsPerGame => "Fantasy_Points_Per_Game",
            Field::TotalFantasyPoints => "Total_Fantasy_Points",
            Field::Team => "Team",
        }
    }

    /// Lowercased with everything but ascii alphanumerics stripped, so
    /// "Passing Yards", "passing_yards" and "Passing_Yards" compare equal.
    #[must_use]
    pub fn header_key(self) -> String {
        normalize_header(self.as_str())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[must_use]
pub fn normalize_header(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// One cell as read from the source file. No imputation happens at load.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i64),
    Float(f64),
    Text(String),
    Missing,
}

impl FieldValue {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return FieldValue::Missing;
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            return FieldValue::Int(i);
        }
        match trimmed.parse::<f64>() {
            Ok(f) if f.is_finite() => FieldValue::Float(f),
            Ok(_) => FieldValue::Missing,
            Err(_) => FieldValue::Text(trimmed.to_string()),
        }
    }

    /// Numeric view used for plotting; text and missing cells have none.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Int(i) => Some(*i as f64),
            FieldValue::Float(f) => Some(*f),
            FieldValue::Text(_) | FieldValue::Missing => None,
        }
    }
}

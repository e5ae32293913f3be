use super::field::Field;
use super::position::Position;
use crate::error::DashboardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCatalogEntry {
    pub label: &'static str,
    pub field: Field,
}

const fn entry(label: &'static str, field: Field) -> StatCatalogEntry {
    StatCatalogEntry { label, field }
}

const QB_STATS: &[StatCatalogEntry] = &[
    entry("Rank", Field::Rank),
    entry("Games Played", Field::GamesPlayed),
    entry("Completions", Field::Completions),
    entry("Attempts", Field::Attempts),
    entry("Completion Percentage", Field::CompletionPercentage),
    entry("Passing Yards", Field::PassingYards),
    entry("Yards Per Attempt", Field::YardsPerAttempt),
    entry("Passing Touchdowns", Field::PassingTouchdowns),
    entry("Interceptions", Field::Interceptions),
    entry("Rushing Attempts", Field::RushingAttempts),
    entry("Rushing Yards", Field::RushingYards),
    entry("Rushing Touchdowns", Field::RushingTouchdowns),
    entry("Fantasy Points Per Game", Field::FantasyPointsPerGame),
    entry("Total Fantasy Points", Field::TotalFantasyPoints),
];

const RB_STATS: &[StatCatalogEntry] = &[
    entry("Rank", Field::Rank),
    entry("Games Played", Field::GamesPlayed),
    entry("Rushing Attempts", Field::RushingAttempts),
    entry("Rushing Yards", Field::RushingYards),
    entry("Yards Per Rush", Field::YardsPerRush),
    entry("Rushing Touchdowns", Field::RushingTouchdowns),
    entry("Receptions", Field::Receptions),
    entry("Receiving Yards", Field::ReceivingYards),
    entry("Receiving Touchdowns", Field::ReceivingTouchdowns),
    entry("Fantasy Points Per Game", Field::FantasyPointsPerGame),
    entry("Total Fantasy Points", Field::TotalFantasyPoints),
];

const WR_STATS: &[StatCatalogEntry] = &[
    entry("Rank", Field::Rank),
    entry("Games Played", Field::GamesPlayed),
    entry("Rushing Attempts", Field::RushingAttempts),
    entry("Rushing Yards", Field::RushingYards),
    entry("Rushing Touchdowns", Field::RushingTouchdowns),
    entry("Receptions", Field::Receptions),
    entry("Receiving Yards", Field::ReceivingYards),
    entry("Yards Per Receptions", Field::YardsPerReception),
    entry("Receiving Touchdowns", Field::ReceivingTouchdowns),
    entry("Fantasy Points Per Game", Field::FantasyPointsPerGame),
    entry("Total Fantasy Points", Field::TotalFantasyPoints),
];

const TE_STATS: &[StatCatalogEntry] = &[
    entry("Rank", Field::Rank),
    entry("Games Played", Field::GamesPlayed),
    entry("Receptions", Field::Receptions),
    entry("Receiving Yards", Field::ReceivingYards),
    entry("Yards Per Receptions", Field::YardsPerReception),
    entry("Receiving Touchdowns", Field::ReceivingTouchdowns),
    entry("Fantasy Points Per Game", Field::FantasyPointsPerGame),
    entry("Total Fantasy Points", Field::TotalFantasyPoints),
];

/// Ordered (label, field) pairs offered in a position's stat selector.
#[derive(Debug, Clone, Copy)]
pub struct StatCatalog {
    pub position: Position,
    entries: &'static [StatCatalogEntry],
}

impl StatCatalog {
    #[must_use]
    pub fn for_position(position: Position) -> Self {
        let entries = match position {
            Position::Qb => QB_STATS,
            Position::Rb => RB_STATS,
            Position::Wr => WR_STATS,
            Position::Te => TE_STATS,
        };
        Self { position, entries }
    }

    #[must_use]
    pub fn entries(&self) -> &'static [StatCatalogEntry] {
        self.entries
    }

    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.label)
    }

    /// What a freshly opened panel shows before the user picks a stat.
    #[must_use]
    pub fn default_label(&self) -> &'static str {
        self.entries[0].label
    }

    /// # Errors
    ///
    /// Will return `UnknownStat` if `label` is not in this catalog.
    pub fn field_for(&self, label: &str) -> Result<Field, DashboardError> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.field)
            .ok_or_else(|| DashboardError::UnknownStat {
                position: self.position,
                label: label.to_string(),
            })
    }
}

#![allow(dead_code)]

use std::path::PathBuf;

use fantasy_stats::model::{DashboardContext, Position, PositionTable, load_position_table};

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

pub fn fixture_table(position: Position) -> PositionTable {
    let path = fixtures_dir().join(position.source_file_name());
    load_position_table(position, &path).expect("fixture table should load")
}

pub fn fixture_context() -> DashboardContext {
    DashboardContext::load(&fixtures_dir())
}

/// Context where only the given positions are available.
pub fn partial_context(positions: &[Position]) -> DashboardContext {
    DashboardContext::from_tables(positions.iter().map(|p| fixture_table(*p)).collect())
}

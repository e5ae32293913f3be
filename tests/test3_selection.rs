mod common;

use fantasy_stats::controller::selection::{Selection, filter_records};
use fantasy_stats::model::Position;

use common::fixture_table;

#[test]
fn test_empty_selection_yields_nothing() {
    for position in Position::ALL {
        let table = fixture_table(position);
        assert!(filter_records(&table, &Selection::new()).is_empty());
    }
}

#[test]
fn test_unmatched_names_yield_nothing() {
    let table = fixture_table(Position::Wr);
    let selection: Selection = ["Ghost Player"].into_iter().collect();
    assert!(filter_records(&table, &selection).is_empty());
}

#[test]
fn test_filter_is_sound_and_complete() {
    let table = fixture_table(Position::Qb);
    let selection: Selection = ["Player A", "Player C", "Ghost Player"].into_iter().collect();
    let rows = filter_records(&table, &selection);

    assert!(rows.iter().all(|r| selection.contains(&r.name)));
    let expected = table
        .records
        .iter()
        .filter(|r| r.name == "Player A" || r.name == "Player C")
        .count();
    assert_eq!(rows.len(), expected);
    assert_eq!(rows.len(), 3);
}

#[test]
fn test_filter_preserves_table_order() {
    let table = fixture_table(Position::Qb);
    let selection: Selection = ["Player B", "Player A"].into_iter().collect();
    let rows: Vec<(String, i32)> = filter_records(&table, &selection)
        .iter()
        .map(|r| (r.name.clone(), r.year))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("Player A".to_string(), 2020),
            ("Player A".to_string(), 2021),
            ("Player B".to_string(), 2020),
            ("Player B".to_string(), 2021),
        ]
    );
}

#[test]
fn test_selection_ignores_blank_names() {
    let selection: Selection = ["", "  ", "Player A "].into_iter().collect();
    assert_eq!(selection.len(), 1);
    assert!(selection.contains("Player A"));
}

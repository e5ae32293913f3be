use fantasy_stats::DashboardError;
use fantasy_stats::model::{Field, Position, StatCatalog, source_layout};

#[test]
fn test_labels_keep_catalog_order() {
    let catalog = StatCatalog::for_position(Position::Qb);
    let labels: Vec<&str> = catalog.labels().collect();
    assert_eq!(labels.first(), Some(&"Rank"));
    assert_eq!(labels.last(), Some(&"Total Fantasy Points"));
    assert_eq!(labels.len(), 14);
    let yards = labels.iter().position(|l| *l == "Passing Yards").unwrap();
    let tds = labels.iter().position(|l| *l == "Passing Touchdowns").unwrap();
    assert!(yards < tds);
}

#[test]
fn test_label_lookup_resolves_field() {
    let catalog = StatCatalog::for_position(Position::Qb);
    assert_eq!(catalog.field_for("Passing Yards").unwrap(), Field::PassingYards);
    assert_eq!(
        StatCatalog::for_position(Position::Te)
            .field_for("Yards Per Receptions")
            .unwrap(),
        Field::YardsPerReception
    );
}

#[test]
fn test_receiver_efficiency_label_keeps_dashboard_wording() {
    for position in [Position::Wr, Position::Te] {
        let catalog = StatCatalog::for_position(position);
        assert!(catalog.labels().any(|l| l == "Yards Per Receptions"));
        assert!(catalog.labels().all(|l| l != "Yards Per Reception"));
        assert_eq!(
            catalog.field_for("Yards Per Receptions").unwrap().as_str(),
            "Yards_Per_Reception"
        );
    }
}

#[test]
fn test_unknown_label_is_unknown_stat() {
    let err = StatCatalog::for_position(Position::Rb)
        .field_for("Passing Yards")
        .unwrap_err();
    match err {
        DashboardError::UnknownStat { position, label } => {
            assert_eq!(position, Position::Rb);
            assert_eq!(label, "Passing Yards");
        }
        other => panic!("expected UnknownStat, got {other:?}"),
    }
}

#[test]
fn test_catalog_fields_exist_in_layout_and_skip_identity_fields() {
    let identity = [Field::Year, Field::Name, Field::Team, Field::Age, Field::Experience];
    for position in Position::ALL {
        let catalog = StatCatalog::for_position(position);
        let layout = source_layout(position);
        let mut last_idx = 0;
        for entry in catalog.entries() {
            assert!(!identity.contains(&entry.field), "{position}: {}", entry.label);
            let idx = layout
                .iter()
                .position(|f| *f == entry.field)
                .unwrap_or_else(|| panic!("{position}: {} not in layout", entry.field));
            assert!(idx >= last_idx, "{position}: catalog out of layout order");
            last_idx = idx;
        }
        let comparable = layout.iter().filter(|f| !identity.contains(*f)).count();
        assert_eq!(catalog.entries().len(), comparable, "{position}");
    }
}

#[test]
fn test_default_label_is_first_entry() {
    for position in Position::ALL {
        let catalog = StatCatalog::for_position(position);
        assert_eq!(Some(catalog.default_label()), catalog.labels().next());
    }
}

use ahash::AHashMap;

use super::types::{Axis, ChartPoint, ChartSpec, LineShape, Series};
use crate::model::{Field, PlayerSeasonRecord, Position};

/// Qualitative palette, cycled when there are more players than colors.
pub const SERIES_COLORS: [&str; 10] = [
    "#636efa", "#ef553b", "#00cc96", "#ab63fa", "#ffa15a", "#19d3f3", "#ff6692", "#b6e880",
    "#ff97fe", "#fecb52",
];

/// Group filtered records by Name into one series each, in the order names
/// first appear. Points keep record order; nothing is sorted, imputed or dropped.
#[must_use]
pub fn build_chart_spec(records: &[&PlayerSeasonRecord], field: Field, label: &str) -> ChartSpec {
    let mut index_by_name: AHashMap<&str, usize> = AHashMap::new();
    let mut series: Vec<Series> = Vec::new();

    for record in records {
        let idx = *index_by_name.entry(record.name.as_str()).or_insert_with(|| {
            series.push(Series {
                name: record.name.clone(),
                color: SERIES_COLORS[series.len() % SERIES_COLORS.len()],
                points: Vec::new(),
            });
            series.len() - 1
        });

        series[idx].points.push(ChartPoint {
            x: record.year,
            y: record.get(field).and_then(|v| v.as_f64()),
        });
    }

    ChartSpec {
        title: format!("{label} Comparison"),
        x_axis: Axis {
            title: "Year".to_string(),
            field: Field::Year,
        },
        y_axis: Axis {
            title: label.to_string(),
            field,
        },
        legend_title: "Name".to_string(),
        line_shape: LineShape::Spline,
        markers: true,
        series,
    }
}

impl ChartSpec {
    /// Title and legend naming the position, e.g. "Passing Yards Comparison
    /// for Selected Quarterbacks".
    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.title = format!(
            "{} Comparison for Selected {}",
            self.y_axis.title,
            position.display_plural()
        );
        self.legend_title = position.legend_title().to_string();
        self
    }
}

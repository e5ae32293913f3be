use serde::Serialize;

use crate::model::Field;

/// Carried in the JSON chart spec; the SVG renderer always draws splines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineShape {
    Spline,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: String,
    pub field: Field,
}

/// `y` is `None` where the record's value is missing or not numeric; the
/// point is kept so the line shows a gap there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    pub x: i32,
    pub y: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub color: &'static str,
    pub points: Vec<ChartPoint>,
}

/// Library-independent description of a year-over-year line chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub legend_title: String,
    pub line_shape: LineShape,
    pub markers: bool,
    pub series: Vec<Series>,
}

impl ChartSpec {
    /// Smallest and largest year over all series.
    #[must_use]
    pub fn x_range(&self) -> Option<(i32, i32)> {
        let mut years = self.series.iter().flat_map(|s| s.points.iter().map(|p| p.x));
        let first = years.next()?;
        Some(years.fold((first, first), |(lo, hi), x| (lo.min(x), hi.max(x))))
    }

    /// Smallest and largest plotted value, ignoring gaps.
    #[must_use]
    pub fn y_range(&self) -> Option<(f64, f64)> {
        let mut values = self
            .series
            .iter()
            .flat_map(|s| s.points.iter().filter_map(|p| p.y));
        let first = values.next()?;
        Some(values.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y))))
    }
}

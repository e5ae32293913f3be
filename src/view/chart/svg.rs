use maud::{Markup, html};
use std::fmt::Write;

use super::types::{ChartPoint, ChartSpec};

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 420.0;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 40.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 60.0;
const Y_TICK_TARGET: usize = 5;
const MAX_Y_TICKS: usize = 4 * Y_TICK_TARGET;

struct Scale {
    x_lo: f64,
    x_hi: f64,
    y_lo: f64,
    y_hi: f64,
}

impl Scale {
    fn plot_width() -> f64 {
        WIDTH - MARGIN_LEFT - MARGIN_RIGHT
    }

    fn plot_height() -> f64 {
        HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
    }

    fn x(&self, year: i32) -> f64 {
        MARGIN_LEFT + (f64::from(year) - self.x_lo) / (self.x_hi - self.x_lo) * Self::plot_width()
    }

    // Halved so spans near f64::MAX stay finite.
    fn y(&self, value: f64) -> f64 {
        MARGIN_TOP
            + (self.y_hi / 2.0 - value / 2.0) / (self.y_hi / 2.0 - self.y_lo / 2.0)
                * Self::plot_height()
    }
}

/// 1, 2 or 5 times a power of ten, at least `raw`.
fn nice_step(raw: f64) -> f64 {
    if raw <= 0.0 || !raw.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let fraction = raw / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// `n + 1` evenly spaced values from `lo` to `hi` without forming `hi - lo`.
fn even_ticks(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    let n_f = n as f64;
    (0..=n)
        .map(|i| match i {
            0 => lo,
            i if i == n => hi,
            i => lo / n_f * (n - i) as f64 + hi / n_f * i as f64,
        })
        .collect()
}

/// Tick values covering `[lo, hi]`, widened to whole steps. Always at least
/// two strictly increasing finite values and never more than `MAX_Y_TICKS + 1`.
#[must_use]
pub fn y_ticks(lo: f64, hi: f64) -> Vec<f64> {
    if !lo.is_finite() || !hi.is_finite() || hi < lo {
        return vec![0.0, 1.0];
    }
    let magnitude = lo.abs().max(hi.abs());
    let (lo, hi) = if hi - lo <= magnitude * 1e-9 {
        let pad = (magnitude * 0.05).max(1.0);
        ((lo - pad).max(f64::MIN), (hi + pad).min(f64::MAX))
    } else {
        (lo, hi)
    };
    let span = hi - lo;
    if !span.is_finite() {
        return even_ticks(lo, hi, Y_TICK_TARGET);
    }
    let step = nice_step(span / Y_TICK_TARGET as f64);
    let start = (lo / step).floor() * step;
    let end = (hi / step).ceil() * step;
    let count = ((end - start) / step).round();
    if !start.is_finite() || !end.is_finite() || !(1.0..=MAX_Y_TICKS as f64).contains(&count) {
        return even_ticks(lo, hi, Y_TICK_TARGET);
    }
    (0..=count as usize).map(|i| start + step * i as f64).collect()
}

#[must_use]
pub fn x_ticks(lo: i32, hi: i32) -> Vec<i32> {
    let span = (i64::from(hi) - i64::from(lo)).max(1);
    let step = usize::try_from((span + 9) / 10).unwrap_or(1).max(1);
    (lo..=hi).step_by(step).collect()
}

#[must_use]
pub fn format_value(value: f64) -> String {
    if value.fract().abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        let s = format!("{value:.2}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Splits a series at gaps; each run is drawn as its own line.
fn runs(points: &[ChartPoint]) -> Vec<Vec<(i32, f64)>> {
    let mut out = Vec::new();
    let mut current = Vec::new();
    for point in points {
        match point.y {
            Some(y) => current.push((point.x, y)),
            None => {
                if !current.is_empty() {
                    out.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

/// SVG path data through `pts`, as Catmull-Rom segments expressed as cubic
/// Béziers so the curve passes through every marker.
#[must_use]
pub fn path_data(pts: &[(f64, f64)]) -> String {
    let mut d = String::new();
    let Some(&(x0, y0)) = pts.first() else {
        return d;
    };
    let _ = write!(d, "M{x0:.2},{y0:.2}");
    for i in 0..pts.len().saturating_sub(1) {
        let p1 = pts[i];
        let p2 = pts[i + 1];
        let p0 = if i == 0 { p1 } else { pts[i - 1] };
        let p3 = if i + 2 < pts.len() { pts[i + 2] } else { p2 };
        let c1 = (p1.0 + (p2.0 - p0.0) / 6.0, p1.1 + (p2.1 - p0.1) / 6.0);
        let c2 = (p2.0 - (p3.0 - p1.0) / 6.0, p2.1 - (p3.1 - p1.1) / 6.0);
        let _ = write!(
            d,
            " C{:.2},{:.2} {:.2},{:.2} {:.2},{:.2}",
            c1.0, c1.1, c2.0, c2.1, p2.0, p2.1
        );
    }
    d
}

#[must_use]
pub fn render_chart(spec: &ChartSpec) -> Markup {
    let (x_lo, x_hi) = spec.x_range().unwrap_or((0, 1));
    let (x_lo, x_hi) = if x_lo == x_hi {
        (f64::from(x_lo) - 1.0, f64::from(x_hi) + 1.0)
    } else {
        (f64::from(x_lo), f64::from(x_hi))
    };
    let (y_lo, y_hi) = spec.y_range().unwrap_or((0.0, 1.0));
    let y_tick_values = y_ticks(y_lo, y_hi);
    let scale = Scale {
        x_lo,
        x_hi,
        y_lo: y_tick_values.first().copied().unwrap_or(y_lo),
        y_hi: y_tick_values.last().copied().unwrap_or(y_hi),
    };
    let x_tick_values = match spec.x_range() {
        Some((lo, hi)) => x_ticks(lo, hi),
        None => Vec::new(),
    };
    let bottom = HEIGHT - MARGIN_BOTTOM;
    let right = WIDTH - MARGIN_RIGHT;

    html! {
        figure class="stat-chart" {
            figcaption class="chart-title" { (spec.title) }
            div class="chart-legend" {
                span class="legend-title" { (spec.legend_title) }
                @for series in &spec.series {
                    span class="legend-item" data-series=(series.name) {
                        span class="legend-swatch" style=(format!("background-color: {};", series.color)) {}
                        (series.name)
                    }
                }
            }
            svg class="chart-plot" xmlns="http://www.w3.org/2000/svg"
                viewBox=(format!("0 0 {WIDTH} {HEIGHT}")) preserveAspectRatio="xMidYMid meet" role="img"
                aria-label=(spec.title) {
                g class="grid" {
                    @for tick in &y_tick_values {
                        line x1=(MARGIN_LEFT) x2=(right) y1=(scale.y(*tick)) y2=(scale.y(*tick)) {}
                    }
                }
                g class="axis x-axis" {
                    line x1=(MARGIN_LEFT) x2=(right) y1=(bottom) y2=(bottom) {}
                    @for year in &x_tick_values {
                        text x=(scale.x(*year)) y=(bottom + 20.0) text-anchor="middle" { (year) }
                    }
                    text class="axis-title" x=(MARGIN_LEFT + Scale::plot_width() / 2.0) y=(HEIGHT - 15.0) text-anchor="middle" {
                        (spec.x_axis.title)
                    }
                }
                g class="axis y-axis" {
                    line x1=(MARGIN_LEFT) x2=(MARGIN_LEFT) y1=(MARGIN_TOP) y2=(bottom) {}
                    @for tick in &y_tick_values {
                        text x=(MARGIN_LEFT - 8.0) y=(scale.y(*tick) + 4.0) text-anchor="end" { (format_value(*tick)) }
                    }
                    text class="axis-title" x="18" y=(MARGIN_TOP + Scale::plot_height() / 2.0) text-anchor="middle"
                        transform=(format!("rotate(-90 18 {})", MARGIN_TOP + Scale::plot_height() / 2.0)) {
                        (spec.y_axis.title)
                    }
                }
                @for series in &spec.series {
                    g class="series" data-series=(series.name) {
                        @for run in runs(&series.points) {
                            @let pts = run.iter().map(|(x, y)| (scale.x(*x), scale.y(*y))).collect::<Vec<_>>();
                            @if pts.len() > 1 {
                                path d=(path_data(&pts)) fill="none" stroke=(series.color) stroke-width="2.5" {}
                            }
                        }
                        @if spec.markers {
                            @for point in &series.points {
                                @if let Some(y) = point.y {
                                    circle class="marker" cx=(scale.x(point.x)) cy=(scale.y(y)) r="4" fill=(series.color) {
                                        title { (format!("{}, {}: {}", series.name, point.x, format_value(y))) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

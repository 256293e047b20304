//! Pure geometry for the hand-rendered SVG charts.
//!
//! Everything here maps data values to pixel coordinates inside a fixed
//! plot area; no DOM types appear so the math stays unit-testable. The
//! view module turns the results into `<svg>` markup.

/// Fill colors assigned to chart series, cycled by index.
pub const SERIES_COLORS: [&str; 6] = [
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#b07aa1",
];

pub const CHART_WIDTH: f64 = 640.0;
pub const CHART_HEIGHT: f64 = 280.0;

/// Pixel rectangle the marks are drawn into; the margins around it hold
/// axis labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn standard() -> PlotArea {
        PlotArea {
            left: 48.0,
            top: 12.0,
            width: CHART_WIDTH - 48.0 - 16.0,
            height: CHART_HEIGHT - 12.0 - 28.0,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

pub fn series_color(index: usize) -> &'static str {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}

/// Upper bound for the y axis: the smallest of 1/2/5 × 10^k that covers the
/// data maximum. Non-finite values are ignored; an all-empty or
/// non-positive input gets a 1.0 axis so the frame still draws.
pub fn axis_max<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    let max = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powi(max.log10().floor() as i32);
    for step in [1.0, 2.0, 5.0] {
        let candidate = step * magnitude;
        if candidate >= max {
            return candidate;
        }
    }
    10.0 * magnitude
}

/// Vertical pixel position of `value` on a 0..=max axis.
pub fn y_to_pixel(value: f64, max: f64, area: &PlotArea) -> f64 {
    let clamped = (value / max).clamp(0.0, 1.0);
    area.top + area.height * (1.0 - clamped)
}

/// Horizontal center of slot `index` among `count` equal slots.
pub fn slot_center(index: usize, count: usize, area: &PlotArea) -> f64 {
    let slot = area.width / count.max(1) as f64;
    area.left + slot * (index as f64 + 0.5)
}

/// `points` attribute of a polyline through the finite values, one slot per
/// entry. Non-finite entries leave a gap in the x spacing but no point, so
/// row alignment survives missing cells.
pub fn polyline_points(values: &[f64], max: f64, area: &PlotArea) -> String {
    values
        .iter()
        .enumerate()
        .filter(|(_, v)| v.is_finite())
        .map(|(i, v)| {
            format!(
                "{:.1},{:.1}",
                slot_center(i, values.len(), area),
                y_to_pixel(*v, max, area)
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One bar of a grouped bar chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Lays out bar `series` of `series_count` inside group `group` of
/// `group_count`. Returns `None` for values that cannot be drawn (NaN or
/// non-positive), keeping group slots aligned regardless.
pub fn bar_layout(
    group: usize,
    group_count: usize,
    series: usize,
    series_count: usize,
    value: f64,
    max: f64,
    area: &PlotArea,
) -> Option<Bar> {
    if !value.is_finite() || value <= 0.0 {
        return None;
    }
    let slot = area.width / group_count.max(1) as f64;
    // Bars fill 80% of the slot; the rest is padding between groups.
    let band = slot * 0.8;
    let bar_width = band / series_count.max(1) as f64;
    let x = area.left + slot * group as f64 + slot * 0.1 + bar_width * series as f64;
    let y = y_to_pixel(value, max, area);
    Some(Bar {
        x,
        y,
        width: bar_width,
        height: area.bottom() - y,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_max_rounds_up_to_nice_values() {
        assert_eq!(axis_max([3.5]), 5.0);
        assert_eq!(axis_max([7.0, 2.0]), 10.0);
        assert_eq!(axis_max([10.0]), 10.0);
        assert_eq!(axis_max([0.3]), 0.5);
        assert_eq!(axis_max([120.0]), 200.0);
    }

    #[test]
    fn axis_max_defaults_to_one_without_positive_data() {
        assert_eq!(axis_max([]), 1.0);
        assert_eq!(axis_max([f64::NAN, 0.0]), 1.0);
    }

    #[test]
    fn y_to_pixel_spans_the_plot_area() {
        let area = PlotArea::standard();
        assert_eq!(y_to_pixel(0.0, 10.0, &area), area.bottom());
        assert_eq!(y_to_pixel(10.0, 10.0, &area), area.top);
    }

    #[test]
    fn polyline_skips_nan_but_keeps_slots() {
        let area = PlotArea {
            left: 0.0,
            top: 0.0,
            width: 300.0,
            height: 100.0,
        };
        let points = polyline_points(&[10.0, f64::NAN, 5.0], 10.0, &area);
        let pairs: Vec<&str> = points.split(' ').collect();
        assert_eq!(pairs.len(), 2);
        // First point sits in slot 0 of 3, last in slot 2 of 3.
        assert!(pairs[0].starts_with("50.0,"));
        assert!(pairs[1].starts_with("250.0,"));
    }

    #[test]
    fn bars_of_a_group_stay_inside_their_slot() {
        let area = PlotArea {
            left: 0.0,
            top: 0.0,
            width: 200.0,
            height: 100.0,
        };
        let first = bar_layout(0, 2, 0, 2, 5.0, 10.0, &area).expect("drawable");
        let second = bar_layout(0, 2, 1, 2, 5.0, 10.0, &area).expect("drawable");
        assert!(first.x >= 0.0);
        assert_eq!(first.x + first.width, second.x);
        assert!(second.x + second.width <= 100.0);
        assert_eq!(first.height, 50.0);
    }

    #[test]
    fn undrawable_bars_are_skipped() {
        let area = PlotArea::standard();
        assert!(bar_layout(0, 1, 0, 1, f64::NAN, 10.0, &area).is_none());
        assert!(bar_layout(0, 1, 0, 1, 0.0, 10.0, &area).is_none());
    }

    #[test]
    fn series_colors_cycle() {
        assert_eq!(series_color(0), SERIES_COLORS[0]);
        assert_eq!(series_color(SERIES_COLORS.len()), SERIES_COLORS[0]);
    }
}

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    prelude::Direction,
    style::{Color, Style},
    symbols::Marker,
    widgets::{Axis, Bar, BarChart, Block, Chart, Dataset, GraphType, Widget},
};
use varistat_stats::grouped::Bin;

/// Horizontal bar chart of bin frequencies, one labelled bar per bin.
pub(super) struct BinHistogram<'a> {
    pub title: &'a str,
    pub bins: &'a [Bin],
}

impl Widget for BinHistogram<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let chart = BarChart::new(
            self.bins
                .iter()
                .map(|bin| {
                    Bar::with_label(
                        format!("{:8.2}-{:8.2}", bin.range.start, bin.range.end),
                        bin.count,
                    )
                    .text_value(format!("{}", bin.count))
                })
                .collect::<Vec<_>>(),
        )
        .block(Block::bordered().title(self.title))
        .direction(Direction::Horizontal)
        .bar_style(Style::default().fg(Color::Cyan))
        .bar_gap(0);

        Widget::render(chart, area, buf);
    }
}

/// Line chart through a sequence of points.
pub(super) struct LinePlot<'a> {
    pub title: &'a str,
    pub data: &'a [(f64, f64)],
    pub x_title: &'a str,
    pub x_bounds: [f64; 2],
    pub y_title: &'a str,
    pub y_bounds: [f64; 2],
}

impl Widget for LinePlot<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let dataset = Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(self.data);
        let x_axis = Axis::default()
            .title(self.x_title)
            .bounds(self.x_bounds)
            .labels(axis_labels(self.x_bounds));
        let y_axis = Axis::default()
            .title(self.y_title)
            .bounds(self.y_bounds)
            .labels(axis_labels(self.y_bounds));
        let chart = Chart::new(vec![dataset])
            .block(Block::bordered().title(self.title))
            .x_axis(x_axis)
            .y_axis(y_axis);

        Widget::render(chart, area, buf);
    }
}

fn axis_labels(bounds: [f64; 2]) -> [String; 3] {
    [
        format!("{:.2}", bounds[0]),
        format!("{:.2}", f64::midpoint(bounds[0], bounds[1])),
        format!("{:.2}", bounds[1]),
    ]
}

/// Returns `[min, max]` of `values` widened by 5% on each side.
///
/// A zero-width range is widened by 0.5 so the axis stays drawable.
pub(super) fn padded_bounds<I>(values: I) -> [f64; 2]
where
    I: IntoIterator<Item = f64>,
{
    let (min, max) = values
        .into_iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
            (min.min(v), max.max(v))
        });
    if min > max {
        return [0.0, 1.0];
    }
    let pad = if max > min { (max - min) * 0.05 } else { 0.5 };
    [min - pad, max + pad]
}

/// Expands `(value, F(value))` step corners into a polyline of a
/// right-continuous step function over `x_bounds`.
///
/// The line starts at 0 on the left bound, jumps vertically at each value and
/// runs flat to the next value, ending at the right bound.
pub(super) fn step_polyline(steps: &[(f64, f64)], x_bounds: [f64; 2]) -> Vec<(f64, f64)> {
    let mut points = Vec::with_capacity(steps.len() * 2 + 2);
    let mut level = 0.0;
    points.push((x_bounds[0], level));
    for &(x, f) in steps {
        points.push((x, level));
        points.push((x, f));
        level = f;
    }
    points.push((x_bounds[1], level));
    points
}

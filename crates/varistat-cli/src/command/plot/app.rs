use crossterm::event::{Event, KeyCode};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
};
use varistat_stats::{
    grouped::{Bin, GroupedDataAnalyzer, LastBinUpperBound},
    sample::SampleAnalyzer,
};

use super::charts::{self, BinHistogram, LinePlot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ChartKind {
    Histogram,
    FrequencyPolygon,
    EmpiricalDistribution,
    GroupedHistogram,
}

impl ChartKind {
    const ALL: [Self; 4] = [
        Self::Histogram,
        Self::FrequencyPolygon,
        Self::EmpiricalDistribution,
        Self::GroupedHistogram,
    ];

    fn title(self) -> &'static str {
        match self {
            Self::Histogram => "Histogram",
            Self::FrequencyPolygon => "Frequency polygon",
            Self::EmpiricalDistribution => "Empirical distribution function",
            Self::GroupedHistogram => "Grouped histogram",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|&k| k == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Chart inputs computed once from the analyzers.
#[derive(Debug)]
pub(super) struct ChartData {
    /// Raw-value histogram; the last bin always includes the maximum.
    histogram: Vec<Bin>,
    /// (value, frequency) points of the frequency polygon.
    polygon: Vec<(f64, f64)>,
    polygon_y_max: f64,
    /// Step polyline of the empirical distribution function.
    ecdf: Vec<(f64, f64)>,
    value_bounds: [f64; 2],
    grouped: Vec<Bin>,
    grouped_title: String,
}

impl ChartData {
    #[expect(clippy::cast_precision_loss)]
    pub(super) fn new(
        sample: &SampleAnalyzer,
        histogram: &GroupedDataAnalyzer,
        grouped: &GroupedDataAnalyzer,
    ) -> Self {
        let polygon = sample
            .frequency_table()
            .iter()
            .map(|(value, count)| (value, count as f64))
            .collect::<Vec<_>>();
        let polygon_y_max = polygon.iter().map(|(_, y)| *y).fold(0.0, f64::max);
        let value_bounds = charts::padded_bounds(sample.frequency_table().values());
        let ecdf = charts::step_polyline(&sample.empirical_distribution_steps(), value_bounds);

        let last_bin = match grouped.options().last_bin {
            LastBinUpperBound::Inclusive => "closed last interval",
            LastBinUpperBound::Exclusive => "half-open last interval",
        };
        let grouped_title = format!(
            "Grouped histogram ({} bins, {last_bin}, {} of {} values)",
            grouped.num_bins(),
            grouped.binned_count(),
            grouped.len()
        );

        Self {
            histogram: histogram.bins().to_vec(),
            polygon,
            polygon_y_max,
            ecdf,
            value_bounds,
            grouped: grouped.bins().to_vec(),
            grouped_title,
        }
    }
}

#[derive(Debug)]
pub(super) struct PlotApp {
    data: ChartData,
    selected: ChartKind,
    should_exit: bool,
}

impl PlotApp {
    pub(super) fn new(data: ChartData) -> Self {
        Self {
            data,
            selected: ChartKind::Histogram,
            should_exit: false,
        }
    }

    pub(super) fn should_exit(&self) -> bool {
        self.should_exit
    }

    pub(super) fn handle_event(&mut self, event: &Event) {
        if let Some(event) = event.as_key_event() {
            match event.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_exit = true,
                KeyCode::Right | KeyCode::Tab => self.selected = self.selected.next(),
                KeyCode::Left | KeyCode::BackTab => self.selected = self.selected.prev(),
                KeyCode::Char(c @ '1'..='4') => {
                    let idx = (c as usize) - ('1' as usize);
                    self.selected = ChartKind::ALL[idx];
                }
                _ => {}
            }
        }
    }

    pub(super) fn draw(&self, frame: &mut Frame) {
        let [tabs_area, chart_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let tabs = ChartKind::ALL
            .iter()
            .enumerate()
            .flat_map(|(i, kind)| {
                let style = if *kind == self.selected {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                [
                    Span::styled(format!(" {}: {} ", i + 1, kind.title()), style),
                    Span::raw("|"),
                ]
            })
            .collect::<Vec<_>>();
        frame.render_widget(Line::from(tabs), tabs_area);

        let data = &self.data;
        match self.selected {
            ChartKind::Histogram => frame.render_widget(
                BinHistogram {
                    title: ChartKind::Histogram.title(),
                    bins: &data.histogram,
                },
                chart_area,
            ),
            ChartKind::FrequencyPolygon => frame.render_widget(
                LinePlot {
                    title: ChartKind::FrequencyPolygon.title(),
                    data: &data.polygon,
                    x_title: "Value",
                    x_bounds: data.value_bounds,
                    y_title: "Frequency",
                    y_bounds: [0.0, data.polygon_y_max.max(1.0)],
                },
                chart_area,
            ),
            ChartKind::EmpiricalDistribution => frame.render_widget(
                LinePlot {
                    title: ChartKind::EmpiricalDistribution.title(),
                    data: &data.ecdf,
                    x_title: "x",
                    x_bounds: data.value_bounds,
                    y_title: "F(x)",
                    y_bounds: [0.0, 1.0],
                },
                chart_area,
            ),
            ChartKind::GroupedHistogram => frame.render_widget(
                BinHistogram {
                    title: &data.grouped_title,
                    bins: &data.grouped,
                },
                chart_area,
            ),
        }

        let help_text = Text::from("←/→: Switch chart | 1-4: Select | q/Esc: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .centered();
        frame.render_widget(help_text, help_area);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};
    use varistat_stats::grouped::BinningOptions;

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn app() -> PlotApp {
        let values = [1.0, 2.0, 2.0, 3.0, 5.0, 8.0];
        let sample = SampleAnalyzer::new(values).unwrap();
        let histogram = GroupedDataAnalyzer::new(values, 3).unwrap();
        let options = BinningOptions {
            num_bins: 3,
            last_bin: LastBinUpperBound::Exclusive,
        };
        let grouped = GroupedDataAnalyzer::with_options(values, options).unwrap();
        PlotApp::new(ChartData::new(&sample, &histogram, &grouped))
    }

    #[test]
    fn test_chart_data() {
        let app = app();
        let data = &app.data;
        assert_eq!(
            data.polygon,
            vec![(1.0, 1.0), (2.0, 2.0), (3.0, 1.0), (5.0, 1.0), (8.0, 1.0)]
        );
        assert_eq!(data.polygon_y_max, 2.0);
        assert_eq!(data.histogram.iter().map(|b| b.count).sum::<u64>(), 6);
        assert_eq!(data.grouped.iter().map(|b| b.count).sum::<u64>(), 5);
        assert_eq!(data.ecdf.first(), Some(&(data.value_bounds[0], 0.0)));
        assert_eq!(data.ecdf.last(), Some(&(data.value_bounds[1], 1.0)));
        assert!(data.grouped_title.contains("5 of 6 values"));
    }

    #[test]
    fn test_switch_charts() {
        let mut app = app();
        assert_eq!(app.selected, ChartKind::Histogram);
        app.handle_event(&key(KeyCode::Right));
        assert_eq!(app.selected, ChartKind::FrequencyPolygon);
        app.handle_event(&key(KeyCode::Left));
        app.handle_event(&key(KeyCode::Left));
        assert_eq!(app.selected, ChartKind::GroupedHistogram);
        app.handle_event(&key(KeyCode::Char('3')));
        assert_eq!(app.selected, ChartKind::EmpiricalDistribution);
        app.handle_event(&key(KeyCode::Tab));
        assert_eq!(app.selected, ChartKind::GroupedHistogram);
        assert!(!app.should_exit());
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        app.handle_event(&key(KeyCode::Char('q')));
        assert!(app.should_exit());
    }

    #[test]
    fn test_draw_every_chart() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        for kind in ChartKind::ALL {
            app.selected = kind;
            terminal.draw(|frame| app.draw(frame)).unwrap();
            // row 1 is the top border of the chart block, carrying its title
            let border = terminal.backend().buffer().content()[100..200]
                .iter()
                .map(|cell| cell.symbol())
                .collect::<String>();
            assert!(border.contains(kind.title()), "{kind:?} not drawn");
        }
    }
}

//! Interactive chart viewer
//!
//! Renders the histogram, frequency polygon, empirical distribution function
//! and grouped histogram of a dataset in the terminal.

use anyhow::Context;
use clap::Args;
use crossterm::event;
use varistat_stats::grouped::GroupedDataAnalyzer;

use crate::{command::SampleArg, util};

use self::app::{ChartData, PlotApp};

mod app;
mod charts;

#[derive(Default, Debug, Clone, Args)]
pub(crate) struct PlotArg {
    #[command(flatten)]
    pub sample: SampleArg,
}

pub(crate) fn run(arg: &PlotArg) -> anyhow::Result<()> {
    let PlotArg { sample } = arg;

    eprintln!("Loading sample from {}...", sample.data_file.display());
    let values = util::read_sample_file(&sample.data_file)?;
    eprintln!("Loaded {} values", values.len());

    let (sample_analyzer, grouped) = sample.analyze(&values)?;
    // The plain histogram always counts the maximum, whatever the grouped policy
    let histogram = GroupedDataAnalyzer::new(values.iter().copied(), sample.bins)
        .with_context(|| sample.analysis_error())?;

    let mut app = PlotApp::new(ChartData::new(&sample_analyzer, &histogram, &grouped));
    ratatui::run(|terminal| {
        while !app.should_exit() {
            terminal.draw(|frame| app.draw(frame))?;
            app.handle_event(&event::read()?);
        }
        Ok(())
    })
}

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use varistat_stats::{
    StatsError,
    grouped::{BinningOptions, DEFAULT_NUM_BINS, GroupedDataAnalyzer, LastBinUpperBound},
    sample::SampleAnalyzer,
};

use self::{plot::PlotArg, report::ReportArg};

mod plot;
mod report;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Print sample and grouped-data statistics
    Report(#[clap(flatten)] ReportArg),
    /// Show histogram, frequency polygon and empirical distribution charts
    Plot(#[clap(flatten)] PlotArg),
}

/// Input file and binning settings shared by all commands.
#[derive(Debug, Clone, Args)]
pub(crate) struct SampleArg {
    /// Data file with comma- or newline-separated numbers
    #[arg(default_value = "data.txt")]
    pub data_file: PathBuf,

    /// Number of equal-width bins for grouped analysis
    #[arg(long, default_value_t = DEFAULT_NUM_BINS, value_parser = parse_bin_count)]
    pub bins: usize,

    /// Leave the sample maximum out of the last bin (half-open last interval)
    #[arg(long)]
    pub exclusive_max: bool,
}

impl Default for SampleArg {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("data.txt"),
            bins: DEFAULT_NUM_BINS,
            exclusive_max: false,
        }
    }
}

impl SampleArg {
    pub(crate) fn binning_options(&self) -> BinningOptions {
        let last_bin = if self.exclusive_max {
            LastBinUpperBound::Exclusive
        } else {
            LastBinUpperBound::Inclusive
        };
        BinningOptions {
            num_bins: self.bins,
            last_bin,
        }
    }

    /// Builds the raw-sample analyzer and the grouped analyzer for `values`
    /// loaded from [`Self::data_file`].
    pub(crate) fn analyze(
        &self,
        values: &[f64],
    ) -> anyhow::Result<(SampleAnalyzer, GroupedDataAnalyzer)> {
        let sample = SampleAnalyzer::new(values.iter().copied())
            .with_context(|| self.analysis_error())?;
        let grouped =
            GroupedDataAnalyzer::with_options(values.iter().copied(), self.binning_options())
                .with_context(|| self.analysis_error())?;
        Ok((sample, grouped))
    }

    pub(crate) fn analysis_error(&self) -> String {
        format!("Failed to analyze data file: {}", self.data_file.display())
    }
}

fn parse_bin_count(s: &str) -> Result<usize, String> {
    let bins = s.parse::<usize>().map_err(|e| e.to_string())?;
    if bins == 0 {
        return Err(StatsError::InvalidBinCount.to_string());
    }
    Ok(bins)
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Report(ReportArg::default())) {
        Mode::Report(arg) => report::run(&arg)?,
        Mode::Plot(arg) => plot::run(&arg)?,
    }
    Ok(())
}

//! Statistics report command
//!
//! Prints exact statistics of the raw sample followed by estimates from the
//! grouped (binned) sample, and optionally saves both as JSON.

use std::path::PathBuf;

use clap::Args;
use varistat_stats::{
    StatsError, descriptive::DescriptiveStats, grouped::GroupedDataAnalyzer,
    sample::SampleAnalyzer,
};

use crate::{
    command::SampleArg,
    schema::report::AnalysisReport,
    util::{self, Output},
};

const RULE_WIDTH: usize = 60;

#[derive(Default, Debug, Clone, Args)]
pub(crate) struct ReportArg {
    #[command(flatten)]
    pub sample: SampleArg,

    /// Also write the report as JSON to this path (`-` for stdout)
    #[arg(long)]
    pub json: Option<PathBuf>,
}

pub(crate) fn run(arg: &ReportArg) -> anyhow::Result<()> {
    let ReportArg { sample, json } = arg;

    eprintln!("Loading sample from {}...", sample.data_file.display());
    let values = util::read_sample_file(&sample.data_file)?;
    eprintln!("Loaded {} values", values.len());

    let (sample_analyzer, grouped_analyzer) = sample.analyze(&values)?;

    print_sample_analysis(&sample_analyzer);
    print_grouped_analysis(&grouped_analyzer);

    if let Some(path) = json {
        let report = AnalysisReport::new(&sample_analyzer, &grouped_analyzer);
        let mut output = Output::from_output_path(path)?;
        output.write_json(&report)?;
        eprintln!("Report saved to: {}", output.display_path());
    }

    Ok(())
}

fn print_heading(title: &str) {
    println!();
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("{title:^width$}", width = RULE_WIDTH);
    println!("{}", "=".repeat(RULE_WIDTH));
}

fn format_result(result: Result<f64, StatsError>) -> String {
    match result {
        Ok(value) => format!("{value:.2}"),
        Err(err) => format!("n/a ({err})"),
    }
}

fn print_sample_analysis(analyzer: &SampleAnalyzer) {
    print_heading("SAMPLE ANALYSIS");

    println!("\nSorted sample:");
    let sorted = analyzer
        .sorted_values()
        .iter()
        .map(|v| format!("{v:.2}"))
        .collect::<Vec<_>>();
    println!("  [{}]", sorted.join(", "));

    println!("\nFrequency table:");
    println!("  {:>12} {:>10}", "Value", "Frequency");
    for (value, count) in analyzer.frequency_table().iter() {
        println!("  {value:>12.2} {count:>10}");
    }

    let stats = DescriptiveStats::from_analyzer(analyzer);
    println!("\nSample characteristics:");
    println!("  Sample size:              {:>12}", stats.count);
    println!("  Minimum:                  {:>12.2}", stats.min);
    println!("  Maximum:                  {:>12.2}", stats.max);
    println!("  Range:                    {:>12.2}", stats.range);
    println!("  Median:                   {:>12.2}", stats.median);
    println!("  First quartile (Q1):      {:>12.2}", stats.q1);
    println!("  Third quartile (Q3):      {:>12.2}", stats.q3);
    println!("  Mean:                     {:>12.2}", stats.mean);
    println!("  Initial moment (order 2): {:>12.2}", stats.initial_moment_2);
    println!("  Central moment (order 2): {:>12.2}", stats.central_moment_2);
    println!(
        "  Variance:                 {:>12}",
        format_result(analyzer.variance())
    );
    println!(
        "  Standard deviation:       {:>12}",
        format_result(analyzer.std_dev())
    );
}

fn print_grouped_analysis(analyzer: &GroupedDataAnalyzer) {
    print_heading("GROUPED DATA ANALYSIS");

    println!(
        "\nIntervals ({} bins, width {:.2}):",
        analyzer.num_bins(),
        analyzer.bin_width()
    );
    for (i, bin) in analyzer.bins().iter().enumerate() {
        println!(
            "  Interval {:>2}: {:>10.2} - {:<10.2} | Frequency: {}",
            i + 1,
            bin.range.start,
            bin.range.end,
            bin.count
        );
    }
    if analyzer.is_degenerate() {
        println!("  (all values are identical; the first interval holds every value)");
    }
    let binned = analyzer.binned_count();
    if binned != analyzer.len() as u64 {
        println!(
            "  ({} of {} values fall outside the half-open intervals)",
            analyzer.len() as u64 - binned,
            analyzer.len()
        );
    }

    println!("\nGrouped characteristics:");
    println!(
        "  Mean estimate:            {:>12.2}",
        analyzer.estimate_grouped_mean()
    );
    println!(
        "  Variance estimate:        {:>12}",
        format_result(analyzer.estimate_grouped_variance())
    );
}

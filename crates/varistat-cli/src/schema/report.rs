use serde::{Deserialize, Serialize};
use varistat_stats::{
    descriptive::DescriptiveStats,
    grouped::{Bin, BinningOptions, GroupedDataAnalyzer},
    sample::SampleAnalyzer,
};

/// Full analysis of one dataset, as written by `report --json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Exact statistics of the raw values
    pub sample: SampleReport,
    /// Estimates from the binned values
    pub grouped: GroupedReport,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleReport {
    /// Values in ascending order
    pub sorted_values: Vec<f64>,
    /// Distinct values with their occurrence counts, ascending
    pub frequency_table: Vec<FrequencyEntry>,
    pub stats: DescriptiveStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub value: f64,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedReport {
    pub options: BinningOptions,
    pub bin_width: f64,
    /// Half-open ranges; the last range also holds its end (the sample
    /// maximum) when `options.last_bin` is `inclusive`
    pub bins: Vec<Bin>,
    /// Number of values counted in some bin
    pub binned_count: u64,
    pub grouped_mean: f64,
    /// `None` when the sample holds a single value
    pub grouped_variance: Option<f64>,
}

impl AnalysisReport {
    pub fn new(sample: &SampleAnalyzer, grouped: &GroupedDataAnalyzer) -> Self {
        Self {
            sample: SampleReport::from(sample),
            grouped: GroupedReport::from(grouped),
        }
    }
}

impl From<&SampleAnalyzer> for SampleReport {
    fn from(analyzer: &SampleAnalyzer) -> Self {
        Self {
            sorted_values: analyzer.sorted_values().to_vec(),
            frequency_table: analyzer
                .frequency_table()
                .iter()
                .map(|(value, count)| FrequencyEntry { value, count })
                .collect(),
            stats: DescriptiveStats::from_analyzer(analyzer),
        }
    }
}

impl From<&GroupedDataAnalyzer> for GroupedReport {
    fn from(analyzer: &GroupedDataAnalyzer) -> Self {
        Self {
            options: analyzer.options(),
            bin_width: analyzer.bin_width(),
            bins: analyzer.bins().to_vec(),
            binned_count: analyzer.binned_count(),
            grouped_mean: analyzer.estimate_grouped_mean(),
            grouped_variance: analyzer.estimate_grouped_variance().ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use varistat_stats::grouped::LastBinUpperBound;

    use super::*;

    #[test]
    fn test_report_json_layout() {
        let values = [2.0, 1.0, 2.0];
        let sample = SampleAnalyzer::new(values).unwrap();
        let grouped = GroupedDataAnalyzer::new(values, 1).unwrap();
        let report = AnalysisReport::new(&sample, &grouped);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["sample"]["sorted_values"], serde_json::json!([1.0, 2.0, 2.0]));
        assert_eq!(
            json["sample"]["frequency_table"],
            serde_json::json!([{ "value": 1.0, "count": 1 }, { "value": 2.0, "count": 2 }])
        );
        assert_eq!(json["grouped"]["options"]["last_bin"], "inclusive");
        assert_eq!(
            json["grouped"]["bins"],
            serde_json::json!([{ "range": { "start": 1.0, "end": 2.0 }, "count": 3 }])
        );
    }

    #[test]
    fn test_exclusive_report_counts_fewer_values() {
        let values = [4.0, 8.0, 15.0, 16.0, 23.0, 42.0];
        let sample = SampleAnalyzer::new(values).unwrap();
        let options = BinningOptions {
            num_bins: 3,
            last_bin: LastBinUpperBound::Exclusive,
        };
        let grouped = GroupedDataAnalyzer::with_options(values, options).unwrap();
        let report = AnalysisReport::new(&sample, &grouped);

        assert_eq!(report.sample.stats.count, 6);
        assert_eq!(report.grouped.binned_count, 5);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["grouped"]["options"]["last_bin"], "exclusive");
    }

    #[test]
    fn test_single_value_has_no_variance() {
        let sample = SampleAnalyzer::new([1.0]).unwrap();
        let grouped = GroupedDataAnalyzer::new([1.0], 5).unwrap();
        let report = AnalysisReport::new(&sample, &grouped);
        assert_eq!(report.sample.stats.variance, None);
        assert_eq!(report.grouped.grouped_variance, None);
        assert_eq!(report.grouped.grouped_mean, 1.0);
    }
}

//! Display formatting for analysis results.

use serde_json::{Map, Value};

use crate::{AnalysisResult, SEQUENCE_CHUNK_SIZE};

/// Format a G/C percentage with two decimals, e.g. `45.68%`.
pub fn format_gc_content(gc_content: f64) -> String {
    format!("{:.2}%", gc_content)
}

/// Split a sequence into `width`-character chunks joined by single spaces.
///
/// A zero width returns the sequence unchanged.
pub fn chunk_sequence(sequence: &str, width: usize) -> String {
    if width == 0 {
        return sequence.to_string();
    }

    let chars: Vec<char> = sequence.chars().collect();
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Bar chart data derived from a read length histogram.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HistogramSeries {
    /// Bucket labels, in the order received
    pub categories: Vec<String>,
    /// Count for each bucket
    pub values: Vec<u64>,
}

impl HistogramSeries {
    /// Build the series from the service's `histogram_data` object.
    ///
    /// Entries whose count is not a non-negative integer are skipped.
    pub fn from_histogram(histogram: &Map<String, Value>) -> Self {
        let (categories, values) = histogram
            .iter()
            .filter_map(|(label, count)| Some((label.clone(), count.as_u64()?)))
            .unzip();

        Self { categories, values }
    }

    /// Bucket labels whose count [`HistogramSeries::from_histogram`] skips.
    pub fn invalid_buckets(histogram: &Map<String, Value>) -> Vec<String> {
        histogram
            .iter()
            .filter(|(_, count)| count.as_u64().is_none())
            .map(|(label, _)| label.clone())
            .collect()
    }

    pub fn max_value(&self) -> u64 {
        self.values.iter().copied().max().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Read count line and chart data of an alignment result.
#[derive(Clone, Debug, PartialEq)]
pub struct AlignmentSummary {
    pub reads_line: String,
    pub series: HistogramSeries,
}

/// What the results panel displays for one analysis result.
///
/// Built once per result; the reverse complement is chunked up front and
/// gated by [`ResultsModel::visible_sequence`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultsModel {
    /// Stat lines, in display order
    pub stats: Vec<String>,
    /// Chunked reverse complement, when returned
    pub reverse_complement: Option<String>,
    /// Present only when both the read count and histogram were returned
    pub alignment: Option<AlignmentSummary>,
}

impl ResultsModel {
    pub fn from_result(result: &AnalysisResult) -> Self {
        let stats = result
            .sequence_length
            .map(|length| format!("Sequence Length: {}", length))
            .into_iter()
            .chain(
                result
                    .gc_content
                    .map(|gc| format!("G/C Content: {}", format_gc_content(gc))),
            )
            .collect();

        let reverse_complement = result
            .reverse_complement
            .as_deref()
            .map(|sequence| chunk_sequence(sequence, SEQUENCE_CHUNK_SIZE));

        let alignment = result
            .alignment_data()
            .map(|(count, histogram)| AlignmentSummary {
                reads_line: format!("Reads Count: {}", count),
                series: HistogramSeries::from_histogram(histogram),
            });

        Self {
            stats,
            reverse_complement,
            alignment,
        }
    }

    /// The reverse complement text, only while it is toggled visible.
    pub fn visible_sequence(&self, show_sequence: bool) -> Option<&str> {
        if show_sequence {
            self.reverse_complement.as_deref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gc_content_rounds_to_two_decimals() {
        assert_eq!(format_gc_content(45.6789), "45.68%");
        assert_eq!(format_gc_content(50.0), "50.00%");
        assert_eq!(format_gc_content(0.004), "0.00%");
    }

    #[test]
    fn test_chunk_sequence_120_at_50() {
        let sequence = "ACGT".repeat(30);
        let formatted = chunk_sequence(&sequence, 50);
        let chunks: Vec<&str> = formatted.split(' ').collect();

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks.iter().map(|c| c.len()).collect::<Vec<_>>(), vec![50, 50, 20]);
        assert_eq!(chunks.concat(), sequence);
    }

    #[test]
    fn test_chunk_sequence_short_and_empty() {
        assert_eq!(chunk_sequence("ACGT", 50), "ACGT");
        assert_eq!(chunk_sequence("", 50), "");
        assert_eq!(chunk_sequence("ACGTAC", 2), "AC GT AC");
        assert_eq!(chunk_sequence("ACGT", 0), "ACGT");
    }

    #[test]
    fn test_histogram_series_from_map() {
        let histogram: Map<String, Value> =
            serde_json::from_str(r#"{"50": 10, "100": 5}"#).unwrap();
        let series = HistogramSeries::from_histogram(&histogram);

        assert_eq!(series.categories, vec!["50", "100"]);
        assert_eq!(series.values, vec![10, 5]);
        assert_eq!(series.max_value(), 10);
    }

    #[test]
    fn test_histogram_series_skips_non_integer_counts() {
        let histogram: Map<String, Value> =
            serde_json::from_str(r#"{"50": 10, "60": "x", "70": -1, "80": 3}"#).unwrap();
        let series = HistogramSeries::from_histogram(&histogram);

        assert_eq!(series.categories, vec!["50", "80"]);
        assert_eq!(series.values, vec![10, 3]);
    }

    #[test]
    fn test_empty_histogram() {
        let series = HistogramSeries::from_histogram(&Map::new());
        assert!(series.is_empty());
        assert_eq!(series.max_value(), 0);
    }

    #[test]
    fn test_invalid_buckets() {
        let histogram: Map<String, Value> =
            serde_json::from_str(r#"{"50": 10, "60": 2.5, "70": null}"#).unwrap();
        assert_eq!(HistogramSeries::invalid_buckets(&histogram), vec!["60", "70"]);
    }

    fn result_from(json: &str) -> AnalysisResult {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_model_fasta_stats() {
        let model = ResultsModel::from_result(&result_from(
            r#"{"sequence_length": 120, "gc_content": 45.6789}"#,
        ));

        assert_eq!(model.stats, vec!["Sequence Length: 120", "G/C Content: 45.68%"]);
        assert_eq!(model.reverse_complement, None);
        assert_eq!(model.alignment, None);
    }

    #[test]
    fn test_model_alignment_section() {
        let model = ResultsModel::from_result(&result_from(
            r#"{"reads_count": 350, "histogram_data": {"50": 10, "100": 5}}"#,
        ));

        let alignment = model.alignment.unwrap();
        assert_eq!(alignment.reads_line, "Reads Count: 350");
        assert_eq!(alignment.series.categories, vec!["50", "100"]);
        assert_eq!(alignment.series.values, vec![10, 5]);
        assert!(model.stats.is_empty());
    }

    #[test]
    fn test_model_without_reads_count_has_no_alignment() {
        let model = ResultsModel::from_result(&result_from(
            r#"{"sequence_length": 10, "histogram_data": {"50": 10}}"#,
        ));
        assert_eq!(model.alignment, None);
        assert_eq!(model.stats, vec!["Sequence Length: 10"]);
    }

    #[test]
    fn test_model_empty_response_renders_nothing() {
        let model = ResultsModel::from_result(&result_from("{}"));
        assert_eq!(model, ResultsModel::default());
    }

    #[test]
    fn test_model_sequence_follows_visibility() {
        let sequence = "A".repeat(120);
        let model = ResultsModel::from_result(&AnalysisResult {
            reverse_complement: Some(sequence),
            ..Default::default()
        });

        assert_eq!(model.visible_sequence(false), None);
        let shown = model.visible_sequence(true).unwrap();
        let lengths: Vec<usize> = shown.split(' ').map(str::len).collect();
        assert_eq!(lengths, vec![50, 50, 20]);
    }
}

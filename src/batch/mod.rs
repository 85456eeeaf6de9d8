mod aggregator;
mod item;
mod processor;

pub use aggregator::{
    BatchOutcome, HistogramBin, PolarityPoint, aggregate, aggregate_with, polarity_histogram,
    polarity_series,
};
pub use item::{BatchItem, BatchSummary, ELLIPSIS, SourceDisplay};
pub use processor::aggregate_parallel;

use crate::text::WordFrequencyMap;
use serde::{Deserialize, Serialize};

/// Everything a front end needs to render one analysed batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    /// Column the texts were read from, for table input.
    pub text_column: Option<String>,
    pub items: Vec<BatchItem>,
    pub summary: BatchSummary,
    pub histogram: Vec<HistogramBin>,
    pub series: Vec<PolarityPoint>,
    /// Absent when the cleaned corpus was empty or no word cloud was requested.
    pub word_frequencies: Option<WordFrequencyMap>,
}

impl BatchReport {
    pub fn from_outcome(outcome: BatchOutcome, histogram_bins: usize) -> Self {
        let summary = outcome.summary();
        let histogram = polarity_histogram(&outcome.items, histogram_bins);
        let series = polarity_series(&outcome.items);

        BatchReport {
            text_column: None,
            items: outcome.items,
            summary,
            histogram,
            series,
            word_frequencies: None,
        }
    }

    pub fn with_text_column(mut self, column: String) -> Self {
        self.text_column = Some(column);
        self
    }

    pub fn with_word_frequencies(mut self, frequencies: Option<WordFrequencyMap>) -> Self {
        self.word_frequencies = frequencies;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

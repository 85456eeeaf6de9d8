use serde::{Deserialize, Serialize};

pub const DEFAULT_DISPLAY_LIMIT: usize = 100;
pub const DEFAULT_HISTOGRAM_BINS: usize = 20;

/// Knobs for one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Worker threads for batch scoring; 1 (the default) keeps everything on
    /// the caller's thread.
    pub num_threads: usize,
    /// Characters of source text kept for display in table batches.
    pub display_limit: usize,
    pub histogram_bins: usize,
    /// Keep only the N most frequent words for the word cloud.
    pub word_cloud_top: Option<usize>,
    pub filter_stopwords: bool,
}

impl AnalysisConfig {
    pub fn new() -> Self {
        AnalysisConfig {
            num_threads: 1,
            display_limit: DEFAULT_DISPLAY_LIMIT,
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            word_cloud_top: None,
            filter_stopwords: false,
        }
    }

    /// Single-threaded configuration. Same as `new()`, spelled out for callers
    /// that depend on it.
    pub fn sequential() -> Self {
        Self::new().with_num_threads(1)
    }

    pub fn with_num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = num_threads.max(1);
        self
    }

    pub fn with_display_limit(mut self, limit: usize) -> Self {
        self.display_limit = limit;
        self
    }

    pub fn with_histogram_bins(mut self, bins: usize) -> Self {
        self.histogram_bins = bins.max(1);
        self
    }

    pub fn with_word_cloud_top(mut self, top: usize) -> Self {
        self.word_cloud_top = Some(top);
        self
    }

    pub fn with_stopword_filter(mut self, enabled: bool) -> Self {
        self.filter_stopwords = enabled;
        self
    }

    pub fn is_parallel(&self) -> bool {
        self.num_threads > 1
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::new()
    }
}

use super::item::{BatchItem, BatchSummary, SourceDisplay};
use crate::error::ScoringError;
use crate::sentiment::{Label, SentimentScorer};
use log::{debug, info, trace, warn};
use serde::{Deserialize, Serialize};

/// Items that survived filtering and scoring, in input order, plus the
/// number of items whose scoring failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchOutcome {
    pub items: Vec<BatchItem>,
    pub skipped: usize,
}

impl BatchOutcome {
    pub fn summary(&self) -> BatchSummary {
        BatchSummary::from_items(&self.items, self.skipped)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolarityPoint {
    pub name: String,
    pub polarity: f64,
    pub label: Label,
}

pub fn aggregate<S: AsRef<str>>(texts: &[S]) -> BatchOutcome {
    aggregate_with(texts, SourceDisplay::Full)
}

pub fn aggregate_with<S: AsRef<str>>(texts: &[S], display: SourceDisplay) -> BatchOutcome {
    info!("Aggregating sentiment over {} texts", texts.len());
    let scorer = SentimentScorer::new();

    let scored = non_blank(texts)
        .map(|(index, text)| (index, score_item(&scorer, index, text, display)))
        .collect();

    collect_outcome(scored)
}

/// Yields `(index, text)` for every text that is not blank after trimming.
pub(crate) fn non_blank<S: AsRef<str>>(texts: &[S]) -> impl Iterator<Item = (usize, &str)> {
    texts
        .iter()
        .map(AsRef::as_ref)
        .enumerate()
        .filter(|(index, text)| {
            let keep = !text.trim().is_empty();
            if !keep {
                trace!("Skipping blank text at {}", index);
            }
            keep
        })
}

/// Scores the full text; `display` only affects the stored copy.
pub(crate) fn score_item(
    scorer: &SentimentScorer,
    index: usize,
    text: &str,
    display: SourceDisplay,
) -> Result<BatchItem, ScoringError> {
    let result = scorer.score(text)?;
    trace!(
        "Text {} scored {:.3} ({})",
        index, result.polarity, result.label
    );
    Ok(BatchItem::new(index, display.render(text), result))
}

pub(crate) fn collect_outcome(
    scored: Vec<(usize, Result<BatchItem, ScoringError>)>,
) -> BatchOutcome {
    let mut items = Vec::with_capacity(scored.len());
    let mut skipped = 0;

    for (index, outcome) in scored {
        match outcome {
            Ok(item) => items.push(item),
            Err(e) => {
                warn!("Dropping text {} from batch: {}", index, e);
                skipped += 1;
            }
        }
    }

    debug!("Batch produced {} items, {} skipped", items.len(), skipped);
    BatchOutcome { items, skipped }
}

/// Equal-width bins over [-1, 1]; a polarity of exactly 1.0 lands in the last bin.
pub fn polarity_histogram(items: &[BatchItem], bins: usize) -> Vec<HistogramBin> {
    let bins = bins.max(1);
    let width = 2.0 / bins as f64;

    let mut histogram: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            lower: -1.0 + i as f64 * width,
            upper: -1.0 + (i + 1) as f64 * width,
            count: 0,
        })
        .collect();

    for item in items {
        let position = ((item.result.polarity + 1.0) / 2.0 * bins as f64).floor();
        let bin = (position.max(0.0) as usize).min(bins - 1);
        histogram[bin].count += 1;
    }

    histogram
}

/// Per-item polarity in batch order, for bar charts.
pub fn polarity_series(items: &[BatchItem]) -> Vec<PolarityPoint> {
    items
        .iter()
        .map(|item| PolarityPoint {
            name: item.display_name(),
            polarity: item.result.polarity,
            label: item.label(),
        })
        .collect()
}

use crate::sentiment::{Label, SentimentResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Marker appended to source text cut down for display.
pub const ELLIPSIS: &str = "...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceDisplay {
    Full,
    /// Keep at most this many characters, then append [`ELLIPSIS`].
    Truncated(usize),
}

impl SourceDisplay {
    pub fn render(&self, text: &str) -> String {
        match *self {
            SourceDisplay::Full => text.to_string(),
            SourceDisplay::Truncated(limit) => {
                if text.chars().count() > limit {
                    let mut shown: String = text.chars().take(limit).collect();
                    shown.push_str(ELLIPSIS);
                    shown
                } else {
                    text.to_string()
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchItem {
    /// Position of the text in the input sequence (row number for tables).
    pub index: usize,
    pub source_text: String,
    pub result: SentimentResult,
}

impl BatchItem {
    pub fn new(index: usize, source_text: String, result: SentimentResult) -> Self {
        BatchItem {
            index,
            source_text,
            result,
        }
    }

    pub fn label(&self) -> Label {
        self.result.label
    }

    pub fn display_name(&self) -> String {
        format!("Text {}", self.index + 1)
    }
}

/// Statistics derived from a set of batch items. Never stored on its own;
/// call [`BatchSummary::from_items`] again whenever the items change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub counts: BTreeMap<Label, usize>,
    /// Items dropped because scoring failed. Blank inputs are not counted.
    pub skipped: usize,
    pub average_polarity: f64,
    pub average_subjectivity: f64,
}

impl BatchSummary {
    pub fn from_items(items: &[BatchItem], skipped: usize) -> Self {
        let mut counts: BTreeMap<Label, usize> = Label::ALL.iter().map(|l| (*l, 0)).collect();
        for item in items {
            *counts.entry(item.label()).or_insert(0) += 1;
        }

        let (average_polarity, average_subjectivity) = if items.is_empty() {
            (0.0, 0.0)
        } else {
            let n = items.len() as f64;
            (
                items.iter().map(|i| i.result.polarity).sum::<f64>() / n,
                items.iter().map(|i| i.result.subjectivity).sum::<f64>() / n,
            )
        };

        BatchSummary {
            total: items.len(),
            counts,
            skipped,
            average_polarity,
            average_subjectivity,
        }
    }

    pub fn count(&self, label: Label) -> usize {
        self.counts.get(&label).copied().unwrap_or(0)
    }
}

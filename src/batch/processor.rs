use super::aggregator::{BatchOutcome, collect_outcome, non_blank, score_item};
use super::item::SourceDisplay;
use crate::error::Result;
use crate::sentiment::SentimentScorer;
use log::{debug, info};
use rayon::prelude::*;

/// Scores a batch on a dedicated pool of `num_threads` workers.
///
/// Items carry no cross-item state, so the result is identical to
/// [`super::aggregate_with`]: same items, same order, same skip count.
pub fn aggregate_parallel<S: AsRef<str> + Sync>(
    texts: &[S],
    display: SourceDisplay,
    num_threads: usize,
) -> Result<BatchOutcome> {
    info!(
        "Starting parallel sentiment scoring of {} texts with {} threads",
        texts.len(),
        num_threads
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads.max(1))
        .thread_name(|i| format!("sentiscope-worker-{}", i))
        .build()?;

    let scorer = SentimentScorer::new();
    let candidates: Vec<(usize, &str)> = non_blank(texts).collect();
    debug!("{} non-blank texts to score", candidates.len());

    let scored = pool.install(|| {
        candidates
            .par_iter()
            .map(|&(index, text)| (index, score_item(&scorer, index, text, display)))
            .collect::<Vec<_>>()
    });

    Ok(collect_outcome(scored))
}

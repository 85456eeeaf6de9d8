pub mod batch;
pub mod config;
pub mod error;
pub mod sentiment;
pub mod table;
pub mod text;
pub mod utils;

pub use batch::{BatchItem, BatchReport, BatchSummary};
pub use config::AnalysisConfig;
pub use error::{Result, ScoringError, SentimentError};
pub use sentiment::{Label, SentimentResult};
pub use table::Table;

use batch::{BatchOutcome, SourceDisplay};
use log::{debug, info, warn};
use std::path::Path;
use text::{WordFrequencyExtractor, WordFrequencyMap};

/// One-time process setup. Loads the lexicon; later calls are free.
pub fn init() {
    sentiment::lexicon::init();
}

/// Single-text mode.
pub fn analyze_text(text: &str) -> Result<SentimentResult> {
    if text.trim().is_empty() {
        warn!("Refusing to analyze blank text");
        return Err(SentimentError::EmptyInput);
    }

    let result = sentiment::score(text)?;
    info!(
        "Text scored {} (polarity {:.2}, subjectivity {:.2})",
        result.label, result.polarity, result.subjectivity
    );
    Ok(result)
}

/// Multiple-texts mode. Blank entries are ignored and full texts are kept.
pub fn analyze_texts<S: AsRef<str> + Sync>(
    texts: &[S],
    config: &AnalysisConfig,
) -> Result<BatchReport> {
    info!("Analyzing {} texts", texts.len());
    let outcome = run_batch(texts, SourceDisplay::Full, config)?;
    let report = BatchReport::from_outcome(outcome, config.histogram_bins);
    log_summary(&report.summary);
    Ok(report)
}

/// CSV mode: finds the text column, scores its non-empty cells with display
/// truncation and builds the word frequencies of the whole column.
pub fn analyze_table(table: &Table, config: &AnalysisConfig) -> Result<BatchReport> {
    let column = match table::detect(&table.columns) {
        Some(column) => column.to_string(),
        None => {
            return Err(SentimentError::NoTextColumnFound {
                columns: table.columns.clone(),
            });
        }
    };
    info!(
        "Analyzing column {:?} over {} rows",
        column,
        table.row_count()
    );

    let cells = table.column_values(&column).unwrap_or_default();
    // Missing cells keep their row slot so item indices stay row numbers.
    let texts: Vec<&str> = cells.iter().map(|cell| cell.unwrap_or("")).collect();

    let outcome = run_batch(
        &texts,
        SourceDisplay::Truncated(config.display_limit),
        config,
    )?;
    let frequencies = word_frequencies(cells.iter().flatten().copied(), config);

    let report = BatchReport::from_outcome(outcome, config.histogram_bins)
        .with_text_column(column)
        .with_word_frequencies(frequencies);
    log_summary(&report.summary);
    Ok(report)
}

pub fn analyze_csv_file(path: &Path, config: &AnalysisConfig) -> Result<BatchReport> {
    let table = table::read_table_file(path)?;
    analyze_table(&table, config)
}

/// Joins the raw corpus with single spaces, cleans it and counts words.
/// `None` means there is nothing to draw.
pub fn word_frequencies<'a, I>(texts: I, config: &AnalysisConfig) -> Option<WordFrequencyMap>
where
    I: IntoIterator<Item = &'a str>,
{
    let corpus = texts.into_iter().collect::<Vec<_>>().join(" ");
    let cleaned = text::clean(&corpus);

    let extractor = WordFrequencyExtractor::new().with_stopwords(config.filter_stopwords);
    let mut frequencies = extractor.extract(&cleaned)?;

    if let Some(top) = config.word_cloud_top {
        frequencies = text::top_words(&frequencies, top).into_iter().collect();
    }
    debug!("Word cloud input has {} words", frequencies.len());
    Some(frequencies)
}

fn run_batch<S: AsRef<str> + Sync>(
    texts: &[S],
    display: SourceDisplay,
    config: &AnalysisConfig,
) -> Result<BatchOutcome> {
    init();
    if config.is_parallel() {
        batch::aggregate_parallel(texts, display, config.num_threads)
    } else {
        Ok(batch::aggregate_with(texts, display))
    }
}

fn log_summary(summary: &BatchSummary) {
    info!(
        "Batch complete: {} analyzed ({} positive, {} negative, {} neutral), {} skipped",
        summary.total,
        summary.count(Label::Positive),
        summary.count(Label::Negative),
        summary.count(Label::Neutral),
        summary.skipped
    );
}

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

use crate::batch::{BatchItem, BatchReport};
use crate::error::{Result, SentimentError};
use crate::sentiment::Label;
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Default name for the downloadable results file.
pub const RESULTS_FILE_NAME: &str = "sentiment_analysis_results.csv";

/// One row of the downloadable results file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub text: String,
    pub label: Label,
    pub polarity: f64,
    pub subjectivity: f64,
}

impl From<&BatchItem> for ResultRow {
    fn from(item: &BatchItem) -> Self {
        ResultRow {
            text: item.source_text.clone(),
            label: item.result.label,
            polarity: item.result.polarity,
            subjectivity: item.result.subjectivity,
        }
    }
}

/// Writes `text,label,polarity,subjectivity` rows, header first.
pub fn write_results_csv<W: Write>(items: &[BatchItem], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    if items.is_empty() {
        csv_writer
            .write_record(["text", "label", "polarity", "subjectivity"])
            .map_err(csv_error)?;
    }
    for item in items {
        csv_writer
            .serialize(ResultRow::from(item))
            .map_err(csv_error)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Results CSV as UTF-8 bytes, ready to hand to a download.
pub fn results_to_csv_bytes(items: &[BatchItem]) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    write_results_csv(items, &mut buffer)?;
    Ok(buffer)
}

pub fn export_results_to_csv(items: &[BatchItem], output_path: &Path) -> Result<()> {
    info!(
        "Exporting {} results to CSV: {:?}",
        items.len(),
        output_path
    );

    let bytes = results_to_csv_bytes(items)?;
    write_output(output_path, &bytes)
}

pub fn export_report_to_json(report: &BatchReport, output_path: &Path) -> Result<()> {
    info!(
        "Exporting report with {} items to JSON: {:?}",
        report.items.len(),
        output_path
    );

    let json = match serde_json::to_string_pretty(report) {
        Ok(json) => json,
        Err(e) => {
            error!("Failed to serialize report to JSON: {}", e);
            return Err(e.into());
        }
    };

    write_output(output_path, json.as_bytes())
}

fn write_output(output_path: &Path, bytes: &[u8]) -> Result<()> {
    match fs::write(output_path, bytes) {
        Ok(_) => {
            info!(
                "Successfully wrote {} bytes to {:?}",
                bytes.len(),
                output_path
            );
            Ok(())
        }
        Err(e) => {
            error!("Failed to write file {:?}: {}", output_path, e);
            Err(e.into())
        }
    }
}

fn csv_error(err: csv::Error) -> SentimentError {
    SentimentError::Serialization(format!("CSV error: {}", err))
}

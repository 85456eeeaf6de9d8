use super::Table;
use crate::error::{Result, SentimentError};
use log::{debug, error, info};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Cell values read as missing, matched exactly. Same set pandas treats as NA
/// by default.
pub const MISSING_SENTINELS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn is_missing(cell: &str) -> bool {
    MISSING_SENTINELS.contains(&cell)
}

/// Parses CSV with a header row. Empty cells and NA markers such as `N/A` or
/// `null` become missing values, short rows are padded with missing values,
/// and anything else that does not fit the header is rejected as malformed.
pub fn read_table<R: Read>(reader: R) -> Result<Table> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns: Vec<String> = csv_reader
        .headers()
        .map_err(malformed)?
        .iter()
        .map(|h| h.to_string())
        .collect();

    if columns.is_empty() || columns.iter().all(|c| c.trim().is_empty()) {
        return Err(SentimentError::MalformedTabularInput(
            "no columns to parse from input".to_string(),
        ));
    }

    let mut rows = Vec::new();
    for (row_idx, record) in csv_reader.records().enumerate() {
        let record = record.map_err(malformed)?;

        if record.len() > columns.len() {
            let line = record.position().map(|p| p.line()).unwrap_or(row_idx as u64 + 2);
            return Err(SentimentError::MalformedTabularInput(format!(
                "expected {} fields in line {}, saw {}",
                columns.len(),
                line,
                record.len()
            )));
        }

        let mut row: Vec<Option<String>> = record
            .iter()
            .map(|cell| (!is_missing(cell)).then(|| cell.to_string()))
            .collect();
        row.resize(columns.len(), None);
        rows.push(row);
    }

    debug!("Parsed {} columns and {} rows", columns.len(), rows.len());
    Ok(Table::new(columns, rows))
}

pub fn read_table_file(path: &Path) -> Result<Table> {
    info!("Reading table from {:?}", path);

    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            error!("Failed to open table {:?}: {}", path, e);
            return Err(e.into());
        }
    };

    read_table(file)
}

fn malformed(err: csv::Error) -> SentimentError {
    SentimentError::MalformedTabularInput(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_header_and_rows() {
        let data = "id,avis\n1,Great!\n2,\n3,Bad.\n";
        let table = read_table(data.as_bytes()).unwrap();
        assert_eq!(table.columns, vec!["id", "avis"]);
        assert_eq!(table.row_count(), 3);
        assert_eq!(
            table.column_values("avis").unwrap(),
            vec![Some("Great!"), None, Some("Bad.")]
        );
    }

    #[test]
    fn na_markers_are_missing() {
        let data = "id,avis\n1,Great!\n2,N/A\n3,null\n4,NaN\n5,#N/A\n6,Nana\n7, NA\n";
        let table = read_table(data.as_bytes()).unwrap();
        assert_eq!(
            table.column_values("avis").unwrap(),
            vec![Some("Great!"), None, None, None, None, Some("Nana"), Some(" NA")]
        );
    }

    #[test]
    fn handles_quoted_fields() {
        let data = "text,score\n\"Nice, really nice\",5\n\"He said \"\"wow\"\"\",4\n";
        let table = read_table(data.as_bytes()).unwrap();
        assert_eq!(
            table.column_values("text").unwrap(),
            vec![Some("Nice, really nice"), Some("He said \"wow\"")]
        );
    }

    #[test]
    fn pads_short_rows() {
        let data = "id,text,date\n1,hello\n";
        let table = read_table(data.as_bytes()).unwrap();
        assert_eq!(table.rows[0], vec![Some("1".into()), Some("hello".into()), None]);
    }

    #[test]
    fn rejects_long_rows() {
        let data = "id,text\n1,hello,extra\n";
        let err = read_table(data.as_bytes()).unwrap_err();
        match err {
            SentimentError::MalformedTabularInput(msg) => {
                assert!(msg.contains("expected 2 fields"), "{}", msg)
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn rejects_empty_input() {
        let err = read_table("".as_bytes()).unwrap_err();
        assert!(matches!(err, SentimentError::MalformedTabularInput(_)));
    }

    #[test]
    fn rejects_invalid_utf8() {
        let data: &[u8] = b"text\n\xff\xfe broken\n";
        let err = read_table(data).unwrap_err();
        assert!(matches!(err, SentimentError::MalformedTabularInput(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_table_file(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, SentimentError::Io(_)));
    }
}

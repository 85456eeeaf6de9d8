pub mod detector;
pub mod reader;

pub use detector::{TEXT_COLUMN_CANDIDATES, detect};
pub use reader::{read_table, read_table_file};

use serde::{Deserialize, Serialize};

/// A parsed table: header names plus rows of raw cells. Missing cells are
/// `None`, present ones keep their text untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        Table { columns, rows }
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cells of `name` in row order, `None` for missing values.
    pub fn column_values(&self, name: &str) -> Option<Vec<Option<&str>>> {
        let index = self.column_index(name)?;
        Some(
            self.rows
                .iter()
                .map(|row| row.get(index).and_then(|cell| cell.as_deref()))
                .collect(),
        )
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

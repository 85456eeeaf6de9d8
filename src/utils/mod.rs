pub mod io;

pub use io::{
    RESULTS_FILE_NAME, ResultRow, export_report_to_json, export_results_to_csv,
    results_to_csv_bytes, write_results_csv,
};

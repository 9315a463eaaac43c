pub mod ports;
pub mod report;
pub mod table_scanner;
pub mod unquote;

pub use report::{OutputFormat, ReportOptions, render_report};
pub use table_scanner::{ExtractedTable, TableNameExtractor, normalize_whitespace};
pub use unquote::{UnquotedTable, unquote_names, unquote_tables};

/// Extracts table names from `query` with a silent extractor.
pub fn parse_table_names(query: &str) -> Vec<String> {
    TableNameExtractor::new().parse(query)
}

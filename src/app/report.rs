use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::table_scanner::ExtractedTable;
use crate::unquote::unquote_tables;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportOptions {
    pub format: OutputFormat,
    /// Print occurrence counts next to each name.
    pub counts: bool,
    /// Strip backticks and merge names before printing.
    pub unquote: bool,
}

#[derive(Debug, Serialize)]
struct ReportRow {
    name: String,
    occurrences: usize,
}

/// Renders extracted tables without a trailing newline. An empty plain
/// report is an empty string.
pub fn render_report(
    tables: &[ExtractedTable],
    options: &ReportOptions,
) -> Result<String, serde_json::Error> {
    let rows: Vec<ReportRow> = if options.unquote {
        unquote_tables(tables)
            .into_iter()
            .map(|table| ReportRow {
                name: table.name.to_string(),
                occurrences: table.occurrences,
            })
            .collect()
    } else {
        tables
            .iter()
            .map(|table| ReportRow {
                name: table.name.to_string(),
                occurrences: table.occurrences,
            })
            .collect()
    };

    match (options.format, options.counts) {
        (OutputFormat::Plain, false) => Ok(rows
            .iter()
            .map(|row| row.name.as_str())
            .collect::<Vec<_>>()
            .join("\n")),
        (OutputFormat::Plain, true) => Ok(rows
            .iter()
            .map(|row| format!("{}\t{}", row.name, row.occurrences))
            .collect::<Vec<_>>()
            .join("\n")),
        (OutputFormat::Json, false) => {
            let names: Vec<&str> = rows.iter().map(|row| row.name.as_str()).collect();
            serde_json::to_string(&names)
        }
        (OutputFormat::Json, true) => serde_json::to_string(&rows),
    }
}

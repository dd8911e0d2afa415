use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One inferred field boundary of the header line, in character offsets.
///
/// `end_index` of the final column is nominal only: rows read that column to
/// end-of-line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub column_name: String,
    pub start_index: usize,
    pub end_index: usize,
    pub column_index: usize,
}

/// Column name to trimmed cell text for a single data line.
pub type Row = HashMap<String, String>;

/// Parsed `(columns, rows)` pair for one invocation's output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDescription {
    pub columns: Vec<ColumnSpec>,
    pub rows: Vec<Row>,
}

impl TableDescription {
    /// No header was found.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.column_name.as_str())
    }

    /// Cell value for `row` in `column`, empty when the row has no such key.
    pub fn cell<'a>(&'a self, row: &'a Row, column: &ColumnSpec) -> &'a str {
        row.get(&column.column_name).map(String::as_str).unwrap_or("")
    }
}

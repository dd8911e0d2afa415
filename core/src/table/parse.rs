//! Column-aligned table parsing.
//!
//! The header line fixes every column boundary: a column starts where its
//! label starts (the first column starts at 0) and ends where the next label
//! starts. Data lines are sliced at those character offsets, except that the
//! last column always runs to end-of-line because values such as descriptions
//! are routinely wider than their label.

use super::filter::filter_output_to_table;
use super::types::{ColumnSpec, Row, TableDescription};

/// A header label and its character span `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeaderToken<'a> {
    text: &'a str,
    start: usize,
    end: usize,
}

/// Splits the header on whitespace, recording each label's span as it goes.
fn header_tokens(header: &str) -> Vec<HeaderToken<'_>> {
    let mut tokens = Vec::new();
    // (char offset, byte offset) of the label being read
    let mut open: Option<(usize, usize)> = None;
    let mut chars = 0usize;

    for (byte, ch) in header.char_indices() {
        match (ch.is_whitespace(), open) {
            (false, None) => open = Some((chars, byte)),
            (true, Some((start, from))) => {
                tokens.push(HeaderToken {
                    text: &header[from..byte],
                    start,
                    end: chars,
                });
                open = None;
            }
            _ => {}
        }
        chars += 1;
    }
    if let Some((start, from)) = open {
        tokens.push(HeaderToken {
            text: &header[from..],
            start,
            end: chars,
        });
    }
    tokens
}

/// Infers the ordered, contiguous column boundaries of a header line.
pub fn segment_header(header: &str) -> Vec<ColumnSpec> {
    let tokens = header_tokens(header);
    let header_len = header.chars().count();

    let mut columns = Vec::with_capacity(tokens.len());
    let mut start_index = 0usize;
    for (column_index, token) in tokens.iter().enumerate() {
        let end_index = match tokens.get(column_index + 1) {
            Some(next) => {
                debug_assert!(token.end <= next.start, "header tokens overlap");
                next.start
            }
            None => header_len,
        };
        debug_assert!(token.end <= end_index);
        columns.push(ColumnSpec {
            column_name: token.text.trim().to_string(),
            start_index,
            end_index,
            column_index,
        });
        start_index = end_index;
    }
    columns
}

/// Substring of `line` between two character offsets, clamped to the line.
fn char_slice(line: &str, start: usize, end: Option<usize>) -> &str {
    let byte_at = |n: usize| {
        line.char_indices()
            .nth(n)
            .map(|(byte, _)| byte)
            .unwrap_or(line.len())
    };
    let from = byte_at(start);
    let to = end.map(byte_at).unwrap_or(line.len()).max(from);
    &line[from..to]
}

/// Slices one data line into a row keyed by column name.
pub fn extract_row(columns: &[ColumnSpec], line: &str) -> Row {
    let last = columns.len().saturating_sub(1);
    columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            let end = (i != last).then_some(column.end_index);
            let value = char_slice(line, column.start_index, end).trim();
            (column.column_name.clone(), value.to_string())
        })
        .collect()
}

/// Builds a table from already-filtered lines; the first line is the header.
pub fn build_table_description(lines: &[&str]) -> TableDescription {
    let Some((header, data)) = lines.split_first() else {
        return TableDescription::default();
    };

    let columns = segment_header(header);
    tracing::debug!(
        columns = columns.len(),
        rows = data.len(),
        "segmented table header"
    );
    for column in &columns {
        tracing::trace!(
            name = %column.column_name,
            start = column.start_index,
            end = column.end_index,
            "column"
        );
    }

    let rows = data.iter().map(|line| extract_row(&columns, line)).collect();
    TableDescription { columns, rows }
}

/// Filters raw CLI output and parses what remains.
pub fn parse_table(raw: &str) -> TableDescription {
    build_table_description(&filter_output_to_table(raw))
}

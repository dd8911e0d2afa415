//! Turns the task CLI's column-aligned report output into columns and rows.

mod filter;
mod parse;
mod types;

pub use filter::{filter_output_to_table, filtered_text, is_noise_line};
pub use parse::{build_table_description, extract_row, parse_table, segment_header};
pub use types::{ColumnSpec, Row, TableDescription};

//! Stable re-exports for consumers (`cli`, `plugins`, and external crates).
//!
//! Prefer importing from `tasktable_core::api` instead of reaching into internal modules.

pub use crate::command::{
    inject_display_flags, is_export_invocation, CommandBuilder, DisplayFlag, DISPLAY_FLAGS,
};
pub use crate::config::{
    load_default, load_from_path, AppConfig, LoggingConfig, RenderConfig, RunnerConfig,
};
pub use crate::engine::{
    parse_block, run_block, run_command, BlockOutput, BlockSpec, OutputMode,
};
pub use crate::error::{CliError, RunnerError};
pub use crate::render::{OutputRenderer, RenderInput};
pub use crate::report::{ReportRegistry, ReportSettings};
pub use crate::runner::CommandExecutor;
pub use crate::table::{
    build_table_description, filter_output_to_table, filtered_text, parse_table, segment_header,
    ColumnSpec, Row, TableDescription,
};

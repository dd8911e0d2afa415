use serde::Deserialize;

use crate::command::is_export_invocation;
use crate::error::RunnerError;

/// How a block's command output reaches the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Parsed into a `TableDescription`.
    #[default]
    Table,
    /// Filtered text, no parsing.
    Raw,
    /// `export` with the report's settings as overrides, parsed as JSON.
    Export,
}

/// The mapping a document author writes inside a task-table block.
///
/// ```yaml
/// command: project:home next
/// format: markdown
/// raw: false
/// export: false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BlockSpec {
    pub command: String,
    /// Renderer override for this block.
    #[serde(default)]
    pub format: Option<String>,
    /// Hand the filtered text to the renderer instead of a parsed table.
    #[serde(default)]
    pub raw: bool,
    /// Run the report through `export` and hand over the JSON.
    #[serde(default)]
    pub export: bool,
}

impl BlockSpec {
    /// `export` wins over `raw`. A command ending in `export` is always an export.
    pub fn mode(&self) -> OutputMode {
        if self.export || is_export_invocation(&self.command) {
            OutputMode::Export
        } else if self.raw {
            OutputMode::Raw
        } else {
            OutputMode::Table
        }
    }
}

pub fn parse_block(source: &str) -> Result<BlockSpec, RunnerError> {
    let spec: BlockSpec =
        serde_yaml::from_str(source).map_err(|e| RunnerError::Block(e.to_string()))?;
    if spec.command.trim().is_empty() {
        return Err(RunnerError::Block("`command` must not be empty".to_string()));
    }
    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_command_with_defaults() {
        let spec = parse_block("command: task waiting\n").unwrap();
        assert_eq!(spec.command, "task waiting");
        assert_eq!(spec.format, None);
        assert!(!spec.raw);
        assert!(!spec.export);
        assert_eq!(spec.mode(), OutputMode::Table);
    }

    #[test]
    fn parses_optional_fields() {
        let spec = parse_block("command: next\nformat: markdown\nraw: true\n").unwrap();
        assert_eq!(spec.format.as_deref(), Some("markdown"));
        assert!(spec.raw);
        assert_eq!(spec.mode(), OutputMode::Raw);
    }

    #[test]
    fn export_mode_from_flag_or_trailing_word() {
        let flagged = parse_block("command: next\nraw: true\nexport: true\n").unwrap();
        assert_eq!(flagged.mode(), OutputMode::Export);

        let literal = parse_block("command: project:home export\n").unwrap();
        assert!(!literal.export);
        assert_eq!(literal.mode(), OutputMode::Export);
    }

    #[test]
    fn rejects_missing_or_empty_command() {
        assert!(matches!(parse_block("format: html\n"), Err(RunnerError::Block(_))));
        assert!(matches!(parse_block("command: ''\n"), Err(RunnerError::Block(_))));
        assert!(matches!(parse_block("- not\n- a mapping\n"), Err(RunnerError::Block(_))));
    }
}

use std::sync::Arc;

use crate::command::CommandBuilder;
use crate::config::AppConfig;
use crate::error::RunnerError;
use crate::render::RenderInput;
use crate::report::ReportRegistry;
use crate::runner::CommandExecutor;
use crate::table::{filtered_text, parse_table, TableDescription};

use super::block::{parse_block, BlockSpec, OutputMode};

/// Result of running one block, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockOutput {
    Table(TableDescription),
    Raw(String),
    Export(serde_json::Value),
}

impl BlockOutput {
    pub fn as_render_input(&self) -> RenderInput<'_> {
        match self {
            Self::Table(table) => RenderInput::Table(table),
            Self::Raw(text) => RenderInput::Raw(text),
            Self::Export(value) => RenderInput::Json(value),
        }
    }
}

/// Builds, runs and parses one report invocation.
///
/// A fresh registry is created per call, so the config dump is read once per
/// request and never reused across requests.
#[tracing::instrument(name = "engine.run_command", skip(cfg, executor))]
pub async fn run_command(
    command_string: &str,
    mode: OutputMode,
    cfg: &AppConfig,
    executor: Arc<dyn CommandExecutor>,
) -> Result<BlockOutput, RunnerError> {
    let registry = ReportRegistry::new(cfg, executor.clone());
    let builder = CommandBuilder::new(cfg, &registry);
    let command = match mode {
        OutputMode::Export => builder.build_export(command_string).await?,
        OutputMode::Table | OutputMode::Raw => builder.build(command_string).await?,
    };

    let output = executor.execute(&command).await?;
    tracing::debug!(bytes = output.len(), "report output captured");

    match mode {
        OutputMode::Raw => Ok(BlockOutput::Raw(filtered_text(&output))),
        OutputMode::Export => {
            let value: serde_json::Value = serde_json::from_str(output.trim())
                .map_err(|e| RunnerError::Export(e.to_string()))?;
            tracing::debug!(
                tasks = value.as_array().map(Vec::len).unwrap_or(0),
                "export parsed"
            );
            Ok(BlockOutput::Export(value))
        }
        OutputMode::Table => {
            let table = parse_table(&output);
            tracing::debug!(
                columns = table.columns.len(),
                rows = table.rows.len(),
                "report parsed"
            );
            Ok(BlockOutput::Table(table))
        }
    }
}

/// Parses an author block and runs its command.
pub async fn run_block(
    source: &str,
    cfg: &AppConfig,
    executor: Arc<dyn CommandExecutor>,
) -> Result<(BlockSpec, BlockOutput), RunnerError> {
    let spec = parse_block(source)?;
    let output = run_command(&spec.command, spec.mode(), cfg, executor).await?;
    Ok((spec, output))
}

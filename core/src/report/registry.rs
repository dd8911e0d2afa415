use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::command::inject_display_flags;
use crate::config::AppConfig;
use crate::error::RunnerError;
use crate::runner::CommandExecutor;

use super::line::{parse_report_lines, ReportLine};
use super::settings::ReportSettings;

/// Report definitions read from the task CLI's configuration dump.
///
/// A registry is meant to live for one top-level request: the dump runs at
/// most once (on first use) and is shared by every query made through this
/// value. A failed dump is not cached.
pub struct ReportRegistry {
    task_bin: String,
    executor: Arc<dyn CommandExecutor>,
    dump: OnceCell<Vec<ReportLine>>,
}

impl ReportRegistry {
    pub fn new(cfg: &AppConfig, executor: Arc<dyn CommandExecutor>) -> Self {
        Self {
            task_bin: cfg.task_bin().to_string(),
            executor,
            dump: OnceCell::new(),
        }
    }

    /// Command that prints every `report.*` setting.
    pub fn dump_command(&self) -> String {
        format!("{} {}", self.task_bin, inject_display_flags("show report"))
    }

    async fn lines(&self) -> Result<&[ReportLine], RunnerError> {
        let lines = self
            .dump
            .get_or_try_init(|| async {
                let command = self.dump_command();
                tracing::debug!(executor = self.executor.name(), %command, "dumping report config");
                let output = self.executor.execute(&command).await?;
                Ok::<_, RunnerError>(parse_report_lines(&output))
            })
            .await?;
        Ok(lines.as_slice())
    }

    /// Configured report names in first-seen order, without duplicates.
    pub async fn list_report_names(&self) -> Result<Vec<String>, RunnerError> {
        let mut names: Vec<String> = Vec::new();
        for line in self.lines().await? {
            if !names.iter().any(|n| n == &line.name) {
                names.push(line.name.clone());
            }
        }
        Ok(names)
    }

    pub async fn contains(&self, name: &str) -> Result<bool, RunnerError> {
        Ok(self.lines().await?.iter().any(|line| line.name == name))
    }

    /// Settings of `name`; unknown reports yield an empty map.
    pub async fn report_settings(&self, name: &str) -> Result<ReportSettings, RunnerError> {
        Ok(self
            .lines()
            .await?
            .iter()
            .filter(|line| line.name == name)
            .map(|line| (line.key.clone(), line.value.clone()))
            .collect())
    }

    /// `(name, description)` for every configured report.
    pub async fn list_reports(&self) -> Result<Vec<(String, Option<String>)>, RunnerError> {
        let mut out = Vec::new();
        for name in self.list_report_names().await? {
            let description = self
                .report_settings(&name)
                .await?
                .description()
                .map(str::to_string);
            out.push((name, description));
        }
        Ok(out)
    }
}

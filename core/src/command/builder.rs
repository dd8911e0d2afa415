use std::borrow::Cow;
use std::path::Path;

use crate::config::AppConfig;
use crate::error::RunnerError;
use crate::report::ReportRegistry;

use super::flags::inject_display_flags;

/// Word that selects the task CLI's JSON export instead of a report.
pub const EXPORT_WORD: &str = "export";

/// Turns an author-written report invocation into the command line to run.
///
/// The report name must be the last word of the invocation, so filters and
/// modifiers go in front of it: `project:home next`. The invocation is split
/// with shell rules and every word is re-quoted, so nothing the author writes
/// is interpreted by the shell that runs the command.
pub struct CommandBuilder<'a> {
    task_bin: String,
    registry: &'a ReportRegistry,
}

impl<'a> CommandBuilder<'a> {
    pub fn new(cfg: &AppConfig, registry: &'a ReportRegistry) -> Self {
        Self {
            task_bin: cfg.task_bin().to_string(),
            registry,
        }
    }

    /// Validates the trailing report token, then adds the display flags and
    /// the configured binary. Nothing is executed when validation fails.
    #[tracing::instrument(name = "command.build", skip(self))]
    pub async fn build(&self, command_string: &str) -> Result<String, RunnerError> {
        let words = split_invocation(command_string, &self.task_bin)?;
        let report = words.last().map(String::as_str).unwrap_or("");
        self.ensure_report(report).await?;

        let command = format!(
            "{} {}",
            self.task_bin,
            inject_display_flags(&quote_words(&words))
        );
        tracing::info!(%command, "built report command");
        Ok(command)
    }

    /// Builds a JSON export command.
    ///
    /// An invocation that already starts or ends with `export` is passed
    /// through quoted. Otherwise the trailing report is replaced by `export`
    /// followed by one `rc.<key>=<value>` override per report setting.
    #[tracing::instrument(name = "command.build_export", skip(self))]
    pub async fn build_export(&self, command_string: &str) -> Result<String, RunnerError> {
        let mut words = split_invocation(command_string, &self.task_bin)?;

        if !names_export(&words) {
            let report = words.pop().unwrap_or_default();
            self.ensure_report(&report).await?;
            let settings = self.registry.report_settings(&report).await?;
            words.push(EXPORT_WORD.to_string());
            words.extend(settings.iter().map(|(key, value)| format!("rc.{key}={value}")));
        }

        let command = format!("{} {}", self.task_bin, quote_words(&words));
        tracing::info!(%command, "built export command");
        Ok(command)
    }

    async fn ensure_report(&self, report: &str) -> Result<(), RunnerError> {
        if report.is_empty() || !self.registry.contains(report).await? {
            tracing::warn!(report, "not a configured report");
            return Err(RunnerError::Validation(report.to_string()));
        }
        Ok(())
    }
}

fn names_export(words: &[String]) -> bool {
    [words.first(), words.last()]
        .into_iter()
        .flatten()
        .any(|w| w == EXPORT_WORD)
}

/// True when the invocation, minus a leading `task`, starts or ends with
/// `export`. Unsplittable input is not an export.
pub fn is_export_invocation(command_string: &str) -> bool {
    split_invocation(command_string, "task")
        .map(|words| names_export(&words))
        .unwrap_or(false)
}

/// Names the tool may be echoed as: `task`, plus the stem of the last word
/// of the configured binary (`wsl /opt/bin/task.exe` gives `task`).
fn tool_names(task_bin: &str) -> impl Iterator<Item = &str> {
    let stem = task_bin
        .split_whitespace()
        .last()
        .and_then(|bin| Path::new(bin).file_stem())
        .and_then(|s| s.to_str());
    std::iter::once("task").chain(stem)
}

/// Splits with shell quoting rules and drops a leading tool-name word such
/// as the `task` in `task next`.
fn split_invocation(command_string: &str, task_bin: &str) -> Result<Vec<String>, RunnerError> {
    let mut words = shell_words::split(command_string)
        .map_err(|e| RunnerError::Invocation(format!("{e}: {command_string}")))?;
    if words.len() > 1 && tool_names(task_bin).any(|name| name == words[0]) {
        words.remove(0);
    }
    Ok(words)
}

fn is_plain_word(word: &str) -> bool {
    !word.is_empty()
        && word.chars().all(|c| {
            c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ',' | ':' | '=' | '+' | '/' | '@' | '%')
        })
}

/// Plain words stay as written; anything else is single-quoted.
fn quote_word(word: &str) -> Cow<'_, str> {
    if is_plain_word(word) {
        Cow::Borrowed(word)
    } else {
        shell_words::quote(word)
    }
}

fn quote_words(words: &[String]) -> String {
    words
        .iter()
        .map(|w| quote_word(w))
        .collect::<Vec<_>>()
        .join(" ")
}

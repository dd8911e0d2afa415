#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tasktable_core::api::{AppConfig, CommandExecutor, RunnerError};

pub const SHOW_REPORT: &str = include_str!("../fixtures/show_report.txt");
pub const NEXT_REPORT: &str = include_str!("../fixtures/next.txt");

pub const DUMP_COMMAND: &str = "task rc.detection:off rc.defaultwidth:1000 show report";

enum Scripted {
    Output(String),
    Fail { exit_code: i32, stderr: String },
}

/// Executor answering from a script and recording every command it sees.
#[derive(Default)]
pub struct FakeExecutor {
    script: HashMap<String, Scripted>,
    calls: Mutex<Vec<String>>,
}

impl FakeExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output(mut self, command: &str, output: &str) -> Self {
        self.script
            .insert(command.to_string(), Scripted::Output(output.to_string()));
        self
    }

    pub fn with_failure(mut self, command: &str, exit_code: i32, stderr: &str) -> Self {
        self.script.insert(
            command.to_string(),
            Scripted::Fail {
                exit_code,
                stderr: stderr.to_string(),
            },
        );
        self
    }

    /// Dump fixture under the default `task` binary.
    pub fn with_reports(self) -> Self {
        self.with_output(DUMP_COMMAND, SHOW_REPORT)
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

#[async_trait]
impl CommandExecutor for FakeExecutor {
    fn name(&self) -> &str {
        "fake"
    }

    async fn execute(&self, command: &str) -> Result<String, RunnerError> {
        self.calls.lock().unwrap().push(command.to_string());
        match self.script.get(command) {
            Some(Scripted::Output(out)) => Ok(out.clone()),
            Some(Scripted::Fail { exit_code, stderr }) => Err(RunnerError::Execution {
                command: command.to_string(),
                exit_code: *exit_code,
                stderr: stderr.clone(),
            }),
            None => Err(RunnerError::Execution {
                command: command.to_string(),
                exit_code: 1,
                stderr: format!("unscripted command: {command}"),
            }),
        }
    }
}

pub fn config_with_bin(task_bin: &str) -> AppConfig {
    AppConfig {
        task_bin: task_bin.to_string(),
        ..AppConfig::default()
    }
}

use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tasktable_core::api::{CommandExecutor, RunnerConfig, RunnerError};
use tokio::process::Command;

#[cfg(windows)]
const DEFAULT_SHELL: &str = "cmd";
#[cfg(not(windows))]
const DEFAULT_SHELL: &str = "sh";

/// Runs command strings through the platform shell and buffers stdout.
pub struct ShellCommandExecutor {
    shell: String,
    /// 0 disables the limit.
    timeout_ms: u64,
}

impl ShellCommandExecutor {
    pub fn new(cfg: &RunnerConfig) -> Self {
        let shell = cfg
            .shell
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SHELL)
            .to_string();
        Self {
            shell,
            timeout_ms: cfg.timeout_ms,
        }
    }

    fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }

    fn command_flag(&self) -> &'static str {
        let name = self.shell.rsplit(['/', '\\']).next().unwrap_or(&self.shell);
        if name.eq_ignore_ascii_case("cmd") || name.eq_ignore_ascii_case("cmd.exe") {
            "/C"
        } else {
            "-c"
        }
    }
}

impl Default for ShellCommandExecutor {
    fn default() -> Self {
        Self::new(&RunnerConfig::default())
    }
}

#[async_trait]
impl CommandExecutor for ShellCommandExecutor {
    fn name(&self) -> &str {
        "shell"
    }

    async fn execute(&self, command: &str) -> Result<String, RunnerError> {
        tracing::debug!(shell = %self.shell, %command, "spawning");
        let child = Command::new(&self.shell)
            .arg(self.command_flag())
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| RunnerError::Spawn(format!("{}: {e}", self.shell)))?;

        let wait = child.wait_with_output();
        let output = match self.timeout() {
            // dropping the future kills the child
            Some(limit) => tokio::time::timeout(limit, wait).await.map_err(|_| {
                tracing::warn!(%command, timeout_ms = self.timeout_ms, "command timed out");
                RunnerError::Timeout {
                    command: command.to_string(),
                    timeout_ms: self.timeout_ms,
                }
            })?,
            None => wait.await,
        }
        .map_err(|e| RunnerError::Spawn(format!("{command}: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let exit_code = output.status.code().unwrap_or(-1);
            tracing::warn!(%command, exit_code, "command failed");
            return Err(RunnerError::Execution {
                command: command.to_string(),
                exit_code,
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

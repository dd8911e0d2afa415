use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("runner failed: {0}")]
    Runner(#[from] RunnerError),
    #[error("config error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("must be a report invocation; found `{0}`")]
    Validation(String),
    #[error("command `{command}` exited with {exit_code}: {stderr}")]
    Execution {
        command: String,
        exit_code: i32,
        stderr: String,
    },
    #[error("invalid invocation: {0}")]
    Invocation(String),
    #[error("export output is not valid JSON: {0}")]
    Export(String),
    #[error("spawn failed: {0}")]
    Spawn(String),
    #[error("command `{command}` timed out after {timeout_ms}ms")]
    Timeout { command: String, timeout_ms: u64 },
    #[error("config error: {0}")]
    Config(String),
    #[error("invalid block: {0}")]
    Block(String),
    #[error("plugin error: {0}")]
    Plugin(#[from] anyhow::Error),
}

impl RunnerError {
    /// The requested report token did not name a configured report.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// The external process failed, could not start, or hung.
    pub fn is_collaborator(&self) -> bool {
        matches!(
            self,
            Self::Execution { .. } | Self::Spawn(_) | Self::Timeout { .. }
        )
    }
}

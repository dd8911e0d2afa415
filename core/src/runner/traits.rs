use async_trait::async_trait;

use crate::error::RunnerError;

/// Runs a fully formed command line and hands back its complete stdout.
///
/// Implementations block the caller until the process exits; there is no
/// streaming of partial output.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    fn name(&self) -> &str;
    async fn execute(&self, command: &str) -> Result<String, RunnerError>;
}

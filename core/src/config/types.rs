use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Binary used to reach the task CLI, e.g. "task" or "wsl task".
    #[serde(default = "default_task_bin")]
    pub task_bin: String,

    #[serde(default)]
    pub runner: RunnerConfig,

    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_task_bin() -> String {
    "task".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            task_bin: default_task_bin(),
            runner: RunnerConfig::default(),
            render: RenderConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Configured binary with surrounding whitespace removed.
    pub fn task_bin(&self) -> &str {
        self.task_bin.trim()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Upper bound for a single external invocation. 0 disables the limit.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Shell used to run command strings. Defaults to `sh` (`cmd` on Windows).
    #[serde(default)]
    pub shell: Option<String>,
}

fn default_timeout_ms() -> u64 {
    30_000
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            shell: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// One of "html", "markdown", "text", "json".
    #[serde(default = "default_render_format")]
    pub format: String,
}

fn default_render_format() -> String {
    "html".to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: default_render_format(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,

    /// If true, log to stderr.
    #[serde(default = "default_logging_console")]
    pub console: bool,

    /// If true, log to a file under `directory` (or OS temp dir if unset).
    #[serde(default = "default_logging_file")]
    pub file: bool,

    /// EnvFilter string, e.g. "info" or "tasktable_core=debug".
    #[serde(default = "default_logging_level")]
    pub level: String,

    /// Optional directory for log files. If empty or unset, uses OS temp dir.
    #[serde(default)]
    pub directory: Option<String>,
}

fn default_logging_enabled() -> bool {
    true
}

fn default_logging_console() -> bool {
    true
}

fn default_logging_file() -> bool {
    false
}

fn default_logging_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
            console: default_logging_console(),
            file: default_logging_file(),
            level: default_logging_level(),
            directory: None,
        }
    }
}

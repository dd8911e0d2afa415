use clap::Parser;
mod app;
mod commands;
use commands::cli;
use tasktable_core::api::{AppConfig, CliError, LoggingConfig, RunnerError};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

static LOG_GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
    std::sync::OnceLock::new();

#[tokio::main]
async fn main() {
    let exit = match real_main().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            exit_code_for_error(&e)
        }
    };

    std::process::exit(exit);
}

async fn real_main() -> Result<i32, CliError> {
    let args = cli::Args::parse();
    let cfg = load_config(&args)?;
    init_tracing(&cfg.logging).map_err(CliError::Config)?;
    tracing::debug!(task_bin = %cfg.task_bin(), timeout_ms = cfg.runner.timeout_ms, "config ready");

    match args.command {
        cli::Commands::Reports => app::reports(&cfg).await,
        cli::Commands::Settings(a) => app::settings(&cfg, a).await,
        cli::Commands::Command(a) => app::command(&cfg, a).await,
        cli::Commands::Render(a) => app::render(&cfg, a).await,
        cli::Commands::Parse(a) => app::parse(&cfg, a).await,
    }
}

fn load_config(args: &cli::Args) -> Result<AppConfig, CliError> {
    let mut cfg = match &args.config {
        Some(path) => tasktable_core::config::load_from_path(path),
        None => tasktable_core::config::load_default(),
    }
    .map_err(|e| CliError::Config(e.to_string()))?;

    // Command-line flags win over file and environment
    if let Some(bin) = args.task_bin.as_deref().filter(|b| !b.trim().is_empty()) {
        cfg.task_bin = bin.to_string();
    }
    if let Some(ms) = args.timeout_ms {
        cfg.runner.timeout_ms = ms;
    }
    Ok(cfg)
}

fn exit_code_for_error(e: &CliError) -> i32 {
    // 0: success
    // 11: config error
    // 12: invalid report invocation or block
    // 20: task CLI failed, could not start, or timed out
    // 50: internal/uncategorized
    match e {
        CliError::Config(_) => 11,
        CliError::Runner(re) => match re {
            RunnerError::Config(_) => 11,
            RunnerError::Validation(_) | RunnerError::Invocation(_) | RunnerError::Block(_) => 12,
            RunnerError::Execution { .. }
            | RunnerError::Spawn(_)
            | RunnerError::Timeout { .. }
            | RunnerError::Export(_) => 20,
            RunnerError::Plugin(_) => 50,
        },
        CliError::Io(_) => 20,
        CliError::Anyhow(_) => 50,
    }
}

fn init_tracing(logging: &LoggingConfig) -> Result<(), String> {
    if !logging.enabled {
        return Ok(());
    }

    let filter = match std::env::var("RUST_LOG") {
        Ok(v) if !v.trim().is_empty() => EnvFilter::from_default_env(),
        _ => EnvFilter::try_new(logging.level.clone()).map_err(|e| e.to_string())?,
    };

    let mut maybe_writer = None;

    if logging.file {
        let dir = match logging
            .directory
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            Some(d) => std::path::PathBuf::from(d),
            None => std::env::temp_dir().join("tasktable"),
        };

        std::fs::create_dir_all(&dir).map_err(|e| format!("create log dir failed: {e}"))?;
        let file_name = format!("tasktable.{}.log", std::process::id());
        let appender = tracing_appender::rolling::never(dir, file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(appender);
        let _ = LOG_GUARD.set(guard);
        maybe_writer = Some(non_blocking);
    }

    if !logging.console && maybe_writer.is_none() {
        return Err("logging disabled for both console and file".to_string());
    }

    let console_layer = logging.console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(atty::is(atty::Stream::Stderr))
    });

    let file_layer = maybe_writer.map(|w| {
        tracing_subscriber::fmt::layer()
            .with_writer(w)
            .with_ansi(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(())
}

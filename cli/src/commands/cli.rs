use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tasktable", version, about = "Render task CLI reports as tables")]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file to use instead of ~/.tasktable/config.toml or ./config.toml.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Task binary, e.g. "task" or "wsl task".
    #[arg(long, global = true)]
    pub task_bin: Option<String>,

    /// Timeout for each external invocation; 0 disables it.
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct SettingsArgs {
    pub report: String,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct CommandArgs {
    /// Report invocation; the report name must be the last word.
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub invocation: Vec<String>,

    /// Print the JSON export command carrying the report's settings instead.
    #[arg(long)]
    pub export: bool,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct RenderArgs {
    /// YAML block file with a `command` field. Read from stdin when no input is given.
    #[arg(long, group = "input")]
    pub block: Option<PathBuf>,

    /// Report invocation to run directly.
    #[arg(long, group = "input")]
    pub command: Option<String>,

    /// html, markdown, text or json.
    #[arg(long)]
    pub format: Option<String>,

    /// Render the filtered output without parsing it into columns.
    #[arg(long)]
    pub raw: bool,

    /// Run the report as a JSON export with its settings as overrides.
    #[arg(long)]
    pub export: bool,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ParseArgs {
    /// Captured report output. Read from stdin when omitted.
    #[arg(long)]
    pub file: Option<PathBuf>,

    #[arg(long)]
    pub format: Option<String>,

    #[arg(long)]
    pub raw: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List configured reports.
    Reports,
    /// Print the settings of one report.
    Settings(SettingsArgs),
    /// Print the command that would run for an invocation.
    Command(CommandArgs),
    /// Run a report and render its output.
    Render(RenderArgs),
    /// Parse already-captured report output.
    Parse(ParseArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_render_with_global_flags() {
        let args = Args::try_parse_from([
            "tasktable",
            "render",
            "--command",
            "project:home next",
            "--format",
            "markdown",
            "--task-bin",
            "wsl task",
        ])
        .unwrap();
        assert_eq!(args.task_bin.as_deref(), Some("wsl task"));
        match args.command {
            Commands::Render(r) => {
                assert_eq!(r.command.as_deref(), Some("project:home next"));
                assert_eq!(r.format.as_deref(), Some("markdown"));
                assert!(!r.raw);
                assert!(!r.export);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn block_and_command_are_exclusive() {
        let res = Args::try_parse_from([
            "tasktable", "render", "--block", "b.yaml", "--command", "next",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn render_accepts_export() {
        let args =
            Args::try_parse_from(["tasktable", "render", "--command", "next", "--export"]).unwrap();
        match args.command {
            Commands::Render(r) => assert!(r.export),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn command_collects_trailing_words() {
        let args =
            Args::try_parse_from(["tasktable", "command", "task", "-home", "next"]).unwrap();
        match args.command {
            Commands::Command(c) => assert_eq!(c.invocation, vec!["task", "-home", "next"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}

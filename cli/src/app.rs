//! Subcommand handlers: each builds its own request-scoped registry.
use std::path::Path;

use tasktable_core::api as core_api;
use tasktable_core::api::RenderInput;
use tasktable_plugins::factory::{build_executor, build_renderer};
use tokio::io::AsyncReadExt;

use crate::commands::cli::{CommandArgs, ParseArgs, RenderArgs, SettingsArgs};

async fn read_input(path: Option<&Path>) -> Result<String, core_api::CliError> {
    match path {
        Some(p) => Ok(tokio::fs::read_to_string(p).await?),
        None => {
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            Ok(buf)
        }
    }
}

pub async fn reports(cfg: &core_api::AppConfig) -> Result<i32, core_api::CliError> {
    let registry = core_api::ReportRegistry::new(cfg, build_executor(cfg));
    let reports = registry.list_reports().await?;
    let width = reports.iter().map(|(n, _)| n.len()).max().unwrap_or(0);
    for (name, description) in reports {
        match description {
            Some(d) => println!("{name:<width$}  {d}"),
            None => println!("{name}"),
        }
    }
    Ok(0)
}

pub async fn settings(
    cfg: &core_api::AppConfig,
    args: SettingsArgs,
) -> Result<i32, core_api::CliError> {
    let registry = core_api::ReportRegistry::new(cfg, build_executor(cfg));
    if !registry.contains(&args.report).await? {
        return Err(core_api::RunnerError::Validation(args.report).into());
    }
    let settings = registry.report_settings(&args.report).await?;
    let width = settings.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    for (key, value) in settings.iter() {
        println!("{key:<width$}  {value}");
    }
    Ok(0)
}

pub async fn command(
    cfg: &core_api::AppConfig,
    args: CommandArgs,
) -> Result<i32, core_api::CliError> {
    let registry = core_api::ReportRegistry::new(cfg, build_executor(cfg));
    let builder = core_api::CommandBuilder::new(cfg, &registry);
    let invocation = shell_words::join(&args.invocation);
    let command = if args.export || core_api::is_export_invocation(&invocation) {
        builder.build_export(&invocation).await?
    } else {
        builder.build(&invocation).await?
    };
    println!("{command}");
    Ok(0)
}

#[tracing::instrument(name = "cli.render", skip(cfg))]
pub async fn render(
    cfg: &core_api::AppConfig,
    args: RenderArgs,
) -> Result<i32, core_api::CliError> {
    let executor = build_executor(cfg);
    let spec = match args.command {
        Some(command) => core_api::BlockSpec {
            command,
            format: None,
            raw: args.raw,
            export: args.export,
        },
        None => {
            let source = read_input(args.block.as_deref()).await?;
            let mut spec = core_api::parse_block(&source)?;
            spec.raw |= args.raw;
            spec.export |= args.export;
            spec
        }
    };
    let output = core_api::run_command(&spec.command, spec.mode(), cfg, executor).await?;
    let block_format = spec.format;

    let format = args
        .format
        .or(block_format)
        .unwrap_or_else(|| cfg.render.format.clone());
    let renderer = build_renderer(&format);
    tracing::debug!(renderer = renderer.name(), "rendering");
    print!("{}", renderer.render(&output.as_render_input()));
    Ok(0)
}

pub async fn parse(cfg: &core_api::AppConfig, args: ParseArgs) -> Result<i32, core_api::CliError> {
    let raw = read_input(args.file.as_deref()).await?;
    let format = args.format.unwrap_or_else(|| cfg.render.format.clone());
    let renderer = build_renderer(&format);

    let rendered = if args.raw {
        renderer.render(&RenderInput::Raw(&core_api::filtered_text(&raw)))
    } else {
        renderer.render(&RenderInput::Table(&core_api::parse_table(&raw)))
    };
    print!("{rendered}");
    Ok(0)
}

use std::sync::Arc;

use tasktable_core::api::{AppConfig, CommandExecutor, OutputRenderer};

use crate::renderers::{HtmlRenderer, JsonRenderer, MarkdownRenderer, TextRenderer};
use crate::runner::ShellCommandExecutor;

pub fn build_executor(cfg: &AppConfig) -> Arc<dyn CommandExecutor> {
    Arc::new(ShellCommandExecutor::new(&cfg.runner))
}

pub fn build_renderer(format: &str) -> Box<dyn OutputRenderer> {
    match format.trim().to_ascii_lowercase().as_str() {
        "markdown" | "md" => Box::new(MarkdownRenderer),
        "text" | "raw" => Box::new(TextRenderer),
        "json" => Box::new(JsonRenderer::new(true)),
        "html" => Box::new(HtmlRenderer),
        other => {
            tracing::warn!("unknown render format {other:?}, using html");
            Box::new(HtmlRenderer)
        }
    }
}

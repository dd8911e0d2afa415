use std::path::{Path, PathBuf};

use super::types::AppConfig;

/// Get the default tasktable data directory: ~/.tasktable
pub fn get_tasktable_data_dir() -> anyhow::Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Cannot determine home directory"))?;
    Ok(home.join(".tasktable"))
}

pub fn load_default() -> anyhow::Result<AppConfig> {
    // Priority 1: ~/.tasktable/config.toml (highest)
    let user_config = get_tasktable_data_dir()?.join("config.toml");

    // Priority 2: ./config.toml (current directory)
    let local_config = Path::new("config.toml");

    let cfg = if user_config.exists() {
        load_from_path(&user_config)?
    } else if local_config.exists() {
        load_from_path(local_config)?
    } else {
        AppConfig::default()
    };

    Ok(apply_env_overrides(cfg))
}

pub fn load_from_path(path: &Path) -> anyhow::Result<AppConfig> {
    let s = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("read {} failed: {e}", path.display()))?;
    let cfg = toml::from_str::<AppConfig>(&s)?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(cfg)
}

// Environment variable overrides (Priority 0: highest)
fn apply_env_overrides(mut cfg: AppConfig) -> AppConfig {
    if let Ok(v) = std::env::var("TASKTABLE_TASK_BIN") {
        if !v.trim().is_empty() {
            cfg.task_bin = v;
        }
    }
    if let Ok(v) = std::env::var("TASKTABLE_TIMEOUT_MS") {
        match v.trim().parse::<u64>() {
            Ok(ms) => cfg.runner.timeout_ms = ms,
            Err(_) if v.trim().is_empty() => {}
            Err(e) => tracing::warn!("ignoring TASKTABLE_TIMEOUT_MS={v:?}: {e}"),
        }
    }
    cfg
}

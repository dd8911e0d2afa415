mod load;
mod types;

pub use load::{get_tasktable_data_dir, load_default, load_from_path};
pub use types::{AppConfig, LoggingConfig, RenderConfig, RunnerConfig};

//! Discovery of named reports from `report.<name>.<key> <value>` config lines.

mod line;
mod registry;
mod settings;

pub use line::{parse_report_lines, ReportLine};
pub use registry::ReportRegistry;
pub use settings::ReportSettings;

//! Report invocation validation and display-flag injection.

mod builder;
mod flags;

pub use builder::{is_export_invocation, CommandBuilder, EXPORT_WORD};
pub use flags::{inject_display_flags, DisplayFlag, DEFAULT_WIDTH, DETECTION_OFF, DISPLAY_FLAGS};

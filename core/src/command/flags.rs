/// A display-control option the table parser depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayFlag {
    /// Key prefix used for the presence check, e.g. `rc.detection:`.
    pub key: &'static str,
    pub value: &'static str,
}

impl DisplayFlag {
    pub fn render(&self) -> String {
        format!("{}{}", self.key, self.value)
    }
}

/// Disables terminal-width detection.
pub const DETECTION_OFF: DisplayFlag = DisplayFlag {
    key: "rc.detection:",
    value: "off",
};

/// Fixed width wide enough that fields are not truncated.
pub const DEFAULT_WIDTH: DisplayFlag = DisplayFlag {
    key: "rc.defaultwidth:",
    value: "1000",
};

/// In the order they appear in a built command.
pub const DISPLAY_FLAGS: [DisplayFlag; 2] = [DETECTION_OFF, DEFAULT_WIDTH];

/// Prepends whichever display flags are missing from `command`.
///
/// Presence is checked by key prefix, so a user-supplied value such as
/// `rc.defaultwidth:200` is kept and not duplicated. Applying this twice is
/// the same as applying it once.
pub fn inject_display_flags(command: &str) -> String {
    let mut out = command.trim().to_string();
    for flag in DISPLAY_FLAGS.iter().rev() {
        if out.contains(flag.key) {
            continue;
        }
        out = if out.is_empty() {
            flag.render()
        } else {
            format!("{} {}", flag.render(), out)
        };
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepends_both_flags_in_order() {
        assert_eq!(
            inject_display_flags("waiting"),
            "rc.detection:off rc.defaultwidth:1000 waiting"
        );
    }

    #[test]
    fn respects_user_supplied_values() {
        assert_eq!(
            inject_display_flags("rc.defaultwidth:200 next"),
            "rc.detection:off rc.defaultwidth:200 next"
        );
        assert_eq!(
            inject_display_flags("rc.detection:on next"),
            "rc.defaultwidth:1000 rc.detection:on next"
        );
    }

    #[test]
    fn is_idempotent() {
        let once = inject_display_flags("project:home next");
        let twice = inject_display_flags(&once);
        assert_eq!(once, twice);
        assert_eq!(twice.matches("rc.detection:").count(), 1);
        assert_eq!(twice.matches("rc.defaultwidth:").count(), 1);
    }

    #[test]
    fn empty_command_gets_only_flags() {
        assert_eq!(inject_display_flags("  "), "rc.detection:off rc.defaultwidth:1000");
    }
}

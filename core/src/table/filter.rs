//! Footer and separator removal for tabular task CLI output.

use regex::Regex;
use std::sync::OnceLock;

fn separator_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[ -]*$").expect("separator regex"))
}

fn count_footer_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+ tasks?$").expect("count footer regex"))
}

fn shown_footer_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+ tasks?, \d+ shown$").expect("shown footer regex"))
}

/// True when `line` is a separator, a blank line, or a summary footer.
pub fn is_noise_line(line: &str) -> bool {
    separator_re().is_match(line) || count_footer_re().is_match(line) || shown_footer_re().is_match(line)
}

/// Splits raw output into lines and drops separators and summary footers.
///
/// Surviving lines keep their order; the first one is the header.
pub fn filter_output_to_table(raw: &str) -> Vec<&str> {
    let mut dropped = 0usize;
    let lines: Vec<&str> = raw
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| {
            let keep = !is_noise_line(line);
            if !keep {
                dropped += 1;
            }
            keep
        })
        .collect();
    tracing::trace!(kept = lines.len(), dropped, "filtered table output");
    lines
}

/// Filtered lines joined back together, for literal rendering.
pub fn filtered_text(raw: &str) -> String {
    filter_output_to_table(raw).join("\n")
}

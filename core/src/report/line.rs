use regex::Regex;
use std::sync::OnceLock;

/// One `report.<name>.<key> <value>` line of the configuration dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub name: String,
    pub key: String,
    pub value: String,
}

fn report_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^report\.([^.\s]+)\.(\S+)\s+(.+)$").unwrap())
}

impl ReportLine {
    /// Returns `None` for anything that is not a report-scoped setting.
    pub fn parse(line: &str) -> Option<Self> {
        let caps = report_line_re().captures(line.trim())?;
        let value = caps[3].trim();
        if value.is_empty() {
            return None;
        }
        Some(Self {
            name: caps[1].to_string(),
            key: caps[2].to_string(),
            value: value.to_string(),
        })
    }
}

/// Keeps the well-formed report lines of a dump, skipping the rest.
pub fn parse_report_lines(dump: &str) -> Vec<ReportLine> {
    let mut skipped = 0usize;
    let lines: Vec<ReportLine> = dump
        .lines()
        .filter_map(|line| {
            let parsed = ReportLine::parse(line);
            if parsed.is_none() && !line.trim().is_empty() {
                skipped += 1;
                tracing::trace!(line, "skipping non-report config line");
            }
            parsed
        })
        .collect();
    tracing::debug!(parsed = lines.len(), skipped, "parsed report config dump");
    lines
}

use tasktable_core::api::{OutputRenderer, RenderInput, TableDescription};

pub struct MarkdownRenderer;

fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|")
}

impl MarkdownRenderer {
    fn render_table(&self, table: &TableDescription) -> String {
        if table.is_empty() {
            return String::new();
        }
        let header: Vec<String> = table.column_names().map(escape_cell).collect();
        let mut out = format!("| {} |\n", header.join(" | "));
        out.push_str(&format!("|{}\n", " --- |".repeat(header.len())));
        for row in &table.rows {
            let cells: Vec<String> = table
                .columns
                .iter()
                .map(|c| escape_cell(table.cell(row, c)))
                .collect();
            out.push_str(&format!("| {} |\n", cells.join(" | ")));
        }
        out
    }
}

impl OutputRenderer for MarkdownRenderer {
    fn name(&self) -> &str {
        "markdown-renderer"
    }

    fn format(&self) -> &str {
        "markdown"
    }

    fn render(&self, input: &RenderInput<'_>) -> String {
        match input {
            RenderInput::Table(table) => self.render_table(table),
            RenderInput::Raw(text) => format!("```\n{text}\n```\n"),
            RenderInput::Json(value) => format!(
                "```json\n{}\n```\n",
                serde_json::to_string_pretty(value).unwrap_or_default()
            ),
        }
    }
}

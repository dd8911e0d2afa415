use comfy_table::presets::NOTHING;
use comfy_table::Table;
use tasktable_core::api::{OutputRenderer, RenderInput, TableDescription};

/// Monospace output: raw text verbatim, tables re-aligned on two-space gaps.
pub struct TextRenderer;

impl TextRenderer {
    fn render_table(&self, table: &TableDescription) -> String {
        let mut out = Table::new();
        out.load_preset(NOTHING);
        out.set_header(table.column_names().collect::<Vec<_>>());
        for row in &table.rows {
            out.add_row(
                table
                    .columns
                    .iter()
                    .map(|c| table.cell(row, c))
                    .collect::<Vec<_>>(),
            );
        }

        let last = table.columns.len().saturating_sub(1);
        for (i, column) in out.column_iter_mut().enumerate() {
            column.set_padding(if i == last { (0, 0) } else { (0, 2) });
        }
        format!("{}\n", out.trim_fmt())
    }
}

impl OutputRenderer for TextRenderer {
    fn name(&self) -> &str {
        "text-renderer"
    }

    fn format(&self) -> &str {
        "text"
    }

    fn render(&self, input: &RenderInput<'_>) -> String {
        match input {
            RenderInput::Table(table) if table.is_empty() => String::new(),
            RenderInput::Table(table) => self.render_table(table),
            RenderInput::Raw(text) => format!("{text}\n"),
            RenderInput::Json(value) => {
                format!("{}\n", serde_json::to_string_pretty(value).unwrap_or_default())
            }
        }
    }
}

use tasktable_core::api::{OutputRenderer, RenderInput, TableDescription};

/// Escapes text for use in element content and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub struct HtmlRenderer;

impl HtmlRenderer {
    fn render_table(&self, table: &TableDescription) -> String {
        let mut out = String::from("<table>\n<thead>\n<tr>");
        for column in &table.columns {
            out.push_str(&format!(
                "<th scope=\"col\">{}</th>",
                escape_html(&column.column_name)
            ));
        }
        out.push_str("</tr>\n</thead>\n<tbody>\n");
        for row in &table.rows {
            out.push_str("<tr>");
            for column in &table.columns {
                out.push_str(&format!("<td>{}</td>", escape_html(table.cell(row, column))));
            }
            out.push_str("</tr>\n");
        }
        out.push_str("</tbody>\n</table>\n");
        out
    }
}

impl OutputRenderer for HtmlRenderer {
    fn name(&self) -> &str {
        "html-renderer"
    }

    fn format(&self) -> &str {
        "html"
    }

    fn render(&self, input: &RenderInput<'_>) -> String {
        match input {
            RenderInput::Table(table) => self.render_table(table),
            RenderInput::Raw(text) => format!("<pre>{}</pre>\n", escape_html(text)),
            RenderInput::Json(value) => format!(
                "<pre>{}</pre>\n",
                escape_html(&serde_json::to_string_pretty(value).unwrap_or_default())
            ),
        }
    }
}

use serde_json::{json, Map, Value};
use tasktable_core::api::{OutputRenderer, RenderInput, TableDescription};

pub struct JsonRenderer {
    pretty_print: bool,
}

impl JsonRenderer {
    pub fn new(pretty_print: bool) -> Self {
        Self { pretty_print }
    }

    fn table_to_json(&self, table: &TableDescription) -> Value {
        let rows: Vec<Value> = table
            .rows
            .iter()
            .map(|row| {
                let cells: Map<String, Value> = table
                    .columns
                    .iter()
                    .map(|c| (c.column_name.clone(), json!(table.cell(row, c))))
                    .collect();
                Value::Object(cells)
            })
            .collect();
        json!({
            "columns": table.columns,
            "rows": rows,
        })
    }
}

impl OutputRenderer for JsonRenderer {
    fn name(&self) -> &str {
        "json-renderer"
    }

    fn format(&self) -> &str {
        "json"
    }

    fn render(&self, input: &RenderInput<'_>) -> String {
        let value = match input {
            RenderInput::Table(table) => self.table_to_json(table),
            RenderInput::Raw(text) => json!({ "raw": text }),
            RenderInput::Json(value) => (*value).clone(),
        };
        let rendered = if self.pretty_print {
            serde_json::to_string_pretty(&value)
        } else {
            serde_json::to_string(&value)
        };
        rendered.unwrap_or_else(|e| {
            tracing::error!("json render failed: {e}");
            String::from("{}")
        })
    }
}

use crate::table::TableDescription;

/// What a renderer is handed: the parsed table, the filtered text as-is, or
/// the JSON from an export.
#[derive(Debug, Clone, Copy)]
pub enum RenderInput<'a> {
    Table(&'a TableDescription),
    Raw(&'a str),
    Json(&'a serde_json::Value),
}

/// Output renderer plugin (controls the document representation).
pub trait OutputRenderer: Send + Sync {
    fn name(&self) -> &str;
    fn format(&self) -> &str;
    fn render(&self, input: &RenderInput<'_>) -> String;
}

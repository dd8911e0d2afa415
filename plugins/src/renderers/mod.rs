pub mod html;
pub mod json;
pub mod markdown;
pub mod text;

pub use html::HtmlRenderer;
pub use json::JsonRenderer;
pub use markdown::MarkdownRenderer;
pub use text::TextRenderer;

use super::{DOCUMENT_TITLE, Document, GENERATOR, RenderContext, json};

pub fn render(document: &Document, ctx: &RenderContext) -> String {
    let value = json::to_value(document, ctx);
    let body = serde_yaml::to_string(&value).unwrap_or_default();
    format!("# {}\n# Generated by {}\n\n{}", DOCUMENT_TITLE, GENERATOR, body)
}

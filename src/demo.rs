//! Sample tree used by the `nmox` binary

use tracing::info;

use crate::document::Document;
use crate::error::Result;
use crate::node::NodeId;
use crate::render::{Html5Renderer, MarkupRenderer, RenderConfig, Renderer};

pub const SAMPLE_CLASS: &str = "container";
pub const SAMPLE_TEXT: &str = "Welcome to NMOX!";

/// Builds `div[class="container"] > h1 > "Welcome to NMOX!"` and returns the
/// document with the handle of the `div`
pub fn sample_document() -> Result<(Document, NodeId)> {
    let mut doc = Document::new();

    let div = doc.create_element("div");
    doc.set_attribute(div, "class", SAMPLE_CLASS)?;

    let heading = doc.create_element("h1");
    let text = doc.create_text(SAMPLE_TEXT);
    doc.append_child(heading, text)?;

    doc.append_child(div, heading)?;

    info!(nodes = doc.len(), "sample document built");
    Ok((doc, div))
}

/// Renders the sample tree as markup, or as a full page when `html5` is set
pub fn render_sample(config: &RenderConfig, html5: bool) -> Result<String> {
    let (doc, root) = sample_document()?;
    if html5 {
        Html5Renderer::new(config.clone()).render(&doc, root)
    } else {
        MarkupRenderer::new(config.clone()).render(&doc, root)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;

    #[test]
    fn test_sample_default() {
        let output = render_sample(&RenderConfig::default(), false).unwrap();
        assert_eq!(
            output,
            r#"<div class="container"><h1 >Welcome to NMOX!</h1></div>"#
        );
    }

    #[test]
    fn test_sample_compact_page() {
        let output = render_sample(&RenderConfig::compact(), true).unwrap();
        assert_eq!(
            output,
            "<!DOCTYPE html>\n<div class=\"container\"><h1>Welcome to NMOX!</h1></div>"
        );
    }

    #[test]
    fn test_sample_shape() {
        let (doc, root) = sample_document().unwrap();
        let heading = doc.children(root).unwrap()[0];
        assert_eq!(doc.node(heading).unwrap().tag_name(), "h1");
        assert_eq!(doc.len(), 3);
    }
}

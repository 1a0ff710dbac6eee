//! Serialization of a node subtree to markup
//!
//! Elements render as `<tag attrs>children</tag>`, text renders verbatim.
//! Nothing is escaped: tag names, attribute values and text pass through
//! unchanged.

mod config;

pub use self::config::{RenderConfig, DEFAULT_MAX_DEPTH};

use tracing::{instrument, trace, warn};

use crate::document::Document;
use crate::error::Result;
use crate::node::{NodeId, NodeKind};

/// Doctype line written by [`Html5Renderer`]
pub const HTML5_DOCTYPE: &str = "<!DOCTYPE html>\n";

/// Trait for rendering a subtree of a document as a string
pub trait Renderer {
    fn render(&self, document: &Document, root: NodeId) -> Result<String>;
}

/// Renders a subtree as bare markup
#[derive(Debug, Clone, Default)]
pub struct MarkupRenderer {
    config: RenderConfig,
}

impl MarkupRenderer {
    pub const fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &RenderConfig {
        &self.config
    }
}

impl Renderer for MarkupRenderer {
    #[instrument(skip(self, document))]
    fn render(&self, document: &Document, root: NodeId) -> Result<String> {
        let mut output = String::new();
        render_node(document, root, 1, &self.config, &mut output).inspect_err(|e| {
            warn!("Render failed: {}", e);
        })?;
        Ok(output)
    }
}

/// Renders a subtree prefixed with the HTML5 doctype line.
///
/// The subtree is not wrapped in an `<html>` element; callers that want a
/// full page pass an `html` root.
#[derive(Debug, Clone, Default)]
pub struct Html5Renderer {
    markup: MarkupRenderer,
}

impl Html5Renderer {
    pub const fn new(config: RenderConfig) -> Self {
        Self {
            markup: MarkupRenderer::new(config),
        }
    }
}

impl Renderer for Html5Renderer {
    fn render(&self, document: &Document, root: NodeId) -> Result<String> {
        let body = self.markup.render(document, root)?;
        Ok(format!("{HTML5_DOCTYPE}{body}"))
    }
}

fn render_node(
    document: &Document,
    id: NodeId,
    depth: usize,
    config: &RenderConfig,
    output: &mut String,
) -> Result<()> {
    config.check_depth(depth)?;
    let node = document.node(id)?;

    match node.kind() {
        NodeKind::Text(text) => output.push_str(text.render()),
        NodeKind::Element(element) => {
            trace!(tag = element.tag_name(), depth, "rendering element");
            element.write_open_tag(output, config);
            for &child in element.children() {
                render_node(document, child, depth + 1, config, output)?;
            }
            element.write_close_tag(output);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::error::ErrorKind;

    fn nested(depth: usize) -> (Document, NodeId) {
        let mut doc = Document::new();
        let root = doc.create_element("div");
        let mut parent = root;
        for _ in 1..depth {
            let child = doc.create_element("div");
            doc.append_child(parent, child).unwrap();
            parent = child;
        }
        (doc, root)
    }

    #[test]
    fn test_markup_renderer_default_spacing() {
        let mut doc = Document::new();
        let root = doc.create_element("p");
        let text = doc.create_text("hi");
        doc.append_child(root, text).unwrap();

        let output = MarkupRenderer::default().render(&doc, root).unwrap();
        assert_eq!(output, "<p >hi</p>");
    }

    #[test]
    fn test_markup_renderer_compact() {
        let mut doc = Document::new();
        let root = doc.create_element("p");
        let output = MarkupRenderer::new(RenderConfig::compact())
            .render(&doc, root)
            .unwrap();
        assert_eq!(output, "<p></p>");
    }

    #[test]
    fn test_html5_renderer_prefixes_doctype() {
        let mut doc = Document::new();
        let root = doc.create_element("html");
        let output = Html5Renderer::default().render(&doc, root).unwrap();
        assert_eq!(output, "<!DOCTYPE html>\n<html ></html>");
    }

    #[test]
    fn test_depth_limit_allows_exact_depth() {
        let (doc, root) = nested(4);
        let renderer = MarkupRenderer::new(RenderConfig::compact().with_max_depth(4));
        assert_eq!(
            renderer.render(&doc, root).unwrap(),
            "<div><div><div><div></div></div></div></div>"
        );
    }

    #[test]
    fn test_depth_limit_exceeded() {
        let (doc, root) = nested(5);
        let renderer = MarkupRenderer::new(RenderConfig::default().with_max_depth(4));
        let err = renderer.render(&doc, root).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::MaxDepthExceeded { max: 4 });
    }

    #[test]
    fn test_text_counts_towards_depth() {
        let mut doc = Document::new();
        let root = doc.create_element("b");
        let text = doc.create_text("x");
        doc.append_child(root, text).unwrap();

        let renderer = MarkupRenderer::new(RenderConfig::default().with_max_depth(1));
        assert!(renderer.render(&doc, root).is_err());
        assert_eq!(renderer.render(&doc, text).unwrap(), "x");
    }
}

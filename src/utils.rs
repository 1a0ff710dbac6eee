use crate::{
    document::Document,
    error::Result,
    node::NodeId,
    render::{Html5Renderer, MarkupRenderer, RenderConfig, Renderer},
};

pub fn render_markup(document: &Document, root: NodeId) -> Result<String> {
    MarkupRenderer::default().render(document, root)
}

pub fn render_compact(document: &Document, root: NodeId) -> Result<String> {
    MarkupRenderer::new(RenderConfig::compact()).render(document, root)
}

pub fn render_html5(document: &Document, root: NodeId) -> Result<String> {
    Html5Renderer::default().render(document, root)
}

//! Node arena and tree operations

use tracing::{debug, instrument, warn};

use crate::error::{Error, ErrorKind, Result};
use crate::node::{ElementNode, Node, NodeId, NodeKind, TextNode};
use crate::render::{MarkupRenderer, Renderer};

/// Owns every node of one or more markup trees.
///
/// Nodes are addressed by [`NodeId`] and are never removed, so a handle stays
/// valid for the lifetime of the document. Parent links are kept in sync with
/// child lists, which lets [`Document::append_child`] reject cycles and move
/// an already attached node to its new parent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn insert(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(kind));
        id
    }

    /// Creates a detached element with no attributes and no children
    pub fn create_element(&mut self, tag_name: &str) -> NodeId {
        let id = self.insert(NodeKind::Element(ElementNode::new(tag_name)));
        debug!(%id, tag_name, "created element");
        id
    }

    /// Creates a detached element and sets the given attributes in order
    pub fn create_element_with<I, K, V>(&mut self, tag_name: &str, attributes: I) -> Result<NodeId>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut element = ElementNode::new(tag_name);
        for (name, value) in attributes {
            element.set_attribute(name.as_ref(), value.as_ref())?;
        }
        let id = self.insert(NodeKind::Element(element));
        debug!(%id, tag_name, "created element with attributes");
        Ok(id)
    }

    /// Creates a detached text node
    pub fn create_text(&mut self, text: &str) -> NodeId {
        let id = self.insert(NodeKind::Text(TextNode::new(text)));
        debug!(%id, len = text.len(), "created text");
        id
    }

    pub fn node(&self, id: NodeId) -> Result<&Node> {
        self.nodes
            .get(id.0)
            .ok_or_else(|| Error::new(ErrorKind::UnknownNode { id }))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.nodes
            .get_mut(id.0)
            .ok_or_else(|| Error::new(ErrorKind::UnknownNode { id }))
    }

    fn element_mut(&mut self, id: NodeId) -> Result<&mut ElementNode> {
        self.node_mut(id)?
            .as_element_mut()
            .ok_or_else(|| Error::new(ErrorKind::NotAnElement { id }))
    }

    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>> {
        Ok(self.node(id)?.parent())
    }

    /// Children in append order; always empty for text nodes
    pub fn children(&self, id: NodeId) -> Result<&[NodeId]> {
        Ok(self
            .node(id)?
            .as_element()
            .map_or(&[][..], ElementNode::children))
    }

    /// Nodes without a parent, in creation order
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.parent().is_none())
            .map(|(index, _)| NodeId(index))
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Result<Option<&str>> {
        Ok(self
            .node(id)?
            .as_element()
            .and_then(|element| element.attribute(name)))
    }

    /// Inserts or overwrites an attribute on an element
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> Result<()> {
        self.element_mut(id)?
            .set_attribute(name, value)
            .inspect_err(|e| warn!(%id, "set_attribute rejected: {}", e))?;
        debug!(%id, name, "attribute set");
        Ok(())
    }

    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> Result<Option<String>> {
        Ok(self.element_mut(id)?.remove_attribute(name))
    }

    /// Whether `ancestor` is `id` itself or lies on the path from `id` to its root
    pub fn is_ancestor_or_self(&self, ancestor: NodeId, id: NodeId) -> Result<bool> {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == ancestor {
                return Ok(true);
            }
            current = self.node(node)?.parent();
        }
        Ok(false)
    }

    /// Appends `child` as the last child of `parent`.
    ///
    /// A child that is already attached somewhere is detached from its old
    /// parent first. Fails without touching the tree when `parent` is a text
    /// node or when `child` is `parent` or one of its ancestors.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.node(child)?;
        if !self.node(parent)?.is_element() {
            warn!(%parent, %child, "append_child rejected: parent is text");
            return Err(Error::new(ErrorKind::NotAnElement { id: parent }));
        }
        if self.is_ancestor_or_self(child, parent)? {
            warn!(%parent, %child, "append_child rejected: cycle");
            return Err(Error::new(ErrorKind::CyclicAppend { parent, child }));
        }

        if let Some(old_parent) = self.node(child)?.parent() {
            self.element_mut(old_parent)?.remove_child(child);
            debug!(%child, %old_parent, "detached from previous parent");
        }

        self.element_mut(parent)?.push_child(child);
        self.node_mut(child)?.parent = Some(parent);
        debug!(%parent, %child, "appended child");
        Ok(())
    }

    /// Renders the subtree rooted at `id` with the default markup renderer
    #[instrument(skip(self))]
    pub fn render(&self, id: NodeId) -> Result<String> {
        MarkupRenderer::default().render(self, id)
    }

    pub fn render_with<R: Renderer>(&self, id: NodeId, renderer: &R) -> Result<String> {
        renderer.render(self, id)
    }
}

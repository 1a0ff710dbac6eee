//! Markup node model
//!
//! A node is either an element (tag, attributes, children) or a run of text.
//! Nodes live inside a [`Document`](crate::Document) and refer to each other
//! through [`NodeId`] handles.

use indexmap::IndexMap;
use std::fmt;

use crate::error::{Error, ErrorKind, Result};
use crate::render::RenderConfig;

/// Handle to a node stored in a [`Document`](crate::Document)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in its document's arena
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Attribute storage, kept in insertion order
pub type Attributes = IndexMap<String, String>;

/// A node slot in the document arena
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<NodeId>,
}

/// The two node variants
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Element(ElementNode),
    Text(TextNode),
}

impl Node {
    pub(crate) fn new(kind: NodeKind) -> Self {
        Self { kind, parent: None }
    }

    pub const fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub const fn as_element(&self) -> Option<&ElementNode> {
        match &self.kind {
            NodeKind::Element(element) => Some(element),
            NodeKind::Text(_) => None,
        }
    }

    pub const fn as_text(&self) -> Option<&TextNode> {
        match &self.kind {
            NodeKind::Text(text) => Some(text),
            NodeKind::Element(_) => None,
        }
    }

    pub const fn is_element(&self) -> bool {
        matches!(self.kind, NodeKind::Element(_))
    }

    /// Tag name; empty for text nodes
    pub fn tag_name(&self) -> &str {
        match &self.kind {
            NodeKind::Element(element) => element.tag_name(),
            NodeKind::Text(_) => "",
        }
    }

    pub(crate) fn as_element_mut(&mut self) -> Option<&mut ElementNode> {
        match &mut self.kind {
            NodeKind::Element(element) => Some(element),
            NodeKind::Text(_) => None,
        }
    }
}

/// A tagged container
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementNode {
    tag_name: String,
    attributes: Attributes,
    children: Vec<NodeId>,
}

impl ElementNode {
    pub(crate) fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    pub const fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Inserts or overwrites an attribute. An overwritten key keeps its position.
    pub(crate) fn set_attribute(&mut self, name: &str, value: &str) -> Result<()> {
        validate_attribute_name(name)?;
        self.attributes.insert(name.to_string(), value.to_string());
        Ok(())
    }

    pub(crate) fn remove_attribute(&mut self, name: &str) -> Option<String> {
        self.attributes.shift_remove(name)
    }

    pub(crate) fn push_child(&mut self, child: NodeId) {
        self.children.push(child);
    }

    pub(crate) fn remove_child(&mut self, child: NodeId) {
        self.children.retain(|&id| id != child);
    }

    /// `key="value"` pairs joined by single spaces
    pub fn attributes_string(&self) -> String {
        self.attributes
            .iter()
            .map(|(name, value)| format!("{name}=\"{value}\""))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub(crate) fn write_open_tag(&self, output: &mut String, config: &RenderConfig) {
        output.push('<');
        output.push_str(&self.tag_name);
        if !self.attributes.is_empty() || config.empty_attribute_space {
            output.push(' ');
        }
        output.push_str(&self.attributes_string());
        output.push('>');
    }

    pub(crate) fn write_close_tag(&self, output: &mut String) {
        output.push_str("</");
        output.push_str(&self.tag_name);
        output.push('>');
    }
}

/// A run of literal text, fixed at construction
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextNode {
    text: String,
}

impl TextNode {
    pub(crate) fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text renders verbatim
    pub fn render(&self) -> &str {
        &self.text
    }
}

/// Checks that `name` can stand as an attribute name in rendered markup
pub fn validate_attribute_name(name: &str) -> Result<()> {
    let forbidden = |c: char| {
        c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '>' | '/' | '=')
    };

    if name.is_empty() || name.chars().any(forbidden) {
        return Err(Error::new(ErrorKind::InvalidAttributeName {
            name: name.to_string(),
        }));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_attribute_overwrite_keeps_position() {
        let mut element = ElementNode::new("a");
        element.set_attribute("href", "/").unwrap();
        element.set_attribute("title", "home").unwrap();
        element.set_attribute("href", "/index").unwrap();

        assert_eq!(element.attribute("href"), Some("/index"));
        assert_eq!(element.attributes_string(), r#"href="/index" title="home""#);
    }

    #[test]
    fn test_remove_attribute() {
        let mut element = ElementNode::new("p");
        element.set_attribute("id", "x").unwrap();
        element.set_attribute("class", "y").unwrap();

        assert_eq!(element.remove_attribute("id"), Some("x".to_string()));
        assert_eq!(element.remove_attribute("id"), None);
        assert_eq!(element.attributes_string(), r#"class="y""#);
    }

    #[test]
    fn test_invalid_attribute_names() {
        for name in ["", "a b", "a=b", "a\"", "a'", "a>", "a/", "a\tb", "a\u{0}"] {
            let err = validate_attribute_name(name).unwrap_err();
            assert_eq!(
                err.kind(),
                &ErrorKind::InvalidAttributeName {
                    name: name.to_string()
                }
            );
        }
    }

    #[test]
    fn test_valid_attribute_names() {
        for name in ["class", "data-id", "aria-label", "xml:lang", "_x", "ä"] {
            assert!(validate_attribute_name(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn test_values_pass_through() {
        let mut element = ElementNode::new("img");
        element.set_attribute("alt", r#"a "quoted" <b>"#).unwrap();
        assert_eq!(element.attributes_string(), r#"alt="a "quoted" <b>""#);
    }

    #[test]
    fn test_open_tag_spacing() {
        let element = ElementNode::new("div");
        let mut legacy = String::new();
        element.write_open_tag(&mut legacy, &RenderConfig::default());
        assert_eq!(legacy, "<div >");

        let mut compact = String::new();
        element.write_open_tag(&mut compact, &RenderConfig::compact());
        assert_eq!(compact, "<div>");
    }

    #[test]
    fn test_text_node() {
        let text = TextNode::new("Hello & <bye>");
        assert_eq!(text.render(), "Hello & <bye>");
        assert_eq!(TextNode::new("").render(), "");
    }

    #[test]
    fn test_node_accessors() {
        let node = Node::new(NodeKind::Text(TextNode::new("x")));
        assert!(!node.is_element());
        assert_eq!(node.tag_name(), "");
        assert!(node.as_element().is_none());
        assert_eq!(node.as_text().map(TextNode::text), Some("x"));
        assert_eq!(node.parent(), None);
    }
}

//! nmox: a small in-memory markup tree
//!
//! This crate provides:
//! - Element and text nodes stored in a [`Document`] arena
//! - Ordered attributes, child appending with cycle checks and re-parenting
//! - Rendering of any subtree to a markup string, bare or as an HTML5 page
//! - A lock-guarded [`SharedDocument`] for multi-threaded use
//!
//! Rendering performs no escaping; text and attribute values are emitted as
//! given.
//!
//! # Examples
//! ```
//! use nmox::{Document, Result};
//!
//! fn example() -> Result<()> {
//!     let mut doc = Document::new();
//!     let div = doc.create_element("div");
//!     doc.set_attribute(div, "class", "container")?;
//!
//!     let heading = doc.create_element("h1");
//!     let text = doc.create_text("Welcome to NMOX!");
//!     doc.append_child(heading, text)?;
//!     doc.append_child(div, heading)?;
//!
//!     assert_eq!(
//!         doc.render(div)?,
//!         r#"<div class="container"><h1 >Welcome to NMOX!</h1></div>"#
//!     );
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![forbid(unsafe_code)]

pub mod demo;
pub mod document;
pub mod error;
pub mod node;
pub mod render;
pub mod shared;
pub mod utils;

// Re-exports
pub use document::Document;
pub use error::{Error, ErrorKind, Result};
pub use node::{Attributes, ElementNode, Node, NodeId, NodeKind, TextNode};
pub use render::{Html5Renderer, MarkupRenderer, RenderConfig, Renderer};
pub use shared::SharedDocument;
pub use utils::{render_compact, render_html5, render_markup};

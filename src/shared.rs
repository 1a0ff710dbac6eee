use parking_lot::RwLock;
use std::sync::Arc;

use crate::document::Document;
use crate::error::Result;
use crate::node::NodeId;

/// A document shared between threads.
///
/// Clones point at the same document. Readers run concurrently, writers get
/// exclusive access for the duration of the closure.
#[derive(Clone, Debug, Default)]
pub struct SharedDocument {
    inner: Arc<RwLock<Document>>,
}

impl SharedDocument {
    pub fn new(document: Document) -> Self {
        Self {
            inner: Arc::new(RwLock::new(document)),
        }
    }

    pub fn read<T>(&self, f: impl FnOnce(&Document) -> T) -> T {
        f(&self.inner.read())
    }

    pub fn write<T>(&self, f: impl FnOnce(&mut Document) -> T) -> T {
        f(&mut self.inner.write())
    }

    pub fn render(&self, id: NodeId) -> Result<String> {
        self.read(|doc| doc.render(id))
    }

    /// Copy of the current document state
    pub fn snapshot(&self) -> Document {
        self.inner.read().clone()
    }
}

impl From<Document> for SharedDocument {
    fn from(document: Document) -> Self {
        Self::new(document)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use std::thread;

    #[test]
    fn test_clones_share_state() {
        let shared = SharedDocument::default();
        let other = shared.clone();
        let div = shared.write(|doc| doc.create_element("div"));

        assert_eq!(other.render(div).unwrap(), "<div ></div>");
        assert_eq!(other.snapshot().len(), 1);
    }

    #[test]
    fn test_concurrent_appends() {
        let shared = SharedDocument::default();
        let list = shared.write(|doc| doc.create_element("ul"));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let shared = shared.clone();
                thread::spawn(move || {
                    shared.write(|doc| {
                        let item = doc.create_element("li");
                        let text = doc.create_text(&i.to_string());
                        doc.append_child(item, text)?;
                        doc.append_child(list, item)
                    })
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap().unwrap();
        }

        assert_eq!(shared.read(|doc| doc.children(list).unwrap().len()), 8);
        let output = shared.render(list).unwrap();
        for i in 0..8 {
            assert!(output.contains(&format!("<li >{i}</li>")));
        }
    }
}

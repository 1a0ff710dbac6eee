/// Default maximum nesting depth accepted by the renderer
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Configuration options for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Emit the space between the tag name and `>` even when an element has no
    /// attributes (`<div ></div>`). This is the historical format.
    pub empty_attribute_space: bool,
    /// Maximum nesting depth of the rendered subtree, root included
    pub max_depth: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            empty_attribute_space: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl RenderConfig {
    /// Drops the stray space in attribute-less open tags (`<div></div>`)
    pub fn compact() -> Self {
        Self {
            empty_attribute_space: false,
            ..Self::default()
        }
    }

    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub const fn with_empty_attribute_space(mut self, enabled: bool) -> Self {
        self.empty_attribute_space = enabled;
        self
    }

    pub(crate) fn check_depth(&self, depth: usize) -> crate::Result<()> {
        if depth > self.max_depth {
            return Err(crate::Error::new(crate::ErrorKind::MaxDepthExceeded {
                max: self.max_depth,
            }));
        }
        Ok(())
    }
}

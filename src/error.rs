//! Error types for nmox

use std::fmt;
use thiserror::Error;

use crate::node::NodeId;

/// Error kind for detailed categorization
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Attribute name is empty or contains a character that cannot appear in markup names
    InvalidAttributeName { name: String },
    /// The child is the parent itself or one of its ancestors
    CyclicAppend { parent: NodeId, child: NodeId },
    /// The handle does not belong to this document
    UnknownNode { id: NodeId },
    /// Text nodes carry neither attributes nor children
    NotAnElement { id: NodeId },
    /// The subtree is nested deeper than the render configuration allows
    MaxDepthExceeded { max: usize },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAttributeName { name } => {
                write!(f, "invalid attribute name: {name:?}")
            }
            Self::CyclicAppend { parent, child } => {
                write!(f, "appending {child} to {parent} would create a cycle")
            }
            Self::UnknownNode { id } => write!(f, "unknown node: {id}"),
            Self::NotAnElement { id } => write!(f, "{id} is not an element"),
            Self::MaxDepthExceeded { max } => write!(f, "max depth exceeded: {max}"),
        }
    }
}

/// Main error type for nmox
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }

    pub fn with_message(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Result type alias for nmox
pub type Result<T> = std::result::Result<T, Error>;

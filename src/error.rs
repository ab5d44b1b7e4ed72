// SPDX-License-Identifier: MPL-2.0
use crate::document::NodeId;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Io(String),
    Config(String),
    Document(DocumentError),
}

/// Failures reported by a host document tree.
///
/// The notifier never recovers from these; they surface unchanged to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentError {
    /// The document has no body yet (not ready).
    MissingBody,

    /// The node id does not belong to this document.
    UnknownNode(NodeId),

    /// `child` is not a direct child of `parent`.
    NotAChild { parent: NodeId, child: NodeId },

    /// Appending would make a node its own ancestor.
    HierarchyRequest { parent: NodeId, child: NodeId },

    /// The tag name contains characters not allowed in an element name.
    InvalidTagName,
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::MissingBody => write!(f, "document has no body"),
            DocumentError::UnknownNode(id) => write!(f, "unknown node {}", id),
            DocumentError::NotAChild { parent, child } => {
                write!(f, "node {} is not a child of {}", child, parent)
            }
            DocumentError::HierarchyRequest { parent, child } => {
                write!(f, "cannot append {} under its descendant {}", child, parent)
            }
            DocumentError::InvalidTagName => write!(f, "invalid tag name"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Document(e) => write!(f, "Document Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<DocumentError> for Error {
    fn from(err: DocumentError) -> Self {
        Error::Document(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

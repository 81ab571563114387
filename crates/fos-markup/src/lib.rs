//! fOS Markup
//!
//! Element trees handed over by a markup parser, and the static reader that
//! turns attribute value expressions into literals where it safely can.
//!
//! The analysis only ever reads these trees.

mod attribute;
mod element;
mod tree;
mod value;

pub use attribute::{find as find_attribute, read, read_named, Attribute, AttributeReadResult};
pub use element::Element;
pub use tree::{Elements, MarkupTree, Node, NodeData};
pub use value::{Expression, Literal, TemplatePart, UnaryOp};

use std::fmt;

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Root node ID
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Tree construction error
#[derive(Debug, thiserror::Error)]
pub enum MarkupError {
    #[error("No node with id {0}")]
    InvalidNode(NodeId),

    #[error("Node {0} cannot have children")]
    NotAContainer(NodeId),

    #[error("Node {0} is already attached")]
    AlreadyAttached(NodeId),
}

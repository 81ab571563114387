//! Markup Tree (arena-based allocation)

use crate::element::Element;
use crate::{MarkupError, NodeId};

/// Tree node
#[derive(Debug, Clone)]
pub struct Node {
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub data: NodeData,
}

/// Node-specific data
#[derive(Debug, Clone)]
pub enum NodeData {
    /// Fragment root
    Root,
    Element(Element),
    Text(String),
}

impl Node {
    /// Element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&Element> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }
}

/// Arena-based markup tree, as handed over by the host parser
#[derive(Debug)]
pub struct MarkupTree {
    nodes: Vec<Node>,
}

impl Default for MarkupTree {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkupTree {
    /// Create a tree holding only the root
    pub fn new() -> Self {
        Self {
            nodes: vec![Node { parent: None, children: Vec::new(), data: NodeData::Root }],
        }
    }

    /// Tree holding a single element under the root
    pub fn from_element(element: Element) -> Self {
        let mut tree = Self::new();
        let id = tree.create_element(element);
        tree.nodes[0].children.push(id);
        tree.nodes[id.index()].parent = Some(NodeId::ROOT);
        tree
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Allocate a detached element node
    pub fn create_element(&mut self, element: Element) -> NodeId {
        self.push(NodeData::Element(element))
    }

    /// Allocate a detached text node
    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.push(NodeData::Text(text.into()))
    }

    fn push(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node { parent: None, children: Vec::new(), data });
        id
    }

    /// Attach `child` as the last child of `parent`
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), MarkupError> {
        let parent_node = self.get(parent).ok_or(MarkupError::InvalidNode(parent))?;
        if matches!(parent_node.data, NodeData::Text(_)) {
            return Err(MarkupError::NotAContainer(parent));
        }
        let child_node = self.get(child).ok_or(MarkupError::InvalidNode(child))?;
        if child == NodeId::ROOT || child_node.parent.is_some() {
            return Err(MarkupError::AlreadyAttached(child));
        }

        self.nodes[child.index()].parent = Some(parent);
        self.nodes[parent.index()].children.push(child);
        Ok(())
    }

    /// Create an element and attach it in one step
    pub fn append_element(&mut self, parent: NodeId, element: Element) -> Result<NodeId, MarkupError> {
        let id = self.create_element(element);
        self.append_child(parent, id)?;
        Ok(id)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Element at `id`, if that node is an element
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        self.get(id).and_then(Node::as_element)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Attached elements in document (pre-)order
    pub fn elements(&self) -> Elements<'_> {
        Elements { tree: self, stack: vec![NodeId::ROOT] }
    }
}

/// Pre-order iterator over attached elements
pub struct Elements<'a> {
    tree: &'a MarkupTree,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Elements<'a> {
    type Item = (NodeId, &'a Element);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.stack.pop() {
            let Some(node) = self.tree.get(id) else {
                continue;
            };
            self.stack.extend(node.children.iter().rev().copied());
            if let Some(element) = node.as_element() {
                return Some((id, element));
            }
        }
        None
    }
}

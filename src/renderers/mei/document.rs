//! MEI output tree and node builder
//!
//! The tree is an arena: nodes live in a `Vec` in creation order and refer
//! to their children by [`NodeId`]. It is built strictly top-down and never
//! edited after [`MeiBuilder::finish`].

use super::ids::IdGenerator;

/// Name of the identifier attribute carried by every node
pub const XML_ID: &str = "xml:id";

/// Index of a node inside its [`MeiDocument`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One emitted MEI element
#[derive(Debug, Clone, PartialEq)]
pub struct MeiNode {
    pub tag: String,
    /// Value of `xml:id`; assigned once at creation
    pub id: String,
    /// Other attributes in insertion order
    pub attributes: Vec<(String, String)>,
    pub children: Vec<NodeId>,
    pub text: Option<String>,
}

impl MeiNode {
    fn new(tag: &str, id: String) -> Self {
        Self {
            tag: tag.to_string(),
            id,
            attributes: Vec::new(),
            children: Vec::new(),
            text: None,
        }
    }

    /// Look up an attribute value by name (`xml:id` included)
    pub fn attribute(&self, name: &str) -> Option<&str> {
        if name == XML_ID {
            return Some(&self.id);
        }
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// The XML declaration
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub version: &'static str,
    pub encoding: &'static str,
}

impl Default for Declaration {
    fn default() -> Self {
        Self { version: "1.0", encoding: "UTF-8" }
    }
}

/// A complete MEI output document
#[derive(Debug, Clone, Default)]
pub struct MeiDocument {
    pub declaration: Declaration,
    nodes: Vec<MeiNode>,
    root: Option<NodeId>,
}

impl MeiDocument {
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &MeiNode {
        &self.nodes[id.0]
    }

    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &MeiNode> {
        self.nodes[id.0].children.iter().map(move |c| &self.nodes[c.0])
    }

    /// Number of element nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Depth-first, pre-order walk from the root
    pub fn iter_preorder(&self) -> Vec<&MeiNode> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id.0];
            out.push(node);
            stack.extend(node.children.iter().rev().copied());
        }
        out
    }

    /// All nodes with the given tag, in document order
    pub fn find_all(&self, tag: &str) -> Vec<&MeiNode> {
        self.iter_preorder()
            .into_iter()
            .filter(|n| n.tag == tag)
            .collect()
    }
}

/// Single entry point for node creation during an export
///
/// Every node receives the next identifier from the builder's own
/// [`IdGenerator`], so identifiers are unique within the document.
#[derive(Debug, Default)]
pub struct MeiBuilder {
    document: MeiDocument,
    ids: IdGenerator,
}

impl MeiBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the document root
    ///
    /// # Panics
    /// If a root already exists.
    pub fn create_root(&mut self, tag: &str) -> NodeId {
        assert!(self.document.root.is_none(), "MEI document already has a root");
        let id = self.push_node(tag);
        self.document.root = Some(id);
        id
    }

    /// Append a new `tag` element as the last child of `parent`
    pub fn create_child(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let id = self.push_node(tag);
        self.document.nodes[parent.0].children.push(id);
        id
    }

    /// Insert or overwrite an attribute
    ///
    /// `xml:id` is owned by the builder and cannot be changed here.
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: impl Into<String>) {
        if name == XML_ID {
            log::warn!("[MEI] refusing to overwrite xml:id of <{}>", self.document.nodes[node.0].tag);
            return;
        }
        let value = value.into();
        let attributes = &mut self.document.nodes[node.0].attributes;
        match attributes.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => slot.1 = value,
            None => attributes.push((name.to_string(), value)),
        }
    }

    /// Set or replace the text content of `node`
    pub fn set_text(&mut self, node: NodeId, text: impl Into<String>) {
        self.document.nodes[node.0].text = Some(text.into());
    }

    pub fn document(&self) -> &MeiDocument {
        &self.document
    }

    /// Number of identifiers handed out so far
    pub fn ids_issued(&self) -> u64 {
        self.ids.peek() - 1
    }

    pub fn finish(self) -> MeiDocument {
        self.document
    }

    fn push_node(&mut self, tag: &str) -> NodeId {
        let id = NodeId(self.document.nodes.len());
        self.document.nodes.push(MeiNode::new(tag, self.ids.next_id()));
        id
    }
}

pub mod parser;

/// Index of a node inside a [`Dom`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// What a node holds.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeData {
    /// The document root.
    Document,
    /// An element node, with its tag name and attributes in source order.
    Element {
        tag_name: String,
        attributes: Vec<(String, String)>,
    },
    /// A text node.
    Text(String),
    /// A comment node.
    Comment(String),
    /// Doctypes, processing instructions and anything else we don't inspect.
    Other,
}

/// Represents a node in the DOM tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub data: NodeData,
    pub parent: Option<NodeId>,
    pub first_child: Option<NodeId>,
    pub last_child: Option<NodeId>,
    pub next_sibling: Option<NodeId>,
}

impl Node {
    fn new(data: NodeData) -> Self {
        Self {
            data,
            parent: None,
            first_child: None,
            last_child: None,
            next_sibling: None,
        }
    }

    /// Tag name if this is an element.
    pub fn tag_name(&self) -> Option<&str> {
        match &self.data {
            NodeData::Element { tag_name, .. } => Some(tag_name),
            _ => None,
        }
    }

    pub fn is_element(&self, tag: &str) -> bool {
        self.tag_name() == Some(tag)
    }

    /// Value of the first attribute named `key`.
    pub fn attr(&self, key: &str) -> Option<&str> {
        match &self.data {
            NodeData::Element { attributes, .. } => attributes
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    /// True when any attribute matches both `key` and `value`.
    pub fn has_attr(&self, key: &str, value: &str) -> bool {
        match &self.data {
            NodeData::Element { attributes, .. } => {
                attributes.iter().any(|(k, v)| k == key && v == value)
            }
            _ => false,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// Represents a parsed HTML document.
///
/// Nodes are stored in a flat arena and linked by index, so walking or
/// dropping a deeply nested document never recurses.
#[derive(Debug, Clone, PartialEq)]
pub struct Dom {
    nodes: Vec<Node>,
}

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}

impl Dom {
    /// Creates a DOM holding only the document root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeData::Document)],
        }
    }

    pub fn document(&self) -> NodeId {
        NodeId(0)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Allocates a detached node.
    pub fn create(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(data));
        id
    }

    /// Appends `child` as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        let last_child = self.get(parent).and_then(|n| n.last_child);

        if let Some(node) = self.nodes.get_mut(child.0) {
            node.parent = Some(parent);
        }
        if let Some(last) = last_child.and_then(|id| self.nodes.get_mut(id.0)) {
            last.next_sibling = Some(child);
        }
        if let Some(node) = self.nodes.get_mut(parent.0) {
            if node.first_child.is_none() {
                node.first_child = Some(child);
            }
            node.last_child = Some(child);
        }
    }

    /// Direct children of `id`, left to right.
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            dom: self,
            next: self.get(id).and_then(|n| n.first_child),
        }
    }

    /// `id` and everything below it in pre-order (node first, then its
    /// children left to right).
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        Descendants {
            dom: self,
            root: id,
            next: self.get(id).map(|_| id),
        }
    }
}

pub struct Children<'a> {
    dom: &'a Dom,
    next: Option<NodeId>,
}

impl<'a> Iterator for Children<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.dom.get(current).and_then(|n| n.next_sibling);
        Some(current)
    }
}

pub struct Descendants<'a> {
    dom: &'a Dom,
    root: NodeId,
    next: Option<NodeId>,
}

impl<'a> Descendants<'a> {
    fn advance(&self, current: NodeId) -> Option<NodeId> {
        if let Some(child) = self.dom.get(current).and_then(|n| n.first_child) {
            return Some(child);
        }
        // Climb until an ancestor (below the root) has a next sibling.
        let mut cursor = current;
        loop {
            if cursor == self.root {
                return None;
            }
            let node = self.dom.get(cursor)?;
            if let Some(sibling) = node.next_sibling {
                return Some(sibling);
            }
            cursor = node.parent?;
        }
    }
}

impl<'a> Iterator for Descendants<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.advance(current);
        Some(current)
    }
}

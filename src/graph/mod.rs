use std::collections::HashMap;

pub mod builder;
pub mod filter;

pub use builder::{parse_mod_graph, ParseError};
pub use filter::filter_graph;

/// Index of a node inside the [`ModGraph`] that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// One versioned module, keyed by the raw `module@version` id from the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: String,
    module: String,
    version: String,
    dependencies: Vec<NodeId>,
}

impl Node {
    fn new(id: &str) -> Self {
        let (module, version) = split_id(id);
        Self {
            id: id.to_string(),
            module: module.to_string(),
            version: version.to_string(),
            dependencies: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn dependencies(&self) -> &[NodeId] {
        &self.dependencies
    }
}

/// Splits `module@version` on the first `@`; ids without one have no version.
pub fn split_id(id: &str) -> (&str, &str) {
    id.split_once('@').unwrap_or((id, ""))
}

/// Node table shared by the builder and the filter while a graph is assembled.
#[derive(Debug, Default)]
pub(crate) struct NodeTable {
    nodes: Vec<Node>,
    index: HashMap<String, NodeId>,
}

impl NodeTable {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    pub(crate) fn get_or_create(&mut self, id: &str) -> NodeId {
        if let Some(existing) = self.index.get(id) {
            return *existing;
        }
        let node_id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(id));
        self.index.insert(id.to_string(), node_id);
        node_id
    }

    pub(crate) fn put_edge(&mut self, from: &str, to: &str) -> (NodeId, NodeId) {
        let from_id = self.get_or_create(from);
        let to_id = self.get_or_create(to);
        self.nodes[from_id.0].dependencies.push(to_id);
        (from_id, to_id)
    }

    pub(crate) fn into_graph(self, root: NodeId) -> ModGraph {
        ModGraph {
            nodes: self.nodes,
            index: self.index,
            root,
        }
    }
}

/// A module dependency graph with a designated root.
///
/// Nodes are owned by the graph and addressed by [`NodeId`]; dependency lists
/// keep input order and may repeat or loop back.
#[derive(Debug, Clone)]
pub struct ModGraph {
    nodes: Vec<Node>,
    index: HashMap<String, NodeId>,
    root: NodeId,
}

impl ModGraph {
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn root_node(&self) -> &Node {
        self.node(self.root)
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn get(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|node_id| self.node(*node_id))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|node| node.dependencies.len()).sum()
    }
}

use std::collections::HashMap;

use tracing::info;

use crate::config::Options;
use crate::graph::{ModGraph, NodeId, NodeTable};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Decision {
    InProgress,
    Done(bool),
}

/// Per-call state for [`filter_graph`]; dropped when the call returns.
struct FilterContext<'g> {
    graph: &'g ModGraph,
    max_level: usize,
    target: Option<&'g str>,
    decisions: HashMap<NodeId, Decision>,
    output: NodeTable,
}

impl<'g> FilterContext<'g> {
    fn new(graph: &'g ModGraph, opts: &'g Options) -> Self {
        Self {
            graph,
            max_level: opts.max_level,
            target: opts.target(),
            decisions: HashMap::with_capacity(graph.node_count()),
            output: NodeTable::default(),
        }
    }

    fn within_depth(&self, level: usize) -> bool {
        self.max_level == 0 || level <= self.max_level
    }

    fn visit(&mut self, node_id: NodeId, level: usize) -> bool {
        match self.decisions.get(&node_id) {
            Some(Decision::Done(kept)) => return *kept,
            // reached through its own descendants
            Some(Decision::InProgress) => return false,
            None => {}
        }
        self.decisions.insert(node_id, Decision::InProgress);

        let graph = self.graph;
        let node = graph.node(node_id);
        let mut kept = self.target.map_or(true, |target| node.module() == target);

        let child_level = level + 1;
        if self.within_depth(child_level) {
            for dep in node.dependencies() {
                if self.visit(*dep, child_level) {
                    kept = true;
                    self.output.put_edge(node.id(), graph.node(*dep).id());
                }
            }
        }

        self.decisions.insert(node_id, Decision::Done(kept));
        kept
    }
}

/// Extracts the part of `graph` that survives the depth and target constraints.
///
/// A node is kept when its module matches the target (or no target is set), or
/// when one of its children within `max_level` is kept. The result is a fresh
/// graph sharing nothing with the input; `None` means the root was not kept.
pub fn filter_graph(graph: &ModGraph, opts: &Options) -> Option<ModGraph> {
    let mut ctx = FilterContext::new(graph, opts);
    let root = graph.root_node();
    if !ctx.visit(graph.root(), 0) {
        info!(
            target_module = ?opts.target(),
            max_level = opts.max_level,
            "filter kept nothing"
        );
        return None;
    }

    let root_id = ctx.output.get_or_create(root.id());
    let filtered = ctx.output.into_graph(root_id);
    info!(
        kept = filtered.node_count(),
        total = graph.node_count(),
        edges = filtered.edge_count(),
        "filtered module graph"
    );
    Some(filtered)
}

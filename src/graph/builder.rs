use thiserror::Error;
use tracing::{debug, info};

use crate::graph::{ModGraph, NodeTable};

/// Lines the go tool prints about downloads and findings start with this.
const DIAGNOSTIC_PREFIX: &str = "go:";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unexpected edge line: {line:?}")]
pub struct ParseError {
    pub line: String,
}

/// Parses a `go mod graph` report into a graph rooted at the first edge's source.
///
/// Returns `Ok(None)` when the report holds no edges at all.
pub fn parse_mod_graph(report: &str) -> Result<Option<ModGraph>, ParseError> {
    let mut table = NodeTable::with_capacity(report.len() / 32);
    let mut root = None;
    let mut skipped = 0usize;

    for line in report.lines() {
        if line.is_empty() {
            continue;
        }
        if line.starts_with(DIAGNOSTIC_PREFIX) {
            skipped += 1;
            continue;
        }
        let (from, to) = parse_edge(line).ok_or_else(|| ParseError {
            line: line.to_string(),
        })?;
        let (from_id, _) = table.put_edge(from, to);
        root.get_or_insert(from_id);
    }

    let Some(root) = root else {
        debug!(skipped, "report contained no edges");
        return Ok(None);
    };
    let graph = table.into_graph(root);
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        skipped,
        root = graph.root_node().id(),
        "parsed module graph"
    );
    Ok(Some(graph))
}

fn parse_edge(line: &str) -> Option<(&str, &str)> {
    let mut parts = line.split(' ');
    let from = parts.next()?;
    let to = parts.next()?;
    if parts.next().is_some() || from.is_empty() || to.is_empty() {
        return None;
    }
    Some((from, to))
}

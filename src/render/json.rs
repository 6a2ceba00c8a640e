use std::collections::HashSet;

use anyhow::Context;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::Result;
use crate::graph::{ModGraph, NodeId};
use crate::render::Renderer;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, graph: &ModGraph) -> Result<String> {
        render_json(graph)
    }
}

/// Nested copy of one node; shared dependencies are repeated, not referenced.
#[derive(Debug, Serialize)]
struct JsonNode<'g> {
    #[serde(rename = "Mod")]
    module: &'g str,
    #[serde(rename = "Version")]
    version: &'g str,
    #[serde(rename = "Deps", skip_serializing_if = "Vec::is_empty")]
    dependencies: Vec<JsonNode<'g>>,
}

fn to_json_node<'g>(
    graph: &'g ModGraph,
    node_id: NodeId,
    path: &mut HashSet<NodeId>,
) -> JsonNode<'g> {
    path.insert(node_id);
    let node = graph.node(node_id);
    let mut dependencies = Vec::with_capacity(node.dependencies().len());
    for dep in node.dependencies() {
        if path.contains(dep) {
            continue;
        }
        dependencies.push(to_json_node(graph, *dep, path));
    }
    path.remove(&node_id);
    JsonNode {
        module: node.module(),
        version: node.version(),
        dependencies,
    }
}

pub fn render_json(graph: &ModGraph) -> Result<String> {
    let mut path = HashSet::new();
    let root = to_json_node(graph, graph.root(), &mut path);

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b" ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    root.serialize(&mut ser)?;
    let out = String::from_utf8(buf).context("json encoder produced invalid utf-8")?;
    Ok(out)
}

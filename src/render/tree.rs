use std::collections::HashSet;

use console::style;

use crate::error::Result;
use crate::graph::{ModGraph, NodeId};
use crate::render::Renderer;

const PREFIX_OPEN: &str = "├── ";
const PREFIX_CLOSE: &str = "└── ";
const OPEN: &str = "│   ";
const CLOSE: &str = "    ";

/// Box-drawing tree, one node per line; matches of `target` are styled red.
pub struct TreeRenderer<'a> {
    target: Option<&'a str>,
}

impl<'a> TreeRenderer<'a> {
    pub fn new(target: Option<&'a str>) -> Self {
        Self { target }
    }
}

impl Renderer for TreeRenderer<'_> {
    fn render(&self, graph: &ModGraph) -> Result<String> {
        Ok(render_tree(graph, self.target))
    }
}

pub fn render_tree(graph: &ModGraph, target: Option<&str>) -> String {
    let mut writer = TreeWriter {
        graph,
        target,
        path: HashSet::new(),
        flags: Vec::new(),
        lines: Vec::new(),
    };
    writer.visit(graph.root());
    writer.lines.join("\n")
}

struct TreeWriter<'g, 't> {
    graph: &'g ModGraph,
    target: Option<&'t str>,
    path: HashSet<NodeId>,
    // one entry per ancestor level: true while more siblings follow
    flags: Vec<bool>,
    lines: Vec<String>,
}

impl TreeWriter<'_, '_> {
    fn visit(&mut self, node_id: NodeId) {
        self.path.insert(node_id);
        let line = self.line_for(node_id);
        self.lines.push(line);

        let graph = self.graph;
        let children: Vec<NodeId> = graph
            .node(node_id)
            .dependencies()
            .iter()
            .copied()
            .filter(|child| !self.path.contains(child))
            .collect();
        for (idx, child) in children.iter().enumerate() {
            self.flags.push(idx + 1 < children.len());
            self.visit(*child);
            self.flags.pop();
        }

        self.path.remove(&node_id);
    }

    fn line_for(&self, node_id: NodeId) -> String {
        let mut line = String::new();
        for (idx, open) in self.flags.iter().enumerate() {
            let is_own = idx + 1 == self.flags.len();
            line.push_str(match (is_own, *open) {
                (true, true) => PREFIX_OPEN,
                (true, false) => PREFIX_CLOSE,
                (false, true) => OPEN,
                (false, false) => CLOSE,
            });
        }

        let node = self.graph.node(node_id);
        if self.target.is_some_and(|target| node.module() == target) {
            line.push_str(&style(node.id()).red().to_string());
        } else {
            line.push_str(node.id());
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{filter_graph, parse_mod_graph, ModGraph};
    use crate::render::tree::render_tree;

    fn parse(report: &str) -> ModGraph {
        parse_mod_graph(report)
            .expect("parse report")
            .expect("non-empty graph")
    }

    #[test]
    fn renders_box_drawing_tree() {
        let graph = parse("a b\nb c\nc d\nc e\na f\nf g\nf h");
        let expected = "a
├── b
│   └── c
│       ├── d
│       └── e
└── f
    ├── g
    └── h";
        assert_eq!(render_tree(&graph, None), expected);
    }

    #[test]
    fn single_edge() {
        let graph = parse("root dep@v1.2.3");
        assert_eq!(render_tree(&graph, None), "root\n└── dep@v1.2.3");
    }

    #[test]
    fn diamond_prints_once_per_path() {
        let graph = parse("a b\na c\nb x\nc x\nx y");
        let expected = "a
├── b
│   └── x
│       └── y
└── c
    └── x
        └── y";
        assert_eq!(render_tree(&graph, None), expected);
    }

    #[test]
    fn cycle_back_edge_is_elided() {
        let graph = parse("a b\nb a");
        assert_eq!(render_tree(&graph, None), "a\n└── b");

        let graph = parse("a b\nb c\nc b\nc a\nb d");
        let expected = "a
└── b
    ├── c
    └── d";
        assert_eq!(render_tree(&graph, None), expected);
    }

    #[test]
    fn self_loop_is_elided() {
        let graph = parse("a a\na b");
        assert_eq!(render_tree(&graph, None), "a\n└── b");
    }

    #[test]
    fn target_marking_keeps_structure() {
        let graph = parse("a b\nb c@v1\na c@v2");
        console::set_colors_enabled(true);
        let marked = render_tree(&graph, Some("c"));
        let plain = render_tree(&graph, None);
        assert!(marked.contains("│   └── \u{1b}[31mc@v1\u{1b}[0m"), "{marked:?}");
        assert!(marked.contains("\n└── \u{1b}[31mc@v2\u{1b}[0m"), "{marked:?}");
        assert!(marked.starts_with("a\n├── b\n"));
        assert_eq!(console::strip_ansi_codes(&marked), plain);
        assert_eq!(plain, "a\n├── b\n│   └── c@v1\n└── c@v2");
    }

    #[test]
    fn renders_filtered_graph() {
        let graph = parse("a b\nb c\nc d\na f\nf g\nc e");
        let opts = crate::config::Options::builder()
            .target("c")
            .build()
            .expect("options");
        let filtered = filter_graph(&graph, &opts).expect("root kept");
        let plain = console::strip_ansi_codes(&render_tree(&filtered, Some("c"))).to_string();
        assert_eq!(plain, "a\n└── b\n    └── c");
    }
}

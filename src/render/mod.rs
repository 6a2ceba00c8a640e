use crate::error::Result;
use crate::graph::ModGraph;

pub mod json;
pub mod tree;

pub use json::{render_json, JsonRenderer};
pub use tree::{render_tree, TreeRenderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Tree,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Tree
        }
    }
}

/// Serializes a module graph into one output document.
///
/// Implementations only read node ids, modules, versions and ordered children,
/// and must terminate on cyclic graphs.
pub trait Renderer {
    fn render(&self, graph: &ModGraph) -> Result<String>;
}

pub fn renderer_for(format: OutputFormat, target: Option<&str>) -> Box<dyn Renderer + '_> {
    match format {
        OutputFormat::Tree => Box::new(TreeRenderer::new(target)),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}

pub fn render(graph: &ModGraph, format: OutputFormat, target: Option<&str>) -> Result<String> {
    renderer_for(format, target).render(graph)
}

#[cfg(test)]
mod tests {
    use crate::graph::parse_mod_graph;
    use crate::render::{render, OutputFormat};

    #[test]
    fn format_selects_exactly_one_mode() {
        let graph = parse_mod_graph("a b@v1")
            .expect("parse")
            .expect("non-empty graph");

        let tree = render(&graph, OutputFormat::from_json_flag(false), None).expect("tree");
        assert_eq!(tree, "a\n└── b@v1");

        let json = render(&graph, OutputFormat::from_json_flag(true), None).expect("json");
        assert!(json.starts_with('{'));
        assert!(!json.contains("└──"));
    }
}

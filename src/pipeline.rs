use tracing::debug;

use crate::config::Options;
use crate::error::Result;
use crate::graph::{filter_graph, parse_mod_graph};
use crate::render::{render, OutputFormat};
use crate::tool::GraphSource;

/// Fetches the edge list from `source` and renders it per `opts`.
pub fn tree(source: &dyn GraphSource, opts: &Options) -> Result<String> {
    let report = source.edge_list()?;
    render_report(&report, opts)
}

/// Parses, filters and renders one report. Empty results render as "".
pub fn render_report(report: &str, opts: &Options) -> Result<String> {
    let Some(graph) = parse_mod_graph(report)? else {
        return Ok(String::new());
    };

    let graph = if opts.needs_filter() {
        match filter_graph(&graph, opts) {
            Some(filtered) => filtered,
            None => return Ok(String::new()),
        }
    } else {
        graph
    };

    let format = OutputFormat::from_json_flag(opts.json);
    debug!(?format, nodes = graph.node_count(), "rendering module graph");
    render(&graph, format, opts.target())
}

#[cfg(test)]
mod tests {
    use crate::config::Options;
    use crate::error::ModTreeError;
    use crate::pipeline::{render_report, tree};
    use crate::tool::StaticReport;

    const REPORT: &str = "go: finding example.com/x v1.0.0
a b@v1.0.0
b@v1.0.0 c@v0.0.8
c@v0.0.8 d@v0.1.0
a f@v2.0.0
f@v2.0.0 g@v0.0.3
";

    #[test]
    fn renders_whole_graph_by_default() {
        let opts = Options::builder().build().expect("options");
        let out = tree(&StaticReport::new(REPORT), &opts).expect("render");
        assert_eq!(
            out,
            "a\n├── b@v1.0.0\n│   └── c@v0.0.8\n│       └── d@v0.1.0\n└── f@v2.0.0\n    └── g@v0.0.3"
        );
    }

    #[test]
    fn applies_depth_limit() {
        let opts = Options::builder().max_level(1).build().expect("options");
        let out = render_report(REPORT, &opts).expect("render");
        assert_eq!(out, "a\n├── b@v1.0.0\n└── f@v2.0.0");
    }

    #[test]
    fn target_filter_in_json() {
        let opts = Options::builder()
            .target("c")
            .json(true)
            .build()
            .expect("options");
        let out = render_report(REPORT, &opts).expect("render");
        let value: serde_json::Value = serde_json::from_str(&out).expect("valid json");
        assert_eq!(value["Mod"], "a");
        assert_eq!(value["Deps"].as_array().map(Vec::len), Some(1));
        assert_eq!(value["Deps"][0]["Deps"][0]["Mod"], "c");
        assert!(value["Deps"][0]["Deps"][0].get("Deps").is_none());
    }

    #[test]
    fn empty_results_are_empty_strings() {
        let opts = Options::builder().build().expect("options");
        assert_eq!(render_report("", &opts).expect("render"), "");

        let opts = Options::builder().target("zzz").build().expect("options");
        assert_eq!(render_report(REPORT, &opts).expect("render"), "");
    }

    #[test]
    fn parse_errors_abort() {
        let opts = Options::builder().build().expect("options");
        let err = render_report("a b\nbroken\n", &opts).expect_err("must fail");
        match err {
            ModTreeError::Parse(parse) => assert_eq!(parse.line, "broken"),
            other => panic!("unexpected error: {other}"),
        }
    }
}

pub mod go;

pub use go::GoModGraph;

use std::path::Path;

use anyhow::Context;

use crate::error::Result;

/// Anything that can hand the pipeline an edge-list report.
pub trait GraphSource {
    fn edge_list(&self) -> Result<String>;
}

/// A report captured earlier, e.g. read from a file or stdin.
#[derive(Debug, Clone, Default)]
pub struct StaticReport(String);

impl StaticReport {
    pub fn new(report: impl Into<String>) -> Self {
        Self(report.into())
    }

    /// Reads a saved report; `-` reads stdin.
    pub fn from_path(path: &Path) -> Result<Self> {
        if path == Path::new("-") {
            let report = std::io::read_to_string(std::io::stdin())
                .context("failed to read edge list from stdin")?;
            return Ok(Self(report));
        }
        let report = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read edge list {}", path.display()))?;
        Ok(Self(report))
    }
}

impl GraphSource for StaticReport {
    fn edge_list(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

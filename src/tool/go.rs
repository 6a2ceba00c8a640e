use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Context;
use tracing::debug;

use crate::error::{ModTreeError, Result};
use crate::tool::GraphSource;

/// Runs `go mod graph`, optionally inside `dir`.
#[derive(Debug, Clone, Default)]
pub struct GoModGraph {
    dir: Option<PathBuf>,
    program: Option<PathBuf>,
}

impl GoModGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    /// Overrides the `go` executable.
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = Some(program.into());
        self
    }

    fn program(&self) -> &Path {
        self.program.as_deref().unwrap_or_else(|| Path::new("go"))
    }
}

impl GraphSource for GoModGraph {
    fn edge_list(&self) -> Result<String> {
        let program = self.program();
        let mut cmd = Command::new(program);
        cmd.args(["mod", "graph"]).env_clear().envs(tool_env(
            env::var("PATH").ok(),
            env::var("HOME").ok(),
            env::var("GOPATH").ok(),
        ));
        if let Some(dir) = &self.dir {
            cmd.current_dir(dir);
        }
        debug!(program = %program.display(), dir = ?self.dir, "running go mod graph");

        let output = cmd
            .output()
            .with_context(|| format!("failed to run {} mod graph", program.display()))?;
        if !output.status.success() {
            return Err(ModTreeError::Tool {
                command: format!("{} mod graph", program.display()),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

/// Environment the go tool runs with; everything else from the caller is dropped.
pub fn tool_env(
    path: Option<String>,
    home: Option<String>,
    gopath: Option<String>,
) -> BTreeMap<&'static str, String> {
    let gopath = gopath.unwrap_or_default();
    let gocache = Path::new(&gopath).join("cache").display().to_string();
    BTreeMap::from([
        ("PATH", path.unwrap_or_default()),
        ("HOME", home.unwrap_or_default()),
        ("CGO_ENABLED", "0".to_string()),
        ("GO111MODULE", "on".to_string()),
        ("GOPATH", gopath),
        ("GOCACHE", gocache),
    ])
}

#[cfg(test)]
mod tests {
    use crate::error::ModTreeError;
    use crate::tool::go::{tool_env, GoModGraph};
    use crate::tool::GraphSource;

    #[test]
    fn tool_env_pins_module_mode() {
        let env = tool_env(
            Some("/usr/bin".to_string()),
            Some("/home/dev".to_string()),
            Some("/home/dev/go".to_string()),
        );
        assert_eq!(env["PATH"], "/usr/bin");
        assert_eq!(env["HOME"], "/home/dev");
        assert_eq!(env["CGO_ENABLED"], "0");
        assert_eq!(env["GO111MODULE"], "on");
        assert_eq!(env["GOPATH"], "/home/dev/go");
        assert_eq!(env["GOCACHE"], "/home/dev/go/cache");
        assert_eq!(env.len(), 6);
    }

    #[test]
    fn missing_program_is_reported() {
        let source = GoModGraph::new().with_program("/nonexistent/modtree-go-binary");
        let err = source.edge_list().expect_err("spawn must fail");
        assert!(matches!(err, ModTreeError::Other(_)));
        assert!(err.to_string().contains("failed to run"));
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_becomes_tool_error() {
        let source = GoModGraph::new().with_program("false");
        let err = source.edge_list().expect_err("false exits non-zero");
        assert!(matches!(err, ModTreeError::Tool { .. }));
    }
}

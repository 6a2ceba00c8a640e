use thiserror::Error;

use crate::config::ConfigError;
use crate::graph::builder::ParseError;

#[derive(Debug, Error)]
pub enum ModTreeError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("failed to encode json: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("{command} failed: {stderr}")]
    Tool { command: String, stderr: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ModTreeError>;

pub mod options;

pub use options::{Options, OptionsBuilder};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max level must be 0 or more, got {0}")]
    NegativeMaxLevel(i64),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

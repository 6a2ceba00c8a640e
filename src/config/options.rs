use crate::config::{ConfigError, Result};

/// Validated pipeline options.
///
/// `max_level == 0` means the depth is unbounded. A `None` target keeps every
/// node; otherwise only branches reaching a node whose module equals the
/// target survive filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub max_level: usize,
    pub target: Option<String>,
    pub json: bool,
}

impl Options {
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Whether the builder graph has to go through the filter at all.
    pub fn needs_filter(&self) -> bool {
        self.max_level > 0 || self.target.is_some()
    }
}

#[derive(Debug, Clone, Default)]
pub struct OptionsBuilder {
    max_level: i64,
    target: Option<String>,
    json: bool,
}

impl OptionsBuilder {
    pub fn max_level(mut self, max_level: i64) -> Self {
        self.max_level = max_level;
        self
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        let target = target.into();
        self.target = if target.is_empty() {
            None
        } else {
            Some(target)
        };
        self
    }

    pub fn json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn build(self) -> Result<Options> {
        let max_level = usize::try_from(self.max_level)
            .map_err(|_| ConfigError::NegativeMaxLevel(self.max_level))?;
        Ok(Options {
            max_level,
            target: self.target,
            json: self.json,
        })
    }
}

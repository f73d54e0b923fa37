//! Node process settings.

use std::fmt;

use clap::ValueEnum;
use serde::Deserialize;

/// Environment the node runs in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => f.write_str("development"),
            Self::Production => f.write_str("production"),
        }
    }
}

/// Node-level configuration.
#[derive(Debug, Clone, Default)]
pub struct NodeConfig {
    /// Target environment, from `--node.environment` or `ENVIRONMENT`.
    pub environment: Environment,
}

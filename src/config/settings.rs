//! Node configuration assembly.
//!
//! Provides the main [`Config`] struct consumed by the wallet, chain manager,
//! client, and node server subsystems. Built once at startup from parsed CLI
//! arguments and captured environment overrides; read-only afterwards.
//!
//! # Example
//!
//! ```no_run
//! use clap::Parser;
//! use refiner_node::cli::Cli;
//! use refiner_node::config::wallet::WalletEnv;
//! use refiner_node::config::Config;
//!
//! fn main() -> refiner_node::error::Result<()> {
//!     let config = Config::resolve(Cli::parse(), &WalletEnv::from_process())?;
//!     config.logging.init();
//!     Ok(())
//! }
//! ```

use crate::cli::Cli;
use crate::config::logging::LoggingConfig;
use crate::config::node::NodeConfig;
use crate::config::wallet::{WalletConfig, WalletEnv};
use crate::error::Result;

/// Fully resolved node configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub node: NodeConfig,
    pub wallet: WalletConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Assemble the configuration from parsed CLI arguments and captured
    /// wallet environment overrides.
    ///
    /// Runs credential selection first, then fills wallet defaults. This is
    /// a one-shot, fail-fast step; no partial configuration escapes on error.
    ///
    /// # Errors
    ///
    /// Returns an error if a supplied keystore is missing, malformed, or
    /// lacks `privateKey`.
    pub fn resolve(cli: Cli, env: &WalletEnv) -> Result<Self> {
        let mut wallet = WalletConfig::from(cli.wallet);
        wallet.resolve_credentials()?;
        wallet.fill_defaults(env);

        Ok(Self {
            node: NodeConfig {
                environment: cli.node.environment,
            },
            wallet,
            logging: LoggingConfig::from(cli.logging),
        })
    }
}

//! Command-line interface definitions.
//!
//! Each collaborating subsystem registers its options as a clap argument
//! group flattened into [`Cli`]. Registration is declarative; nothing is
//! parsed until [`clap::Parser::parse`] runs at process entry.

use clap::{Args, Parser};

use crate::config::logging::LogFormat;
use crate::config::node::Environment;

/// Refiner node - resolves startup configuration and wallet credentials.
#[derive(Parser, Debug)]
#[command(name = "refiner-node")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub node: NodeArgs,

    #[command(flatten)]
    pub wallet: WalletArgs,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

/// Options registered by the node process itself.
#[derive(Args, Debug, Clone)]
pub struct NodeArgs {
    /// The environment the node is running in
    #[arg(
        long = "node.environment",
        value_enum,
        env = "ENVIRONMENT",
        default_value_t = Environment::Production
    )]
    pub environment: Environment,
}

/// Options registered by the wallet subsystem.
#[derive(Args, Debug, Clone)]
pub struct WalletArgs {
    /// Path to JSON keystore with privateKey (or set HOTKEY_KEYSTORE env)
    #[arg(long = "wallet.keystore", env = "HOTKEY_KEYSTORE")]
    pub keystore: Option<String>,

    /// Wallet mnemonic phrase (or set HOTKEY_MNEMONIC env)
    #[arg(long = "wallet.mnemonic", env = "HOTKEY_MNEMONIC", hide_env_values = true)]
    pub mnemonic: Option<String>,
}

/// Options registered by the logging subsystem.
#[derive(Args, Debug, Clone)]
pub struct LoggingArgs {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long = "logging.level", default_value = "info")]
    pub level: String,

    /// Log output format
    #[arg(long = "logging.format", value_enum, default_value_t = LogFormat::Pretty)]
    pub format: LogFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "refiner-node",
            "--node.environment",
            "development",
            "--wallet.keystore",
            "/tmp/ks.json",
            "--logging.format",
            "json",
        ])
        .expect("parse args");

        assert_eq!(cli.node.environment, Environment::Development);
        assert_eq!(cli.wallet.keystore.as_deref(), Some("/tmp/ks.json"));
        assert_eq!(cli.logging.format, LogFormat::Json);
    }

    #[test]
    fn unknown_environment_is_rejected() {
        let result = Cli::try_parse_from(["refiner-node", "--node.environment", "staging"]);
        assert!(result.is_err(), "Expected unknown environment to be rejected");
    }
}

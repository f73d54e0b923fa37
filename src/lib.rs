//! Refiner node startup configuration.
//!
//! This crate resolves the configuration a Vana refiner node starts with:
//! CLI flags and environment variables are parsed into typed settings, wallet
//! credentials are selected from a JSON keystore, a mnemonic, or the default
//! wallet directory, and the result is handed to the rest of the process as a
//! single read-only [`config::Config`].
//!
//! # Modules
//!
//! - [`cli`] - Argument groups registered by each collaborating subsystem
//! - [`config`] - Keystore reading, credential precedence, wallet defaults
//! - [`error`] - Error types for the crate
//! - [`files`] - Payload download and content-based type detection
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
//!     let cli = Cli::parse();
//!     let config = Config::resolve(cli, &WalletEnv::from_process())?;
//!     config.logging.init();
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod files;

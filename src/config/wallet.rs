//! Wallet credential selection and defaults.
//!
//! Exactly one credential source wins, in fixed order: an explicit keystore
//! path (CLI flag or `HOTKEY_KEYSTORE`), then a mnemonic, then the default
//! wallet file under `~/.vana/wallets`. After selection, the wallet path and
//! key names are filled from `VANA_*` environment overrides.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::cli::WalletArgs;
use crate::config::keystore::{expand_tilde, Keystore};
use crate::error::Result;

pub const DEFAULT_WALLET_PATH: &str = "~/.vana/wallets/refiner";
pub const DEFAULT_COLDKEY_NAME: &str = "refiner";
pub const DEFAULT_HOTKEY_NAME: &str = "refiner";

/// Wallet default overrides, captured from the process environment once at
/// entry and passed down so the resolver never reads globals itself.
#[derive(Debug, Clone, Default)]
pub struct WalletEnv {
    pub wallet_path: Option<String>,
    pub coldkey_name: Option<String>,
    pub hotkey_name: Option<String>,
}

impl WalletEnv {
    /// Capture the `VANA_*` wallet variables from the process environment.
    pub fn from_process() -> Self {
        Self {
            wallet_path: std::env::var("VANA_WALLET_PATH").ok(),
            coldkey_name: std::env::var("VANA_COLDKEY_NAME").ok(),
            hotkey_name: std::env::var("VANA_HOTKEY_NAME").ok(),
        }
    }
}

/// Wallet configuration for the refiner node.
#[derive(Debug, Clone, Default)]
pub struct WalletConfig {
    /// Keystore path from `--wallet.keystore` or `HOTKEY_KEYSTORE`.
    pub keystore: Option<String>,
    /// Mnemonic from `--wallet.mnemonic` or `HOTKEY_MNEMONIC`.
    pub mnemonic: Option<String>,
    /// Private key resolved from the keystore; never supplied directly.
    pub private_key: Option<String>,
    /// Wallet directory.
    pub path: PathBuf,
    /// Coldkey slot name.
    pub coldkey: String,
    /// Hotkey slot name.
    pub hotkey: String,
}

impl From<WalletArgs> for WalletConfig {
    fn from(args: WalletArgs) -> Self {
        Self {
            keystore: args.keystore,
            mnemonic: args.mnemonic,
            ..Self::default()
        }
    }
}

impl WalletConfig {
    /// Select the credential source for this wallet.
    ///
    /// A keystore path takes priority over a mnemonic even when both are
    /// set; the mnemonic is cleared in that case so downstream wallet
    /// construction cannot pick it up. Keystore errors propagate before any
    /// field is touched.
    ///
    /// # Errors
    ///
    /// Returns an error if a keystore path is set but the file is missing,
    /// malformed, or lacks `privateKey`.
    pub fn resolve_credentials(&mut self) -> Result<()> {
        // An env var set to the empty string counts as absent.
        let keystore = self.keystore.clone().filter(|p| !p.is_empty());
        if let Some(path) = keystore {
            let resolved = Keystore::read(&path)?;
            info!(
                keystore = %path,
                address = %resolved.address,
                "using wallet keystore"
            );
            self.private_key = Some(resolved.private_key);
            self.mnemonic = None;
        } else if self.mnemonic.as_deref().is_some_and(|m| !m.is_empty()) {
            info!("using wallet mnemonic provided via HOTKEY_MNEMONIC/CLI");
        } else {
            info!("no keystore or mnemonic provided, falling back to default wallet file in ~/.vana/wallets");
        }
        Ok(())
    }

    /// Fill `path`, `coldkey`, and `hotkey` from `env`, else the literal
    /// defaults. Always overwrites; values set earlier in startup do not
    /// survive.
    pub fn fill_defaults(&mut self, env: &WalletEnv) {
        self.path = env
            .wallet_path
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(|| expand_tilde(Path::new(DEFAULT_WALLET_PATH)));
        self.coldkey = env
            .coldkey_name
            .clone()
            .unwrap_or_else(|| DEFAULT_COLDKEY_NAME.to_string());
        self.hotkey = env
            .hotkey_name
            .clone()
            .unwrap_or_else(|| DEFAULT_HOTKEY_NAME.to_string());
    }
}

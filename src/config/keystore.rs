//! JSON keystore reading and validation.
//!
//! A keystore is a plain JSON file holding a wallet's private key in place of
//! a mnemonic phrase:
//!
//! ```json
//! { "privateKey": "0x...", "address": "0x..." }
//! ```
//!
//! `privateKey` is required; `address` is informational and defaults to
//! `"unknown"` when omitted.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Fallback when the keystore omits the wallet address.
const UNKNOWN_ADDRESS: &str = "unknown";

/// Raw keystore record as stored on disk.
#[derive(Debug, Deserialize)]
struct KeystoreFile {
    #[serde(rename = "privateKey")]
    private_key: Option<String>,
    address: Option<String>,
}

/// Wallet credentials resolved from a JSON keystore.
#[derive(Debug, Clone)]
pub struct Keystore {
    pub private_key: String,
    pub address: String,
}

impl Keystore {
    /// Read and validate a keystore file, expanding a leading `~`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The path does not point at an existing file
    /// - The contents are not valid JSON
    /// - The `privateKey` field is absent
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = expand_tilde(path.as_ref());
        if !path.is_file() {
            return Err(ConfigError::KeystoreNotFound { path }.into());
        }
        let path = fs::canonicalize(&path).map_err(ConfigError::ReadFile)?;

        let contents = fs::read_to_string(&path).map_err(ConfigError::ReadFile)?;
        let record: KeystoreFile = serde_json::from_str(&contents).map_err(ConfigError::Parse)?;

        let private_key = record.private_key.ok_or(ConfigError::MissingField {
            field: "privateKey",
        })?;
        let address = record
            .address
            .unwrap_or_else(|| UNKNOWN_ADDRESS.to_string());

        Ok(Self {
            private_key,
            address,
        })
    }
}

/// Expand a leading `~` or `~/` to the user's home directory.
///
/// Paths without a tilde (or with no resolvable home) pass through unchanged.
pub(crate) fn expand_tilde(path: &Path) -> PathBuf {
    let Some(raw) = path.to_str() else {
        return path.to_path_buf();
    };
    if raw == "~" {
        return dirs::home_dir().unwrap_or_else(|| path.to_path_buf());
    }
    if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

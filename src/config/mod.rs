//! Node configuration modules.

pub mod keystore;
pub mod logging;
pub mod node;
pub mod settings;
pub mod wallet;

pub use settings::Config;

use clap::Parser;
use tracing::info;

use refiner_node::cli::Cli;
use refiner_node::config::wallet::WalletEnv;
use refiner_node::config::Config;

fn main() {
    // Explicit env-file load at entry; a missing .env is not an error.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let logging = refiner_node::config::logging::LoggingConfig::from(cli.logging.clone());
    logging.init();
    info!("refiner node starting");

    let env = WalletEnv::from_process();
    let config = match Config::resolve(cli, &env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to resolve configuration: {e}");
            std::process::exit(1);
        }
    };

    info!(
        environment = %config.node.environment,
        wallet_path = %config.wallet.path.display(),
        coldkey = %config.wallet.coldkey,
        hotkey = %config.wallet.hotkey,
        "refiner node configured"
    );
}

use std::{process::ExitCode, sync::Arc};

use clap::Parser;
use log::{error, info};

use snappy_inventory::{App, Cli, Config, FileStorage, ItemStore, Result, StoreOptions};

pub fn initialize_logger(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp_secs()
        .format_module_path(true)
        .init();

    info!("Logger initialized");
}

async fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
    let mut config = Config::load(Some(&config_path))?;

    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(latency_ms) = cli.latency_ms {
        config.latency_ms = latency_ms;
    }

    let storage = FileStorage::open(&config.data_dir)?;
    let item_store = ItemStore::new(storage, StoreOptions::from(&config))?;

    let app = App::new(Arc::new(item_store), config, config_path, cli.verbose);
    app.run(cli.command).await
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    initialize_logger(cli.verbose);

    info!("Application starting up");

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

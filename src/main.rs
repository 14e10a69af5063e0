use std::sync::{Arc, Mutex};

use surepub::broker::HandshakeEngine;
use surepub::broker::processor::LogProcessor;
use surepub::config::load_config;
use surepub::persistence::DedupStore;
use surepub::transport::tcp::start_tcp_server;
use surepub::utils::logging;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    logging::init("info");

    if let Err(e) = run().await {
        error!("broker failed: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let dedup = DedupStore::open(&config.broker.state_file);
    let engine = Arc::new(Mutex::new(HandshakeEngine::new(dedup, LogProcessor)));

    tokio::select! {
        result = start_tcp_server(&addr, engine, config.broker.clone()) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received. Exiting gracefully.");
        }
    }

    Ok(())
}

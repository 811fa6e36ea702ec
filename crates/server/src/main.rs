//! Server binary: load config, hydrate the catalogue, serve.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use goalgrocer_server::config::ServerConfig;
use goalgrocer_server::routes;
use goalgrocer_server::services::{Advisor, AiClient, Recommender};
use goalgrocer_server::state::AppState;
use goalgrocer_server::store::{Catalogue, HttpDocumentStore};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,goalgrocer_server=debug")),
        )
        .with(fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    let store = Arc::new(HttpDocumentStore::new(&config.docstore));
    let catalogue = Catalogue::load(store).await?;

    let ai = config
        .ai
        .as_ref()
        .map(|cfg| Arc::new(AiClient::new(cfg)) as Arc<dyn Advisor>);
    if ai.is_none() {
        info!("no AI key configured, recommendations run rules-only");
    }

    let state = AppState {
        catalogue,
        recommender: Recommender::new(ai),
    };

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, routes::router(state)).await?;

    Ok(())
}

mod gate;
mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use gate::middleware::gate_middleware;
use origin_gatekeeper::{AllowListStore, Gatekeeper, GatekeeperOptions};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let store = Arc::new(AllowListStore::from_config_text(
        "localhost:5173\n*.example.com",
    ));
    let gatekeeper = Arc::new(Gatekeeper::new(
        GatekeeperOptions::default(),
        Arc::clone(&store),
    )?);
    let state = gate::AppState { gatekeeper, store };

    let app = Router::new()
        .route("/", get(routes::home))
        .route("/wp-json/wp/v2/posts", get(routes::posts))
        .route("/admin/allow-list", post(routes::replace_allow_list))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            gate_middleware,
        ))
        .with_state(state);

    let addr: SocketAddr = "127.0.0.1:5001".parse()?;
    tracing::info!(%addr, "gatekeeper demo listening");

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}

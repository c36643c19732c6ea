use anyhow::Context;
use inventory_demo::{config::Config, router, telemetry, AppState};
use tracing::info;

const DEFAULT_PORT: u16 = 8000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    telemetry::init();

    let config = Config::from_env(DEFAULT_PORT)?;

    info!("API de Inventario DAM/DAW");

    let state = AppState::seeded();
    info!(
        products = state.store.read().await.len(),
        "In-memory inventory ready (resets on restart)"
    );

    let app = router::inventory_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

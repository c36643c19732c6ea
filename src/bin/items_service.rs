use anyhow::Context;
use inventory_demo::{config::Config, router, telemetry};
use tracing::info;

const DEFAULT_PORT: u16 = 8001;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    telemetry::init();

    let config = Config::from_env(DEFAULT_PORT)?;
    let app = router::items_router();

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Items service listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

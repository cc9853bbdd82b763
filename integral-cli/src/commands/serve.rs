use crate::config::AppConfig;
use anyhow::{Context, Result};
use integral_server::create_app;
use integral_telemetry::{info, warn};

pub async fn run_serve(config: &AppConfig) -> Result<()> {
    let server_config = config.server_config()?;
    let handle = server_config.pipeline.model();
    if handle.is_ready() {
        info!(model = handle.model_name().unwrap_or_default(), "Model client ready");
    } else {
        warn!(?handle, "Model not configured; analyses will fail until a key is set");
    }

    let app = create_app(server_config);

    let addr = config.server.address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    println!("Integral Logistics Dashboard on http://{}/ui/", addr);
    println!("Press Ctrl+C to stop");

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutting down");
    }
}

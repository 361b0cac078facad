use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use image_scaler::config::app::AppConfig;
use image_scaler::image::conversion::ImageConversion;
use image_scaler::image::image_rs_processor::ImageRsProcessor;
use image_scaler::web::router::build_router;

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = AppConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .compact()
        .init();

    let conversion = ImageConversion::new(Arc::new(ImageRsProcessor::new(cfg.image.clone())));
    let app = build_router(conversion, &cfg);

    let addr = cfg.http.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {addr}"))?;

    info!(
        %addr,
        app_env = %cfg.app_env,
        max_body_bytes = cfg.http.max_body_bytes,
        timeout = ?cfg.http.request_timeout,
        "server going online"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("http server")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

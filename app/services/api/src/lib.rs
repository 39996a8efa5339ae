pub mod handlers;
pub mod routings;

use crate::routings::router;
use app_config::AppConfig;
use app_error::AppError;
use app_log::init_tracing;
use app_state::AppState;
use app_store::Store;
use dotenv::dotenv;
use std::sync::Arc;
use tracing::*;

pub async fn api_service() -> Result<(), AppError> {
    dotenv().ok();
    let config = AppConfig::load()?;
    let bind = config.backend_bind.clone();
    init_tracing(config.log_level);
    // SQLite
    let store = Store::connect(&config.database_url, config.db_connection).await?;
    store.migrate().await?;
    // Generating AppState
    let app_state = Arc::new(AppState {
        config,
        store: store.clone(),
    });
    // Loading Routes
    let routes = router(app_state);
    // Setup TCP Port
    let tcp_listener = tokio::net::TcpListener::bind(&bind).await?;
    // Running Server ...
    info!("Serving churn API on {}", &bind);
    axum::serve(tcp_listener, routes)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    store.close().await;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Cannot listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

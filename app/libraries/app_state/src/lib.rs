use app_config::AppConfig;
use app_store::Store;

/// Shared by every handler behind an `Arc`; built once per process.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub store: Store,
}

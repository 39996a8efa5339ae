use crate::handlers::{auth::*, customer::*, index::*, metrics::*};
use app_middleware::web_auth_middleware;
use app_state::AppState;
use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest(
            "/api",
            Router::new()
                .route("/health", get(get_health))
                .route("/register", post(post_register))
                .route("/login", post(post_login))
                .merge(
                    Router::new()
                        .route("/customers", get(get_customers).post(post_customer))
                        .route("/customers/{id}", get(get_customer))
                        .route("/metrics", get(get_metrics))
                        .layer(middleware::from_fn_with_state(
                            state.clone(),
                            web_auth_middleware,
                        )),
                ),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

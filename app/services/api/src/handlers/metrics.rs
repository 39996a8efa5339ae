use app_churn::{ChurnMetrics, calculate_metrics};
use app_dto::customer::ScoredCustomer;
use app_error::AppError;
use app_state::AppState;
use axum::extract::{Json, State};
use std::sync::Arc;

/// Dashboard figures over every stored customer, scored on the spot.
pub async fn get_metrics(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ChurnMetrics>, AppError> {
    let scored: Vec<ScoredCustomer> = state
        .store
        .list_customers()
        .await?
        .into_iter()
        .map(ScoredCustomer::from)
        .collect();
    Ok(Json(calculate_metrics(&scored)))
}

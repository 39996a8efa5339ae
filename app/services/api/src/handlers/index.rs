use app_dto::health::HealthOutput;
use axum::Json;

pub async fn get_health() -> Json<HealthOutput> {
    Json(HealthOutput::healthy())
}

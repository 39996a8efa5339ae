use app_cryptography::jwt::Claims;
use app_dto::customer::{PostCustomerInput, ScoredCustomer};
use app_error::AppError;
use app_state::AppState;
use axum::{
    Extension,
    extract::{Json, Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::*;

pub async fn post_customer(
    Extension(claims): Extension<Claims>,
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PostCustomerInput>, JsonRejection>,
) -> Result<(StatusCode, Json<ScoredCustomer>), AppError> {
    let Json(args) = payload?;
    let customer = args.into_customer()?;
    state.store.insert_customer(&customer).await?;
    debug!("Customer {} created by {}", &customer.id, &claims.email);
    Ok((StatusCode::CREATED, Json(ScoredCustomer::from(customer))))
}

pub async fn get_customers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ScoredCustomer>>, AppError> {
    let res = state
        .store
        .list_customers()
        .await?
        .into_iter()
        .map(ScoredCustomer::from)
        .collect();
    Ok(Json(res))
}

pub async fn get_customer(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<ScoredCustomer>, AppError> {
    match state.store.get_customer(&id).await? {
        Some(customer) => Ok(Json(ScoredCustomer::from(customer))),
        None => Err(AppError::not_found("Customer not found")),
    }
}

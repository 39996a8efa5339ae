use app_cryptography::{
    hash::{hash, verify},
    jwt::{Algorithm, Claims, generate_token},
};
use app_dto::auth::{
    login::{PostLoginInput, PostLoginOutput},
    register::{PostRegisterInput, PostRegisterOutput},
};
use app_error::{AppError, SERVER_ERROR_MESSAGE};
use app_state::AppState;
use axum::{
    extract::{Json, State, rejection::JsonRejection},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::*;

const AUTH_FAILD_MESSAGE: &str = "Invalid credentials";

pub async fn post_register(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PostRegisterInput>, JsonRejection>,
) -> Result<(StatusCode, Json<PostRegisterOutput>), AppError> {
    let Json(args) = payload?;
    args.validate()?;
    let (email, password) = (args.email, args.password);
    let cost = state.config.hash_cost;
    let hash_password = run_blocking(move || hash(&password, cost)).await?;
    let user = state.store.insert_user(email.trim(), &hash_password).await?;
    info!("Registered user {}", &user.email);
    Ok((
        StatusCode::CREATED,
        Json(PostRegisterOutput {
            message: "User registered successfully".to_owned(),
        }),
    ))
}

pub async fn post_login(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PostLoginInput>, JsonRejection>,
) -> Result<Json<PostLoginOutput>, AppError> {
    let Json(args) = payload?;
    let config = &state.config;
    // Search for user
    let user_info = match state.store.find_user_by_email(args.email.trim()).await? {
        Some(user) => user,
        None => {
            return Err(AppError::unauthorized(AUTH_FAILD_MESSAGE));
        }
    };
    let password = args.password;
    let password_hash = user_info.password_hash;
    if !run_blocking(move || verify(&password, &password_hash)).await? {
        return Err(AppError::unauthorized(AUTH_FAILD_MESSAGE));
    }
    // Authentication succeeded, issue the access token
    let claims = Claims::new(
        user_info.id,
        user_info.email,
        config.jwt_access_session_hours,
    );
    let token = generate_token(Algorithm::HS256, &config.jwt_access_key, &claims).map_err(|e| {
        error!("Cannot sign token: {:?}", e);
        AppError::internal(SERVER_ERROR_MESSAGE)
    })?;
    info!("User {} logged in", &claims.email);
    Ok(Json(PostLoginOutput { token }))
}

/// Runs bcrypt work on the blocking pool.
async fn run_blocking<T, E, F>(f: F) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
    AppError: From<E>,
{
    let res = tokio::task::spawn_blocking(f).await.map_err(|e| {
        error!("Blocking task failed: {:?}", e);
        AppError::internal(SERVER_ERROR_MESSAGE)
    })?;
    Ok(res?)
}

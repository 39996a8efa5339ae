use app_cryptography::jwt::{Algorithm, Claims, validate_token};
use app_error::AppError;
use app_state::AppState;
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::*;

const AUTH_REQUIRED_MESSAGE: &str = "Authentication required";
const INVALID_TOKEN_MESSAGE: &str = "Invalid token";

/// Gate for the customer routes. A missing credential is a 401, a present
/// but unusable one is a 403; either way the handler never runs.
///
/// The verified identity travels as an `Extension<Claims>`; request headers
/// are never trusted for it.
pub async fn web_auth_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Response {
    debug!(
        "Authorization Middleware Running for {} {}",
        req.method(),
        req.uri()
    );

    let auth_header: String = match req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
    {
        Some(v) => v,
        None => return AppError::unauthorized(AUTH_REQUIRED_MESSAGE).into_response(),
    };

    // Expect: "Bearer <token>"
    let token = match bearer_token(&auth_header) {
        Some(token) => token,
        None => return AppError::unauthorized(AUTH_REQUIRED_MESSAGE).into_response(),
    };

    let claims = match validate_token::<Claims>(
        Algorithm::HS256,
        &state.config.jwt_access_key,
        token,
    ) {
        Ok(data) => data.claims,
        Err(e) => {
            info!("Rejected token for {} {}: {}", req.method(), req.uri(), e);
            return AppError::forbidden(INVALID_TOKEN_MESSAGE).into_response();
        }
    };

    info!("User {} approved", claims.email);
    req.extensions_mut().insert(claims);
    next.run(req).await
}

fn bearer_token(header: &str) -> Option<&str> {
    let mut parts = header.split_whitespace();
    let scheme = parts.next()?;
    let token = parts.next()?;
    if !scheme.eq_ignore_ascii_case("bearer") || parts.next().is_some() {
        return None;
    }
    Some(token)
}

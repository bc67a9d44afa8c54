use axum::{
    extract::State,
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};

use crate::dto::auth_dto::{
    GoogleTokenRequest, LoginRequest, RegisterRequest, TokenResponse, UserResponse,
};
use crate::services::session_service::SessionService;
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::jwt::extract_token_from_header;

pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/google", post(google_login))
        .route("/logout", post(logout))
        .route("/me", get(me))
}

fn bearer_token(headers: &HeaderMap) -> AppResult<String> {
    let auth_header = headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing Authorization header".to_string()))?;
    Ok(extract_token_from_header(auth_header)?.to_string())
}

async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let user = SessionService::new(&state).register(request).await?;
    Ok(Json(user))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let token = SessionService::new(&state).login(request).await?;
    Ok(Json(token))
}

async fn google_login(
    State(state): State<AppState>,
    Json(request): Json<GoogleTokenRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let token = SessionService::new(&state).google_login(request).await?;
    Ok(Json(token))
}

async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    let token = bearer_token(&headers)?;
    SessionService::new(&state).logout(&token).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Sesión cerrada exitosamente"
    })))
}

async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<UserResponse>, AppError> {
    let token = bearer_token(&headers)?;
    let service = SessionService::new(&state);
    let session = service.authenticate(&token).await?;
    Ok(Json(service.current_user(&session.email).await?))
}

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::instrument;

use crate::{
    accounts::{
        dto::{
            AccountResponse, LoginRequest, LogoutRequest, OnlineUsersResponse, RegisterRequest,
            TotalUsersResponse,
        },
        extractors::JsonBody,
    },
    error::{AccountError, MessageBody},
    state::AppState,
};

pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
}

pub fn stats_routes() -> Router<AppState> {
    Router::new()
        .route("/users/total", get(total_users))
        .route("/users/online", get(online_users))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<RegisterRequest>,
) -> Result<(StatusCode, Json<AccountResponse>), AccountError> {
    let user = state
        .accounts
        .register(
            payload.user_name.as_deref(),
            payload.email.as_deref(),
            payload.password.as_deref(),
        )
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(AccountResponse {
            message: "User registered successfully. Please wait for admin verification.".into(),
            user,
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<LoginRequest>,
) -> Result<Json<AccountResponse>, AccountError> {
    let user = state
        .accounts
        .login(payload.email.as_deref(), payload.password.as_deref())
        .await?;
    Ok(Json(AccountResponse {
        message: "Login successful".into(),
        user,
    }))
}

#[instrument(skip(state, payload))]
pub async fn logout(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<LogoutRequest>,
) -> Result<Json<MessageBody>, AccountError> {
    state.accounts.logout(payload.email.as_deref()).await?;
    Ok(Json(MessageBody {
        message: "Logout successful.".into(),
    }))
}

#[instrument(skip(state))]
pub async fn total_users(
    State(state): State<AppState>,
) -> Result<Json<TotalUsersResponse>, AccountError> {
    let total_users = state.accounts.count_total().await?;
    Ok(Json(TotalUsersResponse { total_users }))
}

#[instrument(skip(state))]
pub async fn online_users(
    State(state): State<AppState>,
) -> Result<Json<OnlineUsersResponse>, AccountError> {
    let online_users = state.accounts.count_online().await?;
    Ok(Json(OnlineUsersResponse { online_users }))
}

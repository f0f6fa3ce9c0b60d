use axum::{Json, extract::State};

use murmur_types::api::Credentials;
use murmur_types::models::Account;

use crate::accounts::Accounts;
use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::state::{AppState, run_blocking};

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<Credentials>,
) -> Result<Json<Account>, ApiError> {
    let account = run_blocking(&state, move |db| Accounts::new(db).register(&req)).await?;
    Ok(Json(account))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<Credentials>,
) -> Result<Json<Account>, ApiError> {
    let account = run_blocking(&state, move |db| Accounts::new(db).login(&req)).await?;
    Ok(Json(account))
}

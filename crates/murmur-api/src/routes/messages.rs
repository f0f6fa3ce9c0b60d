use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use murmur_types::api::{CreateMessageRequest, UpdateMessageRequest};
use murmur_types::models::Message;

use crate::error::ApiError;
use crate::extract::{JsonBody, PathId};
use crate::messages::Messages;
use crate::state::{AppState, run_blocking};

/// POST /messages
pub async fn create_message(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateMessageRequest>,
) -> Result<Json<Message>, ApiError> {
    let message = run_blocking(&state, move |db| Messages::new(db).create(&req)).await?;
    Ok(Json(message))
}

/// GET /messages
pub async fn list_messages(State(state): State<AppState>) -> Result<Json<Vec<Message>>, ApiError> {
    let messages = run_blocking(&state, |db| Messages::new(db).all()).await?;
    Ok(Json(messages))
}

/// GET /messages/{id} — empty body when there is no such message.
pub async fn get_message(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<Response, ApiError> {
    let message = run_blocking(&state, move |db| Messages::new(db).by_id(id)).await?;
    Ok(match message {
        Some(message) => Json(message).into_response(),
        None => StatusCode::OK.into_response(),
    })
}

/// GET /accounts/{id}/messages
pub async fn list_account_messages(
    State(state): State<AppState>,
    PathId(account_id): PathId,
) -> Result<Json<Vec<Message>>, ApiError> {
    let messages = run_blocking(&state, move |db| Messages::new(db).by_account(account_id)).await?;
    Ok(Json(messages))
}

/// DELETE /messages/{id} — responds 200 either way; the body carries the
/// row count only when something was deleted.
pub async fn delete_message(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<Response, ApiError> {
    let rows = run_blocking(&state, move |db| Messages::new(db).delete(id)).await?;
    Ok(if rows > 0 {
        Json(rows).into_response()
    } else {
        StatusCode::OK.into_response()
    })
}

/// PATCH /messages/{id}
pub async fn update_message(
    State(state): State<AppState>,
    PathId(id): PathId,
    JsonBody(req): JsonBody<UpdateMessageRequest>,
) -> Result<Response, ApiError> {
    let rows = run_blocking(&state, move |db| Messages::new(db).update(id, &req)).await?;
    Ok(if rows > 0 {
        Json(rows).into_response()
    } else {
        StatusCode::BAD_REQUEST.into_response()
    })
}

use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use rerouter_domain::Message;
use tracing::debug;

/// Answers only once the requested work is done. Broadcasts get `204`.
pub async fn post_message(State(state): State<AppState>, Json(message): Json<Message>) -> Response {
    debug!(message = ?message, "Message received");

    match state.handle_message.execute(message).await {
        Some(reply) => Json(reply).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

use crate::dto::{ActivityRequest, PresenceRequest, PresenceResponse};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::Json};
use tracing::{debug, error};

/// Presence pushed by a host agent, bypassing the local idle detector.
pub async fn report_presence(
    State(state): State<AppState>,
    Json(req): Json<PresenceRequest>,
) -> Result<Json<PresenceResponse>, (StatusCode, String)> {
    match state.activation.on_presence_change(req.state).await {
        Ok(activation) => Ok(Json(PresenceResponse {
            presence: req.state,
            state: activation,
        })),
        Err(e) => {
            error!(presence = %req.state, error = %e, "Presence transition failed");
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

/// Feeds the idle detector; the presence watch job picks up the result.
pub async fn report_activity(
    State(state): State<AppState>,
    Json(req): Json<ActivityRequest>,
) -> StatusCode {
    match req.locked {
        Some(true) => state.idle_detector.set_locked(true),
        Some(false) => {
            state.idle_detector.set_locked(false);
            state.idle_detector.record_activity();
        }
        None => state.idle_detector.record_activity(),
    }
    debug!(locked = ?req.locked, "Activity recorded");
    StatusCode::NO_CONTENT
}

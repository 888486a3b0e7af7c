use crate::dto::UpdateSettingsRequest;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::Json};
use rerouter_domain::{DomainError, Settings};
use tracing::{debug, error};

pub async fn get_settings(
    State(state): State<AppState>,
) -> Result<Json<Settings>, (StatusCode, String)> {
    match state.get_settings.execute().await {
        Ok(settings) => {
            debug!(
                sites = settings.blocked_sites.len(),
                destinations = settings.destinations.len(),
                "Settings retrieved"
            );
            Ok(Json(settings))
        }
        Err(e) => {
            error!(error = %e, "Failed to retrieve settings");
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

pub async fn update_settings(
    State(state): State<AppState>,
    Json(req): Json<UpdateSettingsRequest>,
) -> Result<Json<Settings>, (StatusCode, String)> {
    match state.update_settings.execute(req.into()).await {
        Ok(settings) => Ok(Json(settings)),
        Err(DomainError::InvalidSettings(msg)) => Err((StatusCode::BAD_REQUEST, msg)),
        Err(e) => {
            error!(error = %e, "Failed to update settings");
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

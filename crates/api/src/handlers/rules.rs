use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::Json};
use rerouter_domain::RedirectRule;
use tracing::error;

pub async fn get_rules(
    State(state): State<AppState>,
) -> Result<Json<Vec<RedirectRule>>, (StatusCode, String)> {
    state.enforcement.list_rules().await.map(Json).map_err(|e| {
        error!(error = %e, "Failed to list rules");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })
}

use crate::dto::{NavigateRequest, NavigateResponse};
use crate::state::AppState;
use axum::{extract::State, response::Json};

pub async fn navigate(
    State(state): State<AppState>,
    Json(req): Json<NavigateRequest>,
) -> Json<NavigateResponse> {
    let decision = state
        .resolve_navigation
        .execute(&req.url, req.resource_type)
        .await;
    Json(decision.into())
}

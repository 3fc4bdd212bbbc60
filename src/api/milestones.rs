//! Milestone endpoints.

use super::{ApiJson, AppState, MILESTONE_LIMIT, MessageResponse};
use crate::{
    core::milestone::{self, MilestoneUpdate},
    entities::MilestoneModel,
    errors::Result,
};
use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, put},
};

async fn get_milestones(State(state): State<AppState>) -> Result<Json<Vec<MilestoneModel>>> {
    let milestones = milestone::list_milestones(&state.database, Some(MILESTONE_LIMIT)).await?;
    Ok(Json(milestones))
}

/// Applies only the fields present in the body; achievement is always set manually.
async fn update_milestone(
    Path(id): Path<String>,
    State(state): State<AppState>,
    ApiJson(update): ApiJson<MilestoneUpdate>,
) -> Result<Json<MessageResponse>> {
    milestone::update_milestone(&state.database, &id, update).await?;
    Ok(Json(MessageResponse::new("Milestone updated successfully")))
}

/// Routes for `/milestones` and `/milestones/:id`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/milestones", get(get_milestones))
        .route("/milestones/:id", put(update_milestone))
}

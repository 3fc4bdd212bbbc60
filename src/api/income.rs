//! Income endpoints.

use super::{ApiJson, AppState, LIST_LIMIT, MessageResponse};
use crate::{
    core::income::{self, NewIncome},
    entities::IncomeModel,
    errors::Result,
};
use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get},
};

async fn add_income(
    State(state): State<AppState>,
    ApiJson(entry): ApiJson<NewIncome>,
) -> Result<Json<MessageResponse>> {
    let created = income::create_income(&state.database, entry).await?;
    Ok(Json(MessageResponse::created(
        "Income entry added successfully",
        created.id,
    )))
}

async fn get_income(State(state): State<AppState>) -> Result<Json<Vec<IncomeModel>>> {
    let entries = income::list_income(&state.database, Some(LIST_LIMIT)).await?;
    Ok(Json(entries))
}

async fn delete_income(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>> {
    income::delete_income(&state.database, &id).await?;
    Ok(Json(MessageResponse::new("Income entry deleted successfully")))
}

/// Routes for `/income` and `/income/:id`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/income", get(get_income).post(add_income))
        .route("/income/:id", delete(delete_income))
}

//! Expense endpoints.

use super::{ApiJson, AppState, LIST_LIMIT, MessageResponse};
use crate::{
    core::expense::{self, NewExpense},
    entities::ExpenseModel,
    errors::Result,
};
use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get},
};

async fn add_expense(
    State(state): State<AppState>,
    ApiJson(entry): ApiJson<NewExpense>,
) -> Result<Json<MessageResponse>> {
    let created = expense::create_expense(&state.database, entry).await?;
    Ok(Json(MessageResponse::created(
        "Expense entry added successfully",
        created.id,
    )))
}

async fn get_expenses(State(state): State<AppState>) -> Result<Json<Vec<ExpenseModel>>> {
    let entries = expense::list_expenses(&state.database, Some(LIST_LIMIT)).await?;
    Ok(Json(entries))
}

async fn delete_expense(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>> {
    expense::delete_expense(&state.database, &id).await?;
    Ok(Json(MessageResponse::new("Expense entry deleted successfully")))
}

/// Routes for `/expenses` and `/expenses/:id`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/expenses", get(get_expenses).post(add_expense))
        .route("/expenses/:id", delete(delete_expense))
}

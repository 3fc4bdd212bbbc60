//! Journal endpoints.

use super::{ApiJson, AppState, LIST_LIMIT, MessageResponse};
use crate::{
    core::journal::{self, NewJournalEntry},
    entities::JournalModel,
    errors::Result,
};
use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get},
};

async fn add_journal_entry(
    State(state): State<AppState>,
    ApiJson(entry): ApiJson<NewJournalEntry>,
) -> Result<Json<MessageResponse>> {
    let created = journal::create_journal_entry(&state.database, entry).await?;
    Ok(Json(MessageResponse::created(
        "Journal entry added successfully",
        created.id,
    )))
}

async fn get_journal_entries(State(state): State<AppState>) -> Result<Json<Vec<JournalModel>>> {
    let entries = journal::list_journal_entries(&state.database, Some(LIST_LIMIT)).await?;
    Ok(Json(entries))
}

async fn delete_journal_entry(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>> {
    journal::delete_journal_entry(&state.database, &id).await?;
    Ok(Json(MessageResponse::new("Journal entry deleted successfully")))
}

/// Routes for `/journal` and `/journal/:id`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/journal", get(get_journal_entries).post(add_journal_entry))
        .route("/journal/:id", delete(delete_journal_entry))
}

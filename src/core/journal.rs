//! Journal business logic - Free-form entries with an optional mood tag.
//!
//! The mood is stored as given; no closed set of values is enforced.

use crate::{
    entities::{Journal, journal},
    errors::{Error, Result},
};
use chrono::{NaiveDate, Utc};
use sea_orm::{QueryOrder, QuerySelect, Set, prelude::*};
use serde::Deserialize;
use tracing::{info, instrument};

/// Display name used in not-found errors
pub const ENTITY_NAME: &str = "Journal entry";

/// Fields a client supplies when writing a journal entry.
#[derive(Debug, Clone, Deserialize)]
pub struct NewJournalEntry {
    /// Entry title
    pub title: String,
    /// Body text
    pub content: String,
    /// Day the entry is about
    pub date: NaiveDate,
    /// Optional mood tag
    #[serde(default)]
    pub mood: Option<String>,
}

/// Stores a journal entry.
#[instrument(skip(db, new_entry), fields(title = %new_entry.title))]
pub async fn create_journal_entry(
    db: &DatabaseConnection,
    new_entry: NewJournalEntry,
) -> Result<journal::Model> {
    let model = journal::ActiveModel {
        id: Set(super::generate_id()),
        title: Set(new_entry.title),
        content: Set(new_entry.content),
        date: Set(new_entry.date),
        mood: Set(new_entry.mood),
        created_at: Set(Utc::now()),
    };

    let result = model.insert(db).await?;
    info!("Created journal entry {}", result.id);
    Ok(result)
}

/// Lists journal entries newest date first.
pub async fn list_journal_entries(
    db: &DatabaseConnection,
    limit: Option<u64>,
) -> Result<Vec<journal::Model>> {
    let mut query = Journal::find()
        .order_by_desc(journal::Column::Date)
        .order_by_desc(journal::Column::CreatedAt);
    if let Some(limit) = limit {
        query = query.limit(limit);
    }
    query.all(db).await.map_err(Into::into)
}

/// Finds a journal entry by identifier.
pub async fn get_journal_entry_by_id(
    db: &DatabaseConnection,
    id: &str,
) -> Result<Option<journal::Model>> {
    Journal::find_by_id(id.to_string())
        .one(db)
        .await
        .map_err(Into::into)
}

/// Hard-deletes one journal entry, failing with `Error::NotFound` if it is absent.
#[instrument(skip(db))]
pub async fn delete_journal_entry(db: &DatabaseConnection, id: &str) -> Result<()> {
    let result = Journal::delete_by_id(id.to_string()).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::NotFound {
            entity: ENTITY_NAME,
        });
    }
    info!("Deleted journal entry {}", id);
    Ok(())
}

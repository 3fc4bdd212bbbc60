//! Income business logic - Handles storing, listing and deleting income entries.
//!
//! Income entries are append-only records: they are created with a server-assigned
//! identifier and timestamp, listed newest date first, and removed with a hard delete.

use crate::{
    entities::{Income, income},
    errors::{Error, Result},
};
use chrono::{NaiveDate, Utc};
use sea_orm::{QueryOrder, QuerySelect, Set, prelude::*};
use serde::Deserialize;
use tracing::{info, instrument};

/// Display name used in not-found errors
pub const ENTITY_NAME: &str = "Income entry";

/// Fields a client supplies when recording income.
#[derive(Debug, Clone, Deserialize)]
pub struct NewIncome {
    /// Amount received, must be finite and non-negative
    pub amount: f64,
    /// Free-text origin tag
    pub source: String,
    /// Optional note
    #[serde(default)]
    pub description: Option<String>,
    /// Calendar date of the income
    pub date: NaiveDate,
}

/// Stores a new income entry, assigning its identifier and creation timestamp.
///
/// # Errors
/// Returns `Error::InvalidAmount` for a negative or non-finite amount, or a
/// database error if the insert fails.
#[instrument(skip(db))]
pub async fn create_income(db: &DatabaseConnection, new_income: NewIncome) -> Result<income::Model> {
    super::validate_amount(new_income.amount)?;

    let model = income::ActiveModel {
        id: Set(super::generate_id()),
        amount: Set(new_income.amount),
        source: Set(new_income.source),
        description: Set(new_income.description),
        date: Set(new_income.date),
        created_at: Set(Utc::now()),
    };

    let result = model.insert(db).await?;
    info!(
        "Created income {}: amount={}, source='{}'",
        result.id, result.amount, result.source
    );
    Ok(result)
}

/// Lists income entries ordered by date (newest first), optionally capped at `limit`.
///
/// Entries sharing a date are ordered by creation time, newest first.
pub async fn list_income(db: &DatabaseConnection, limit: Option<u64>) -> Result<Vec<income::Model>> {
    let mut query = Income::find()
        .order_by_desc(income::Column::Date)
        .order_by_desc(income::Column::CreatedAt);
    if let Some(limit) = limit {
        query = query.limit(limit);
    }
    query.all(db).await.map_err(Into::into)
}

/// Finds an income entry by identifier.
pub async fn get_income_by_id(db: &DatabaseConnection, id: &str) -> Result<Option<income::Model>> {
    Income::find_by_id(id.to_string())
        .one(db)
        .await
        .map_err(Into::into)
}

/// Hard-deletes one income entry.
///
/// # Errors
/// Returns `Error::NotFound` if no entry has the given identifier.
#[instrument(skip(db))]
pub async fn delete_income(db: &DatabaseConnection, id: &str) -> Result<()> {
    let result = Income::delete_by_id(id.to_string()).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::NotFound {
            entity: ENTITY_NAME,
        });
    }
    info!("Deleted income {}", id);
    Ok(())
}

//! Expense business logic - Handles storing, listing and deleting expense entries.

use crate::{
    entities::{Expense, expense},
    errors::{Error, Result},
};
use chrono::{NaiveDate, Utc};
use sea_orm::{QueryOrder, QuerySelect, Set, prelude::*};
use serde::Deserialize;
use tracing::{info, instrument};

/// Display name used in not-found errors
pub const ENTITY_NAME: &str = "Expense entry";

/// Fields a client supplies when recording an expense.
#[derive(Debug, Clone, Deserialize)]
pub struct NewExpense {
    /// Amount spent, must be finite and non-negative
    pub amount: f64,
    /// Free-text spending tag
    pub category: String,
    /// Optional note
    #[serde(default)]
    pub description: Option<String>,
    /// Calendar date of the expense
    pub date: NaiveDate,
}

/// Stores a new expense entry with a fresh identifier and creation timestamp.
///
/// # Errors
/// Returns `Error::InvalidAmount` for a negative or non-finite amount.
#[instrument(skip(db))]
pub async fn create_expense(
    db: &DatabaseConnection,
    new_expense: NewExpense,
) -> Result<expense::Model> {
    super::validate_amount(new_expense.amount)?;

    let model = expense::ActiveModel {
        id: Set(super::generate_id()),
        amount: Set(new_expense.amount),
        category: Set(new_expense.category),
        description: Set(new_expense.description),
        date: Set(new_expense.date),
        created_at: Set(Utc::now()),
    };

    let result = model.insert(db).await?;
    info!(
        "Created expense {}: amount={}, category='{}'",
        result.id, result.amount, result.category
    );
    Ok(result)
}

/// Lists expenses newest date first, optionally capped at `limit`.
pub async fn list_expenses(
    db: &DatabaseConnection,
    limit: Option<u64>,
) -> Result<Vec<expense::Model>> {
    let mut query = Expense::find()
        .order_by_desc(expense::Column::Date)
        .order_by_desc(expense::Column::CreatedAt);
    if let Some(limit) = limit {
        query = query.limit(limit);
    }
    query.all(db).await.map_err(Into::into)
}

/// Finds an expense by identifier.
pub async fn get_expense_by_id(
    db: &DatabaseConnection,
    id: &str,
) -> Result<Option<expense::Model>> {
    Expense::find_by_id(id.to_string())
        .one(db)
        .await
        .map_err(Into::into)
}

/// Hard-deletes one expense.
///
/// # Errors
/// Returns `Error::NotFound` if no expense has the given identifier.
#[instrument(skip(db))]
pub async fn delete_expense(db: &DatabaseConnection, id: &str) -> Result<()> {
    let result = Expense::delete_by_id(id.to_string()).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::NotFound {
            entity: ENTITY_NAME,
        });
    }
    info!("Deleted expense {}", id);
    Ok(())
}

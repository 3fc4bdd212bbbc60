//! Shared test utilities for the Financial Roadmap crate.
//!
//! This module provides helpers for setting up in-memory test databases, storing
//! entries with sensible defaults, and building detached models for the pure
//! aggregation functions.

use crate::{
    config::database::{create_connection, create_tables},
    core::{expense, income, journal},
    entities,
    errors::Result,
};
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

/// Routes `tracing` output through the test harness. Safe to call repeatedly.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all storage tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    init_test_tracing();
    let db = create_connection("sqlite::memory:").await?;
    create_tables(&db).await?;
    Ok(db)
}

/// Shorthand for a calendar date. Panics on an invalid date, which is a test bug.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Stores an income entry with no description.
pub async fn create_test_income(
    db: &DatabaseConnection,
    amount: f64,
    source: &str,
    date: NaiveDate,
) -> Result<entities::income::Model> {
    income::create_income(
        db,
        income::NewIncome {
            amount,
            source: source.to_string(),
            description: None,
            date,
        },
    )
    .await
}

/// Stores an expense entry with no description.
pub async fn create_test_expense(
    db: &DatabaseConnection,
    amount: f64,
    category: &str,
    date: NaiveDate,
) -> Result<entities::expense::Model> {
    expense::create_expense(
        db,
        expense::NewExpense {
            amount,
            category: category.to_string(),
            description: None,
            date,
        },
    )
    .await
}

/// Stores a journal entry dated 2024-01-01 with placeholder content.
pub async fn create_test_journal_entry(
    db: &DatabaseConnection,
    title: &str,
    mood: Option<&str>,
) -> Result<entities::journal::Model> {
    journal::create_journal_entry(
        db,
        journal::NewJournalEntry {
            title: title.to_string(),
            content: "Test journal content".to_string(),
            date: date(2024, 1, 1),
            mood: mood.map(str::to_string),
        },
    )
    .await
}

// Deterministic creation time: `seq` minutes after a fixed epoch.
fn created_at(seq: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default()
        + Duration::minutes(i64::from(seq))
}

/// Detached income model for aggregation tests; larger `seq` means created later.
#[must_use]
pub fn income_record(amount: f64, source: &str, date: NaiveDate, seq: u32) -> entities::income::Model {
    entities::income::Model {
        id: format!("income-{seq}"),
        amount,
        source: source.to_string(),
        description: None,
        date,
        created_at: created_at(seq),
    }
}

/// Detached expense model for aggregation tests; larger `seq` means created later.
#[must_use]
pub fn expense_record(
    amount: f64,
    category: &str,
    date: NaiveDate,
    seq: u32,
) -> entities::expense::Model {
    entities::expense::Model {
        id: format!("expense-{seq}"),
        amount,
        category: category.to_string(),
        description: None,
        date,
        created_at: created_at(seq),
    }
}

/// Detached, not-yet-achieved milestone model.
#[must_use]
pub fn milestone_record(target_amount: f64, title: &str) -> entities::milestone::Model {
    entities::milestone::Model {
        id: format!("milestone-{title}"),
        target_amount,
        title: title.to_string(),
        description: None,
        achieved: false,
        achieved_date: None,
    }
}

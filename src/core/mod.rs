//! Core business logic, independent of the HTTP layer.
//!
//! The per-collection modules are thin storage operations over `SeaORM`; the
//! aggregation engine in [`analytics`] is pure and never touches the database.

/// Dashboard, income-by-source and monthly aggregation
pub mod analytics;

/// Expense storage operations
pub mod expense;

/// Income storage operations
pub mod income;

/// Journal storage operations
pub mod journal;

/// Milestone listing, updates and seeding
pub mod milestone;

use crate::errors::{Error, Result};

/// Rejects amounts that are negative, NaN or infinite.
pub(crate) fn validate_amount(amount: f64) -> Result<()> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(Error::InvalidAmount { amount });
    }
    Ok(())
}

/// Fresh random identifier for a new record.
pub(crate) fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

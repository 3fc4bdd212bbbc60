//! Expense entity - One recorded outflow of money.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Expense database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    /// UUID v4 assigned on insert
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Amount spent in BWP
    pub amount: f64,
    /// Free-text spending tag (e.g. `"wifi"`, `"gym"`)
    pub category: String,
    /// Optional note
    pub description: Option<String>,
    /// Calendar date the expense belongs to
    pub date: Date,
    /// When the entry was stored
    pub created_at: DateTimeUtc,
}

/// Expense entries stand alone
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

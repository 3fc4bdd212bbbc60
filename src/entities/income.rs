//! Income entity - One recorded inflow of money toward the savings goal.
//!
//! Entries are immutable once stored; they are only ever created or hard-deleted.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Income database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "income")]
pub struct Model {
    /// UUID v4 assigned on insert
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Amount received in BWP
    pub amount: f64,
    /// Free-text origin tag (e.g. `"trading"`, `"freelancing"`)
    pub source: String,
    /// Optional note
    pub description: Option<String>,
    /// Calendar date the income belongs to
    pub date: Date,
    /// When the entry was stored
    pub created_at: DateTimeUtc,
}

/// Income entries stand alone
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

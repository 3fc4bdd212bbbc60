//! Journal entity - Free-form notes kept alongside the numbers.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Journal database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "journal")]
pub struct Model {
    /// UUID v4 assigned on insert
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Entry title
    pub title: String,
    /// Body text
    #[sea_orm(column_type = "Text")]
    pub content: String,
    /// Calendar date the entry is about
    pub date: Date,
    /// Optional mood tag, conventionally `"positive"`, `"negative"` or `"neutral"`
    pub mood: Option<String>,
    /// When the entry was stored
    pub created_at: DateTimeUtc,
}

/// Journal entries stand alone
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

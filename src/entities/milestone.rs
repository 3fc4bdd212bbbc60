//! Milestone entity - A savings checkpoint on the way to the goal amount.
//!
//! Milestones are seeded once and afterwards only updated in place. The `achieved`
//! flag is toggled manually; it is never derived from the running totals.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Milestone database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "milestones")]
pub struct Model {
    /// UUID v4 assigned on insert
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Net savings threshold in BWP
    pub target_amount: f64,
    /// Short display title (e.g. "First Million")
    pub title: String,
    /// Optional longer text
    pub description: Option<String>,
    /// Whether the milestone has been marked as reached
    pub achieved: bool,
    /// Date the milestone was marked as reached
    pub achieved_date: Option<Date>,
}

/// `Milestone` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

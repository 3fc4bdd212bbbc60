//! Milestone business logic - Listing, manual updates and first-run seeding.
//!
//! Milestones are never deleted. Their `achieved` flag is only changed through
//! [`update_milestone`]; nothing in the system flips it automatically when the net
//! progress crosses a threshold.

use crate::{
    config::milestones::MilestoneConfig,
    entities::{Milestone, milestone},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{PaginatorTrait, QueryOrder, QuerySelect, Set, prelude::*};
use serde::{Deserialize, Deserializer};
use tracing::{debug, info, instrument};

/// Display name used in not-found errors
pub const ENTITY_NAME: &str = "Milestone";

/// Partial update for a milestone. Absent fields are left untouched.
///
/// For the nullable fields an explicit JSON `null` clears the stored value, which
/// is how a milestone is marked as not achieved again.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MilestoneUpdate {
    /// New threshold
    #[serde(default)]
    pub target_amount: Option<f64>,
    /// New title
    #[serde(default)]
    pub title: Option<String>,
    /// New description; `Some(None)` clears it
    #[serde(default, deserialize_with = "present_or_null")]
    pub description: Option<Option<String>>,
    /// New achieved flag
    #[serde(default)]
    pub achieved: Option<bool>,
    /// New achieved date; `Some(None)` clears it
    #[serde(default, deserialize_with = "present_or_null")]
    pub achieved_date: Option<Option<NaiveDate>>,
}

impl MilestoneUpdate {
    /// Whether the update carries no field at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.target_amount.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.achieved.is_none()
            && self.achieved_date.is_none()
    }
}

// Distinguishes a field sent as `null` (Some(None)) from one left out (None).
fn present_or_null<'de, D, T>(deserializer: D) -> std::result::Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Lists milestones ordered by target amount, lowest first.
pub async fn list_milestones(
    db: &DatabaseConnection,
    limit: Option<u64>,
) -> Result<Vec<milestone::Model>> {
    let mut query = Milestone::find().order_by_asc(milestone::Column::TargetAmount);
    if let Some(limit) = limit {
        query = query.limit(limit);
    }
    query.all(db).await.map_err(Into::into)
}

/// Finds a milestone by identifier.
pub async fn get_milestone_by_id(
    db: &DatabaseConnection,
    id: &str,
) -> Result<Option<milestone::Model>> {
    Milestone::find_by_id(id.to_string())
        .one(db)
        .await
        .map_err(Into::into)
}

/// Counts stored milestones.
pub async fn count_milestones(db: &DatabaseConnection) -> Result<u64> {
    Milestone::find().count(db).await.map_err(Into::into)
}

/// Applies a partial update to a milestone and returns the stored result.
///
/// # Errors
/// * `Error::NotFound` if no milestone has the given identifier
/// * `Error::InvalidAmount` if a new `target_amount` is negative or non-finite
#[instrument(skip(db))]
pub async fn update_milestone(
    db: &DatabaseConnection,
    id: &str,
    update: MilestoneUpdate,
) -> Result<milestone::Model> {
    let existing = get_milestone_by_id(db, id)
        .await?
        .ok_or(Error::NotFound {
            entity: ENTITY_NAME,
        })?;

    if let Some(target_amount) = update.target_amount {
        super::validate_amount(target_amount)?;
    }

    if update.is_empty() {
        debug!("Empty update for milestone {}", id);
        return Ok(existing);
    }

    let mut active_model: milestone::ActiveModel = existing.into();
    if let Some(target_amount) = update.target_amount {
        active_model.target_amount = Set(target_amount);
    }
    if let Some(title) = update.title {
        active_model.title = Set(title);
    }
    if let Some(description) = update.description {
        active_model.description = Set(description);
    }
    if let Some(achieved) = update.achieved {
        active_model.achieved = Set(achieved);
    }
    if let Some(achieved_date) = update.achieved_date {
        active_model.achieved_date = Set(achieved_date);
    }

    let updated = active_model.update(db).await?;
    info!(
        "Updated milestone {} ('{}'): achieved={}",
        updated.id, updated.title, updated.achieved
    );
    Ok(updated)
}

/// Inserts the given milestones if, and only if, the collection is empty.
///
/// Returns how many milestones were inserted; `0` means seeding was skipped.
#[instrument(skip(db, seeds), fields(seed_count = seeds.len()))]
pub async fn seed_milestones(db: &DatabaseConnection, seeds: &[MilestoneConfig]) -> Result<usize> {
    let existing = count_milestones(db).await?;
    if existing > 0 {
        debug!("{} milestones already present, skipping seed", existing);
        return Ok(0);
    }
    if seeds.is_empty() {
        return Ok(0);
    }

    for seed in seeds {
        super::validate_amount(seed.target_amount)?;
    }

    let models = seeds.iter().map(|seed| milestone::ActiveModel {
        id: Set(super::generate_id()),
        target_amount: Set(seed.target_amount),
        title: Set(seed.title.clone()),
        description: Set(seed.description.clone()),
        achieved: Set(false),
        achieved_date: Set(None),
    });
    let inserted = Milestone::insert_many(models)
        .exec_without_returning(db)
        .await?;

    info!("Seeded {} milestones", inserted);
    Ok(seeds.len())
}

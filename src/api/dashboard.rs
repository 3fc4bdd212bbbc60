//! Dashboard endpoint.

use super::AppState;
use crate::{
    core::{
        analytics::{self, Dashboard},
        expense, income, milestone,
    },
    errors::Result,
};
use axum::{Json, Router, extract::State, routing::get};
use tracing::debug;

/// Loads every income, expense and milestone record and aggregates them.
async fn get_dashboard(State(state): State<AppState>) -> Result<Json<Dashboard>> {
    let income_records = income::list_income(&state.database, None).await?;
    let expense_records = expense::list_expenses(&state.database, None).await?;
    let milestones = milestone::list_milestones(&state.database, None).await?;

    let dashboard = analytics::compute_dashboard(&income_records, &expense_records, &milestones);
    debug!(
        "Dashboard: net={} ({:.1}%) over {} income / {} expense records",
        dashboard.net_progress,
        dashboard.progress_percentage,
        income_records.len(),
        expense_records.len()
    );
    Ok(Json(dashboard))
}

/// Routes for `/dashboard`.
pub fn router() -> Router<AppState> {
    Router::new().route("/dashboard", get(get_dashboard))
}

//! Analytics endpoints.
//!
//! Both responses keep the grouped-row layout the web client already consumes: the
//! grouping key sits under `_id` and the aggregate sits next to it.

use super::{AppState, MONTHLY_BUCKET_LIMIT, SOURCE_GROUP_LIMIT};
use crate::{
    core::{
        analytics::{self, MonthlyTotal, SourceTotal},
        expense, income,
    },
    errors::Result,
};
use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct SourceRow {
    #[serde(rename = "_id")]
    source: String,
    total: f64,
    count: u64,
}

impl From<SourceTotal> for SourceRow {
    fn from(group: SourceTotal) -> Self {
        Self {
            source: group.source,
            total: group.total,
            count: group.count,
        }
    }
}

#[derive(Debug, Serialize)]
struct MonthKey {
    year: i32,
    month: u32,
}

#[derive(Debug, Serialize)]
struct IncomeMonthRow {
    #[serde(rename = "_id")]
    key: MonthKey,
    income: f64,
}

#[derive(Debug, Serialize)]
struct ExpenseMonthRow {
    #[serde(rename = "_id")]
    key: MonthKey,
    expenses: f64,
}

#[derive(Debug, Serialize)]
struct MonthlyProgressBody {
    income_by_month: Vec<IncomeMonthRow>,
    expenses_by_month: Vec<ExpenseMonthRow>,
}

const fn month_key(bucket: &MonthlyTotal) -> MonthKey {
    MonthKey {
        year: bucket.year,
        month: bucket.month,
    }
}

async fn get_income_by_source(State(state): State<AppState>) -> Result<Json<Vec<SourceRow>>> {
    let income_records = income::list_income(&state.database, None).await?;
    let rows = analytics::group_income_by_source(&income_records)
        .into_iter()
        .take(SOURCE_GROUP_LIMIT)
        .map(SourceRow::from)
        .collect();
    Ok(Json(rows))
}

/// Income and expense series stay separate; they are never netted per month.
async fn get_monthly_progress(
    State(state): State<AppState>,
) -> Result<Json<MonthlyProgressBody>> {
    let income_records = income::list_income(&state.database, None).await?;
    let expense_records = expense::list_expenses(&state.database, None).await?;
    let progress = analytics::monthly_progress(&income_records, &expense_records);

    Ok(Json(MonthlyProgressBody {
        income_by_month: progress
            .income_by_month
            .iter()
            .take(MONTHLY_BUCKET_LIMIT)
            .map(|bucket| IncomeMonthRow {
                key: month_key(bucket),
                income: bucket.total,
            })
            .collect(),
        expenses_by_month: progress
            .expenses_by_month
            .iter()
            .take(MONTHLY_BUCKET_LIMIT)
            .map(|bucket| ExpenseMonthRow {
                key: month_key(bucket),
                expenses: bucket.total,
            })
            .collect(),
    }))
}

/// Routes for `/analytics/*`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/analytics/income-sources", get(get_income_by_source))
        .route("/analytics/monthly-progress", get(get_monthly_progress))
}

//! Aggregation engine - Derives summary views from stored financial records.
//!
//! Every function here is pure: it reads the record slices it is given, never
//! mutates them, and recomputes from scratch on each call. Fetching the records is
//! the caller's job, so these functions have no failure modes of their own.
//!
//! No rounding is applied; totals and percentages are plain `f64` arithmetic and
//! display formatting is left to the client.

use crate::entities::{expense, income, milestone};
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::BTreeMap;

/// The savings target progress is measured against, in BWP.
pub const GOAL_AMOUNT: f64 = 2_000_000.0;

/// How many of the latest income/expense records the dashboard shows.
pub const RECENT_LIMIT: usize = 5;

/// Snapshot of overall progress toward the goal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    /// Sum of all income amounts
    pub total_income: f64,
    /// Sum of all expense amounts
    pub total_expenses: f64,
    /// `total_income - total_expenses`, may be negative
    pub net_progress: f64,
    /// Always [`GOAL_AMOUNT`]
    pub goal_amount: f64,
    /// Net progress as a percentage of the goal, capped at 100 but not floored
    pub progress_percentage: f64,
    /// Most recently created income entries, newest first
    pub recent_income: Vec<income::Model>,
    /// Most recently created expense entries, newest first
    pub recent_expenses: Vec<expense::Model>,
    /// All milestones, lowest target first
    pub milestones: Vec<milestone::Model>,
}

/// Income total and entry count for one source tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceTotal {
    /// Source tag as stored
    pub source: String,
    /// Sum of amounts for this source
    pub total: f64,
    /// Number of entries
    pub count: u64,
}

/// Sum of amounts dated within one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTotal {
    /// Calendar year
    pub year: i32,
    /// 1-12
    pub month: u32,
    /// Sum of amounts dated in this month
    pub total: f64,
}

/// Month-bucketed income and expenses as two separate series.
///
/// The series are deliberately not netted against each other, unlike
/// [`Dashboard::net_progress`].
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct MonthlyProgress {
    /// Income per month, oldest month first
    pub income_by_month: Vec<MonthlyTotal>,
    /// Expenses per month, oldest month first
    pub expenses_by_month: Vec<MonthlyTotal>,
}

/// Builds the dashboard snapshot from the complete record collections.
///
/// With no records at all every numeric field is zero.
#[must_use]
pub fn compute_dashboard(
    income_records: &[income::Model],
    expense_records: &[expense::Model],
    milestones: &[milestone::Model],
) -> Dashboard {
    // Start from +0.0 so an empty collection never reports -0.0
    let total_income = income_records.iter().fold(0.0, |acc, entry| acc + entry.amount);
    let total_expenses = expense_records.iter().fold(0.0, |acc, entry| acc + entry.amount);
    let net_progress = total_income - total_expenses;

    let mut sorted_milestones = milestones.to_vec();
    sorted_milestones.sort_by(|a, b| a.target_amount.total_cmp(&b.target_amount));

    Dashboard {
        total_income,
        total_expenses,
        net_progress,
        goal_amount: GOAL_AMOUNT,
        progress_percentage: calculate_progress(net_progress, GOAL_AMOUNT),
        recent_income: most_recent(income_records, |entry| entry.created_at),
        recent_expenses: most_recent(expense_records, |entry| entry.created_at),
        milestones: sorted_milestones,
    }
}

/// Percentage of `goal` covered by `net_progress`, capped at 100.
///
/// Negative net progress yields a negative percentage. A zero goal yields 0.
#[must_use]
pub fn calculate_progress(net_progress: f64, goal: f64) -> f64 {
    if goal == 0.0 {
        return 0.0;
    }

    ((net_progress / goal) * 100.0).min(100.0)
}

/// Totals income per distinct source tag, ordered by source name.
#[must_use]
pub fn group_income_by_source(income_records: &[income::Model]) -> Vec<SourceTotal> {
    let mut groups: BTreeMap<&str, (f64, u64)> = BTreeMap::new();
    for entry in income_records {
        let group = groups.entry(entry.source.as_str()).or_insert((0.0, 0));
        group.0 += entry.amount;
        group.1 += 1;
    }

    groups
        .into_iter()
        .map(|(source, (total, count))| SourceTotal {
            source: source.to_string(),
            total,
            count,
        })
        .collect()
}

/// Buckets income and expenses by the calendar month of their `date`.
#[must_use]
pub fn monthly_progress(
    income_records: &[income::Model],
    expense_records: &[expense::Model],
) -> MonthlyProgress {
    MonthlyProgress {
        income_by_month: bucket_by_month(income_records.iter().map(|e| (e.date, e.amount))),
        expenses_by_month: bucket_by_month(expense_records.iter().map(|e| (e.date, e.amount))),
    }
}

fn bucket_by_month(records: impl Iterator<Item = (NaiveDate, f64)>) -> Vec<MonthlyTotal> {
    let mut buckets: BTreeMap<(i32, u32), f64> = BTreeMap::new();
    for (date, amount) in records {
        *buckets.entry((date.year(), date.month())).or_insert(0.0) += amount;
    }

    buckets
        .into_iter()
        .map(|((year, month), total)| MonthlyTotal { year, month, total })
        .collect()
}

// Stable sort: records created at the same instant keep their input order.
fn most_recent<T, F>(records: &[T], created_at: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> DateTime<Utc>,
{
    let mut sorted: Vec<&T> = records.iter().collect();
    sorted.sort_by_key(|record| Reverse(created_at(*record)));
    sorted.into_iter().take(RECENT_LIMIT).cloned().collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::{date, expense_record, income_record, milestone_record};

    #[test]
    fn test_dashboard_empty_is_all_zero() {
        let dashboard = compute_dashboard(&[], &[], &[]);

        assert_eq!(dashboard.total_income, 0.0);
        assert_eq!(dashboard.total_expenses, 0.0);
        assert_eq!(dashboard.net_progress, 0.0);
        assert_eq!(dashboard.progress_percentage, 0.0);
        assert_eq!(dashboard.goal_amount, GOAL_AMOUNT);
        assert!(dashboard.total_income.is_sign_positive());
        assert!(dashboard.recent_income.is_empty());
        assert!(dashboard.recent_expenses.is_empty());
        assert!(dashboard.milestones.is_empty());
    }

    #[test]
    fn test_dashboard_net_is_income_minus_expenses() {
        let income = vec![
            income_record(1000.5, "trading", date(2024, 1, 1), 0),
            income_record(250.25, "freelancing", date(2024, 1, 2), 1),
        ];
        let expenses = vec![
            expense_record(99.9, "wifi", date(2024, 1, 3), 2),
            expense_record(0.1, "gym", date(2024, 1, 4), 3),
        ];

        let dashboard = compute_dashboard(&income, &expenses, &[]);

        assert_eq!(dashboard.total_income, 1000.5 + 250.25);
        assert_eq!(dashboard.total_expenses, 99.9 + 0.1);
        assert_eq!(
            dashboard.total_income - dashboard.total_expenses,
            dashboard.net_progress
        );
    }

    #[test]
    fn test_dashboard_progress_percentage() {
        let income = vec![income_record(500_000.0, "trading", date(2024, 1, 1), 0)];
        let dashboard = compute_dashboard(&income, &[], &[]);
        assert_eq!(dashboard.progress_percentage, 25.0);
    }

    #[test]
    fn test_dashboard_progress_capped_at_hundred() {
        let income = vec![
            income_record(2_000_000.0, "trading", date(2024, 1, 1), 0),
            income_record(1_500_000.0, "trading", date(2024, 1, 2), 1),
        ];
        let dashboard = compute_dashboard(&income, &[], &[]);
        assert_eq!(dashboard.net_progress, 3_500_000.0);
        assert_eq!(dashboard.progress_percentage, 100.0);

        let exact = vec![income_record(GOAL_AMOUNT, "trading", date(2024, 1, 1), 0)];
        assert_eq!(compute_dashboard(&exact, &[], &[]).progress_percentage, 100.0);
    }

    #[test]
    fn test_dashboard_progress_can_go_negative() {
        let income = vec![income_record(100.0, "trading", date(2024, 1, 1), 0)];
        let expenses = vec![expense_record(20_100.0, "tuition_deposits", date(2024, 1, 2), 1)];

        let dashboard = compute_dashboard(&income, &expenses, &[]);
        assert_eq!(dashboard.net_progress, -20_000.0);
        assert_eq!(dashboard.progress_percentage, -1.0);
    }

    #[test]
    fn test_dashboard_recent_entries_newest_first_limited() {
        // Created in order 0..8 but listed in an unrelated order
        let income: Vec<income::Model> = [3, 7, 0, 5, 1, 6, 2, 4]
            .into_iter()
            .map(|seq| income_record(f64::from(seq), "trading", date(2024, 1, 1), seq))
            .collect();

        let dashboard = compute_dashboard(&income, &[], &[]);
        let amounts: Vec<f64> = dashboard.recent_income.iter().map(|e| e.amount).collect();
        assert_eq!(amounts, vec![7.0, 6.0, 5.0, 4.0, 3.0]);
        // Totals still cover every record, not only the recent ones
        assert_eq!(dashboard.total_income, 28.0);
    }

    #[test]
    fn test_dashboard_recent_ignores_entry_date() {
        let expenses = vec![
            expense_record(1.0, "gym", date(2030, 1, 1), 0),
            expense_record(2.0, "gym", date(2020, 1, 1), 1),
        ];
        let dashboard = compute_dashboard(&[], &expenses, &[]);
        assert_eq!(dashboard.recent_expenses[0].amount, 2.0);
    }

    #[test]
    fn test_dashboard_milestones_sorted_by_target() {
        let milestones = vec![
            milestone_record(1_000_000.0, "First Million"),
            milestone_record(100_000.0, "First P100k"),
            milestone_record(2_000_000.0, "Mission Complete"),
            milestone_record(500_000.0, "Tuition Secured"),
        ];

        let dashboard = compute_dashboard(&[], &[], &milestones);
        let titles: Vec<&str> = dashboard
            .milestones
            .iter()
            .map(|m| m.title.as_str())
            .collect();
        assert_eq!(
            titles,
            vec![
                "First P100k",
                "Tuition Secured",
                "First Million",
                "Mission Complete"
            ]
        );
    }

    #[test]
    fn test_dashboard_does_not_mark_milestones_achieved() {
        let income = vec![income_record(600_000.0, "trading", date(2024, 1, 1), 0)];
        let milestones = vec![milestone_record(100_000.0, "First P100k")];

        let dashboard = compute_dashboard(&income, &[], &milestones);
        assert!(!dashboard.milestones[0].achieved);
    }

    #[test]
    fn test_calculate_progress_zero_goal() {
        assert_eq!(calculate_progress(50.0, 0.0), 0.0);
    }

    #[test]
    fn test_group_income_by_source() {
        let income = vec![
            income_record(1000.0, "trading", date(2024, 1, 1), 0),
            income_record(500.0, "trading", date(2024, 2, 1), 1),
            income_record(200.0, "freelancing", date(2024, 1, 15), 2),
        ];

        let groups = group_income_by_source(&income);
        assert_eq!(
            groups,
            vec![
                SourceTotal {
                    source: "freelancing".to_string(),
                    total: 200.0,
                    count: 1,
                },
                SourceTotal {
                    source: "trading".to_string(),
                    total: 1500.0,
                    count: 2,
                },
            ]
        );
    }

    #[test]
    fn test_group_income_by_source_keeps_unknown_tags() {
        let income = vec![income_record(42.0, "selling_phones", date(2024, 1, 1), 0)];
        let groups = group_income_by_source(&income);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].source, "selling_phones");
        assert!(group_income_by_source(&[]).is_empty());
    }

    #[test]
    fn test_monthly_progress_orders_months() {
        let income = vec![
            income_record(50.0, "trading", date(2024, 2, 10), 0),
            income_record(100.0, "trading", date(2024, 1, 5), 1),
        ];

        let progress = monthly_progress(&income, &[]);
        assert_eq!(
            progress.income_by_month,
            vec![
                MonthlyTotal {
                    year: 2024,
                    month: 1,
                    total: 100.0,
                },
                MonthlyTotal {
                    year: 2024,
                    month: 2,
                    total: 50.0,
                },
            ]
        );
        assert!(progress.expenses_by_month.is_empty());
    }

    #[test]
    fn test_monthly_progress_sums_within_month_across_years() {
        let expenses = vec![
            expense_record(10.0, "wifi", date(2024, 1, 31), 0),
            expense_record(5.0, "gym", date(2023, 12, 1), 1),
            expense_record(2.5, "gym", date(2024, 1, 1), 2),
        ];

        let progress = monthly_progress(&[], &expenses);
        let buckets: Vec<(i32, u32, f64)> = progress
            .expenses_by_month
            .iter()
            .map(|m| (m.year, m.month, m.total))
            .collect();
        assert_eq!(buckets, vec![(2023, 12, 5.0), (2024, 1, 12.5)]);
    }

    #[test]
    fn test_monthly_progress_series_are_not_netted() {
        let income = vec![income_record(300.0, "trading", date(2024, 3, 3), 0)];
        let expenses = vec![expense_record(100.0, "wifi", date(2024, 3, 4), 1)];

        let progress = monthly_progress(&income, &expenses);
        assert_eq!(progress.income_by_month[0].total, 300.0);
        assert_eq!(progress.expenses_by_month[0].total, 100.0);
    }
}

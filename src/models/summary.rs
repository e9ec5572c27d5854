//! Period summary models.
//!
//! This module contains the [`PeriodSummary`] type and its associated
//! structures that capture the output of a batch billing run: per-category
//! totals, grand totals, the full per-shift results, and any shifts that
//! failed to bill.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{BillingPeriod, CategoryTotals, DayCategory, ShiftBilling};

/// A shift that could not be billed during a batch run.
///
/// Failures are collected alongside successes so one bad record never
/// blocks the rest of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftFailure {
    /// The shift that failed to bill.
    pub shift_id: String,
    /// The rostered date of the failed shift.
    pub date: NaiveDate,
    /// A human-readable description of why billing failed.
    pub error: String,
}

/// Aggregated billing for one worker over one reporting period.
///
/// Built by folding [`ShiftBilling`] results one at a time; the fold is
/// order-independent, so a summary built incrementally equals one built
/// from the same results in any other order.
///
/// # Example
///
/// ```
/// use billing_engine::models::{BillingPeriod, PeriodSummary};
/// use chrono::NaiveDate;
///
/// let period = BillingPeriod {
///     start_date: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 10, 31).unwrap(),
/// };
///
/// let summary = PeriodSummary::new("user_001", period);
/// assert_eq!(summary.total_amount, 0);
/// assert!(summary.shifts.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSummary {
    /// Unique identifier for this summary.
    pub summary_id: Uuid,
    /// When the summary was generated.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that produced the summary.
    pub engine_version: String,
    /// The worker the summary is for.
    pub user_id: String,
    /// The reporting period the summary covers.
    pub period: BillingPeriod,
    /// Totals for hours billed as weekday.
    pub weekday: CategoryTotals,
    /// Totals for hours billed as weeknight.
    pub weeknight: CategoryTotals,
    /// Totals for hours billed as Saturday.
    pub saturday: CategoryTotals,
    /// Totals for hours billed as Sunday.
    pub sunday: CategoryTotals,
    /// Totals for hours billed as public holiday.
    pub public_holiday: CategoryTotals,
    /// Grand total billed hours across all categories.
    pub total_hours: Decimal,
    /// Grand total amount in minor units across all categories.
    pub total_amount: i64,
    /// Per-shift billing results, ordered by date then shift id.
    pub shifts: Vec<ShiftBilling>,
    /// Shifts that failed to bill, ordered by date then shift id.
    pub failures: Vec<ShiftFailure>,
}

impl PeriodSummary {
    /// Creates an empty summary for a worker and period.
    pub fn new(user_id: &str, period: BillingPeriod) -> Self {
        Self {
            summary_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            user_id: user_id.to_string(),
            period,
            weekday: CategoryTotals::default(),
            weeknight: CategoryTotals::default(),
            saturday: CategoryTotals::default(),
            sunday: CategoryTotals::default(),
            public_holiday: CategoryTotals::default(),
            total_hours: Decimal::ZERO,
            total_amount: 0,
            shifts: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Folds one shift's billing into the summary.
    ///
    /// Each allocation is added to the bucket of its own category, so a
    /// split shift contributes to both the weekday and weeknight buckets.
    /// The per-shift results stay ordered by date then shift id no matter
    /// what order they arrive in.
    pub fn add_shift(&mut self, billing: ShiftBilling) {
        for line in &billing.billing {
            self.bucket_mut(line.category).accumulate(line);
        }
        self.total_hours += billing.total_hours;
        self.total_amount += billing.total_amount;

        let index = self.shifts.partition_point(|existing| {
            (existing.date, existing.shift_id.as_str())
                <= (billing.date, billing.shift_id.as_str())
        });
        self.shifts.insert(index, billing);
    }

    /// Records a shift that failed to bill, keeping failures ordered by
    /// date then shift id.
    pub fn add_failure(&mut self, failure: ShiftFailure) {
        let index = self.failures.partition_point(|existing| {
            (existing.date, existing.shift_id.as_str())
                <= (failure.date, failure.shift_id.as_str())
        });
        self.failures.insert(index, failure);
    }

    fn bucket_mut(&mut self, category: DayCategory) -> &mut CategoryTotals {
        match category {
            DayCategory::Weekday => &mut self.weekday,
            DayCategory::Weeknight => &mut self.weeknight,
            DayCategory::Saturday => &mut self.saturday,
            DayCategory::Sunday => &mut self.sunday,
            DayCategory::PublicHoliday => &mut self.public_holiday,
        }
    }
}

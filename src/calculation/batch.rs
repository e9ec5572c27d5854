//! Batch billing over a reporting period.
//!
//! Bills every shift a worker has in a period and folds the results into
//! a [`PeriodSummary`]. Shift calculations are pure and share only
//! read-only reference data, so each shift runs as its own task with no
//! locking. The holiday calendar is fetched once per run and shared
//! across all tasks.

use std::sync::Arc;

use chrono::NaiveTime;
use tracing::{info, warn};

use crate::calculation::engine::bill_shift;
use crate::calculation::provider::RateProvider;
use crate::error::EngineResult;
use crate::models::{BillingPeriod, PeriodSummary, ShiftFailure};
use crate::store::BillingStore;

/// Bills all of a worker's shifts in a period and aggregates the results.
///
/// Shifts are billed independently and concurrently; one shift's failure
/// is recorded on the summary and never aborts the others. The returned
/// summary lists successes and failures ordered by date then shift id,
/// so repeated runs over the same data produce identical output.
///
/// # Arguments
///
/// * `store` - Source of shifts, holidays, and rate data
/// * `provider` - The rate source pricing each shift's hours
/// * `user_id` - The worker whose shifts to bill
/// * `period` - The reporting date range (inclusive)
/// * `weeknight_threshold` - Clock time after which weekday hours count
///   as weeknight
///
/// # Returns
///
/// Returns the period summary, or an error if the reference data itself
/// cannot be fetched.
pub async fn bill_period(
    store: Arc<dyn BillingStore>,
    provider: Arc<dyn RateProvider>,
    user_id: &str,
    period: BillingPeriod,
    weeknight_threshold: NaiveTime,
) -> EngineResult<PeriodSummary> {
    let holidays = Arc::new(store.public_holidays()?);
    let shifts = store.shifts(user_id, &period)?;
    info!(
        user_id = %user_id,
        start_date = %period.start_date,
        end_date = %period.end_date,
        shifts_count = shifts.len(),
        "Starting period billing"
    );

    let mut handles = Vec::new();
    for shift in shifts {
        let provider = Arc::clone(&provider);
        let holidays = Arc::clone(&holidays);
        handles.push(tokio::spawn(async move {
            bill_shift(&shift, provider.as_ref(), &holidays, weeknight_threshold).map_err(|err| {
                ShiftFailure {
                    shift_id: shift.id.clone(),
                    date: shift.date,
                    error: err.to_string(),
                }
            })
        }));
    }

    let mut summary = PeriodSummary::new(user_id, period);
    for handle in handles {
        match handle.await {
            Ok(Ok(billing)) => summary.add_shift(billing),
            Ok(Err(failure)) => {
                warn!(
                    shift_id = %failure.shift_id,
                    error = %failure.error,
                    "Shift billing failed"
                );
                summary.add_failure(failure);
            }
            Err(err) => {
                warn!(error = %err, "Billing task panicked");
            }
        }
    }

    info!(
        user_id = %summary.user_id,
        billed_count = summary.shifts.len(),
        failed_count = summary.failures.len(),
        total_amount = summary.total_amount,
        "Period billing completed"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::provider::{FlatRates, TieredRates};
    use crate::models::{
        DayCategory, EmployeeRate, HolidayCalendar, RateTier, Shift, parse_clock_time,
    };
    use crate::store::InMemoryStore;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_shift(id: &str, date: &str, start: &str, end: &str) -> Shift {
        Shift {
            id: id.to_string(),
            date: make_date(date),
            start_time: parse_clock_time(start).unwrap(),
            end_time: parse_clock_time(end).unwrap(),
            shift_type: "standard".to_string(),
            company_id: "acme".to_string(),
            user_id: "user_001".to_string(),
        }
    }

    fn make_tier(day_type: DayCategory, rate: i64) -> RateTier {
        RateTier {
            company_id: "acme".to_string(),
            shift_type: "standard".to_string(),
            day_type,
            tier_order: 1,
            hours_in_tier: None,
            rate_per_hour: rate,
            valid_from: None,
            valid_to: None,
        }
    }

    fn october() -> BillingPeriod {
        BillingPeriod {
            start_date: make_date("2025-10-01"),
            end_date: make_date("2025-10-31"),
        }
    }

    fn threshold() -> NaiveTime {
        parse_clock_time("19:00").unwrap()
    }

    /// BP-001: shifts in the period land in their category buckets
    #[tokio::test]
    async fn test_period_billing_fills_buckets() {
        let store = Arc::new(InMemoryStore {
            tiers: vec![
                make_tier(DayCategory::Weekday, 2500),
                make_tier(DayCategory::Saturday, 2800),
            ],
            shifts: vec![
                make_shift("shift_001", "2025-10-06", "09:00", "17:00"),
                make_shift("shift_002", "2025-10-04", "09:00", "13:00"),
            ],
            ..InMemoryStore::new()
        });
        let provider = Arc::new(TieredRates::new(store.clone()));

        let summary = bill_period(store, provider, "user_001", october(), threshold())
            .await
            .unwrap();

        assert_eq!(summary.shifts.len(), 2);
        assert_eq!(summary.weekday.hours, dec("8.0"));
        assert_eq!(summary.weekday.amount, 20000);
        assert_eq!(summary.saturday.hours, dec("4.0"));
        assert_eq!(summary.saturday.amount, 11200);
        assert_eq!(summary.total_amount, 31200);
        assert!(summary.failures.is_empty());
    }

    /// BP-002: one bad shift fails soft, the rest still bill
    #[tokio::test]
    async fn test_bad_shift_does_not_abort_batch() {
        let store = Arc::new(InMemoryStore {
            tiers: vec![make_tier(DayCategory::Weekday, 2500)],
            shifts: vec![
                make_shift("shift_001", "2025-10-06", "09:00", "17:00"),
                make_shift("shift_002", "2025-10-07", "09:00", "09:00"),
                make_shift("shift_003", "2025-10-08", "09:00", "17:00"),
            ],
            ..InMemoryStore::new()
        });
        let provider = Arc::new(TieredRates::new(store.clone()));

        let summary = bill_period(store, provider, "user_001", october(), threshold())
            .await
            .unwrap();

        assert_eq!(summary.shifts.len(), 2);
        assert_eq!(summary.failures.len(), 1);
        assert_eq!(summary.failures[0].shift_id, "shift_002");
        assert!(summary.failures[0].error.contains("equal"));
        assert_eq!(summary.total_amount, 40000);
    }

    /// BP-003: output order is deterministic regardless of task completion order
    #[tokio::test]
    async fn test_results_ordered_by_date() {
        let store = Arc::new(InMemoryStore {
            tiers: vec![
                make_tier(DayCategory::Weekday, 2500),
                make_tier(DayCategory::Saturday, 2800),
                make_tier(DayCategory::Sunday, 3200),
            ],
            shifts: vec![
                make_shift("shift_003", "2025-10-20", "09:00", "17:00"),
                make_shift("shift_001", "2025-10-04", "09:00", "17:00"),
                make_shift("shift_002", "2025-10-12", "09:00", "17:00"),
            ],
            ..InMemoryStore::new()
        });
        let provider = Arc::new(TieredRates::new(store.clone()));

        let summary = bill_period(store, provider, "user_001", october(), threshold())
            .await
            .unwrap();

        let ids: Vec<&str> = summary.shifts.iter().map(|s| s.shift_id.as_str()).collect();
        assert_eq!(ids, vec!["shift_001", "shift_002", "shift_003"]);
    }

    /// BP-004: shifts dated outside the period are not billed
    #[tokio::test]
    async fn test_shifts_outside_period_excluded() {
        let store = Arc::new(InMemoryStore {
            tiers: vec![make_tier(DayCategory::Weekday, 2500)],
            shifts: vec![
                make_shift("shift_001", "2025-10-06", "09:00", "17:00"),
                make_shift("shift_002", "2025-11-03", "09:00", "17:00"),
            ],
            ..InMemoryStore::new()
        });
        let provider = Arc::new(TieredRates::new(store.clone()));

        let summary = bill_period(store, provider, "user_001", october(), threshold())
            .await
            .unwrap();

        assert_eq!(summary.shifts.len(), 1);
        assert_eq!(summary.shifts[0].shift_id, "shift_001");
    }

    /// BP-005: the holiday calendar is fetched once per run, not per shift
    #[tokio::test]
    async fn test_holidays_fetched_once() {
        struct CountingStore {
            inner: InMemoryStore,
            holiday_fetches: AtomicUsize,
        }

        impl BillingStore for CountingStore {
            fn rate_tiers(
                &self,
                company_id: &str,
                shift_type: &str,
                day_type: DayCategory,
                date: NaiveDate,
            ) -> EngineResult<Vec<RateTier>> {
                self.inner.rate_tiers(company_id, shift_type, day_type, date)
            }

            fn public_holidays(&self) -> EngineResult<HolidayCalendar> {
                self.holiday_fetches.fetch_add(1, Ordering::SeqCst);
                self.inner.public_holidays()
            }

            fn employee_rate(&self, user_id: &str) -> EngineResult<Option<EmployeeRate>> {
                self.inner.employee_rate(user_id)
            }

            fn shifts(&self, user_id: &str, period: &BillingPeriod) -> EngineResult<Vec<Shift>> {
                self.inner.shifts(user_id, period)
            }
        }

        let store = Arc::new(CountingStore {
            inner: InMemoryStore {
                tiers: vec![make_tier(DayCategory::Weekday, 2500)],
                shifts: vec![
                    make_shift("shift_001", "2025-10-06", "09:00", "17:00"),
                    make_shift("shift_002", "2025-10-07", "09:00", "17:00"),
                    make_shift("shift_003", "2025-10-08", "09:00", "17:00"),
                ],
                ..InMemoryStore::new()
            },
            holiday_fetches: AtomicUsize::new(0),
        });
        let provider = Arc::new(TieredRates::new(
            Arc::clone(&store) as Arc<dyn BillingStore>
        ));

        bill_period(
            Arc::clone(&store) as Arc<dyn BillingStore>,
            provider,
            "user_001",
            october(),
            threshold(),
        )
        .await
        .unwrap();

        assert_eq!(store.holiday_fetches.load(Ordering::SeqCst), 1);
    }

    /// BP-006: flat-rate batch splits weekday evenings into the weeknight bucket
    #[tokio::test]
    async fn test_flat_rate_batch_with_split() {
        let store = Arc::new(InMemoryStore {
            employee_rates: vec![EmployeeRate {
                user_id: "user_001".to_string(),
                company_id: "acme".to_string(),
                weekday_rate: 2000,
                weeknight_rate: 2400,
                saturday_rate: 2800,
                sunday_rate: 3200,
                public_holiday_rate: 4000,
                currency: "AUD".to_string(),
            }],
            shifts: vec![
                make_shift("shift_001", "2025-10-06", "17:00", "21:00"),
                make_shift("shift_002", "2025-10-05", "09:00", "13:00"),
            ],
            ..InMemoryStore::new()
        });
        let provider = Arc::new(FlatRates::from_store(store.as_ref(), "user_001").unwrap());

        let summary = bill_period(store, provider, "user_001", october(), threshold())
            .await
            .unwrap();

        assert_eq!(summary.weekday.hours, dec("2.0"));
        assert_eq!(summary.weekday.amount, 4000);
        assert_eq!(summary.weeknight.hours, dec("2.0"));
        assert_eq!(summary.weeknight.amount, 4800);
        assert_eq!(summary.sunday.hours, dec("4.0"));
        assert_eq!(summary.sunday.amount, 12800);
        assert_eq!(summary.total_amount, 4000 + 4800 + 12800);
    }
}

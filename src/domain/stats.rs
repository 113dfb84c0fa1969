use std::collections::BTreeMap;

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::records::ReadingRecord;

/// Snapshot of reading statistics for a library at a given date.
///
/// Computed from scratch on every call; nothing here is cached or mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadingStats {
    /// Books finished per year. A book spanning a year boundary counts once
    /// in its start year and once in its end year, deliberately not split.
    pub yearly: BTreeMap<i32, u64>,
    /// Mean reading duration in days over finished books, rounded to the
    /// nearest whole day. 0 when no finished book carries a duration.
    pub avg_days: i64,
    /// Books attributed to the year of `today`.
    pub this_year_count: u64,
    /// Fractional count of books attributable to the month of `today`,
    /// rounded to two decimals.
    pub this_month_count: f64,
}

impl ReadingStats {
    /// Compute statistics over `records` as of `today`.
    ///
    /// Pure: the current date is a parameter, so identical records and an
    /// identical `today` always produce an identical snapshot. Records
    /// missing either span date never reach a date-dependent aggregate.
    pub fn compute(records: &[ReadingRecord], today: NaiveDate) -> Self {
        let mut yearly: BTreeMap<i32, u64> = BTreeMap::new();
        let mut total_days: i64 = 0;
        let mut counted: u32 = 0;

        for record in records {
            let (Some(start), Some(end)) = (record.start, record.end) else {
                continue;
            };

            *yearly.entry(start.year()).or_insert(0) += 1;
            if end.year() != start.year() {
                *yearly.entry(end.year()).or_insert(0) += 1;
            }

            // Zero-day reads stay out of the mean.
            let days = (end - start).num_days();
            if days != 0 {
                total_days += days;
                counted += 1;
            }
        }

        let avg_days = if counted > 0 {
            (total_days as f64 / f64::from(counted)).round() as i64
        } else {
            0
        };

        let this_year_count = yearly.get(&today.year()).copied().unwrap_or(0);
        let this_month_count = this_month_count(records, today);

        Self {
            yearly,
            avg_days,
            this_year_count,
            this_month_count,
        }
    }
}

/// Fractional books attributable to the calendar month of `today`.
///
/// A book read entirely within the month counts as 1. A book started in an
/// earlier month and finished in this one counts proportionally: the day
/// overlap of `[start, end)` with the month, over the span's total days.
/// Everything else (finished in a later month, or outside the month
/// entirely) counts as 0.
fn this_month_count(records: &[ReadingRecord], today: NaiveDate) -> f64 {
    let Some(month_start) = today.with_day(1) else {
        return 0.0;
    };
    let next_month_start = month_start
        .checked_add_months(Months::new(1))
        .unwrap_or(month_start);

    let mut total = 0.0;

    for record in records {
        let (Some(start), Some(end)) = (record.start, record.end) else {
            continue;
        };

        let start_in_month = in_month(start, today);
        let end_in_month = in_month(end, today);

        if start_in_month && end_in_month {
            total += 1.0;
            continue;
        }

        if !start_in_month && end_in_month {
            let total_days = (end - start).num_days();
            if total_days <= 0 {
                continue;
            }

            let overlap_start = start.max(month_start);
            let overlap_end = end.min(next_month_start);
            let overlap_days = (overlap_end - overlap_start).num_days().max(0);

            if overlap_days > 0 {
                total += overlap_days as f64 / total_days as f64;
            }
        }
    }

    (total * 100.0).round() / 100.0
}

fn in_month(date: NaiveDate, today: NaiveDate) -> bool {
    date.year() == today.year() && date.month() == today.month()
}

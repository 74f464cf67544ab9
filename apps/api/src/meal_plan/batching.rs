//! Batch Scheduler — splits a day range into fixed-size generation windows.
//!
//! Each window becomes one model call. Windows keep the expected output of a
//! single call well under the per-call token budget; a 28-day plan in one call
//! comes back truncated.

use chrono::{Duration, NaiveDate};

/// Hard cap on plan length, applied before any model call.
pub const MAX_PLAN_DAYS: u32 = 28;
/// Days per model call unless overridden by config.
pub const DEFAULT_BATCH_SIZE: u32 = 3;
/// Largest batch that still fits the per-window output budget.
pub const MAX_BATCH_SIZE: u32 = 7;

/// A contiguous run of days generated by one model call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// 1-based number of the first day in the window.
    pub start_day: u32,
    pub days: u32,
    pub start_date: NaiveDate,
}

impl Window {
    pub fn end_day(&self) -> u32 {
        self.start_day + self.days - 1
    }

    pub fn end_date(&self) -> NaiveDate {
        date_for_offset(self.start_date, self.days - 1)
    }
}

/// Caps a requested day count to `MAX_PLAN_DAYS`.
pub fn cap_days(requested: u32) -> u32 {
    requested.min(MAX_PLAN_DAYS)
}

/// Clamps a configured batch size into `1..=MAX_BATCH_SIZE`.
pub fn clamp_batch_size(batch_size: u32) -> u32 {
    batch_size.clamp(1, MAX_BATCH_SIZE)
}

/// Partitions `1..=total_days` into windows of `batch_size` days, in order.
/// The last window holds the remainder.
pub fn plan_windows(total_days: u32, batch_size: u32, start_date: NaiveDate) -> Vec<Window> {
    let batch_size = batch_size.max(1);
    let mut windows = Vec::with_capacity(total_days.div_ceil(batch_size) as usize);

    let mut start_day = 1;
    while start_day <= total_days {
        let days = batch_size.min(total_days - start_day + 1);
        windows.push(Window {
            start_day,
            days,
            start_date: date_for_offset(start_date, start_day - 1),
        });
        start_day += days;
    }

    windows
}

/// `start + offset` calendar days.
pub fn date_for_offset(start: NaiveDate, offset: u32) -> NaiveDate {
    start + Duration::days(i64::from(offset))
}

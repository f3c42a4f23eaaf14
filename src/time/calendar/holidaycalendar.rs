use std::collections::BTreeSet;

use chrono::{
    Datelike,
    Days,
    NaiveDate
};

use crate::time::timeerror::TimeError;
use crate::time::utility::{
    days_of_month,
    days_of_year
};

const ONE_DAY: Days = Days::new(1);

/// Moves one calendar day, failing instead of panicking at the edge of chrono's range.
#[inline]
pub(crate) fn step_one_day(d: NaiveDate, forward: bool) -> Result<NaiveDate, TimeError> {
    let next = if forward {
        d.checked_add_days(ONE_DAY)
    } else {
        d.checked_sub_days(ONE_DAY)
    };
    next.ok_or(TimeError::DateOutOfRange(d))
}

/// Read-only view of a holiday calendar.
///
/// Implementors must be immutable after construction; every method takes
/// `&self` so a calendar can be shared across threads behind `&` or `Arc`
/// without locking.
pub trait HolidayCalendar: Send + Sync {
    fn is_holiday(&self, d: NaiveDate) -> bool;

    fn is_business_day(&self, d: NaiveDate) -> bool {
        !self.is_holiday(d)
    }

    /// All non-business days of `year`, weekends included.
    fn holidays_in_year(&self, year: i32) -> BTreeSet<NaiveDate> {
        match (NaiveDate::from_yo_opt(year, 1), days_of_year(year)) {
            (Some(first_day), Some(days)) => first_day
                .iter_days()
                .take(days as usize)
                .filter(|d| self.is_holiday(*d))
                .collect(),
            _ => BTreeSet::new()
        }
    }

    /// Moves `n` business days away from `horizon`; negative `n` moves backward.
    fn shift_business_days(&self, horizon: NaiveDate, n: i32) -> Result<NaiveDate, TimeError> {
        let forward = n >= 0;
        let mut m = n.unsigned_abs();
        let mut d = horizon;
        while m > 0 {
            d = step_one_day(d, forward)?;
            m -= self.is_business_day(d) as u32;
        }
        Ok(d)
    }

    /// First business day strictly after `d`.
    fn next_business_day(&self, d: NaiveDate) -> Result<NaiveDate, TimeError> {
        self.shift_business_days(d, 1)
    }

    /// Last business day strictly before `d`.
    fn previous_business_day(&self, d: NaiveDate) -> Result<NaiveDate, TimeError> {
        self.shift_business_days(d, -1)
    }

    fn first_business_day_of_month(&self, year: i32, month: u32) -> Option<NaiveDate> {
        let fom = NaiveDate::from_ymd_opt(year, month, 1)?;
        fom.iter_days()
            .take(days_of_month(year, month)? as usize)
            .find(|d| self.is_business_day(*d))
    }

    fn last_business_day_of_month(&self, year: i32, month: u32) -> Option<NaiveDate> {
        let fom = NaiveDate::from_ymd_opt(year, month, 1)?;
        let mut eom = NaiveDate::from_ymd_opt(year, month, days_of_month(year, month)?)?;
        while self.is_holiday(eom) {
            if eom == fom {
                return None;
            }
            eom = eom.pred_opt()?;
        }
        debug_assert_eq!(eom.month(), month);
        Some(eom)
    }
}

use chrono::{
    NaiveDate,
    NaiveDateTime
};

/// A date-like value that can be cut down to its day and rebuilt from a new day.
///
/// Holiday adjustment works at day granularity: the day is taken out with
/// [`CalendarDate::day`], moved, and put back with [`CalendarDate::with_day`],
/// which leaves any sub-day component untouched.
pub trait CalendarDate: Copy {
    fn day(&self) -> NaiveDate;

    fn with_day(self, d: NaiveDate) -> Self;
}

impl CalendarDate for NaiveDate {
    #[inline]
    fn day(&self) -> NaiveDate {
        *self
    }

    #[inline]
    fn with_day(self, d: NaiveDate) -> Self {
        d
    }
}

impl CalendarDate for NaiveDateTime {
    #[inline]
    fn day(&self) -> NaiveDate {
        self.date()
    }

    #[inline]
    fn with_day(self, d: NaiveDate) -> Self {
        d.and_time(self.time())
    }
}

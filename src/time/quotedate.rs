use std::rc::Rc;
use std::sync::Arc;

use chrono::{
    NaiveDate,
    NaiveDateTime
};

use crate::time::calendardate::CalendarDate;

/// Anything that carries the date (or date-time) it is quoted on.
///
/// Instruments implement this directly. Plain dates and date-times quote
/// themselves, and references and smart pointers forward to what they
/// point at, so wrapped instruments need no impl of their own.
pub trait QuoteDate {
    type Date: CalendarDate;

    fn quote_date(&self) -> Self::Date;
}

/// Uniform entry point for pricing code that only needs the quote date.
#[inline]
pub fn quote_date<Q: QuoteDate + ?Sized>(q: &Q) -> Q::Date {
    q.quote_date()
}

impl QuoteDate for NaiveDate {
    type Date = NaiveDate;

    fn quote_date(&self) -> NaiveDate {
        *self
    }
}

impl QuoteDate for NaiveDateTime {
    type Date = NaiveDateTime;

    fn quote_date(&self) -> NaiveDateTime {
        *self
    }
}

impl<Q: QuoteDate + ?Sized> QuoteDate for &Q {
    type Date = Q::Date;

    fn quote_date(&self) -> Q::Date {
        (**self).quote_date()
    }
}

impl<Q: QuoteDate + ?Sized> QuoteDate for Box<Q> {
    type Date = Q::Date;

    fn quote_date(&self) -> Q::Date {
        (**self).quote_date()
    }
}

impl<Q: QuoteDate + ?Sized> QuoteDate for Arc<Q> {
    type Date = Q::Date;

    fn quote_date(&self) -> Q::Date {
        (**self).quote_date()
    }
}

impl<Q: QuoteDate + ?Sized> QuoteDate for Rc<Q> {
    type Date = Q::Date;

    fn quote_date(&self) -> Q::Date {
        (**self).quote_date()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FxQuote {
        as_of: NaiveDateTime,
        _rate: f64
    }

    impl QuoteDate for FxQuote {
        type Date = NaiveDateTime;

        fn quote_date(&self) -> NaiveDateTime {
            self.as_of
        }
    }

    #[test]
    fn test_plain_dates_quote_themselves() {
        let d = NaiveDate::from_ymd_opt(2024, 5, 17).unwrap();
        assert_eq!(quote_date(&d), d);
        let dt = d.and_hms_opt(9, 0, 0).unwrap();
        assert_eq!(quote_date(&dt), dt);
    }

    #[test]
    fn test_wrapped_instruments_forward() {
        let as_of = NaiveDate::from_ymd_opt(2024, 5, 17).unwrap().and_hms_opt(16, 0, 0).unwrap();
        let quote = FxQuote { as_of, _rate: 1.0825 };
        assert_eq!(quote_date(&&quote), as_of);

        let boxed: Box<dyn QuoteDate<Date = NaiveDateTime>> = Box::new(FxQuote { as_of, _rate: 1.0 });
        assert_eq!(quote_date(&boxed), as_of);

        let shared = Arc::new(quote);
        assert_eq!(quote_date(&shared), as_of);
        assert_eq!(quote_date(&Rc::new(as_of.date())), as_of.date());
    }
}

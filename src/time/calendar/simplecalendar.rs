use chrono::{
    Datelike,
    NaiveDate,
    Weekday
};

use serde::{
    Serialize,
    Deserialize
};

use crate::time::calendar::holidaycalendar::HolidayCalendar;

#[derive(Deserialize)]
struct SimpleCalendarJsonProp {
    #[serde(default)]
    additional_holidays: Vec<NaiveDate>,
    #[serde(default)]
    additional_business_days: Vec<NaiveDate>
}

impl From<SimpleCalendarJsonProp> for SimpleCalendar {
    fn from(json_prop: SimpleCalendarJsonProp) -> Self {
        SimpleCalendar::new(json_prop.additional_holidays, json_prop.additional_business_days)
    }
}

/// Saturday/Sunday weekend calendar with two exception lists.
///
/// * `additional_holidays` - weekdays that are not business days
/// * `additional_business_days` - weekend days that are business days
///
/// Both lists are kept strictly increasing so membership is a binary search.
/// Keeping the two lists disjoint is up to whoever builds the calendar; a
/// weekday listed as an additional business day has no effect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SimpleCalendarJsonProp")]
pub struct SimpleCalendar {
    additional_holidays: Vec<NaiveDate>,
    additional_business_days: Vec<NaiveDate>
}

fn into_sorted_set(mut dates: Vec<NaiveDate>) -> Vec<NaiveDate> {
    dates.sort_unstable();
    dates.dedup();
    dates
}

impl SimpleCalendar {
    pub fn new(additional_holidays: Vec<NaiveDate>,
               additional_business_days: Vec<NaiveDate>) -> SimpleCalendar {
        let calendar = SimpleCalendar {
            additional_holidays: into_sorted_set(additional_holidays),
            additional_business_days: into_sorted_set(additional_business_days)
        };
        log::debug!(
            "calendar built with {} additional holidays and {} additional business days",
            calendar.additional_holidays.len(),
            calendar.additional_business_days.len()
        );
        calendar
    }

    pub fn additional_holidays(&self) -> &[NaiveDate] {
        &self.additional_holidays
    }

    pub fn additional_business_days(&self) -> &[NaiveDate] {
        &self.additional_business_days
    }

    #[inline]
    pub fn is_weekend(&self, d: NaiveDate) -> bool {
        matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
    }

    #[inline]
    pub fn is_additional_holiday(&self, d: NaiveDate) -> bool {
        self.additional_holidays.binary_search(&d).is_ok()
    }

    #[inline]
    pub fn is_additional_business_day(&self, d: NaiveDate) -> bool {
        self.additional_business_days.binary_search(&d).is_ok()
    }
}

impl HolidayCalendar for SimpleCalendar {
    fn is_holiday(&self, d: NaiveDate) -> bool {
        if self.is_weekend(d) {
            !self.is_additional_business_day(d)
        } else {
            self.is_additional_holiday(d)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weekday_holiday() {
        let cal = SimpleCalendar::new(vec![ymd(2024, 1, 1)], vec![]);
        assert!(!cal.is_business_day(ymd(2024, 1, 1)));
        assert!(cal.is_business_day(ymd(2024, 1, 2)));
        assert!(!cal.is_business_day(ymd(2023, 12, 30)));
        assert!(!cal.is_business_day(ymd(2023, 12, 31)));
    }

    #[test]
    fn test_weekend_override() {
        // Saturday 2024-06-08
        let cal = SimpleCalendar::new(vec![], vec![ymd(2024, 6, 8)]);
        assert!(cal.is_business_day(ymd(2024, 6, 8)));
        assert!(!cal.is_business_day(ymd(2024, 6, 9)));
    }

    #[test]
    fn test_weekday_listed_as_business_day_has_no_effect() {
        let cal = SimpleCalendar::new(vec![ymd(2024, 6, 10)], vec![ymd(2024, 6, 10)]);
        assert!(!cal.is_business_day(ymd(2024, 6, 10)));
    }

    #[test]
    fn test_weekend_listed_as_holiday_stays_holiday() {
        let cal = SimpleCalendar::new(vec![ymd(2024, 6, 8)], vec![]);
        assert!(cal.is_holiday(ymd(2024, 6, 8)));
    }

    #[test]
    fn test_new_sorts_and_dedups() {
        let cal = SimpleCalendar::new(
            vec![ymd(2024, 12, 25), ymd(2024, 1, 1), ymd(2024, 12, 25)],
            vec![]
        );
        assert_eq!(cal.additional_holidays(), &[ymd(2024, 1, 1), ymd(2024, 12, 25)]);
        assert!(cal.is_additional_holiday(ymd(2024, 12, 25)));
    }

    #[test]
    fn test_default_is_weekend_only() {
        let cal = SimpleCalendar::default();
        assert!(cal.additional_holidays().is_empty());
        assert!(cal.additional_business_days().is_empty());
        assert_eq!(cal.holidays_in_year(2024).len(), 104);
    }

    #[test]
    fn test_json() {
        let json = serde_json::json!({
            "additional_holidays": ["2024-12-25", "2024-01-01"],
            "additional_business_days": ["2024-06-08"]
        });
        let cal: SimpleCalendar = serde_json::from_value(json).unwrap();
        assert_eq!(cal.additional_holidays(), &[ymd(2024, 1, 1), ymd(2024, 12, 25)]);
        assert!(cal.is_business_day(ymd(2024, 6, 8)));

        let back = serde_json::to_value(&cal).unwrap();
        assert_eq!(back["additional_holidays"][0], "2024-01-01");
        let again: SimpleCalendar = serde_json::from_value(back).unwrap();
        assert_eq!(again, cal);
    }

    #[test]
    fn test_json_missing_lists() {
        let cal: SimpleCalendar = serde_json::from_str("{}").unwrap();
        assert_eq!(cal, SimpleCalendar::default());
    }
}

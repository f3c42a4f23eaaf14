//! Property-based checks of the adjustment rules on random sparse calendars.

use bizcal::time::calendar::holidaycalendar::HolidayCalendar;
use bizcal::time::calendar::simplecalendar::SimpleCalendar;
use bizcal::time::holidayadjustment::{
    HolidayAdjustmentType,
    adjust
};
use chrono::{
    Datelike,
    Days,
    NaiveDate
};
use proptest::prelude::*;

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (2000i32..2100i32, 1u32..13u32, 1u32..29u32).prop_filter_map(
        "valid date",
        |(year, month, day)| NaiveDate::from_ymd_opt(year, month, day),
    )
}

/// A date plus a calendar whose exceptions sit within two months of it.
///
/// At most 14 holidays are drawn, so every month keeps at least one business day.
fn scenario_strategy() -> impl Strategy<Value = (NaiveDate, SimpleCalendar)> {
    (
        date_strategy(),
        prop::collection::vec(0u64..120, 0..15),
        prop::collection::vec(0u64..120, 0..6),
    )
        .prop_map(|(d, holiday_offsets, business_day_offsets)| {
            let origin = d - Days::new(60);
            let holidays = holiday_offsets.into_iter().map(|k| origin + Days::new(k)).collect();
            let business_days = business_day_offsets.into_iter().map(|k| origin + Days::new(k)).collect();
            (d, SimpleCalendar::new(holidays, business_days))
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn following_and_preceding_are_directional((d, cal) in scenario_strategy()) {
        let following = adjust(d, &cal, HolidayAdjustmentType::Following).unwrap();
        let preceding = adjust(d, &cal, HolidayAdjustmentType::Preceding).unwrap();
        prop_assert!(following >= d);
        prop_assert!(preceding <= d);
        prop_assert!(cal.is_business_day(following));
        prop_assert!(cal.is_business_day(preceding));
    }

    #[test]
    fn adjusting_a_business_day_is_identity((d, cal) in scenario_strategy()) {
        for adjustment_type in HolidayAdjustmentType::ALL {
            let adjusted = adjust(d, &cal, adjustment_type).unwrap();
            prop_assert_eq!(adjust(adjusted, &cal, adjustment_type).unwrap(), adjusted);
            if cal.is_business_day(d) {
                prop_assert_eq!(adjusted, d);
            }
        }
    }

    #[test]
    fn modified_rules_stay_in_month((d, cal) in scenario_strategy()) {
        for adjustment_type in [HolidayAdjustmentType::ModifiedFollowing, HolidayAdjustmentType::ModifiedPreceding] {
            let adjusted = adjust(d, &cal, adjustment_type).unwrap();
            prop_assert_eq!((adjusted.year(), adjusted.month()), (d.year(), d.month()));
            prop_assert!(cal.is_business_day(adjusted));
        }
    }

    #[test]
    fn date_time_matches_date_adjustment(
        (d, cal) in scenario_strategy(),
        secs in 0u32..86_400,
    ) {
        let dt = d.and_hms_opt(secs / 3600, (secs / 60) % 60, secs % 60).unwrap();
        for adjustment_type in HolidayAdjustmentType::ALL {
            let adjusted = adjust(dt, &cal, adjustment_type).unwrap();
            prop_assert_eq!(adjusted.date(), adjust(d, &cal, adjustment_type).unwrap());
            prop_assert_eq!(adjusted.time(), dt.time());
        }
    }
}

use chrono::{
    Datelike,
    NaiveDate
};

/// Number of days in `month` of `year`; `None` for a month outside `1..=12`
/// or a year chrono cannot represent.
pub fn days_of_month (year: i32, month: u32) -> Option<u32> {
    const NO_LEAP_EOM: [u32; 13] = [
        0, 31, 28, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    let fom = NaiveDate::from_ymd_opt(year, month, 1)?;
    if month == 2 && fom.leap_year() {
        Some(29)
    } else {
        NO_LEAP_EOM.get(month as usize).copied()
    }
}

pub fn days_of_year (year: i32) -> Option<u32> {
    NaiveDate::from_yo_opt(year, 1).map(|d| if d.leap_year() { 366 } else { 365 })
}

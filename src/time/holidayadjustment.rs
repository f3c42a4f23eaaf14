use std::fmt;
use std::str::FromStr;

use chrono::{
    Datelike,
    NaiveDate
};

use serde::{
    Deserialize,
    Deserializer,
    Serialize,
    Serializer
};

use crate::time::calendar::holidaycalendar::{
    HolidayCalendar,
    step_one_day
};
use crate::time::calendardate::CalendarDate;
use crate::time::quotedate::QuoteDate;
use crate::time::timeerror::TimeError;

/// Rolls `start` one day at a time until the candidate is a business day.
///
/// Each iteration tests the advancing candidate, never the original input.
struct DateWalker<'a> {
    calendar: &'a dyn HolidayCalendar,
    max_walk_days: Option<u32>
}

impl DateWalker<'_> {
    fn roll(&self, start: NaiveDate, forward: bool) -> Result<NaiveDate, TimeError> {
        let direction = if forward { "after" } else { "before" };
        let mut candidate = start;
        let mut walked: u32 = 0;
        while !self.calendar.is_business_day(candidate) {
            if let Some(max_days) = self.max_walk_days {
                if walked >= max_days {
                    log::warn!("no business day within {} days {} {}", max_days, direction, start);
                    return Err(TimeError::NoBusinessDayWithin { start, max_days, direction });
                }
            }
            candidate = step_one_day(candidate, forward).inspect_err(|_| {
                log::warn!("walk {} {} left the representable date range", direction, start);
            })?;
            walked += 1;
        }
        Ok(candidate)
    }
}

#[inline]
fn same_month(d1: NaiveDate, d2: NaiveDate) -> bool {
    d1.year() == d2.year() && d1.month() == d2.month()
}

fn unadjusted(d: NaiveDate, _walker: &DateWalker<'_>) -> Result<NaiveDate, TimeError> {
    Ok(d)
}

fn following(d: NaiveDate, walker: &DateWalker<'_>) -> Result<NaiveDate, TimeError> {
    walker.roll(d, true)
}

fn preceding(d: NaiveDate, walker: &DateWalker<'_>) -> Result<NaiveDate, TimeError> {
    walker.roll(d, false)
}

fn modified_following(d: NaiveDate, walker: &DateWalker<'_>) -> Result<NaiveDate, TimeError> {
    let adjusted = walker.roll(d, true)?;
    if same_month(adjusted, d) {
        Ok(adjusted)
    } else {
        log::debug!("following {} overshot into {}, rolling back", d, adjusted);
        walker.roll(step_one_day(adjusted, false)?, false)
    }
}

fn modified_preceding(d: NaiveDate, walker: &DateWalker<'_>) -> Result<NaiveDate, TimeError> {
    let adjusted = walker.roll(d, false)?;
    if same_month(adjusted, d) {
        Ok(adjusted)
    } else {
        log::debug!("preceding {} overshot into {}, rolling forward", d, adjusted);
        walker.roll(step_one_day(adjusted, true)?, true)
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum HolidayAdjustmentType {
    Unadjusted,
    Following,
    Preceding,
    ModifiedFollowing,
    ModifiedPreceding
}

impl HolidayAdjustmentType {
    pub const ALL: [HolidayAdjustmentType; 5] = [
        HolidayAdjustmentType::Unadjusted,
        HolidayAdjustmentType::Following,
        HolidayAdjustmentType::Preceding,
        HolidayAdjustmentType::ModifiedFollowing,
        HolidayAdjustmentType::ModifiedPreceding
    ];

    pub fn name(&self) -> &'static str {
        match self {
            HolidayAdjustmentType::Unadjusted => "Unadjusted",
            HolidayAdjustmentType::Following => "Following",
            HolidayAdjustmentType::Preceding => "Preceding",
            HolidayAdjustmentType::ModifiedFollowing => "ModifiedFollowing",
            HolidayAdjustmentType::ModifiedPreceding => "ModifiedPreceding"
        }
    }
}

impl fmt::Display for HolidayAdjustmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HolidayAdjustmentType {
    type Err = TimeError;

    /// Case-insensitive; `_`, `-` and spaces are ignored, so
    /// `"modified_following"`, `"Modified Following"` and `"MF"` all parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "unadjusted" | "none" | "u" => Ok(HolidayAdjustmentType::Unadjusted),
            "following" | "f" => Ok(HolidayAdjustmentType::Following),
            "preceding" | "p" => Ok(HolidayAdjustmentType::Preceding),
            "modifiedfollowing" | "mf" => Ok(HolidayAdjustmentType::ModifiedFollowing),
            "modifiedpreceding" | "mp" => Ok(HolidayAdjustmentType::ModifiedPreceding),
            _ => Err(TimeError::UnknownAdjustmentType(s.to_owned()))
        }
    }
}

type Adjuster = fn(NaiveDate, &DateWalker<'_>) -> Result<NaiveDate, TimeError>;

/// Maps dates onto business days of a calendar under one adjustment rule.
///
/// The rule is resolved to its walking function once, at construction.
/// By default a walk is bounded only by chrono's date range; use
/// [`HolidayAdjuster::with_max_walk_days`] to fail early on calendars that
/// may contain long closed stretches.
#[derive(Clone, Copy)]
pub struct HolidayAdjuster {
    adjustment_type: HolidayAdjustmentType,
    max_walk_days: Option<u32>,
    adjuster: Adjuster
}

impl HolidayAdjuster {
    pub fn new(adjustment_type: HolidayAdjustmentType) -> HolidayAdjuster {
        let adjuster: Adjuster = match adjustment_type {
            HolidayAdjustmentType::Unadjusted => unadjusted,
            HolidayAdjustmentType::Following => following,
            HolidayAdjustmentType::Preceding => preceding,
            HolidayAdjustmentType::ModifiedFollowing => modified_following,
            HolidayAdjustmentType::ModifiedPreceding => modified_preceding
        };
        HolidayAdjuster { adjustment_type, max_walk_days: None, adjuster }
    }

    pub fn with_max_walk_days(mut self, max_walk_days: u32) -> HolidayAdjuster {
        self.max_walk_days = Some(max_walk_days);
        self
    }

    pub fn adjustment_type(&self) -> HolidayAdjustmentType {
        self.adjustment_type
    }

    pub fn max_walk_days(&self) -> Option<u32> {
        self.max_walk_days
    }

    /// Adjusts the day component of `d` and keeps any time of day as it was.
    ///
    /// Every rule except `Unadjusted` returns a business day of `calendar`.
    pub fn adjust<D: CalendarDate>(&self,
                                   d: D,
                                   calendar: &dyn HolidayCalendar) -> Result<D, TimeError> {
        let day = d.day();
        let walker = DateWalker { calendar, max_walk_days: self.max_walk_days };
        let adjusted = (self.adjuster)(day, &walker)?;
        if adjusted != day {
            log::trace!("{} adjusted to {} ({})", day, adjusted, self.adjustment_type);
        }
        Ok(d.with_day(adjusted))
    }

    pub fn adjust_quote_date<Q: QuoteDate + ?Sized>(&self,
                                                    q: &Q,
                                                    calendar: &dyn HolidayCalendar) -> Result<Q::Date, TimeError> {
        self.adjust(q.quote_date(), calendar)
    }
}

impl fmt::Debug for HolidayAdjuster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HolidayAdjuster")
            .field("adjustment_type", &self.adjustment_type)
            .field("max_walk_days", &self.max_walk_days)
            .finish()
    }
}

impl PartialEq for HolidayAdjuster {
    fn eq(&self, other: &Self) -> bool {
        self.adjustment_type == other.adjustment_type && self.max_walk_days == other.max_walk_days
    }
}

impl Eq for HolidayAdjuster {}

impl From<HolidayAdjustmentType> for HolidayAdjuster {
    fn from(adjustment_type: HolidayAdjustmentType) -> Self {
        HolidayAdjuster::new(adjustment_type)
    }
}

/// One-shot adjustment without keeping a [`HolidayAdjuster`] around.
pub fn adjust<D: CalendarDate>(d: D,
                               calendar: &dyn HolidayCalendar,
                               adjustment_type: HolidayAdjustmentType) -> Result<D, TimeError> {
    HolidayAdjuster::new(adjustment_type).adjust(d, calendar)
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct HolidayAdjusterJsonProp {
    adjustment_type: HolidayAdjustmentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_walk_days: Option<u32>
}

impl From<HolidayAdjusterJsonProp> for HolidayAdjuster {
    fn from(json_prop: HolidayAdjusterJsonProp) -> Self {
        let adjuster = HolidayAdjuster::new(json_prop.adjustment_type);
        match json_prop.max_walk_days {
            Some(n) => adjuster.with_max_walk_days(n),
            None => adjuster
        }
    }
}

impl From<&HolidayAdjuster> for HolidayAdjusterJsonProp {
    fn from(adjuster: &HolidayAdjuster) -> Self {
        HolidayAdjusterJsonProp {
            adjustment_type: adjuster.adjustment_type,
            max_walk_days: adjuster.max_walk_days
        }
    }
}

impl Serialize for HolidayAdjuster {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        HolidayAdjusterJsonProp::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for HolidayAdjuster {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        HolidayAdjusterJsonProp::deserialize(deserializer).map(HolidayAdjuster::from)
    }
}

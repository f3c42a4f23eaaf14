use std::sync::Arc;

use chrono::{
    Datelike,
    NaiveDate,
    Weekday
};

use serde::{
    Deserialize,
    Deserializer,
    Serialize
};

use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::simplecalendar::SimpleCalendar;

/// How the member calendars of a [`JointCalendar`] vote on a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JoinRule {
    /// Closed if any member is closed: settle only when every market is open.
    Union,
    /// Closed only if every member is closed: settle when at least one market is open.
    Intersection
}

/// Any number of shared calendars combined under one [`JoinRule`].
///
/// A join with no members has no one to vote and falls back to the plain
/// Saturday/Sunday weekend.
#[derive(Clone)]
pub struct JointCalendar {
    calendars: Vec<Arc<dyn HolidayCalendar>>,
    join_rule: JoinRule
}

impl JointCalendar {
    pub fn new(calendars: Vec<Arc<dyn HolidayCalendar>>, join_rule: JoinRule) -> JointCalendar {
        log::debug!("{:?} calendar joined from {} members", join_rule, calendars.len());
        JointCalendar { calendars, join_rule }
    }

    pub fn union(calendars: Vec<Arc<dyn HolidayCalendar>>) -> JointCalendar {
        JointCalendar::new(calendars, JoinRule::Union)
    }

    pub fn intersection(calendars: Vec<Arc<dyn HolidayCalendar>>) -> JointCalendar {
        JointCalendar::new(calendars, JoinRule::Intersection)
    }

    pub fn join_rule(&self) -> JoinRule {
        self.join_rule
    }

    pub fn calendars(&self) -> &[Arc<dyn HolidayCalendar>] {
        &self.calendars
    }

    /// Adds one more member; the result is a new calendar, `self` stays untouched.
    pub fn with_calendar(&self, calendar: Arc<dyn HolidayCalendar>) -> JointCalendar {
        let mut calendars = self.calendars.clone();
        calendars.push(calendar);
        JointCalendar::new(calendars, self.join_rule)
    }
}

impl HolidayCalendar for JointCalendar {
    fn is_holiday(&self, d: NaiveDate) -> bool {
        if self.calendars.is_empty() {
            return matches!(d.weekday(), Weekday::Sat | Weekday::Sun);
        }
        match self.join_rule {
            JoinRule::Union => self.calendars.iter().any(|c| c.is_holiday(d)),
            JoinRule::Intersection => self.calendars.iter().all(|c| c.is_holiday(d))
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct JointCalendarJsonProp {
    join_rule: JoinRule,
    calendars: Vec<SimpleCalendar>
}

impl From<JointCalendarJsonProp> for JointCalendar {
    fn from(json_prop: JointCalendarJsonProp) -> Self {
        let calendars = json_prop.calendars
            .into_iter()
            .map(|c| Arc::new(c) as Arc<dyn HolidayCalendar>)
            .collect();
        JointCalendar::new(calendars, json_prop.join_rule)
    }
}

impl<'de> Deserialize<'de> for JointCalendar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        JointCalendarJsonProp::deserialize(deserializer).map(JointCalendar::from)
    }
}

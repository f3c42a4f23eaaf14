use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised by calendar walks and adjustment-type parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    #[error("unknown holiday adjustment type '{0}'")]
    UnknownAdjustmentType(String),

    #[error("no business day within {max_days} days {direction} {start}")]
    NoBusinessDayWithin {
        start: NaiveDate,
        max_days: u32,
        direction: &'static str
    },

    #[error("date walk left the representable range at {0}")]
    DateOutOfRange(NaiveDate)
}

use std::fmt;

use chrono::{DateTime, Days, Duration, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::types::{NamedPhase, PhaseEvent, PhaseEventTableRow};

/// Date format shared by the command line, the provider query and the cache file.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    Invalid(String),
    Unrepresentable(NaiveDate),
    /// The provider window would start before the earliest supported date.
    WindowOutOfRange { date: NaiveDate, lookback_days: u32 },
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateError::Invalid(input) => {
                write!(f, "invalid date '{}', expected YYYY-MM-DD", input)
            }
            DateError::Unrepresentable(date) => {
                write!(f, "{} has no local midnight in this time zone", date)
            }
            DateError::WindowOutOfRange {
                date,
                lookback_days,
            } => write!(
                f,
                "cannot look back {} days from {}: outside the supported date range",
                lookback_days, date
            ),
        }
    }
}

impl std::error::Error for DateError {}

pub fn parse_date(input: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| DateError::Invalid(input.to_string()))
}

/// Returns the requested date, or today in `tz` when none was given.
pub fn get_date_from_string<Tz: TimeZone>(
    date: Option<&str>,
    tz: &Tz,
) -> Result<NaiveDate, DateError> {
    match date {
        Some(date_str) => parse_date(date_str),
        None => Ok(today(tz)),
    }
}

pub fn today<Tz: TimeZone>(tz: &Tz) -> NaiveDate {
    Utc::now().with_timezone(tz).date_naive()
}

/// Places `date` at midnight in `tz`.
///
/// When a daylight saving transition skips midnight, the first whole hour
/// that exists on that day is used instead. Ambiguous midnights resolve to
/// the earlier instant.
pub fn local_midnight<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> Option<DateTime<Tz>> {
    let midnight = date.and_time(NaiveTime::MIN);
    (0..24).find_map(|hour| {
        tz.from_local_datetime(&(midnight + Duration::hours(hour)))
            .earliest()
    })
}

/// First date of the provider window for `date`.
///
/// Fails when the window would start before [`NaiveDate::MIN`], which an
/// extreme `--date` or a huge lookback can reach.
pub fn window_start(date: NaiveDate, lookback_days: u32) -> Result<NaiveDate, DateError> {
    date.checked_sub_days(Days::new(lookback_days.into()))
        .ok_or(DateError::WindowOutOfRange {
            date,
            lookback_days,
        })
}

pub fn phase_event_rows(events: &[PhaseEvent]) -> Vec<PhaseEventTableRow> {
    events
        .iter()
        .map(|event| {
            let phase = NamedPhase::from(event.phase);
            PhaseEventTableRow {
                date: event.date.format(DATE_FORMAT).to_string(),
                time: event.time.clone().unwrap_or_default(),
                phase: phase.name().to_string(),
                symbol: phase.glyph().to_string(),
            }
        })
        .collect()
}

use std::fmt;

use chrono::{DateTime, TimeZone};

use crate::{
    types::{MajorPhase, NamedPhase, PhaseEvent},
    utils,
};

/// Days around a major phase during which the moon is still reported as that phase.
pub const PROXIMITY_DAYS: f64 = 2.0;

const SECONDS_PER_DAY: f64 = 24.0 * 60.0 * 60.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The window has no event before or no event after the target.
    InsufficientData,
    /// Two adjacent events are not consecutive major phases.
    UnexpectedSequence {
        previous: MajorPhase,
        next: MajorPhase,
    },
    /// An event date has no local midnight in the target's time zone.
    UnrepresentableDate(chrono::NaiveDate),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::InsufficientData => write!(
                f,
                "phase data does not bracket the requested date; need one event before and one after it (increase the lookback days or the phase count)"
            ),
            ResolveError::UnexpectedSequence { previous, next } => write!(
                f,
                "unexpected phase sequence from provider: {} followed by {}",
                previous, next
            ),
            ResolveError::UnrepresentableDate(date) => {
                write!(f, "{} has no local midnight in this time zone", date)
            }
        }
    }
}

impl std::error::Error for ResolveError {}

/// Resolves the named phase at `target` from a chronologically sorted window
/// of phase events.
///
/// Event dates are placed at midnight in the target's own time zone, so the
/// caller decides the calendar by choosing the zone of `target`. The target
/// itself is expected to be a local midnight too; any other instant is
/// accepted and measured with fractional days.
///
/// # Rules
///
/// 1. `next` is the first event strictly after `target`, `prev` the one before it.
/// 2. Within [`PROXIMITY_DAYS`] after `prev`, the result is `prev`'s phase.
/// 3. Otherwise within [`PROXIMITY_DAYS`] before `next`, the result is `next`'s phase.
/// 4. Otherwise the intermediate phase between the two majors.
///
/// # Errors
///
/// - [`ResolveError::InsufficientData`] if the window does not bracket `target`
/// - [`ResolveError::UnexpectedSequence`] if `prev`/`next` are not consecutive majors
/// - [`ResolveError::UnrepresentableDate`] if an event date cannot be placed at midnight
///
/// # Example
///
/// ```
/// let target = utils::local_midnight(&Utc, date(2024, 1, 14))?;
/// let phase = resolve(&target, &events)?; // NamedPhase::WaxingCrescent
/// ```
pub fn resolve<Tz: TimeZone>(
    target: &DateTime<Tz>,
    events: &[PhaseEvent],
) -> Result<NamedPhase, ResolveError> {
    let tz = target.timezone();

    let mut next_index = None;
    for (index, event) in events.iter().enumerate() {
        let at = utils::local_midnight(&tz, event.date)
            .ok_or(ResolveError::UnrepresentableDate(event.date))?;
        if at > *target {
            next_index = Some((index, at));
            break;
        }
    }

    let (index, next_at) = match next_index {
        Some((index, at)) if index > 0 => (index, at),
        _ => return Err(ResolveError::InsufficientData),
    };

    let prev = &events[index - 1];
    let next = &events[index];
    let prev_at = utils::local_midnight(&tz, prev.date)
        .ok_or(ResolveError::UnrepresentableDate(prev.date))?;

    let days_since_prev = days_between(&prev_at, target);
    let days_until_next = days_between(target, &next_at);

    if days_since_prev < PROXIMITY_DAYS {
        return Ok(prev.phase.into());
    }
    if days_until_next < PROXIMITY_DAYS {
        return Ok(next.phase.into());
    }

    intermediate(prev.phase, next.phase)
}

/// Maps two consecutive major phases to the intermediate phase between them.
pub fn intermediate(previous: MajorPhase, next: MajorPhase) -> Result<NamedPhase, ResolveError> {
    match (previous, next) {
        (MajorPhase::NewMoon, MajorPhase::FirstQuarter) => Ok(NamedPhase::WaxingCrescent),
        (MajorPhase::FirstQuarter, MajorPhase::FullMoon) => Ok(NamedPhase::WaxingGibbous),
        (MajorPhase::FullMoon, MajorPhase::LastQuarter) => Ok(NamedPhase::WaningGibbous),
        (MajorPhase::LastQuarter, MajorPhase::NewMoon) => Ok(NamedPhase::WaningCrescent),
        (previous, next) => Err(ResolveError::UnexpectedSequence { previous, next }),
    }
}

fn days_between<Tz: TimeZone>(from: &DateTime<Tz>, to: &DateTime<Tz>) -> f64 {
    let elapsed = to.clone().signed_duration_since(from.clone());
    elapsed.num_seconds() as f64 / SECONDS_PER_DAY
}

use chrono::TimeZone;
use tabled::Table;

use crate::{Res, usno::PhaseProvider, utils};

use super::fetch_window;

/// Lists the major phase events the provider reports around a date.
///
/// Uses the same window as the default command (starting `lookback_days`
/// before the date) so the output shows exactly which events a phase
/// lookup would be resolved from. The cache is not consulted or written.
///
/// # Output
///
/// ```text
/// Phases from 2024-01-05 (4 events)
/// +------------+-------+---------------+--------+
/// | date       | time  | phase         | symbol |
/// +------------+-------+---------------+--------+
/// | 2024-01-11 | 11:57 | New Moon      | 🌑     |
/// ...
/// ```
pub async fn events<Tz, P>(
    date: Option<&str>,
    count: u32,
    lookback_days: u32,
    tz: &Tz,
    provider: &P,
) -> Res<String>
where
    Tz: TimeZone,
    P: PhaseProvider,
{
    let date = utils::get_date_from_string(date, tz)?;
    let start = utils::window_start(date, lookback_days)?;
    let events = fetch_window(provider, start, count).await?;

    let table = Table::new(utils::phase_event_rows(&events));
    Ok(format!(
        "Phases from {start} ({count} events)\n{table}",
        start = start.format(utils::DATE_FORMAT),
        count = events.len(),
        table = table
    ))
}

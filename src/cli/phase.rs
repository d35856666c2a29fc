use chrono::{NaiveDate, TimeZone};

use crate::{
    Res,
    management::PhaseCacheManager,
    phase,
    types::{CacheRecord, NamedPhase, OutputMode},
    usno::PhaseProvider,
    utils::{self, DateError},
};

use super::fetch_window;

/// Options of the default command.
#[derive(Debug, Clone)]
pub struct PhaseRequest {
    /// Target date as `YYYY-MM-DD`; today in the given zone when `None`.
    pub date: Option<String>,
    pub mode: OutputMode,
    /// Number of phase events requested from the provider.
    pub count: u32,
    /// Days between the start of the requested window and the target date.
    pub lookback_days: u32,
}

/// Resolves the moon phase for the requested date and renders it as a single line.
///
/// # Flow
///
/// 1. **Date**: parse `--date` or take today in `tz`
/// 2. **Cache**: return the cached phase if it was recorded for the same date
/// 3. **Fetch**: ask the provider for `count` events starting `lookback_days` earlier
/// 4. **Resolve**: pick the named phase from the bracketing events
/// 5. **Persist**: overwrite the cache with the new `(date, phase)` pair
///
/// # Errors
///
/// Every failure is fatal to the invocation: an invalid `--date`, a provider
/// error, phase data that does not bracket the date, an out-of-order phase
/// sequence, or a failed cache write. A cache that cannot be read is treated
/// as empty.
pub async fn phase<Tz, P>(
    request: &PhaseRequest,
    tz: &Tz,
    provider: &P,
    cache: &PhaseCacheManager,
) -> Res<String>
where
    Tz: TimeZone,
    P: PhaseProvider,
{
    let date = utils::get_date_from_string(request.date.as_deref(), tz)?;

    if let Some(cached) = cache.lookup(date).await {
        return Ok(phase::format(cached, request.mode).to_string());
    }

    let resolved = phase_for_date(date, tz, provider, request.count, request.lookback_days).await?;
    cache
        .persist(&CacheRecord {
            date,
            phase: resolved,
        })
        .await?;

    Ok(phase::format(resolved, request.mode).to_string())
}

/// Fetches the phase window around `date` and resolves it at local midnight in `tz`.
pub async fn phase_for_date<Tz, P>(
    date: NaiveDate,
    tz: &Tz,
    provider: &P,
    count: u32,
    lookback_days: u32,
) -> Res<NamedPhase>
where
    Tz: TimeZone,
    P: PhaseProvider,
{
    let target = utils::local_midnight(tz, date).ok_or(DateError::Unrepresentable(date))?;
    let start = utils::window_start(date, lookback_days)?;
    let events = fetch_window(provider, start, count).await?;

    Ok(phase::resolve(&target, &events)?)
}

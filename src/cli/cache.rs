use crate::{Res, info, management::PhaseCacheManager, success, utils::DATE_FORMAT, warning};

/// Shows the cached phase, or removes the cache file when `clear` is set.
pub async fn cache(clear: bool, cache: &PhaseCacheManager) -> Res<()> {
    if clear {
        if cache.clear().await? {
            success!("Removed phase cache {}", cache.path().display());
        } else {
            warning!("No phase cache at {}", cache.path().display());
        }
        return Ok(());
    }

    info!("Phase cache: {}", cache.path().display());
    match cache.load().await {
        Some(record) => info!(
            "Cached phase for {}: {} {}",
            record.date.format(DATE_FORMAT),
            record.phase,
            record.phase.glyph()
        ),
        None => warning!("No usable cache entry."),
    }

    Ok(())
}

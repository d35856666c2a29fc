//! # CLI Module
//!
//! Command implementations behind the `moonphase` binary. Each command
//! returns a [`Res`] and leaves printing of fatal errors and the process exit
//! code to `main`.
//!
//! ## Commands
//!
//! - [`phase`] - the default command: the phase for one date, cached per date
//! - [`events`] - the raw major phase events around a date, as a table
//! - [`cache`] - shows or clears the cached `(date, phase)` entry
//!
//! ## Layers
//!
//! ```text
//! CLI Layer (options, rendering)
//!     ↓
//! Management Layer (phase cache file)
//!     ↓
//! Phase Layer (resolution, formatting)
//!     ↓
//! USNO Layer (HTTP, JSON)
//! ```
//!
//! Commands take the time zone and the [`PhaseProvider`] as parameters, so
//! the binary passes `chrono::Local` and a [`UsnoClient`](crate::usno::UsnoClient)
//! while tests use fixed offsets and canned data.
//!
//! ## Usage
//!
//! ```bash
//! moonphase                          # glyph for today, e.g. 🌔
//! moonphase --plaintext              # Waxing Gibbous
//! moonphase --date 2024-01-14        # 🌒
//! moonphase events --date 2024-01-14 # provider events around that date
//! moonphase cache --clear            # forget the cached phase
//! ```

mod cache;
mod events;
mod phase;

use std::time::Duration;

use chrono::NaiveDate;
use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Res,
    types::PhaseEvent,
    usno::{FetchError, PhaseProvider},
};

pub use cache::cache;
pub use events::events;
pub use phase::PhaseRequest;
pub use phase::phase;
pub use phase::phase_for_date;

/// Fetches a window of phase events behind a spinner.
///
/// The spinner draws on stderr and stays hidden when stderr is not a
/// terminal, so piped output is just the result line.
async fn fetch_window<P: PhaseProvider>(
    provider: &P,
    start: NaiveDate,
    count: u32,
) -> Res<Vec<PhaseEvent>> {
    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching moon phases...");
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let result: Result<Vec<PhaseEvent>, FetchError> = provider.phases(start, count).await;
    pb.finish_and_clear();

    Ok(result?)
}

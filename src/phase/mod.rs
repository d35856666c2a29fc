//! # Phase Module
//!
//! Turns a sparse list of major phase events into the named phase for a
//! single date, and renders that phase for the terminal.
//!
//! ## Resolution
//!
//! The provider only reports the four instantaneous phases (new moon, first
//! quarter, full moon, last quarter), roughly 7.4 days apart. [`resolve`]
//! finds the pair of events bracketing the target and decides between:
//!
//! - **Proximity snap**: less than two days after the previous event, or less
//!   than two days before the next one, the moon is reported as that major phase.
//! - **Interpolation**: otherwise the intermediate phase between the two
//!   (waxing crescent, waxing gibbous, waning gibbous, waning crescent).
//!
//! ```text
//! NewMoon ── WaxingCrescent ── FirstQuarter ── WaxingGibbous ── FullMoon
//!    ▲                                                              │
//!    └── WaningCrescent ── LastQuarter ── WaningGibbous ────────────┘
//! ```
//!
//! Resolution is pure: the calendar is the time zone of the target instant,
//! passed in by the caller rather than looked up from the environment.
//!
//! ## Formatting
//!
//! [`format`] renders a [`NamedPhase`](crate::types::NamedPhase) either as its
//! canonical English name or as one of the eight moon glyphs.

mod format;
mod resolver;

pub use format::format;
pub use resolver::PROXIMITY_DAYS;
pub use resolver::ResolveError;
pub use resolver::intermediate;
pub use resolver::resolve;

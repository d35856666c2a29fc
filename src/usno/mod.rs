//! # USNO Integration Module
//!
//! Client for the phase endpoint of the U.S. Naval Observatory Astronomical
//! Applications API (<https://aa.usno.navy.mil/data/api#phase>).
//!
//! ## Endpoint
//!
//! `GET /api/moon/phases/date?date=YYYY-MM-DD&nump=N` returns the next `N`
//! major phases starting at `date`:
//!
//! ```json
//! {
//!   "apiversion": "4.0.1",
//!   "day": 4, "month": 1, "year": 2024, "numphases": 4,
//!   "phasedata": [
//!     { "day": 4,  "month": 1, "year": 2024, "phase": "Last Quarter", "time": "03:30" },
//!     { "day": 11, "month": 1, "year": 2024, "phase": "New Moon",     "time": "11:57" }
//!   ]
//! }
//! ```
//!
//! The API documentation asks for `MM/DD/YYYY`, but the service expects
//! `YYYY-MM-DD`.
//!
//! ## Error Handling
//!
//! There are no retries. A transport error, a non-success status or an
//! undecodable body all surface as a [`FetchError`] and end the invocation.
//!
//! ## Seams
//!
//! Commands depend on the [`PhaseProvider`] trait rather than on
//! [`UsnoClient`] directly, so tests can substitute canned phase data.

mod phases;

pub use phases::FetchError;
pub use phases::PhaseProvider;
pub use phases::UsnoClient;
pub use phases::events_from_response;

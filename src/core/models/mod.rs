//! Domain models for seatfinder
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`GuestDirectory`] - Ordered guest name to table mapping
//! - [`ResolutionOutcome`] - What a lookup produced
//! - [`Notice`] - Transient message shown to the guest
//! - [`Timing`] - Notice lifetimes and simulated delays
//! - [`FormField`] / [`Feedback`] - Feedback form data

mod directory;
mod form;
mod notice;
mod outcome;
mod timing;

pub use directory::{DirectoryError, GuestDirectory, GuestEntry, TableNumber};
pub use form::{
    DRAFT_KEY_PREFIX, Feedback, FormField, MAX_RATING, TableAssignment, draft_key,
};
pub use notice::{Notice, NoticeSlot};
pub use outcome::ResolutionOutcome;
pub use timing::Timing;

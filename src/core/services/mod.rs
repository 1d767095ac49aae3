//! Page logic services
//!
//! Pure orchestration logic that operates on domain models.
//! Time is passed in explicitly; draft persistence goes through the
//! [`DraftStore`](crate::core::ports::DraftStore) port.
//!
//! - [`resolver`] - Resolve a typed name to a guest and table
//! - [`trigger`] - Decide when typing triggers a lookup
//! - [`presenter`] - Highlight and notice state with timed removal
//! - [`seating`] - Table picker
//! - [`feedback`] - Star rating, feedback form and simulated submission
//! - [`menu`] - Menu accordion
//! - [`page`] - All of the above wired together

pub mod feedback;
pub mod menu;
pub mod page;
pub mod presenter;
pub mod resolver;
pub mod seating;
pub mod trigger;

pub use feedback::{FeedbackError, FeedbackForm, StarRating, SubmissionFlow};
pub use menu::MenuAccordion;
pub use page::{PageEvent, VenuePage};
pub use presenter::{ActiveNotice, Presenter, PresenterEvent, ShownNotice, View};
pub use resolver::{GuestResolver, MAX_SUGGESTIONS, SUGGESTION_MIN_CHARS};
pub use seating::{SeatingError, TablePicker};
pub use trigger::{QueryEvent, TriggerAction, TriggerPolicy};

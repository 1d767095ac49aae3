//! Display and simulation delays

use std::time::Duration;

use super::Notice;

/// Delays used by the presenter and the feedback flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// How long a guest-found notice stays up
    pub guest_found: Duration,
    /// How long a suggestions notice stays up
    pub suggestions: Duration,
    /// How long a table-assignment notice stays up
    pub table_assignment: Duration,
    /// How long the feedback thank-you stays up
    pub feedback_thanks: Duration,
    /// Delay before scrolling a highlighted table into view
    pub scroll_delay: Duration,
    /// Simulated feedback submission latency
    pub submit_delay: Duration,
    /// Delay between a successful submission and closing all menus
    pub menu_close_after_success: Duration,
}

impl Timing {
    /// Lifetime of a notice of this kind
    #[must_use]
    pub const fn notice_lifetime(&self, notice: &Notice) -> Duration {
        match notice {
            Notice::GuestFound { .. } => self.guest_found,
            Notice::Suggestions { .. } => self.suggestions,
            Notice::TableAssignment { .. } => self.table_assignment,
            Notice::FeedbackThanks => self.feedback_thanks,
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            guest_found: Duration::from_secs(5),
            suggestions: Duration::from_secs(4),
            table_assignment: Duration::from_secs(3),
            feedback_thanks: Duration::from_secs(3),
            scroll_delay: Duration::from_millis(300),
            submit_delay: Duration::from_millis(1500),
            menu_close_after_success: Duration::from_secs(2),
        }
    }
}

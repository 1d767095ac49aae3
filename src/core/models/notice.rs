//! Notices shown to the guest
//!
//! Lookup notices and confirmations are shown in separate slots, at most
//! one notice per slot; each kind has its own display lifetime (see
//! [`Timing`](super::Timing)).

use serde::Serialize;

use super::TableNumber;

/// A transient message shown to the guest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    /// Guest lookup found someone
    GuestFound {
        /// Guest name
        guest_name: String,
        /// Their table
        table: TableNumber,
    },
    /// Lookup found nobody but has candidates
    Suggestions {
        /// Up to three candidate names
        names: Vec<String>,
    },
    /// A table was picked for a guest
    TableAssignment {
        /// Name typed by the guest
        guest_name: String,
        /// Picked table
        table: TableNumber,
    },
    /// Feedback was sent
    FeedbackThanks,
}

/// Where a notice is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeSlot {
    /// Next to the name field; replaced or cleared by every lookup
    Lookup,
    /// Under the table map; lookups leave it alone
    Confirmation,
}

impl Notice {
    /// Slot this notice is shown in
    #[must_use]
    pub const fn slot(&self) -> NoticeSlot {
        match self {
            Self::GuestFound { .. } | Self::Suggestions { .. } => NoticeSlot::Lookup,
            Self::TableAssignment { .. } | Self::FeedbackThanks => NoticeSlot::Confirmation,
        }
    }

    /// Human-readable text of the notice
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::GuestFound { guest_name, table } => {
                format!("Found: {guest_name}, table no. {table}")
            },
            Self::Suggestions { names } => format!("Did you mean: {}?", names.join(", ")),
            Self::TableAssignment { guest_name, table } => {
                format!("{guest_name} - Table no. {table}")
            },
            Self::FeedbackThanks => "Thank you for your feedback!".to_string(),
        }
    }
}

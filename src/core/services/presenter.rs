//! Presentation state
//!
//! Headless equivalent of the page's highlight and notification DOM:
//! at most one highlighted table, a pending scroll-into-view request, and
//! two notice slots. The lookup slot belongs to the name field and every
//! lookup replaces or clears it; the confirmation slot holds table
//! assignments and the feedback thank-you and is never touched by
//! lookups. Timed removals are deadlines owned here, so replacing a notice
//! cancels the removal scheduled for the previous one in the same slot.
//! Call [`Presenter::tick`] with the current time to fire due deadlines.

use std::time::Instant;

use log::debug;
use serde::Serialize;

use crate::core::models::{Notice, NoticeSlot, ResolutionOutcome, TableNumber, Timing};

/// A notice currently on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveNotice {
    /// What is shown
    pub notice: Notice,
    /// When it is removed
    pub expires_at: Instant,
}

impl ActiveNotice {
    fn shown(&self, now: Instant) -> ShownNotice {
        ShownNotice {
            notice: self.notice.clone(),
            message: self.notice.message(),
            expires_in_ms: self.expires_at.saturating_duration_since(now).as_millis(),
        }
    }
}

/// Something that happened while firing deadlines
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PresenterEvent {
    /// The notice reached its lifetime and was removed
    NoticeExpired {
        /// The removed notice
        notice: Notice,
    },
    /// The highlighted table should now be scrolled into view
    ScrollTo {
        /// Table to bring into view
        table: TableNumber,
    },
}

/// A visible notice, for output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShownNotice {
    /// The notice
    pub notice: Notice,
    /// Its text
    pub message: String,
    /// Milliseconds until it is removed
    pub expires_in_ms: u128,
}

/// Snapshot of what is visible, for output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    /// Highlighted table, if any
    pub highlighted: Option<TableNumber>,
    /// Lookup notice, if any
    pub notice: Option<ShownNotice>,
    /// Table assignment or thank-you, if any
    pub confirmation: Option<ShownNotice>,
}

/// Highlight and notice state with deadline-based removal
#[derive(Debug, Clone)]
pub struct Presenter {
    timing: Timing,
    highlighted: Option<TableNumber>,
    scroll_at: Option<(TableNumber, Instant)>,
    notice: Option<ActiveNotice>,
    confirmation: Option<ActiveNotice>,
}

impl Presenter {
    /// Create an empty presenter
    #[must_use]
    pub const fn new(timing: Timing) -> Self {
        Self {
            timing,
            highlighted: None,
            scroll_at: None,
            notice: None,
            confirmation: None,
        }
    }

    /// Show the result of a lookup
    pub fn render(&mut self, outcome: &ResolutionOutcome, now: Instant) {
        match outcome {
            ResolutionOutcome::ExactMatch {
                guest_name,
                table_number,
            }
            | ResolutionOutcome::PartialMatch {
                guest_name,
                table_number,
            } => {
                self.highlight(*table_number, now);
                self.show(
                    Notice::GuestFound {
                        guest_name: guest_name.clone(),
                        table: *table_number,
                    },
                    now,
                );
            },
            ResolutionOutcome::Suggestions { names } => {
                self.clear_highlight();
                self.show(
                    Notice::Suggestions {
                        names: names.clone(),
                    },
                    now,
                );
            },
            ResolutionOutcome::NoResult => self.clear(),
        }
    }

    /// Highlight one table, replacing any previous highlight, and schedule
    /// a scroll to it
    pub fn highlight(&mut self, table: TableNumber, now: Instant) {
        self.highlighted = Some(table);
        self.scroll_at = Some((table, now + self.timing.scroll_delay));
    }

    /// Show a notice in its slot; the removal scheduled for the notice it
    /// replaces is cancelled
    pub fn show(&mut self, notice: Notice, now: Instant) {
        let expires_at = now + self.timing.notice_lifetime(&notice);
        let slot = match notice.slot() {
            NoticeSlot::Lookup => &mut self.notice,
            NoticeSlot::Confirmation => &mut self.confirmation,
        };
        if let Some(old) = slot.replace(ActiveNotice { notice, expires_at }) {
            debug!("notice replaced: {}", old.notice.message());
        }
    }

    /// Remove the highlight and any pending scroll
    pub fn clear_highlight(&mut self) {
        self.highlighted = None;
        self.scroll_at = None;
    }

    /// Remove the lookup notice
    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// Remove highlight and lookup notice; confirmations stay
    pub fn clear(&mut self) {
        self.clear_highlight();
        self.clear_notice();
    }

    /// Fire every deadline that is due at `now`
    pub fn tick(&mut self, now: Instant) -> Vec<PresenterEvent> {
        let mut events = Vec::new();

        if let Some((table, at)) = self.scroll_at
            && at <= now
        {
            self.scroll_at = None;
            events.push(PresenterEvent::ScrollTo { table });
        }

        for slot in [&mut self.notice, &mut self.confirmation] {
            if slot.as_ref().is_some_and(|n| n.expires_at <= now)
                && let Some(expired) = slot.take()
            {
                debug!("notice expired: {}", expired.notice.message());
                events.push(PresenterEvent::NoticeExpired {
                    notice: expired.notice,
                });
            }
        }

        events
    }

    /// Earliest pending deadline, if any
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        [
            self.scroll_at.map(|(_, at)| at),
            self.notice.as_ref().map(|n| n.expires_at),
            self.confirmation.as_ref().map(|n| n.expires_at),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Highlighted table
    #[must_use]
    pub const fn highlighted(&self) -> Option<TableNumber> {
        self.highlighted
    }

    /// Visible lookup notice
    #[must_use]
    pub const fn notice(&self) -> Option<&ActiveNotice> {
        self.notice.as_ref()
    }

    /// Visible confirmation
    #[must_use]
    pub const fn confirmation(&self) -> Option<&ActiveNotice> {
        self.confirmation.as_ref()
    }

    /// Snapshot of the visible state at `now`
    #[must_use]
    pub fn view(&self, now: Instant) -> View {
        View {
            highlighted: self.highlighted,
            notice: self.notice.as_ref().map(|n| n.shown(now)),
            confirmation: self.confirmation.as_ref().map(|n| n.shown(now)),
        }
    }

    /// Configured delays
    #[must_use]
    pub const fn timing(&self) -> &Timing {
        &self.timing
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new(Timing::default())
    }
}

//! Feedback form
//!
//! - [`StarRating`] - five-star widget with hover preview
//! - [`FeedbackForm`] - name, rating and opinion, mirrored into drafts
//! - [`SubmissionFlow`] - simulated send with a loading state

use std::time::{Duration, Instant};

use log::debug;
use thiserror::Error;

use crate::core::models::{Feedback, FormField, MAX_RATING};
use crate::core::ports::DraftStore;

/// Submit button label while idle
pub const SUBMIT_LABEL: &str = "Send feedback";

/// Submit button label while sending
pub const SENDING_LABEL: &str = "Sending...";

/// Errors from the feedback widgets
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackError {
    /// Star index outside 1..=5
    #[error("rating must be between 1 and {MAX_RATING}, got {0}")]
    RatingOutOfRange(u8),

    /// A submission is already in flight
    #[error("feedback is already being sent")]
    AlreadySubmitting,
}

/// Five-star rating with hover preview
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StarRating {
    selected: u8,
    lit: u8,
}

impl StarRating {
    /// Select `stars` (1..=5)
    pub fn click(&mut self, stars: u8) -> Result<(), FeedbackError> {
        check_stars(stars)?;
        self.selected = stars;
        self.lit = stars;
        Ok(())
    }

    /// Preview `stars` (1..=5) without selecting
    pub fn hover(&mut self, stars: u8) -> Result<(), FeedbackError> {
        check_stars(stars)?;
        self.lit = stars;
        Ok(())
    }

    /// Pointer left the widget: show the selected rating again
    pub fn leave(&mut self) {
        self.lit = self.selected;
    }

    /// Clear selection and preview
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Stars currently lit (what a submission reads)
    #[must_use]
    pub const fn lit(self) -> u8 {
        self.lit
    }

    /// Stars selected by click
    #[must_use]
    pub const fn selected(self) -> u8 {
        self.selected
    }
}

const fn check_stars(stars: u8) -> Result<(), FeedbackError> {
    if stars == 0 || stars > MAX_RATING {
        Err(FeedbackError::RatingOutOfRange(stars))
    } else {
        Ok(())
    }
}

/// Feedback form contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackForm {
    name: String,
    opinion: String,
    rating: StarRating,
}

impl FeedbackForm {
    /// Form pre-filled from cached drafts; empty drafts are ignored
    pub fn restore(store: &dyn DraftStore) -> anyhow::Result<Self> {
        let mut form = Self::default();
        for field in FormField::ALL {
            if let Some(value) = store.load(&field.draft_key())?
                && !value.is_empty()
            {
                debug!("restored draft for {field}");
                *form.field_mut(field) = value;
            }
        }
        Ok(form)
    }

    /// Current value of a text field
    #[must_use]
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::GuestName => &self.name,
            FormField::Opinion => &self.opinion,
        }
    }

    /// Edit a text field and cache the new value as a draft
    pub fn set(
        &mut self,
        field: FormField,
        value: &str,
        store: &dyn DraftStore,
    ) -> anyhow::Result<()> {
        value.clone_into(self.field_mut(field));
        store.save(&field.draft_key(), value)
    }

    /// Rating widget
    #[must_use]
    pub const fn rating(&self) -> StarRating {
        self.rating
    }

    /// Rating widget, mutably
    pub const fn rating_mut(&mut self) -> &mut StarRating {
        &mut self.rating
    }

    /// Empty every field and the rating (drafts are left alone)
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Remove the cached drafts of every field
    pub fn clear_drafts(store: &dyn DraftStore) -> anyhow::Result<()> {
        for field in FormField::ALL {
            store.remove(&field.draft_key())?;
        }
        Ok(())
    }

    /// Snapshot of the form as submitted feedback
    #[must_use]
    pub fn to_feedback(&self, submitted_at: String) -> Feedback {
        Feedback {
            name: self.name.clone(),
            rating: self.rating.lit(),
            opinion: self.opinion.clone(),
            submitted_at,
        }
    }

    const fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::GuestName => &mut self.name,
            FormField::Opinion => &mut self.opinion,
        }
    }
}

/// Simulated submission with a fixed latency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionFlow {
    delay: Duration,
    ready_at: Option<Instant>,
}

impl SubmissionFlow {
    /// Flow whose sends take `delay`
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            ready_at: None,
        }
    }

    /// Start sending
    pub fn begin(&mut self, now: Instant) -> Result<Instant, FeedbackError> {
        if self.ready_at.is_some() {
            return Err(FeedbackError::AlreadySubmitting);
        }
        let ready_at = now + self.delay;
        self.ready_at = Some(ready_at);
        Ok(ready_at)
    }

    /// Whether a send is in flight
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.ready_at.is_some()
    }

    /// Label of the submit button
    #[must_use]
    pub const fn button_label(&self) -> &'static str {
        if self.is_submitting() { SENDING_LABEL } else { SUBMIT_LABEL }
    }

    /// When the in-flight send completes
    #[must_use]
    pub const fn ready_at(&self) -> Option<Instant> {
        self.ready_at
    }

    /// Returns true exactly once, when the in-flight send completes
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.ready_at {
            Some(at) if at <= now => {
                self.ready_at = None;
                true
            },
            _ => false,
        }
    }
}

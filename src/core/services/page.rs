//! Venue page
//!
//! Wires the widgets together the way the page does: the name field feeds
//! both the guest lookup and the table picker, field edits are cached as
//! drafts, and a finished feedback submission resets the form, thanks the
//! guest and closes the menus shortly after.

use std::time::Instant;

use log::{debug, info};
use serde::Serialize;

use super::feedback::{FeedbackForm, StarRating, SubmissionFlow};
use super::menu::MenuAccordion;
use super::presenter::{Presenter, PresenterEvent, View};
use super::resolver::GuestResolver;
use super::seating::{SeatingError, TablePicker};
use super::trigger::{QueryEvent, TriggerAction, TriggerPolicy};
use crate::core::models::{
    Feedback, FormField, GuestDirectory, Notice, ResolutionOutcome, TableAssignment, TableNumber,
    Timing,
};
use crate::core::ports::DraftStore;

/// Menu sections of the venue page
pub const MENU_SECTIONS: [&str; 4] = ["drinks", "dinner", "dessert", "feedback"];

/// Something that happened while advancing page time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageEvent {
    /// Presenter deadline fired
    Presenter {
        /// What fired
        event: PresenterEvent,
    },
    /// Simulated submission finished
    FeedbackSent {
        /// What was sent
        feedback: Feedback,
    },
    /// Menus closed after a successful submission
    MenusClosed,
}

/// The page's interactive state
pub struct VenuePage {
    resolver: GuestResolver,
    policy: TriggerPolicy,
    presenter: Presenter,
    picker: TablePicker,
    form: FeedbackForm,
    submission: SubmissionFlow,
    pending: Option<Feedback>,
    menus: MenuAccordion,
    menu_close_at: Option<Instant>,
    drafts: Box<dyn DraftStore>,
}

impl std::fmt::Debug for VenuePage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VenuePage")
            .field("guests", &self.resolver.directory().len())
            .field("policy", &self.policy)
            .field("highlighted", &self.presenter.highlighted())
            .field("selected", &self.picker.selected())
            .field("submitting", &self.submission.is_submitting())
            .field("open_menu", &self.menus.open_section())
            .finish_non_exhaustive()
    }
}

impl VenuePage {
    /// Load the page: restores cached drafts into the form
    pub fn new(
        directory: GuestDirectory,
        policy: TriggerPolicy,
        timing: Timing,
        drafts: Box<dyn DraftStore>,
    ) -> anyhow::Result<Self> {
        let form = FeedbackForm::restore(drafts.as_ref())?;
        Ok(Self {
            picker: TablePicker::from_directory(&directory),
            resolver: GuestResolver::new(directory),
            policy,
            presenter: Presenter::new(timing),
            form,
            submission: SubmissionFlow::new(timing.submit_delay),
            pending: None,
            menus: MenuAccordion::new(MENU_SECTIONS),
            menu_close_at: None,
            drafts,
        })
    }

    /// Name field changed while typing
    pub fn name_input(
        &mut self,
        value: &str,
        now: Instant,
    ) -> anyhow::Result<Option<ResolutionOutcome>> {
        self.form.set(FormField::GuestName, value, self.drafts.as_ref())?;
        Ok(self.lookup(QueryEvent::Input, value, now))
    }

    /// Name field lost focus
    pub fn name_blur(&mut self, now: Instant) -> Option<ResolutionOutcome> {
        let value = self.form.get(FormField::GuestName).to_string();
        self.lookup(QueryEvent::Blur, &value, now)
    }

    /// Apply the trigger policy to `value` and render the outcome, if any
    pub fn lookup(
        &mut self,
        event: QueryEvent,
        value: &str,
        now: Instant,
    ) -> Option<ResolutionOutcome> {
        match self.policy.decide(event, value) {
            TriggerAction::Resolve(query) => Some(self.resolve(query, now)),
            TriggerAction::Clear => {
                debug!("{event}: query too short, clearing");
                self.presenter.clear();
                None
            },
            TriggerAction::Ignore => None,
        }
    }

    /// Resolve `query` regardless of its length and render the outcome
    pub fn resolve(&mut self, query: &str, now: Instant) -> ResolutionOutcome {
        let outcome = self.resolver.resolve(query);
        self.presenter.render(&outcome, now);
        outcome
    }

    /// Opinion field changed
    pub fn opinion_input(&mut self, value: &str) -> anyhow::Result<()> {
        self.form.set(FormField::Opinion, value, self.drafts.as_ref())
    }

    /// A table was clicked
    pub fn select_table(
        &mut self,
        table: TableNumber,
        now: Instant,
    ) -> Result<TableAssignment, SeatingError> {
        let assignment = self.picker.select(table, self.form.get(FormField::GuestName))?;
        info!("{} picked table {}", assignment.guest_name, assignment.table);
        self.presenter.show(
            Notice::TableAssignment {
                guest_name: assignment.guest_name.clone(),
                table: assignment.table,
            },
            now,
        );
        Ok(assignment)
    }

    /// Rating widget, mutably
    pub const fn stars(&mut self) -> &mut StarRating {
        self.form.rating_mut()
    }

    /// Send the feedback form; completes on a later [`tick`](Self::tick)
    pub fn submit(&mut self, now: Instant) -> anyhow::Result<Instant> {
        let ready_at = self.submission.begin(now)?;
        self.pending = Some(self.form.to_feedback(chrono::Utc::now().to_rfc3339()));
        debug!("feedback submission started");
        Ok(ready_at)
    }

    /// Open or close a menu section
    pub fn toggle_menu(&mut self, id: &str) -> bool {
        self.menus.toggle(id)
    }

    /// Escape key: close all menus
    pub fn escape(&mut self) {
        self.menus.close_all();
    }

    /// Advance page time, firing everything due at `now`
    pub fn tick(&mut self, now: Instant) -> anyhow::Result<Vec<PageEvent>> {
        let mut events: Vec<PageEvent> = self
            .presenter
            .tick(now)
            .into_iter()
            .map(|event| PageEvent::Presenter { event })
            .collect();

        if self.submission.poll(now)
            && let Some(feedback) = self.pending.take()
        {
            info!("feedback sent by {:?} ({} stars)", feedback.name, feedback.rating);
            self.form.reset();
            FeedbackForm::clear_drafts(self.drafts.as_ref())?;
            self.presenter.show(Notice::FeedbackThanks, now);
            self.menu_close_at = Some(now + self.presenter.timing().menu_close_after_success);
            events.push(PageEvent::FeedbackSent { feedback });
        }

        if self.menu_close_at.is_some_and(|at| at <= now) {
            self.menu_close_at = None;
            self.menus.close_all();
            events.push(PageEvent::MenusClosed);
        }

        Ok(events)
    }

    /// Earliest time at which [`tick`](Self::tick) has something to do
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        [
            self.presenter.next_deadline(),
            self.submission.ready_at(),
            self.menu_close_at,
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Visible highlight, lookup notice and confirmation
    #[must_use]
    pub fn view(&self, now: Instant) -> View {
        self.presenter.view(now)
    }

    /// The resolver
    #[must_use]
    pub const fn resolver(&self) -> &GuestResolver {
        &self.resolver
    }

    /// The table picker
    #[must_use]
    pub const fn picker(&self) -> &TablePicker {
        &self.picker
    }

    /// The feedback form
    #[must_use]
    pub const fn form(&self) -> &FeedbackForm {
        &self.form
    }

    /// The menus
    #[must_use]
    pub const fn menus(&self) -> &MenuAccordion {
        &self.menus
    }

    /// Label of the submit button
    #[must_use]
    pub const fn submit_label(&self) -> &'static str {
        self.submission.button_label()
    }
}

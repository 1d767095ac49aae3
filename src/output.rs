//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Feedback, GuestEntry, MAX_RATING, ResolutionOutcome, TableNumber};
use crate::core::services::View;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// What a lookup did with the query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupAction {
    /// The query was resolved
    Resolved,
    /// The query was too short while typing; the view was cleared
    Cleared,
    /// The query was too short on focus loss; nothing happened
    Ignored,
}

/// Result of a lookup command
#[derive(Debug, Serialize)]
pub struct LookupResult {
    /// Query as given
    pub query: String,
    /// Event that delivered the query (`direct`, `input`, `blur`)
    pub trigger: String,
    /// What happened
    pub action: LookupAction,
    /// Resolver outcome, when resolved
    pub outcome: Option<ResolutionOutcome>,
    /// Visible state afterwards
    pub view: View,
}

/// Result of listing the guest directory
#[derive(Debug, Serialize)]
pub struct GuestListResult {
    /// Guests in directory order
    pub guests: Vec<GuestEntry>,
}

/// One table and who sits there
#[derive(Debug, Serialize)]
pub struct TableInfo {
    /// Table number
    pub table: TableNumber,
    /// Guests in directory order
    pub guests: Vec<String>,
}

/// Result of listing tables
#[derive(Debug, Serialize)]
pub struct TableListResult {
    /// Tables, ascending
    pub tables: Vec<TableInfo>,
}

/// Result of a feedback submission
#[derive(Debug, Serialize)]
pub struct FeedbackResult {
    /// Whether the feedback was sent
    pub success: bool,
    /// What was sent
    pub feedback: Feedback,
    /// Thank-you text
    pub message: String,
}

/// One cached draft
#[derive(Debug, Serialize)]
pub struct DraftEntry {
    /// Storage key (e.g., `guestForm_guestName`)
    pub key: String,
    /// Cached value
    pub value: String,
}

/// Result of listing drafts
#[derive(Debug, Serialize)]
pub struct DraftListResult {
    /// Cached drafts, sorted by key
    pub drafts: Vec<DraftEntry>,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

impl LookupResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        match self.action {
            LookupAction::Cleared => {
                println!("Query too short to search; cleared the table map.");
                return;
            },
            LookupAction::Ignored => {
                println!("Query too short to search.");
                return;
            },
            LookupAction::Resolved => {},
        }

        match &self.outcome {
            Some(ResolutionOutcome::ExactMatch {
                guest_name,
                table_number,
            }) => {
                println!("Found: {}", guest_name.bold());
                println!("Table no. {}", table_number.to_string().green().bold());
            },
            Some(ResolutionOutcome::PartialMatch {
                guest_name,
                table_number,
            }) => {
                println!("Found: {} (closest match)", guest_name.bold());
                println!("Table no. {}", table_number.to_string().green().bold());
            },
            Some(ResolutionOutcome::Suggestions { names }) => {
                println!("Did you mean: {}?", names.join(", ").yellow());
            },
            Some(ResolutionOutcome::NoResult) | None => {
                println!("No guest found for \"{}\".", self.query);
            },
        }
    }
}

impl GuestListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.guests.is_empty() {
                    println!("No guests.");
                    return;
                }
                for g in &self.guests {
                    println!("  {:<24} table {}", g.name, g.table);
                }
            },
            OutputMode::Json => render_json(self),
        }
    }
}

impl TableListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.tables.is_empty() {
                    println!("No tables.");
                    return;
                }
                for t in &self.tables {
                    println!("Table {}:", t.table.to_string().bold());
                    for name in &t.guests {
                        println!("  • {name}");
                    }
                }
            },
            OutputMode::Json => render_json(self),
        }
    }
}

impl FeedbackResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("{}", self.message.green());
                let stars = usize::from(self.feedback.rating);
                let empty = usize::from(MAX_RATING).saturating_sub(stars);
                println!("  Rating: {}{}", "★".repeat(stars), "☆".repeat(empty));
                if !self.feedback.opinion.is_empty() {
                    println!("  Opinion: {}", self.feedback.opinion);
                }
            },
            OutputMode::Json => render_json(self),
        }
    }
}

impl DraftListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.drafts.is_empty() {
                    println!("No drafts saved.");
                    return;
                }
                for d in &self.drafts {
                    println!("  {} = {:?}", d.key, d.value);
                }
            },
            OutputMode::Json => render_json(self),
        }
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => render_json(self),
        }
    }
}

//! Guest resolver
//!
//! Resolves free-text name queries against the guest directory.
//!
//! Matching order (first rule that yields a guest wins):
//! 1. Exact name, ignoring case and surrounding whitespace
//! 2. First guest (directory order) whose name contains the query, or whose
//!    first or second name token is contained in the query
//! 3. For queries of 4+ characters, up to 3 guests whose name contains the
//!    query, as suggestions
//!
//! # Examples
//!
//! ```
//! use seatfinder::core::models::{GuestDirectory, ResolutionOutcome};
//! use seatfinder::core::services::GuestResolver;
//!
//! let resolver = GuestResolver::new(GuestDirectory::builtin());
//! let outcome = resolver.resolve("kowalski");
//! assert!(matches!(outcome, ResolutionOutcome::PartialMatch { .. }));
//! ```

use log::debug;

use crate::core::models::{GuestDirectory, GuestEntry, ResolutionOutcome};

/// Shortest query for which suggestions are computed
pub const SUGGESTION_MIN_CHARS: usize = 4;

/// Most suggestions returned for one query
pub const MAX_SUGGESTIONS: usize = 3;

/// Name-to-table lookup over a fixed directory
#[derive(Debug, Clone)]
pub struct GuestResolver {
    directory: GuestDirectory,
}

impl GuestResolver {
    /// Create a resolver owning the given directory
    #[must_use]
    pub const fn new(directory: GuestDirectory) -> Self {
        Self { directory }
    }

    /// The directory this resolver searches
    #[must_use]
    pub const fn directory(&self) -> &GuestDirectory {
        &self.directory
    }

    /// Resolve a query to an outcome. Never fails.
    #[must_use]
    pub fn resolve(&self, query: &str) -> ResolutionOutcome {
        let query = query.trim();
        let needle = query.to_lowercase();

        let outcome = if let Some(entry) = self.find_exact(&needle) {
            ResolutionOutcome::ExactMatch {
                guest_name: entry.name.clone(),
                table_number: entry.table,
            }
        } else if let Some(entry) = self.find_partial(&needle) {
            ResolutionOutcome::PartialMatch {
                guest_name: entry.name.clone(),
                table_number: entry.table,
            }
        } else if query.chars().count() >= SUGGESTION_MIN_CHARS {
            let names: Vec<String> =
                self.suggestions(query).into_iter().map(String::from).collect();
            if names.is_empty() {
                ResolutionOutcome::NoResult
            } else {
                ResolutionOutcome::Suggestions { names }
            }
        } else {
            ResolutionOutcome::NoResult
        };

        debug!("resolve {query:?} -> {}", outcome.kind());
        outcome
    }

    /// Guests whose name contains the query (case-insensitive), at most
    /// [`MAX_SUGGESTIONS`], in directory order
    #[must_use]
    pub fn suggestions(&self, query: &str) -> Vec<&str> {
        let needle = query.trim().to_lowercase();
        self.directory
            .iter()
            .filter(|e| e.name.to_lowercase().contains(&needle))
            .take(MAX_SUGGESTIONS)
            .map(|e| e.name.as_str())
            .collect()
    }

    fn find_exact(&self, needle: &str) -> Option<&GuestEntry> {
        self.directory.iter().find(|e| e.name.to_lowercase() == needle)
    }

    fn find_partial(&self, needle: &str) -> Option<&GuestEntry> {
        self.directory.iter().find(|e| is_partial_match(&e.name.to_lowercase(), needle))
    }
}

/// Partial-match heuristic on an already lower-cased name and query.
///
/// Tokens are split on single spaces; a name without a second token only
/// checks the first.
fn is_partial_match(name: &str, needle: &str) -> bool {
    if name.contains(needle) {
        return true;
    }
    let mut tokens = name.split(' ');
    tokens.next().is_some_and(|first| needle.contains(first))
        || tokens.next().is_some_and(|second| needle.contains(second))
}

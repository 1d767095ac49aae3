//! Resolution outcomes
//!
//! What a guest lookup produced for a single query.

use serde::Serialize;

use super::TableNumber;

/// Result of resolving one query against the guest directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ResolutionOutcome {
    /// Query equals a guest name (ignoring case and surrounding whitespace)
    ExactMatch {
        /// Matched guest
        guest_name: String,
        /// Their table
        table_number: TableNumber,
    },
    /// Query matched a guest by substring or name token
    PartialMatch {
        /// Matched guest
        guest_name: String,
        /// Their table
        table_number: TableNumber,
    },
    /// No match, but these guests contain the query (at most 3)
    Suggestions {
        /// Candidate guest names in directory order
        names: Vec<String>,
    },
    /// Nothing found
    NoResult,
}

impl ResolutionOutcome {
    /// Matched guest and table, for exact or partial matches
    #[must_use]
    pub fn matched(&self) -> Option<(&str, TableNumber)> {
        match self {
            Self::ExactMatch {
                guest_name,
                table_number,
            }
            | Self::PartialMatch {
                guest_name,
                table_number,
            } => Some((guest_name.as_str(), *table_number)),
            Self::Suggestions { .. } | Self::NoResult => None,
        }
    }

    /// Short lowercase label for logs and output
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::ExactMatch { .. } => "exact_match",
            Self::PartialMatch { .. } => "partial_match",
            Self::Suggestions { .. } => "suggestions",
            Self::NoResult => "no_result",
        }
    }
}

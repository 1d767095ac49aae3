//! Lookup command - find a guest's table

use std::time::Instant;

use seatfinder::adapters::memory::MemoryDraftStore;
use seatfinder::config::Config;
use seatfinder::core::services::QueryEvent;
use seatfinder::output::{LookupAction, LookupResult, OutputMode};

/// How the query reached the resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LookupTrigger {
    /// Resolve unconditionally
    Direct,
    /// Go through the trigger policy
    Event(QueryEvent),
}

impl std::str::FromStr for LookupTrigger {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("direct") {
            return Ok(Self::Direct);
        }
        s.parse::<QueryEvent>()
            .map(Self::Event)
            .map_err(|_| format!("Invalid trigger: {s}. Use: direct, input, blur"))
    }
}

/// Resolve `query` and print the outcome
pub fn lookup(query: &str, on: &str, mode: OutputMode) -> anyhow::Result<()> {
    let trigger: LookupTrigger = on.parse().map_err(anyhow::Error::msg)?;
    let config = Config::load()?;
    // Lookups never touch the saved drafts
    let mut page = super::load_page(&config, Box::new(MemoryDraftStore::new()))?;
    let now = Instant::now();

    let (trigger_name, outcome) = match trigger {
        LookupTrigger::Direct => ("direct".to_string(), Some(page.resolve(query, now))),
        LookupTrigger::Event(event) => (event.to_string(), page.lookup(event, query, now)),
    };

    let action = match (&outcome, trigger) {
        (Some(_), _) => LookupAction::Resolved,
        (None, LookupTrigger::Event(QueryEvent::Input)) => LookupAction::Cleared,
        (None, _) => LookupAction::Ignored,
    };

    LookupResult {
        query: query.to_string(),
        trigger: trigger_name,
        action,
        outcome,
        view: page.view(now),
    }
    .render(mode);
    Ok(())
}

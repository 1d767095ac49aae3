//! When to run a lookup
//!
//! Live typing needs more characters than a focus-loss event before a
//! lookup is attempted. Short live input clears whatever was shown.

/// Which input event delivered the query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryEvent {
    /// The field value changed while typing
    #[default]
    Input,
    /// The field lost focus
    Blur,
}

impl std::fmt::Display for QueryEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "input"),
            Self::Blur => write!(f, "blur"),
        }
    }
}

impl std::str::FromStr for QueryEvent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "input" | "change" => Ok(Self::Input),
            "blur" | "focusout" => Ok(Self::Blur),
            _ => Err(format!("Invalid event: {s}. Use: input, blur")),
        }
    }
}

/// What the caller should do with an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerAction<'a> {
    /// Resolve this (trimmed) query and render the outcome
    Resolve(&'a str),
    /// Clear highlight and notice without resolving
    Clear,
    /// Leave the current view untouched
    Ignore,
}

/// Minimum trimmed lengths that trigger a lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerPolicy {
    /// Threshold while typing
    pub live_min_chars: usize,
    /// Threshold on focus loss
    pub blur_min_chars: usize,
}

impl Default for TriggerPolicy {
    fn default() -> Self {
        Self {
            live_min_chars: 3,
            blur_min_chars: 2,
        }
    }
}

impl TriggerPolicy {
    /// Decide how to react to a field value delivered by `event`
    #[must_use]
    pub fn decide(self, event: QueryEvent, raw: &str) -> TriggerAction<'_> {
        let query = raw.trim();
        let len = query.chars().count();
        match event {
            QueryEvent::Input if len >= self.live_min_chars => TriggerAction::Resolve(query),
            QueryEvent::Input => TriggerAction::Clear,
            QueryEvent::Blur if len >= self.blur_min_chars => TriggerAction::Resolve(query),
            QueryEvent::Blur => TriggerAction::Ignore,
        }
    }
}

//! Feedback form fields and submitted feedback
//!
//! Draft keys follow the page convention `guestForm_<name>`, falling back
//! to the field type when a field has no name.

use serde::Serialize;

/// Prefix shared by every draft key of the feedback form
pub const DRAFT_KEY_PREFIX: &str = "guestForm_";

/// Number of stars in the rating widget
pub const MAX_RATING: u8 = 5;

/// Draft key for a form field
#[must_use]
pub fn draft_key(name: Option<&str>, field_type: &str) -> String {
    match name {
        Some(name) if !name.is_empty() => format!("{DRAFT_KEY_PREFIX}{name}"),
        _ => format!("{DRAFT_KEY_PREFIX}{field_type}"),
    }
}

/// Text fields of the feedback form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    /// Guest name input (also used by the table picker)
    GuestName,
    /// Free-text opinion (unnamed textarea)
    Opinion,
}

impl FormField {
    /// All text fields, in form order
    pub const ALL: [Self; 2] = [Self::GuestName, Self::Opinion];

    /// The field's `name` attribute, if it has one
    #[must_use]
    pub const fn name_attr(self) -> Option<&'static str> {
        match self {
            Self::GuestName => Some("guestName"),
            Self::Opinion => None,
        }
    }

    /// The field's input type
    #[must_use]
    pub const fn field_type(self) -> &'static str {
        match self {
            Self::GuestName => "text",
            Self::Opinion => "textarea",
        }
    }

    /// Key under which this field's draft is cached
    #[must_use]
    pub fn draft_key(self) -> String {
        draft_key(self.name_attr(), self.field_type())
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GuestName => write!(f, "name"),
            Self::Opinion => write!(f, "opinion"),
        }
    }
}

impl std::str::FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" | "guestname" | "guest-name" => Ok(Self::GuestName),
            "opinion" => Ok(Self::Opinion),
            _ => Err(format!("Invalid field: {s}. Use: name, opinion")),
        }
    }
}

/// A submitted piece of feedback
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feedback {
    /// Guest name as typed
    pub name: String,
    /// Lit stars at submission (0 = not rated)
    pub rating: u8,
    /// Free-text opinion
    pub opinion: String,
    /// When submitted (RFC3339)
    pub submitted_at: String,
}

/// A table picked by a guest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableAssignment {
    /// Name typed by the guest
    pub guest_name: String,
    /// Picked table
    pub table: super::TableNumber,
}

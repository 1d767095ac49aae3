//! Guest directory
//!
//! The read-only, ordered mapping from guest name to table number.
//! Order matters: first-match and suggestion order follow authoring order.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Guests seated at the venue, in authoring order
const BUILTIN_GUESTS: &[(&str, u32)] = &[
    ("Jan Kowalski", 1),
    ("Anna Nowak", 2),
    ("Piotr Wiśniewski", 3),
    ("Maria Dąbrowska", 4),
    ("Tomasz Lewandowski", 5),
    ("Katarzyna Wójcik", 1),
    ("Michał Kamiński", 2),
    ("Agnieszka Krawczyk", 3),
    ("Robert Mazur", 4),
    ("Joanna Zielińska", 5),
    ("Marcin Kozłowski", 1),
    ("Magdalena Jankowska", 2),
];

/// Errors raised while building a directory from external entries
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectoryError {
    /// Entry has an empty guest name
    #[error("guest #{0} has an empty name")]
    EmptyName(usize),

    /// Guest name has leading or trailing whitespace
    #[error("guest name {0:?} has surrounding whitespace")]
    UntrimmedName(String),

    /// Same guest name appears twice
    #[error("duplicate guest name: {0}")]
    DuplicateName(String),

    /// Table number is zero
    #[error("guest {0:?} has invalid table number 0 (tables start at 1)")]
    InvalidTable(String),
}

/// A table number (always >= 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct TableNumber(u32);

impl TableNumber {
    /// Create a table number, rejecting zero
    #[must_use]
    pub const fn new(n: u32) -> Option<Self> {
        if n == 0 { None } else { Some(Self(n)) }
    }

    /// Numeric value
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for TableNumber {
    type Error = String;

    fn try_from(n: u32) -> Result<Self, Self::Error> {
        Self::new(n).ok_or_else(|| "table numbers start at 1".to_string())
    }
}

impl From<TableNumber> for u32 {
    fn from(t: TableNumber) -> Self {
        t.0
    }
}

impl std::fmt::Display for TableNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TableNumber {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: u32 = s
            .trim()
            .parse()
            .map_err(|_| format!("Invalid table number: {s}"))?;
        Self::new(n).ok_or_else(|| format!("Invalid table number: {s}. Tables start at 1"))
    }
}

/// One guest and their assigned table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuestEntry {
    /// Full name as authored
    pub name: String,
    /// Assigned table
    pub table: TableNumber,
}

/// Immutable, ordered guest directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestDirectory {
    entries: Vec<GuestEntry>,
}

impl GuestDirectory {
    /// The compiled-in guest list
    #[must_use]
    pub fn builtin() -> Self {
        let entries = BUILTIN_GUESTS
            .iter()
            .map(|&(name, table)| GuestEntry {
                name: name.to_string(),
                table: TableNumber(table),
            })
            .collect();
        Self { entries }
    }

    /// Build a directory from `(name, table)` pairs, keeping their order
    pub fn from_entries<I, S>(entries: I) -> Result<Self, DirectoryError>
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut out = Vec::new();

        for (index, (name, table)) in entries.into_iter().enumerate() {
            let name: String = name.into();
            if name.trim().is_empty() {
                return Err(DirectoryError::EmptyName(index + 1));
            }
            if name.trim() != name {
                return Err(DirectoryError::UntrimmedName(name));
            }
            if !seen.insert(name.clone()) {
                return Err(DirectoryError::DuplicateName(name));
            }
            let table = TableNumber::new(table)
                .ok_or_else(|| DirectoryError::InvalidTable(name.clone()))?;
            out.push(GuestEntry { name, table });
        }

        Ok(Self { entries: out })
    }

    /// Iterate guests in directory order
    pub fn iter(&self) -> impl Iterator<Item = &GuestEntry> {
        self.entries.iter()
    }

    /// Number of guests
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the directory has no guests
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Table of a guest, by exact (case-sensitive) name
    #[must_use]
    pub fn table_of(&self, name: &str) -> Option<TableNumber> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.table)
    }

    /// Distinct table numbers, ascending
    #[must_use]
    pub fn tables(&self) -> Vec<TableNumber> {
        let mut tables: Vec<TableNumber> = self.entries.iter().map(|e| e.table).collect();
        tables.sort_unstable();
        tables.dedup();
        tables
    }

    /// Guests seated at a table, in directory order
    #[must_use]
    pub fn guests_at(&self, table: TableNumber) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.table == table)
            .map(|e| e.name.as_str())
            .collect()
    }
}

impl Default for GuestDirectory {
    fn default() -> Self {
        Self::builtin()
    }
}

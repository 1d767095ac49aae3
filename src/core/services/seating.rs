//! Table picker
//!
//! A guest picks a table by clicking it; picking requires the guest to
//! have typed their name first. Only one table is selected at a time.

use thiserror::Error;

use crate::core::models::{GuestDirectory, TableAssignment, TableNumber};

/// Errors from table selection
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SeatingError {
    /// No name typed yet
    #[error("Enter your name first!")]
    NameRequired,

    /// Table is not part of the venue
    #[error("there is no table number {0}")]
    UnknownTable(TableNumber),
}

/// Selectable tables with a single selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablePicker {
    tables: Vec<TableNumber>,
    selected: Option<TableNumber>,
}

impl TablePicker {
    /// Picker over the tables used by a directory
    #[must_use]
    pub fn from_directory(directory: &GuestDirectory) -> Self {
        Self {
            tables: directory.tables(),
            selected: None,
        }
    }

    /// Selectable tables, ascending
    #[must_use]
    pub fn tables(&self) -> &[TableNumber] {
        &self.tables
    }

    /// Currently selected table
    #[must_use]
    pub const fn selected(&self) -> Option<TableNumber> {
        self.selected
    }

    /// Select `table` for `guest_name`
    ///
    /// A blank name leaves the current selection untouched.
    pub fn select(
        &mut self,
        table: TableNumber,
        guest_name: &str,
    ) -> Result<TableAssignment, SeatingError> {
        let guest_name = guest_name.trim();
        if guest_name.is_empty() {
            return Err(SeatingError::NameRequired);
        }
        if !self.tables.contains(&table) {
            return Err(SeatingError::UnknownTable(table));
        }

        self.selected = Some(table);
        Ok(TableAssignment {
            guest_name: guest_name.to_string(),
            table,
        })
    }
}

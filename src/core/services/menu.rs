//! Menu accordion
//!
//! Expandable menu sections; opening one closes the others.

/// Set of menu sections with at most one open
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuAccordion {
    sections: Vec<String>,
    open: Option<String>,
}

impl MenuAccordion {
    /// Accordion over the given section ids, all closed
    #[must_use]
    pub fn new<I, S>(sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sections: sections.into_iter().map(Into::into).collect(),
            open: None,
        }
    }

    /// Toggle a section: close it if open, otherwise close all and open it.
    ///
    /// Returns whether the section is open afterwards. Unknown ids are
    /// ignored.
    pub fn toggle(&mut self, id: &str) -> bool {
        if !self.sections.iter().any(|s| s == id) {
            return false;
        }
        if self.is_open(id) {
            self.open = None;
            false
        } else {
            self.open = Some(id.to_string());
            true
        }
    }

    /// Close every section (Escape key)
    pub fn close_all(&mut self) {
        self.open = None;
    }

    /// Whether `id` is the open section
    #[must_use]
    pub fn is_open(&self, id: &str) -> bool {
        self.open.as_deref() == Some(id)
    }

    /// The open section, if any
    #[must_use]
    pub fn open_section(&self) -> Option<&str> {
        self.open.as_deref()
    }
}

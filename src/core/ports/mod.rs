//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the page logic
//! and external systems (currently only draft persistence).
//!
//! Implementations live in the `adapters` module.

mod draft_store;

#[cfg(test)]
pub use draft_store::MockDraftStore;
pub use draft_store::DraftStore;

//! File-based draft storage
//!
//! Implements `DraftStore` using a single JSON file.

mod store;

pub use store::FileDraftStore;

//! TOML guest files
//!
//! A guest file replaces the built-in directory without recompiling:
//!
//! ```toml
//! [[guest]]
//! name = "Jan Kowalski"
//! table = 1
//! ```
//!
//! - [`parser`] - Read and validate guest files
//! - [`writer`] - Export a directory as a guest file

pub mod parser;
pub mod writer;

pub use parser::{GuestFile, GuestRecord, load_guest_file, parse_guest_file};
pub use writer::format_guest_file;

//! Persisted Listing Format
//!
//! Text format with one `[path]` header per directory followed by one
//! ` marker:name` line per entry, newline-terminated. The serializer renders
//! and writes it; the parser reconstructs a snapshot tree from it.

pub mod parser;
pub mod serializer;

pub use parser::{parse, parse_file};
pub use serializer::{serialize, write_separate_listings, write_single_listing, WriteOutcome};

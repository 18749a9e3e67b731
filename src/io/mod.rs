//! I/O module
//!
//! Handles catalog file parsing and checkout output.
//!
//! # Components
//!
//! - `csv_format` - catalog file format handling (record conversion)
//! - `reader` - streaming catalog file reader with iterator interface
//! - `receipt` - plain-text receipt rendering
//! - `trace` - human-readable transfer tracing

pub mod csv_format;
pub mod reader;
pub mod receipt;
pub mod trace;

pub use csv_format::{convert_book_record, RawBookRecord};
pub use reader::BookReader;
pub use receipt::write_receipt;
pub use trace::ConsoleTrace;

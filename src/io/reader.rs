//! Streaming catalog file reader
//!
//! Provides a streaming iterator over book records from a catalog file.
//! Delegates format concerns to the csv_format module.
//!
//! # Iterator Interface
//!
//! `BookReader` implements `Iterator`, yielding
//! `Result<Book, CheckoutError>` for each row:
//!
//! ```no_run
//! use bookstore_checkout::io::reader::BookReader;
//! use std::path::Path;
//!
//! let reader = BookReader::new(Path::new("database.txt")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(book) => println!("Read book: {}", book),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual record parsing errors are yielded as Err variants in the
//!   iterator, with line numbers for debugging
//!
//! # Memory Efficiency
//!
//! Rows are read one at a time; memory usage is O(1) per record, not
//! O(file_size). The caller decides whether to collect them.

use crate::io::csv_format::{convert_book_record, RawBookRecord};
use crate::types::{Book, CheckoutError};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::path::Path;

/// Streaming reader over a catalog file
#[derive(Debug)]
pub struct BookReader {
    reader: csv::Reader<File>,
    line_num: u64,
}

impl BookReader {
    /// Create a new BookReader from a file path
    ///
    /// Opens the catalog file and prepares it for streaming iteration.
    /// The underlying CSV reader is configured for the catalog format:
    /// - No header row
    /// - Whitespace trimmed from all fields
    /// - Double quotes inside strings escaped with a backslash
    ///
    /// # Returns
    ///
    /// * `Ok(BookReader)` if the file opened successfully
    /// * `Err(CheckoutError::FileNotFound)` if the path does not exist
    /// * `Err(CheckoutError::Io)` for any other open failure
    pub fn new(path: &Path) -> Result<Self, CheckoutError> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CheckoutError::file_not_found(&path.display().to_string())
            } else {
                CheckoutError::from(e)
            }
        })?;

        let reader = ReaderBuilder::new()
            .has_headers(false)
            .trim(Trim::All)
            .double_quote(false)
            .escape(Some(b'\\'))
            .buffer_capacity(8 * 1024)
            .from_reader(file);

        Ok(Self {
            reader,
            line_num: 0,
        })
    }
}

impl Iterator for BookReader {
    type Item = Result<Book, CheckoutError>;

    /// Get the next book record from the catalog file
    ///
    /// # Returns
    ///
    /// * `Some(Ok(Book))` - Successfully parsed record
    /// * `Some(Err(CheckoutError))` - Parse or conversion error with line number
    /// * `None` - End of file reached
    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<RawBookRecord>();

        match deserializer.next()? {
            Ok(raw) => {
                self.line_num += 1;
                let line = self.line_num;
                // Attach the row's line number to any conversion error
                Some(convert_book_record(raw).map_err(|e| match e {
                    CheckoutError::Parse { message, .. } => CheckoutError::Parse {
                        line: Some(line),
                        message,
                    },
                    other => other,
                }))
            }
            Err(e) => {
                self.line_num += 1;
                Some(Err(CheckoutError::from(e)))
            }
        }
    }
}

//! Error types for the bookstore checkout
//!
//! This module defines all error types that can occur while loading the
//! catalog or running the checkout pipeline. Errors are designed to be
//! descriptive and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: catalog file not found, permission denied, etc.
//! - **Parse Errors**: malformed catalog records, invalid prices
//!
//! A catalog lookup miss is deliberately *not* an error: it is a normal
//! settlement outcome reported as a zero-charge receipt line. Popping an
//! empty cart mid-transfer is a programming error and panics rather than
//! surfacing here.

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the bookstore checkout
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheckoutError {
    /// Catalog file not found at the specified path
    ///
    /// This is a fatal error that prevents the checkout from starting.
    #[error("Catalog file not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading the catalog or writing the receipt
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// A catalog record could not be parsed
    ///
    /// This is a recoverable error - the malformed record is skipped
    /// and loading continues with the next record.
    #[error("Catalog parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Parse {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// A catalog record carried a negative price
    ///
    /// Prices are non-negative by contract. This is a recoverable error -
    /// the record is skipped.
    #[error("Negative price {price} for ISBN {isbn}")]
    NegativePrice {
        /// ISBN of the offending record
        isbn: String,
        /// The rejected price
        price: Decimal,
    },
}

// Conversion from io::Error to CheckoutError
impl From<std::io::Error> for CheckoutError {
    fn from(error: std::io::Error) -> Self {
        CheckoutError::Io {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to CheckoutError
impl From<csv::Error> for CheckoutError {
    fn from(error: csv::Error) -> Self {
        // Extract line number if available
        let line = error.position().map(|pos| pos.line());

        CheckoutError::Parse {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl CheckoutError {
    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        CheckoutError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create a Parse error
    pub fn parse(line: Option<u64>, message: &str) -> Self {
        CheckoutError::Parse {
            line,
            message: message.to_string(),
        }
    }

    /// Create a NegativePrice error
    pub fn negative_price(isbn: &str, price: Decimal) -> Self {
        CheckoutError::NegativePrice {
            isbn: isbn.to_string(),
            price,
        }
    }
}

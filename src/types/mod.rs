//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `book`: the catalog item record
//! - `receipt`: settlement output data
//! - `error`: error types for catalog loading and checkout

pub mod book;
pub mod error;
pub mod receipt;

pub use book::Book;
pub use error::CheckoutError;
pub use receipt::{Receipt, ReceiptLine};

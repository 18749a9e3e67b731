//! Bookstore Checkout Library
//! # Overview
//!
//! This library simulates a tiny retail checkout: an in-memory catalog of
//! books keyed by ISBN, and a checkout flow that moves a stack of books
//! between three carts before totaling a receipt.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Book, Receipt, CheckoutError)
//! - [`cli`] - CLI argument parsing
//! - [`core`] - Business logic components:
//!   - [`core::catalog`] - Read-only book store with sequential lookup
//!   - [`core::transfer`] - The careful-move cart transfer algorithm
//!   - [`core::session`] - The checkout pipeline for one transaction
//! - [`io`] - Catalog file parsing, receipt rendering, transfer tracing
//!
//! # Checkout Flow
//!
//! A session runs four steps in order:
//!
//! 1. **Load**: the shopper's books are stacked into the cart, heaviest
//!    first so it sits at the bottom.
//! 2. **Transfer**: the books are carefully moved onto a working cart one
//!    at a time via a spare cart, preserving their order at the cost of
//!    2^n - 1 primitive moves.
//! 3. **Drain**: the working cart is emptied book by book onto the
//!    checkout counter queue.
//! 4. **Settle**: each queued book is looked up in the catalog; found
//!    books are charged at their listed price, missing books are reported
//!    with no charge, and the receipt carries the final total.
//!
//! # Catalog Semantics
//!
//! The catalog loads once, lazily, for the whole process and is read-only
//! afterwards. Lookup is a deliberate front-to-back scan so that duplicate
//! ISBNs deterministically resolve to the record at the lowest index.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use crate::core::{
    carefully_move_books, Catalog, CheckoutSession, MoveSnapshot, TransferObserver,
};
pub use crate::io::{write_receipt, BookReader, ConsoleTrace};
pub use crate::types::{Book, CheckoutError, Receipt, ReceiptLine};

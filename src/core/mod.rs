//! Core module
//!
//! Business logic components:
//!
//! - `catalog` - the read-only in-memory book store and its lookup scan
//! - `transfer` - the careful-move algorithm and its observer seam
//! - `session` - the checkout pipeline tying carts, counter, and catalog
//!   together

pub mod catalog;
pub mod session;
pub mod transfer;

pub use catalog::Catalog;
pub use session::CheckoutSession;
pub use transfer::{carefully_move_books, MoveSnapshot, TransferObserver};

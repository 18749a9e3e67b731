//! Book record type
//!
//! A `Book` is the unit stored in the catalog and moved between the
//! checkout carts. The catalog treats it as an opaque value; only the
//! accessors below and the `Display` impl (the receipt description) are
//! part of its contract.

use rust_decimal::Decimal;
use std::fmt;

/// A purchasable book record
///
/// Identified by ISBN (primary-key semantics, though the catalog does not
/// enforce uniqueness on load). The price is an exact decimal amount in
/// dollars and is validated as non-negative at parse time.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    isbn: String,
    title: String,
    author: String,
    price: Decimal,
}

impl Book {
    /// Create a fully-populated book record
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        price: Decimal,
    ) -> Self {
        Book {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            price,
        }
    }

    /// Create a book with no author and a zero price
    ///
    /// This is what goes into a shopping cart: the shopper knows the ISBN
    /// and title, while the authoritative price comes from the catalog at
    /// settlement time.
    pub fn unpriced(isbn: impl Into<String>, title: impl Into<String>) -> Self {
        Book::new(isbn, title, "", Decimal::ZERO)
    }

    /// The book's ISBN (unique key)
    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    /// The book's display title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The book's display author (may be empty for cart entries)
    pub fn author(&self) -> &str {
        &self.author
    }

    /// The book's price in dollars
    pub fn price(&self) -> Decimal {
        self.price
    }
}

/// Human-readable full description used for receipt line items
///
/// Renders as `"<title>" by <author> (ISBN <isbn>)`, omitting the author
/// clause when no author is recorded.
impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.author.is_empty() {
            write!(f, "\"{}\" (ISBN {})", self.title, self.isbn)
        } else {
            write!(f, "\"{}\" by {} (ISBN {})", self.title, self.author, self.isbn)
        }
    }
}

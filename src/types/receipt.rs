//! Receipt data produced by settlement
//!
//! Settlement resolves each book on the checkout counter against the
//! catalog and produces a `Receipt`: one line per book plus the final
//! total. Rendering the receipt as text is a presentation concern and
//! lives in [`crate::io::receipt`]; this module only defines the data.

use rust_decimal::Decimal;

/// Outcome of settling a single book at the checkout counter
#[derive(Debug, Clone, PartialEq)]
pub enum ReceiptLine {
    /// The book was found in the catalog and charged at its listed price
    Priced {
        /// The catalog book's full description
        description: String,
        /// The listed price in dollars
        price: Decimal,
    },

    /// The book's ISBN was not in the catalog
    ///
    /// A lookup miss is a normal, reportable outcome, not an error.
    /// The book contributes zero to the total.
    NotFound {
        /// The ISBN that could not be resolved
        isbn: String,
    },
}

/// The result of settling every book on the checkout counter
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    /// One line per settled book, in settlement order
    pub lines: Vec<ReceiptLine>,

    /// Amount due for all priced lines
    pub total: Decimal,
}

impl Receipt {
    /// Number of lines that were successfully priced
    pub fn priced_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| matches!(line, ReceiptLine::Priced { .. }))
            .count()
    }

    /// Number of lines for books missing from the catalog
    pub fn not_found_count(&self) -> usize {
        self.lines.len() - self.priced_count()
    }
}

//! Receipt text rendering
//!
//! Renders the settlement data produced by
//! [`CheckoutSession::settle`](crate::core::session::CheckoutSession::settle)
//! as a plain-text receipt: one line per book, a separator, and the total.
//! The data contract lives in [`crate::types::receipt`]; only the textual
//! presentation is decided here.

use crate::types::{CheckoutError, Receipt, ReceiptLine};
use std::io::Write;

/// Write a receipt as plain text
///
/// Each priced book renders as its full description followed by the
/// price; each missing book renders as a no-charge notice. Example:
///
/// ```text
/// "Les Mis" by Victor Hugo (ISBN 0140444300)  $9.50
/// A description and price for "54782169785" was not found, no charge
/// -----------------------
/// Total: $9.50
/// ```
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(CheckoutError::Io)` if a write error occurred
pub fn write_receipt(receipt: &Receipt, output: &mut dyn Write) -> Result<(), CheckoutError> {
    for line in &receipt.lines {
        match line {
            ReceiptLine::Priced { description, price } => {
                writeln!(output, "{}  ${:.2}", description, price)?;
            }
            ReceiptLine::NotFound { isbn } => {
                writeln!(
                    output,
                    "A description and price for \"{}\" was not found, no charge",
                    isbn
                )?;
            }
        }
    }

    writeln!(output, "-----------------------")?;
    writeln!(output, "Total: ${:.2}", receipt.total)?;

    Ok(())
}

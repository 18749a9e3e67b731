//! Catalog file format handling
//!
//! The catalog file contains one book per line, four comma-delimited
//! fields, with string fields enclosed in double quotes (embedded quotes
//! escaped with a backslash) and no header row:
//!
//! ```text
//! "0001062417","Early aircraft","Maurice F. Allward",65.65
//! "0000255406","Shadow maker \"1st edition)\"","Rosemary Sullivan",8.08
//! ```
//!
//! This module centralizes the format concerns:
//! - `RawBookRecord` structure for deserialization
//! - Conversion from raw records to the `Book` domain type
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::{Book, CheckoutError};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

/// Raw catalog record as deserialized from one file row
///
/// Fields are positional (the file has no header): isbn, title, author,
/// price. The price is kept as a string so conversion can produce a
/// precise error for malformed or negative values.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RawBookRecord {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub price: String,
}

/// Convert a RawBookRecord to a Book
///
/// Parses the price string into a `Decimal` and rejects negative values;
/// everything else passes through unchanged.
///
/// # Returns
///
/// * `Ok(Book)` - Successfully converted record
/// * `Err(CheckoutError)` - Malformed or negative price
pub fn convert_book_record(raw: RawBookRecord) -> Result<Book, CheckoutError> {
    let price = Decimal::from_str(raw.price.trim()).map_err(|_| {
        CheckoutError::parse(
            None,
            &format!("Invalid price '{}' for ISBN {}", raw.price, raw.isbn),
        )
    })?;

    if price < Decimal::ZERO {
        return Err(CheckoutError::negative_price(&raw.isbn, price));
    }

    Ok(Book::new(raw.isbn, raw.title, raw.author, price))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;

    fn raw(isbn: &str, title: &str, author: &str, price: &str) -> RawBookRecord {
        RawBookRecord {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            price: price.to_string(),
        }
    }

    #[rstest]
    #[case::whole_dollars("65", Decimal::new(65, 0))]
    #[case::two_decimals("65.65", Decimal::new(6565, 2))]
    #[case::zero("0.00", Decimal::new(0, 2))]
    #[case::whitespace_padding("  8.08  ", Decimal::new(808, 2))]
    fn test_convert_valid_prices(#[case] price: &str, #[case] expected: Decimal) {
        let result = convert_book_record(raw("0001062417", "Early aircraft", "M. Allward", price));

        assert!(result.is_ok());
        assert_eq!(result.unwrap().price(), expected);
    }

    #[test]
    fn test_convert_preserves_fields() {
        let book = convert_book_record(raw(
            "0000385264",
            "Der Karawanenkardinal",
            "Heinz Gstrein",
            "35.18",
        ))
        .unwrap();

        assert_eq!(book.isbn(), "0000385264");
        assert_eq!(book.title(), "Der Karawanenkardinal");
        assert_eq!(book.author(), "Heinz Gstrein");
        assert_eq!(book.price(), Decimal::new(3518, 2));
    }

    #[rstest]
    #[case::not_a_number("not_a_price")]
    #[case::empty("")]
    #[case::whitespace_only("   ")]
    fn test_convert_malformed_price(#[case] price: &str) {
        let result = convert_book_record(raw("123", "Bad Book", "B. Author", price));

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid price"));
    }

    #[test]
    fn test_convert_rejects_negative_price() {
        let result = convert_book_record(raw("123", "Bad Book", "B. Author", "-5.00"));

        assert_eq!(
            result,
            Err(CheckoutError::negative_price("123", Decimal::new(-500, 2)))
        );
    }
}

//! In-memory book catalog
//!
//! The catalog is an ordered, read-only collection of book records loaded
//! once at startup. Records keep their file order, and lookup is a
//! deliberate front-to-back scan: with duplicate ISBNs the record at the
//! lowest index wins, and that tie-break is part of the catalog's
//! contract (a map-based store would silently change it).
//!
//! # Lifecycle
//!
//! The process-wide instance is created lazily on first use via
//! [`Catalog::load_global`] and lives for the rest of the process. The
//! type exposes no mutating operations and is not `Clone`, so references
//! returned by [`Catalog::find`] stay valid as long as the catalog does.

use crate::io::reader::BookReader;
use crate::types::{Book, CheckoutError};
use std::path::Path;
use std::sync::OnceLock;

static GLOBAL: OnceLock<Catalog> = OnceLock::new();

/// Ordered, immutable-after-construction book store
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Build a catalog from an in-memory sequence of books
    ///
    /// Insertion order is preserved and becomes the scan order for
    /// [`Catalog::find`].
    pub fn from_books(books: impl IntoIterator<Item = Book>) -> Self {
        Catalog {
            books: books.into_iter().collect(),
        }
    }

    /// Build a catalog by reading every record from a catalog file
    ///
    /// Malformed records are reported on stderr and skipped; loading
    /// continues with the next record. Only failing to open the file is
    /// fatal.
    pub fn from_path(path: &Path) -> Result<Self, CheckoutError> {
        let reader = BookReader::new(path)?;

        let mut books = Vec::new();
        for result in reader {
            match result {
                Ok(book) => books.push(book),
                Err(e) => eprintln!("Skipping catalog record: {}", e),
            }
        }

        Ok(Catalog { books })
    }

    /// Get the process-wide catalog, loading it on first call
    ///
    /// The first successful call reads the file at `path` and stores the
    /// result for the lifetime of the process; every later call returns
    /// that same instance regardless of the path given.
    pub fn load_global(path: &Path) -> Result<&'static Catalog, CheckoutError> {
        if let Some(catalog) = GLOBAL.get() {
            return Ok(catalog);
        }

        let catalog = Catalog::from_path(path)?;
        // If another thread won the race, our copy is dropped and the
        // stored instance is returned.
        Ok(GLOBAL.get_or_init(|| catalog))
    }

    /// Find the first book whose ISBN matches
    ///
    /// Scans records from index 0 upward and returns a reference to the
    /// first match, so duplicate ISBNs resolve to the lowest index. O(n)
    /// per call, which is fine for a small read-only catalog.
    pub fn find(&self, isbn: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.isbn() == isbn)
    }

    /// Number of records in the catalog
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the catalog holds no records
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample_catalog() -> Catalog {
        Catalog::from_books(vec![
            Book::new("9780545310581", "Hunger Games", "Suzanne Collins", Decimal::new(1499, 2)),
            Book::new("0140444300", "Les Mis", "Victor Hugo", Decimal::new(950, 2)),
        ])
    }

    #[test]
    fn test_find_returns_matching_book() {
        let catalog = sample_catalog();

        let book = catalog.find("0140444300").expect("book should be found");
        assert_eq!(book.title(), "Les Mis");
        assert_eq!(book.price(), Decimal::new(950, 2));
    }

    #[test]
    fn test_find_missing_isbn_returns_none() {
        let catalog = sample_catalog();

        assert!(catalog.find("0000000000").is_none());
    }

    #[test]
    fn test_find_on_empty_catalog_returns_none() {
        let catalog = Catalog::from_books(vec![]);

        assert_eq!(catalog.len(), 0);
        assert!(catalog.is_empty());
        assert!(catalog.find("0140444300").is_none());
    }

    #[test]
    fn test_duplicate_isbn_resolves_to_lowest_index() {
        // Same ISBN listed twice with different prices: the scan must
        // stop at the first occurrence, never the second.
        let catalog = Catalog::from_books(vec![
            Book::new("0140444300", "Les Mis", "Victor Hugo", Decimal::new(950, 2)),
            Book::new(
                "0140444300",
                "Les Miserables (Deluxe)",
                "Victor Hugo",
                Decimal::new(1999, 2),
            ),
        ]);

        let book = catalog.find("0140444300").unwrap();
        assert_eq!(book.title(), "Les Mis");
        assert_eq!(book.price(), Decimal::new(950, 2));
    }

    #[test]
    fn test_repeated_queries_are_idempotent() {
        let catalog = sample_catalog();

        let first = catalog.find("9780545310581").cloned();
        let second = catalog.find("9780545310581").cloned();
        assert_eq!(first, second);
        assert_eq!(catalog.len(), catalog.len());
    }

    #[test]
    fn test_from_path_skips_malformed_records() {
        let content = "\"111\",\"Good Book\",\"A. Author\",5.00\n\
            \"222\",\"Bad Book\",\"B. Author\",not_a_price\n\
            \"333\",\"Another Good\",\"C. Author\",7.25\n";
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();

        let catalog = Catalog::from_path(file.path()).unwrap();

        assert_eq!(catalog.len(), 2);
        assert!(catalog.find("111").is_some());
        assert!(catalog.find("222").is_none());
        assert!(catalog.find("333").is_some());
    }

    #[test]
    fn test_from_path_missing_file_is_fatal() {
        let result = Catalog::from_path(Path::new("no_such_catalog.txt"));

        assert!(matches!(result, Err(CheckoutError::FileNotFound { .. })));
    }

    #[test]
    fn test_load_global_returns_the_same_instance() {
        let content = "\"111\",\"Good Book\",\"A. Author\",5.00\n";
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();

        let first = Catalog::load_global(file.path()).unwrap();
        let second = Catalog::load_global(file.path()).unwrap();

        assert!(std::ptr::eq(first, second));
        assert_eq!(first.len(), 1);
    }
}

//! Bookstore Checkout CLI
//!
//! Command-line interface for the bookstore checkout simulation.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --catalog database.txt
//! cargo run -- --catalog database.txt --trace
//! ```
//!
//! The program loads the catalog file, stacks the demo shopping cart,
//! runs the careful cart transfer and the counter drain, settles every
//! book against the catalog, and prints the receipt to stdout. With
//! `--trace`, the cart contents are printed to stderr after each
//! primitive move of the transfer.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (catalog file not found or not readable, output error)

use bookstore_checkout::cli::{self, CliArgs};
use bookstore_checkout::core::transfer::TransferObserver;
use bookstore_checkout::{Book, Catalog, CheckoutError, CheckoutSession, ConsoleTrace};
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<(), CheckoutError> {
    // The catalog loads once for the lifetime of the process
    let catalog = Catalog::load_global(&args.catalog)?;

    let mut session = CheckoutSession::new(catalog);
    session.load_cart(shopping_list());

    let mut trace = ConsoleTrace::stderr();
    let observer: Option<&mut dyn TransferObserver> = if args.trace {
        Some(&mut trace)
    } else {
        None
    };

    session.transfer_to_working_cart(observer);
    session.drain_to_checkout_counter();
    let receipt = session.settle();

    let mut stdout = std::io::stdout();
    bookstore_checkout::write_receipt(&receipt, &mut stdout)
}

/// The demo shopping list, heaviest book first so it ends up at the
/// bottom of the cart. Authors are left empty and prices come from the
/// catalog at settlement time.
fn shopping_list() -> Vec<Book> {
    vec![
        Book::unpriced("9780545310581", "Hunger Games"),
        Book::unpriced("9780399576775", "Eat Pray Love"),
        Book::unpriced("0140444300", "Les Mis"),
        Book::unpriced("54782169785", "131 Answer Key"),
        Book::unpriced("9780895656926", "Like the Animals"),
    ]
}

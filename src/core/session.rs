//! Checkout session pipeline
//!
//! A `CheckoutSession` owns the three transient containers of one
//! transaction - the shopping cart, the working cart, and the checkout
//! counter - plus the running total, and sequences them through the
//! checkout flow:
//!
//! 1. [`load_cart`](CheckoutSession::load_cart) stacks the shopper's
//!    books into the cart, first book at the bottom.
//! 2. [`transfer_to_working_cart`](CheckoutSession::transfer_to_working_cart)
//!    carefully moves every book to the working cart via a fresh spare,
//!    preserving order at 2^n - 1 primitive moves.
//! 3. [`drain_to_checkout_counter`](CheckoutSession::drain_to_checkout_counter)
//!    pops the working cart book by book onto the counter queue.
//! 4. [`settle`](CheckoutSession::settle) resolves each queued book
//!    against the catalog and produces the receipt.
//!
//! The session is single-transaction state: containers start empty, the
//! total starts at zero, and nothing here is safe to share across
//! concurrent transactions.

use crate::core::catalog::Catalog;
use crate::core::transfer::{carefully_move_books, TransferObserver};
use crate::types::{Book, Receipt, ReceiptLine};
use rust_decimal::Decimal;
use std::collections::VecDeque;

/// One checkout transaction against a borrowed catalog
pub struct CheckoutSession<'a> {
    catalog: &'a Catalog,
    cart: Vec<Book>,
    working_cart: Vec<Book>,
    checkout_counter: VecDeque<Book>,
    amount_due: Decimal,
}

impl<'a> CheckoutSession<'a> {
    /// Start a new session with empty containers and a zero total
    pub fn new(catalog: &'a Catalog) -> Self {
        CheckoutSession {
            catalog,
            cart: Vec::new(),
            working_cart: Vec::new(),
            checkout_counter: VecDeque::new(),
            amount_due: Decimal::ZERO,
        }
    }

    /// Stack books into the shopping cart
    ///
    /// Books are pushed in iteration order: the first book ends up at the
    /// bottom of the cart (the heaviest goes in first) and the last on
    /// top.
    pub fn load_cart(&mut self, books: impl IntoIterator<Item = Book>) {
        self.cart.extend(books);
    }

    /// Carefully move every book from the cart to the working cart
    ///
    /// Runs the transfer algorithm over the full cart with a freshly
    /// created spare cart. Afterwards the cart is empty and the working
    /// cart holds the books in their original top-to-bottom order.
    /// Returns the number of primitive moves performed (2^n - 1 for n
    /// books, 0 for an empty cart). The optional observer is notified
    /// after each primitive move.
    pub fn transfer_to_working_cart(
        &mut self,
        observer: Option<&mut dyn TransferObserver>,
    ) -> u64 {
        let mut spare_cart = Vec::new();
        carefully_move_books(
            self.cart.len(),
            &mut self.cart,
            &mut self.working_cart,
            &mut spare_cart,
            observer,
        )
    }

    /// Move every book from the working cart onto the checkout counter
    ///
    /// Pops the top of the working cart and enqueues it, exactly once per
    /// book present when the call starts. The book that was on top of the
    /// working cart is first in the queue.
    pub fn drain_to_checkout_counter(&mut self) {
        let pending = self.working_cart.len();
        for _ in 0..pending {
            let book = self
                .working_cart
                .pop()
                .expect("working cart drained early; counted size is stale");
            self.checkout_counter.push_back(book);
        }
    }

    /// Settle every book on the checkout counter against the catalog
    ///
    /// Processes the queue front to back, exactly once per book present
    /// when the call starts. A found ISBN adds the catalog's listed price
    /// to the running total and yields a priced line; a miss yields a
    /// no-charge line and contributes nothing. Returns the receipt with
    /// the final total.
    pub fn settle(&mut self) -> Receipt {
        let pending = self.checkout_counter.len();
        let mut lines = Vec::with_capacity(pending);

        for _ in 0..pending {
            let book = self
                .checkout_counter
                .pop_front()
                .expect("checkout counter drained early; counted size is stale");

            match self.catalog.find(book.isbn()) {
                Some(listed) => {
                    self.amount_due += listed.price();
                    lines.push(ReceiptLine::Priced {
                        description: listed.to_string(),
                        price: listed.price(),
                    });
                }
                None => {
                    lines.push(ReceiptLine::NotFound {
                        isbn: book.isbn().to_string(),
                    });
                }
            }
        }

        Receipt {
            lines,
            total: self.amount_due,
        }
    }

    /// Current shopping cart contents, bottom-to-top
    pub fn cart(&self) -> &[Book] {
        &self.cart
    }

    /// Current working cart contents, bottom-to-top
    pub fn working_cart(&self) -> &[Book] {
        &self.working_cart
    }

    /// Current checkout counter contents, front-to-back
    pub fn checkout_counter(&self) -> &VecDeque<Book> {
        &self.checkout_counter
    }

    /// Running total accumulated by settlement so far
    pub fn amount_due(&self) -> Decimal {
        self.amount_due
    }
}

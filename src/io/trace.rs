//! Human-readable transfer tracing
//!
//! `ConsoleTrace` implements [`TransferObserver`] by printing the three
//! carts side by side after every primitive move, so a human can follow
//! the transfer one relocation at a time. Output is best-effort
//! diagnostics: write failures are swallowed rather than allowed to
//! disturb the transfer.

use crate::core::transfer::{MoveSnapshot, TransferObserver};
use crate::types::Book;
use std::io::{Stderr, Write};

const COLUMN_WIDTH: usize = 23;
const TITLE_WIDTH: usize = 20;

/// Observer that renders cart contents as aligned text columns
///
/// Columns keep the canonical cart roles from the start of the transfer
/// (source, working, spare), so the same physical cart stays in the same
/// column from one move to the next even as the recursion swaps roles.
pub struct ConsoleTrace<W: Write> {
    out: W,
}

impl ConsoleTrace<Stderr> {
    /// Create a trace that writes to stderr, keeping stdout clean for the
    /// receipt
    pub fn stderr() -> Self {
        ConsoleTrace {
            out: std::io::stderr(),
        }
    }
}

impl<W: Write> ConsoleTrace<W> {
    /// Create a trace that writes to an arbitrary writer
    pub fn new(out: W) -> Self {
        ConsoleTrace { out }
    }

    fn render(&mut self, snapshot: &MoveSnapshot<'_>) -> std::io::Result<()> {
        let carts = [snapshot.source, snapshot.destination, snapshot.spare];
        let labels = ["Source Cart", "Working Cart", "Spare Cart"];

        write!(self.out, "After {:>3} moves:     ", snapshot.move_number)?;
        for label in labels {
            write!(self.out, "{:<width$}", label, width = COLUMN_WIDTH)?;
        }
        writeln!(self.out)?;
        writeln!(
            self.out,
            "                     {}",
            "-".repeat(COLUMN_WIDTH * carts.len())
        )?;

        // Print stacks top-down, tallest cart first
        let tallest = carts.iter().map(|cart| cart.len()).max().unwrap_or(0);
        for level in (0..tallest).rev() {
            write!(self.out, "{}", " ".repeat(21))?;
            for cart in carts {
                match cart.get(level) {
                    Some(book) => write!(
                        self.out,
                        "{:<width$}",
                        shortened_title(book),
                        width = COLUMN_WIDTH
                    )?,
                    None => write!(self.out, "{}", " ".repeat(COLUMN_WIDTH))?,
                }
            }
            writeln!(self.out)?;
        }
        writeln!(
            self.out,
            "                     {}\n",
            "=".repeat(COLUMN_WIDTH * carts.len())
        )?;

        Ok(())
    }
}

fn shortened_title(book: &Book) -> String {
    let title = book.title();
    if title.chars().count() > TITLE_WIDTH {
        let head: String = title.chars().take(TITLE_WIDTH - 3).collect();
        format!("{}...", head)
    } else {
        title.to_string()
    }
}

impl<W: Write> TransferObserver for ConsoleTrace<W> {
    fn after_move(&mut self, snapshot: &MoveSnapshot<'_>) {
        // Diagnostics only; a failed write must not abort the transfer
        let _ = self.render(snapshot);
    }
}

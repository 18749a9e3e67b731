//! The careful-move transfer algorithm
//!
//! Moves the top `n` books of one cart onto another, one book at a time,
//! using a third cart as intermediate storage. Only the topmost book of
//! any cart is ever touched, and the books end up on the destination in
//! the same top-to-bottom order they had on the source. The procedure is
//! isomorphic to the classic three-peg disk-transfer puzzle and performs
//! exactly 2^n - 1 primitive moves; the exponential cost is inherent to
//! the constraint, not an implementation accident.
//!
//! # Observation
//!
//! An optional [`TransferObserver`] is invoked after every primitive move
//! with a snapshot of all three carts in their canonical (call-time)
//! roles. Nothing is reported before the first move, and observers cannot
//! mutate the carts.

use crate::types::Book;

// Canonical cart indices used throughout the recursion. The recursion
// permutes roles, never these positions, so observers always see the
// carts in the order the caller named them.
const SOURCE: usize = 0;
const DESTINATION: usize = 1;
const SPARE: usize = 2;

/// State of the three carts immediately after a primitive move
///
/// Slices are ordered bottom-to-top; the last element is the cart's top.
#[derive(Debug)]
pub struct MoveSnapshot<'a> {
    /// 1-based count of primitive moves performed so far
    pub move_number: u64,
    /// The cart named as the source when the transfer started
    pub source: &'a [Book],
    /// The cart named as the destination when the transfer started
    pub destination: &'a [Book],
    /// The cart named as the spare when the transfer started
    pub spare: &'a [Book],
}

/// Side-channel observer of the transfer's primitive moves
///
/// Called once per primitive move, never before the first. Observation is
/// purely diagnostic and must not be relied upon for correctness.
pub trait TransferObserver {
    /// Called immediately after a single book has been relocated
    fn after_move(&mut self, snapshot: &MoveSnapshot<'_>);
}

/// Carefully move the top `quantity` books from `source` to `destination`
///
/// Uses `spare` as intermediate storage. On return the moved books sit on
/// `destination` in their original top-to-bottom order, and `spare` holds
/// exactly what it held before. Returns the number of primitive moves
/// performed: 2^quantity - 1, or 0 when `quantity` is 0.
///
/// # Panics
///
/// Panics if `quantity` exceeds the number of books on `source`; that is
/// an invariant breach by the caller, not a recoverable condition.
pub fn carefully_move_books(
    quantity: usize,
    source: &mut Vec<Book>,
    destination: &mut Vec<Book>,
    spare: &mut Vec<Book>,
    mut observer: Option<&mut dyn TransferObserver>,
) -> u64 {
    if quantity == 0 {
        return 0;
    }

    assert!(
        quantity <= source.len(),
        "transfer of {} books requested but source cart holds {}",
        quantity,
        source.len()
    );

    let mut carts = [source, destination, spare];
    let mut moves = 0u64;
    move_books(
        &mut carts,
        quantity,
        SOURCE,
        DESTINATION,
        SPARE,
        &mut moves,
        &mut observer,
    );
    moves
}

/// Recursive core of the transfer
///
/// To move `quantity` books from `from` to `to`: first clear the
/// `quantity - 1` books above the bottom one onto `via`, move the exposed
/// book directly, then re-stack the cleared books on top of it.
fn move_books(
    carts: &mut [&mut Vec<Book>; 3],
    quantity: usize,
    from: usize,
    to: usize,
    via: usize,
    moves: &mut u64,
    observer: &mut Option<&mut dyn TransferObserver>,
) {
    if quantity == 1 {
        relocate(carts, from, to, moves, observer);
    } else {
        move_books(carts, quantity - 1, from, via, to, moves, observer);
        relocate(carts, from, to, moves, observer);
        move_books(carts, quantity - 1, via, to, from, moves, observer);
    }
}

/// Perform one primitive move and notify the observer
fn relocate(
    carts: &mut [&mut Vec<Book>; 3],
    from: usize,
    to: usize,
    moves: &mut u64,
    observer: &mut Option<&mut dyn TransferObserver>,
) {
    let book = carts[from]
        .pop()
        .expect("transfer popped an empty cart; move bookkeeping is broken");
    carts[to].push(book);
    *moves += 1;

    if let Some(observer) = observer {
        observer.after_move(&MoveSnapshot {
            move_number: *moves,
            source: carts[SOURCE].as_slice(),
            destination: carts[DESTINATION].as_slice(),
            spare: carts[SPARE].as_slice(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn books(n: usize) -> Vec<Book> {
        (0..n)
            .map(|i| Book::unpriced(format!("isbn-{}", i), format!("Book {}", i)))
            .collect()
    }

    /// Observer that checks conservation and ordering at every step
    struct CheckingObserver {
        expected_total: usize,
        observed_moves: Vec<u64>,
    }

    impl TransferObserver for CheckingObserver {
        fn after_move(&mut self, snapshot: &MoveSnapshot<'_>) {
            let total =
                snapshot.source.len() + snapshot.destination.len() + snapshot.spare.len();
            assert_eq!(
                total, self.expected_total,
                "books lost or duplicated mid-transfer"
            );
            self.observed_moves.push(snapshot.move_number);
        }
    }

    #[rstest]
    #[case(1, 1)]
    #[case(2, 3)]
    #[case(3, 7)]
    #[case(4, 15)]
    #[case(5, 31)]
    #[case(8, 255)]
    fn test_move_count_is_exponential(#[case] n: usize, #[case] expected_moves: u64) {
        let mut source = books(n);
        let mut destination = Vec::new();
        let mut spare = Vec::new();

        let moves =
            carefully_move_books(n, &mut source, &mut destination, &mut spare, None);

        assert_eq!(moves, expected_moves);
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(5)]
    #[case(7)]
    fn test_transfer_preserves_order(#[case] n: usize) {
        let original = books(n);
        let mut source = original.clone();
        let mut destination = Vec::new();
        let mut spare = Vec::new();

        carefully_move_books(n, &mut source, &mut destination, &mut spare, None);

        assert!(source.is_empty());
        assert!(spare.is_empty());
        assert_eq!(destination, original);
    }

    #[test]
    fn test_zero_quantity_is_a_no_op() {
        let mut source = books(3);
        let mut destination = Vec::new();
        let mut spare = Vec::new();
        let before = source.clone();

        let moves = carefully_move_books(0, &mut source, &mut destination, &mut spare, None);

        assert_eq!(moves, 0);
        assert_eq!(source, before);
        assert!(destination.is_empty());
        assert!(spare.is_empty());
    }

    #[test]
    fn test_observer_sees_every_move_and_conservation_holds() {
        let n = 5;
        let mut source = books(n);
        let mut destination = Vec::new();
        let mut spare = Vec::new();
        let mut observer = CheckingObserver {
            expected_total: n,
            observed_moves: Vec::new(),
        };

        let moves = carefully_move_books(
            n,
            &mut source,
            &mut destination,
            &mut spare,
            Some(&mut observer),
        );

        assert_eq!(moves, 31);
        // One callback per primitive move, numbered 1..=2^n - 1
        let expected: Vec<u64> = (1..=31).collect();
        assert_eq!(observer.observed_moves, expected);
    }

    #[test]
    fn test_transfer_on_top_of_existing_books() {
        // Pre-existing destination contents stay underneath the arrivals
        let mut source = books(3);
        let resident = Book::unpriced("resident", "Already Here");
        let mut destination = vec![resident.clone()];
        let mut spare = Vec::new();
        let expected_top = source.clone();

        carefully_move_books(3, &mut source, &mut destination, &mut spare, None);

        assert_eq!(destination.len(), 4);
        assert_eq!(destination[0], resident);
        assert_eq!(&destination[1..], expected_top.as_slice());
    }

    #[test]
    #[should_panic(expected = "source cart holds")]
    fn test_quantity_beyond_source_size_panics() {
        let mut source = books(2);
        let mut destination = Vec::new();
        let mut spare = Vec::new();

        carefully_move_books(3, &mut source, &mut destination, &mut spare, None);
    }
}

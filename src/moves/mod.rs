//! The move executor: transfers a card or run from the held slot to the
//! selected slot, all or nothing.
//!
//! Every rejection happens before the first mutation, so a failed move
//! leaves the board untouched. The executor trusts nothing about its
//! inputs beyond well-formedness: legality is re-derived here even though
//! the highlight overlay normally pre-filters destinations.

use log::debug;
use smallvec::SmallVec;

use crate::board::{Board, Slot};
use crate::core::{Card, PileKind};
#[cfg(test)]
use crate::core::Pos;
use crate::cursor;
use crate::rules::can_stack;

/// Run buffer: a full King..Ace run is 13 cards, kept inline.
type Run = SmallVec<[Card; 13]>;

/// Execute the move from `moving` to `selected`; true on success.
///
/// On success the cursor lands on the written slot, the hold clears, the
/// flip rule runs, and the overlay is dropped for the caller's recompute
/// pass.
pub fn execute(board: &mut Board) -> bool {
    let Some(source_pos) = board.moving else {
        return false;
    };
    let Some(source_card) = board.card_at(source_pos) else {
        return false;
    };

    // Resolve the destination, remembering the originally-targeted top for
    // the stacking check. A tableau destination on a card advances to the
    // slot above it, which must be vacant - dropping onto a buried card is
    // rejected here.
    let mut dest = board.selected;
    let original_top = match board.slot(dest) {
        Slot::Occupied(card) => Some(card),
        Slot::Vacant => None,
        Slot::OutOfBounds => return false,
    };
    if original_top.is_some() && dest.pile == PileKind::Tableau {
        dest.row += 1;
        if board.slot(dest) != Slot::Vacant {
            return false;
        }
    }

    if !can_stack(source_card, original_top, dest.pile == PileKind::Foundation) {
        return false;
    }

    let amount = board.run_len(source_pos);
    debug_assert!(amount >= 1, "resolved source implies a non-empty run");

    match dest.pile {
        PileKind::Tableau => {
            // dest.row is the column's first vacant slot and tableau runs
            // extend to the column top, so the append below can neither
            // overwrite cards nor strand any beneath the run.
            match source_pos.pile {
                PileKind::Tableau => {
                    let run: Run = board.tableau[source_pos.column].drain(source_pos.row..).collect();
                    board.tableau[dest.column].extend(run);
                }
                PileKind::Waste => {
                    let card = board.waste.pop().expect("resolved waste top");
                    board.tableau[dest.column].push(card);
                }
                PileKind::Foundation => {
                    let card = board.foundations[source_pos.column]
                        .remove_top()
                        .expect("resolved foundation top");
                    board.tableau[dest.column].push(card);
                }
                PileKind::Stock => return false,
            }
        }
        PileKind::Foundation => {
            // Foundations take single cards: a tableau source must be the
            // exposed column top, everything else is single by nature.
            if source_pos.pile == PileKind::Tableau && amount > 1 {
                return false;
            }
            let card = match source_pos.pile {
                PileKind::Tableau => {
                    board.tableau[source_pos.column].pop().expect("resolved tableau card")
                }
                PileKind::Waste => board.waste.pop().expect("resolved waste top"),
                PileKind::Foundation => board.foundations[source_pos.column]
                    .remove_top()
                    .expect("resolved foundation top"),
                PileKind::Stock => return false,
            };
            board.foundations[dest.column].push(card);
        }
        PileKind::Waste | PileKind::Stock => return false,
    }

    debug!("moved {source_card} x{amount} from {source_pos} to {dest}");

    board.selected = dest;
    board.moving = None;
    board.flip_exposed();
    board.highlights.clear();
    cursor::snap(board);
    true
}

//! Cursor navigation: the directional state machine over the four pile
//! kinds, plus the snap rule.
//!
//! ## Adjacency
//!
//! - **Tableau** Up walks the face-up run, leaving the column at its
//!   top: columns 0-3 to the same-index foundation, 4-5 to the waste
//!   (foundation 3 when the waste is empty), 6 to the stock. Right wraps
//!   column 6 to the stock, Left clamps at column 0, Down never leaves
//!   the tableau.
//! - **Foundation** piles connect left/right, with Right past pile 3
//!   landing on the waste (stock when empty) and Down dropping into the
//!   same-index column.
//! - **Waste/Stock** form one group: Right goes waste-to-stock, Left
//!   falls back to foundation 3 when the waste cannot take the cursor,
//!   Down drops into columns 5 and 6 respectively.
//!
//! Every transition that lands on a tableau slot snaps.

use crate::board::{Board, Slot};
use crate::core::{Action, PileKind, Pos};

/// Move the cursor one step; true if the input was accepted.
///
/// Only the four directions reach this function; Confirm/Cancel are
/// protocol actions handled by the game facade.
pub fn step(board: &mut Board, action: Action) -> bool {
    match board.selected.pile {
        PileKind::Tableau => step_tableau(board, action),
        PileKind::Foundation => step_foundation(board, action),
        PileKind::Waste | PileKind::Stock => step_waste_stock(board, action),
    }
}

/// Snap the cursor to a selectable tableau slot.
///
/// Steps back toward row 0 while the slot is empty, forward while the
/// slot holds a face-down card; stops on the first face-up card or on the
/// row-0 slot of an empty column. Relies on the flip rule having run, so
/// every non-empty column has a face-up top.
pub fn snap(board: &mut Board) {
    if board.selected.pile != PileKind::Tableau {
        return;
    }
    loop {
        match board.slot(board.selected) {
            Slot::Occupied(card) if card.face_up => break,
            Slot::Occupied(_) => board.selected.row += 1,
            Slot::Vacant | Slot::OutOfBounds => {
                if board.selected.row == 0 {
                    break;
                }
                board.selected.row -= 1;
            }
        }
    }
}

fn step_tableau(board: &mut Board, action: Action) -> bool {
    let Pos { column, row, .. } = board.selected;
    match action {
        Action::Up => {
            let above = (row > 0)
                .then(|| board.card_at(Pos::tableau(column, row - 1)))
                .flatten();
            match above {
                Some(card) if card.face_up => board.selected.row -= 1,
                // No face-up predecessor: leave the column upward.
                _ => {
                    board.selected = match column {
                        0..=3 => Pos::foundation(column),
                        4 | 5 if !board.waste.is_empty() => Pos::waste(),
                        4 | 5 => Pos::foundation(3),
                        _ => Pos::stock(),
                    }
                }
            }
            true
        }
        Action::Right => {
            if column >= Board::COLUMNS - 1 {
                board.selected = Pos::stock();
            } else {
                board.selected = Pos::tableau(column + 1, row);
                snap(board);
            }
            true
        }
        Action::Down => match board.card_at(Pos::tableau(column, row + 1)) {
            Some(card) if card.face_up => {
                board.selected.row += 1;
                true
            }
            _ => false,
        },
        Action::Left => {
            // Clamped at column 0, but still a handled input.
            if column > 0 {
                board.selected = Pos::tableau(column - 1, row);
                snap(board);
            }
            true
        }
        _ => unreachable!("step only handles directions"),
    }
}

fn step_foundation(board: &mut Board, action: Action) -> bool {
    let pile = board.selected.column;
    match action {
        Action::Up => false,
        Action::Right => {
            if pile >= Board::FOUNDATION_PILES - 1 {
                board.selected = if board.waste.is_empty() {
                    Pos::stock()
                } else {
                    Pos::waste()
                };
            } else {
                board.selected = Pos::foundation(pile + 1);
            }
            true
        }
        Action::Down => {
            board.selected = Pos::tableau(pile, 0);
            snap(board);
            true
        }
        Action::Left => {
            if pile == 0 {
                return false;
            }
            board.selected = Pos::foundation(pile - 1);
            true
        }
        _ => unreachable!("step only handles directions"),
    }
}

fn step_waste_stock(board: &mut Board, action: Action) -> bool {
    let on_waste = board.selected.pile == PileKind::Waste;
    match action {
        Action::Up => false,
        Action::Right => {
            if on_waste {
                board.selected = Pos::stock();
                true
            } else {
                false
            }
        }
        Action::Down => {
            board.selected = Pos::tableau(if on_waste { 5 } else { 6 }, 0);
            snap(board);
            true
        }
        Action::Left => {
            if board.waste.is_empty() || on_waste {
                board.selected = Pos::foundation(3);
            } else {
                board.selected = Pos::waste();
            }
            true
        }
        _ => unreachable!("step only handles directions"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Card, GameRng, Rank, Suit};

    fn dealt() -> Board {
        Board::deal(&mut GameRng::new(42))
    }

    #[test]
    fn test_snap_steps_forward_off_face_down_cards() {
        let mut board = dealt();
        // Column 6: rows 0..5 face down, row 6 face up.
        board.selected = Pos::tableau(6, 0);
        snap(&mut board);
        assert_eq!(board.selected, Pos::tableau(6, 6));
    }

    #[test]
    fn test_snap_steps_back_to_content() {
        let mut board = dealt();
        board.selected = Pos::tableau(2, 9);
        snap(&mut board);
        assert_eq!(board.selected, Pos::tableau(2, 2));
    }

    #[test]
    fn test_snap_rests_on_empty_column_base() {
        let mut board = dealt();
        board.tableau[0].clear();
        board.selected = Pos::tableau(0, 0);
        snap(&mut board);
        assert_eq!(board.selected, Pos::tableau(0, 0));
    }

    #[test]
    fn test_tableau_up_leaves_to_same_index_foundation() {
        for column in 0..4 {
            let mut board = dealt();
            board.selected = Pos::tableau(column, column);
            assert!(step(&mut board, Action::Up));
            assert_eq!(board.selected, Pos::foundation(column));
        }
    }

    #[test]
    fn test_tableau_up_from_middle_columns_prefers_waste() {
        let mut board = dealt();
        board.selected = Pos::tableau(4, 4);
        assert!(step(&mut board, Action::Up));
        // Fresh deal has an empty waste, so foundation 3 takes the cursor.
        assert_eq!(board.selected, Pos::foundation(3));

        let mut board = dealt();
        board.waste.push(Card::face_up(Suit::Hearts, Rank::Nine));
        board.selected = Pos::tableau(5, 5);
        assert!(step(&mut board, Action::Up));
        assert_eq!(board.selected, Pos::waste());
    }

    #[test]
    fn test_tableau_up_from_last_column_goes_to_stock() {
        let mut board = dealt();
        board.selected = Pos::tableau(6, 6);
        assert!(step(&mut board, Action::Up));
        assert_eq!(board.selected, Pos::stock());
    }

    #[test]
    fn test_tableau_up_walks_face_up_run() {
        let mut board = dealt();
        board.tableau[1].push(Card::face_up(Suit::Hearts, Rank::Three));
        board.selected = Pos::tableau(1, 2);

        assert!(step(&mut board, Action::Up));
        assert_eq!(board.selected, Pos::tableau(1, 1));

        // The card below row 1 is face down, so the next Up leaves.
        assert!(step(&mut board, Action::Up));
        assert_eq!(board.selected, Pos::foundation(1));
    }

    #[test]
    fn test_tableau_right_wraps_to_stock() {
        let mut board = dealt();
        board.selected = Pos::tableau(6, 6);
        assert!(step(&mut board, Action::Right));
        assert_eq!(board.selected, Pos::stock());
    }

    #[test]
    fn test_tableau_right_snaps_into_next_column() {
        let mut board = dealt();
        board.selected = Pos::tableau(2, 2);
        assert!(step(&mut board, Action::Right));
        assert_eq!(board.selected, Pos::tableau(3, 3));
    }

    #[test]
    fn test_tableau_left_clamps_at_column_zero() {
        let mut board = dealt();
        board.selected = Pos::tableau(0, 0);
        assert!(step(&mut board, Action::Left));
        assert_eq!(board.selected, Pos::tableau(0, 0));
    }

    #[test]
    fn test_tableau_down_rejected_at_column_top() {
        let mut board = dealt();
        board.selected = Pos::tableau(3, 3);
        assert!(!step(&mut board, Action::Down));
        assert_eq!(board.selected, Pos::tableau(3, 3));
    }

    #[test]
    fn test_tableau_down_walks_face_up_run() {
        let mut board = dealt();
        board.tableau[1].push(Card::face_up(Suit::Hearts, Rank::Three));
        board.selected = Pos::tableau(1, 1);
        assert!(step(&mut board, Action::Down));
        assert_eq!(board.selected, Pos::tableau(1, 2));
    }

    #[test]
    fn test_foundation_navigation() {
        let mut board = dealt();
        board.selected = Pos::foundation(0);

        assert!(!step(&mut board, Action::Up));
        assert!(!step(&mut board, Action::Left));

        assert!(step(&mut board, Action::Right));
        assert_eq!(board.selected, Pos::foundation(1));

        assert!(step(&mut board, Action::Left));
        assert_eq!(board.selected, Pos::foundation(0));
    }

    #[test]
    fn test_foundation_right_past_last_pile() {
        let mut board = dealt();
        board.selected = Pos::foundation(3);
        assert!(step(&mut board, Action::Right));
        assert_eq!(board.selected, Pos::stock());

        let mut board = dealt();
        board.waste.push(Card::face_up(Suit::Hearts, Rank::Nine));
        board.selected = Pos::foundation(3);
        assert!(step(&mut board, Action::Right));
        assert_eq!(board.selected, Pos::waste());
    }

    #[test]
    fn test_foundation_down_drops_into_same_column() {
        let mut board = dealt();
        board.selected = Pos::foundation(2);
        assert!(step(&mut board, Action::Down));
        assert_eq!(board.selected, Pos::tableau(2, 2));
    }

    #[test]
    fn test_waste_stock_navigation() {
        let mut board = dealt();
        board.waste.push(Card::face_up(Suit::Hearts, Rank::Nine));
        board.selected = Pos::waste();

        assert!(!step(&mut board, Action::Up));

        assert!(step(&mut board, Action::Right));
        assert_eq!(board.selected, Pos::stock());

        assert!(!step(&mut board, Action::Right));

        assert!(step(&mut board, Action::Left));
        assert_eq!(board.selected, Pos::waste());

        // From the waste itself, Left falls back to foundation 3.
        assert!(step(&mut board, Action::Left));
        assert_eq!(board.selected, Pos::foundation(3));
    }

    #[test]
    fn test_stock_left_with_empty_waste() {
        let mut board = dealt();
        board.selected = Pos::stock();
        assert!(step(&mut board, Action::Left));
        assert_eq!(board.selected, Pos::foundation(3));
    }

    #[test]
    fn test_waste_stock_down() {
        let mut board = dealt();
        board.waste.push(Card::face_up(Suit::Hearts, Rank::Nine));

        board.selected = Pos::waste();
        assert!(step(&mut board, Action::Down));
        assert_eq!(board.selected, Pos::tableau(5, 5));

        board.selected = Pos::stock();
        assert!(step(&mut board, Action::Down));
        assert_eq!(board.selected, Pos::tableau(6, 6));
    }
}

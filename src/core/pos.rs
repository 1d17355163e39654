//! Board positions: pile kinds and the cursor/hold locator.
//!
//! A `Pos` is a locator, not an owning reference - it is resolved against
//! the board each time it is used (`Board::slot`). Waste and Stock carry no
//! meaningful coordinates and Foundation carries no row, so the
//! constructors normalize those fields to zero; plain field equality then
//! answers "same slot?".

use serde::{Deserialize, Serialize};

/// The four pile kinds on a Klondike board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileKind {
    Tableau,
    Waste,
    Stock,
    Foundation,
}

/// A slot locator: pile kind plus coordinates.
///
/// - Tableau: `column` 0..7, `row` counted from the column base.
/// - Foundation: `column` is the pile index 0..4, `row` always 0.
/// - Waste/Stock: both coordinates always 0 (the top card is implied).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub pile: PileKind,
    pub column: usize,
    pub row: usize,
}

impl Pos {
    /// A tableau slot.
    #[must_use]
    pub const fn tableau(column: usize, row: usize) -> Self {
        Self {
            pile: PileKind::Tableau,
            column,
            row,
        }
    }

    /// A foundation pile.
    #[must_use]
    pub const fn foundation(pile: usize) -> Self {
        Self {
            pile: PileKind::Foundation,
            column: pile,
            row: 0,
        }
    }

    /// The waste top.
    #[must_use]
    pub const fn waste() -> Self {
        Self {
            pile: PileKind::Waste,
            column: 0,
            row: 0,
        }
    }

    /// The stock top.
    #[must_use]
    pub const fn stock() -> Self {
        Self {
            pile: PileKind::Stock,
            column: 0,
            row: 0,
        }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.pile {
            PileKind::Tableau => write!(f, "tableau {}:{}", self.column, self.row),
            PileKind::Foundation => write!(f, "foundation {}", self.column),
            PileKind::Waste => f.write_str("waste"),
            PileKind::Stock => f.write_str("stock"),
        }
    }
}

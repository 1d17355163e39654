//! Destination highlighting: a derived overlay, never durable state.
//!
//! The overlay maps slot positions to a tag and is thrown away and rebuilt
//! on every action (the board never exceeds 96 slots; recomputing is
//! cheaper than keeping incremental state honest). Two tags exist:
//!
//! - `Highlighted`: a legal destination for the held card or run
//! - `Source`: the origin slot of the held card or run
//!
//! `refresh` is the per-action recompute pass: flip rule, overlay rebuild,
//! and auto-cancel of a hold that no longer resolves to a card.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{Card, PileKind, Pos};
use crate::rules::can_stack;

/// Overlay tag for a single slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Highlight {
    /// Legal destination for the held card.
    Highlighted,
    /// Origin of the held card.
    Source,
}

/// The transient highlight overlay.
///
/// Untagged slots are simply absent. Renderers read tags through `get`;
/// only this module writes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Highlights {
    slots: FxHashMap<Pos, Highlight>,
}

impl Highlights {
    /// The tag on a slot, if any.
    #[must_use]
    pub fn get(&self, pos: Pos) -> Option<Highlight> {
        self.slots.get(&pos).copied()
    }

    /// Whether a slot is marked as a legal destination.
    #[must_use]
    pub fn is_highlighted(&self, pos: Pos) -> bool {
        self.get(pos) == Some(Highlight::Highlighted)
    }

    /// Whether no slot carries a tag.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterate over all tagged slots.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Highlight)> + '_ {
        self.slots.iter().map(|(&pos, &tag)| (pos, tag))
    }

    /// Drop every tag.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    fn set(&mut self, pos: Pos, tag: Highlight) {
        self.slots.insert(pos, tag);
    }
}

/// Rebuild the destination marks for a held card; returns the match count.
///
/// Clears the overlay first. Foundation piles are skipped entirely when the
/// hold is a tableau run of more than one card (foundations take single
/// cards only). Tableau candidates are the face-up column tops, or the
/// row-0 slot of an empty column for a King.
///
/// Callers use a count of 1 to auto-move and 0 to reject a pick-up.
pub fn mark_targets(board: &mut Board, card: Card, multi_card_run: bool) -> usize {
    board.highlights.clear();
    let mut count = 0;

    if !multi_card_run {
        for pile in 0..Board::FOUNDATION_PILES {
            if can_stack(card, board.foundations[pile].top(), true) {
                board.highlights.set(Pos::foundation(pile), Highlight::Highlighted);
                count += 1;
            }
        }
    }

    for column in 0..Board::COLUMNS {
        match board.tableau[column].last().copied() {
            Some(top) => {
                if top.face_up && can_stack(card, Some(top), false) {
                    let row = board.tableau[column].len() - 1;
                    board.highlights.set(Pos::tableau(column, row), Highlight::Highlighted);
                    count += 1;
                }
            }
            None => {
                if can_stack(card, None, false) {
                    board.highlights.set(Pos::tableau(column, 0), Highlight::Highlighted);
                    count += 1;
                }
            }
        }
    }

    count
}

/// Mark the origin slot of the held card, if the hold resolves.
pub fn mark_source(board: &mut Board) {
    if let Some(source) = board.moving {
        if board.card_at(source).is_some() {
            board.highlights.set(source, Highlight::Source);
        }
    }
}

/// The per-action recompute pass.
///
/// Applies the flip rule, rebuilds the overlay for the current hold, and
/// cancels a hold that no longer resolves to a card. Idempotent: a second
/// run with no intervening action reproduces the same overlay.
pub fn refresh(board: &mut Board) {
    board.flip_exposed();
    board.highlights.clear();

    if let Some(source) = board.moving {
        match board.card_at(source) {
            Some(card) => {
                let multi = source.pile == PileKind::Tableau && board.run_len(source) > 1;
                mark_targets(board, card, multi);
            }
            None => board.moving = None,
        }
    }

    mark_source(board);
}

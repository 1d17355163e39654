//! Dealing a fresh game.
//!
//! Column `c` (0..6) receives `c + 1` cards face down; the flip rule then
//! exposes each column top. The remaining 24 cards form the stock, face
//! down. Foundations and waste start empty, nothing is held, and the
//! cursor rests on column 0.

use log::debug;

use crate::core::{Card, GameRng, Rank, Suit};

use super::Board;

/// A fresh unshuffled 52-card deck: suits in declaration order, Ace
/// through King within each, all face down.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(Board::DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

impl Board {
    /// Deal a new board from the given RNG.
    #[must_use]
    pub fn deal(rng: &mut GameRng) -> Self {
        let mut deck = standard_deck();
        rng.shuffle(&mut deck);
        debug!("dealing new board, seed {}", rng.seed());

        let mut board = Board::empty();
        let mut deck = deck.into_iter();
        for (column, pile) in board.tableau.iter_mut().enumerate() {
            pile.extend(deck.by_ref().take(column + 1));
        }
        board.stock.extend(deck);

        board.flip_exposed();
        crate::cursor::snap(&mut board);
        board
    }
}

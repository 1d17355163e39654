//! Board state: every pile, the cursor, and the held-card pointer.
//!
//! ## Representation
//!
//! - Tableau columns are `Vec`s holding exactly their real contents, so
//!   contiguity from row 0 holds by construction.
//! - Foundation piles store only their current top card; the Ace..top run
//!   is implied (`FoundationPile`).
//! - Waste and stock are `Vec`s with the top at the end.
//! - The highlight overlay is derived state, recomputed every action and
//!   skipped by serialization.
//!
//! ## Slot resolution
//!
//! A `Pos` resolves through `Board::slot` to a three-way `Slot`:
//! `Occupied(card)`, `Vacant` (the addressable empty slot - for a tableau
//! column, exactly the first row past its content), or `OutOfBounds` (rows
//! beyond that). Positions with an out-of-range column or pile index are
//! never produced by the engine, and resolution asserts on them.

pub mod deal;

use serde::{Deserialize, Serialize};

use crate::core::{Card, PileKind, Pos, Rank, Suit};
use crate::highlight::Highlights;

/// What a position resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// A card sits in the slot.
    Occupied(Card),
    /// The slot is addressable but empty.
    Vacant,
    /// Tableau row past the first vacant slot.
    OutOfBounds,
}

impl Slot {
    /// The card in the slot, if occupied.
    #[must_use]
    pub fn card(self) -> Option<Card> {
        match self {
            Slot::Occupied(card) => Some(card),
            Slot::Vacant | Slot::OutOfBounds => None,
        }
    }
}

/// A foundation pile, stored as its top card only.
///
/// Pushing and removal keep the implied Ace..top run intact: removal
/// decrements the top rank, and removing an Ace empties the pile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundationPile {
    top: Option<Card>,
}

impl FoundationPile {
    /// The current top card, face up, or `None` for an empty pile.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.top
    }

    /// Whether the pile holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    /// How many cards the pile holds (Ace..top).
    #[must_use]
    pub fn len(&self) -> usize {
        self.top.map_or(0, |card| card.rank.value() as usize)
    }

    /// Place a card on the pile.
    ///
    /// Callers validate with `rules::can_stack` first; the pile itself only
    /// normalizes the stored card face up.
    pub fn push(&mut self, card: Card) {
        self.top = Some(Card::face_up(card.suit, card.rank));
    }

    /// Take the top card, exposing its predecessor.
    pub fn remove_top(&mut self) -> Option<Card> {
        let top = self.top?;
        self.top = top.rank.pred().map(|rank| Card::face_up(top.suit, rank));
        Some(top)
    }
}

/// The aggregate game state.
///
/// All piles are public for reading; renderers hold a `&Board` and cannot
/// mutate. Mutation flows through the engine (`game::Game`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    /// The seven main playing columns, row 0 at the base.
    pub tableau: [Vec<Card>; 7],
    /// The four ascending per-suit build piles.
    pub foundations: [FoundationPile; 4],
    /// Face-up pile fed from the stock, top last.
    pub waste: Vec<Card>,
    /// Face-down draw pile, top last.
    pub stock: Vec<Card>,
    /// The cursor.
    pub selected: Pos,
    /// Source of the held card or run, `None` when nothing is held.
    pub moving: Option<Pos>,
    /// Derived destination/source overlay; recomputed every action.
    #[serde(skip)]
    pub highlights: Highlights,
}

impl Board {
    /// Number of tableau columns.
    pub const COLUMNS: usize = 7;
    /// Number of foundation piles.
    pub const FOUNDATION_PILES: usize = 4;
    /// Cards in a full deck.
    pub const DECK_SIZE: usize = 52;

    /// An empty board with the cursor at the base of column 0.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            tableau: std::array::from_fn(|_| Vec::new()),
            foundations: [FoundationPile::default(); Self::FOUNDATION_PILES],
            waste: Vec::new(),
            stock: Vec::new(),
            selected: Pos::tableau(0, 0),
            moving: None,
            highlights: Highlights::default(),
        }
    }

    /// Resolve a position to its slot.
    ///
    /// Panics on an out-of-range column or pile index; the engine never
    /// produces such a position.
    #[must_use]
    pub fn slot(&self, pos: Pos) -> Slot {
        match pos.pile {
            PileKind::Tableau => {
                assert!(pos.column < Self::COLUMNS, "tableau column {} out of range", pos.column);
                let column = &self.tableau[pos.column];
                match pos.row.cmp(&column.len()) {
                    std::cmp::Ordering::Less => Slot::Occupied(column[pos.row]),
                    std::cmp::Ordering::Equal => Slot::Vacant,
                    std::cmp::Ordering::Greater => Slot::OutOfBounds,
                }
            }
            PileKind::Foundation => {
                assert!(
                    pos.column < Self::FOUNDATION_PILES,
                    "foundation pile {} out of range",
                    pos.column
                );
                self.foundations[pos.column].top().map_or(Slot::Vacant, Slot::Occupied)
            }
            PileKind::Waste => self.waste.last().copied().map_or(Slot::Vacant, Slot::Occupied),
            PileKind::Stock => self.stock.last().copied().map_or(Slot::Vacant, Slot::Occupied),
        }
    }

    /// The card at a position, if the slot is occupied.
    #[must_use]
    pub fn card_at(&self, pos: Pos) -> Option<Card> {
        self.slot(pos).card()
    }

    /// Length of the run rooted at a position.
    ///
    /// For a tableau position, the contiguous cards from that row through
    /// the column top; every other pile kind moves single cards.
    #[must_use]
    pub fn run_len(&self, pos: Pos) -> usize {
        match pos.pile {
            PileKind::Tableau => {
                assert!(pos.column < Self::COLUMNS, "tableau column {} out of range", pos.column);
                self.tableau[pos.column].len().saturating_sub(pos.row)
            }
            PileKind::Waste | PileKind::Stock | PileKind::Foundation => 1,
        }
    }

    /// The flip rule: the top card of every tableau column turns face up.
    ///
    /// Run after every structural change.
    pub fn flip_exposed(&mut self) {
        for column in &mut self.tableau {
            if let Some(top) = column.last_mut() {
                top.face_up = true;
            }
        }
    }

    /// Whether the game is complete: every foundation topped by a King.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.foundations
            .iter()
            .all(|pile| pile.top().is_some_and(|card| card.rank == Rank::King))
    }

    /// Every card on the board as `(suit, rank)`, foundation runs expanded.
    ///
    /// A legal board yields all 52 distinct cards.
    #[must_use]
    pub fn all_cards(&self) -> Vec<(Suit, Rank)> {
        let mut cards: Vec<(Suit, Rank)> = self
            .tableau
            .iter()
            .flatten()
            .chain(&self.waste)
            .chain(&self.stock)
            .map(|card| (card.suit, card.rank))
            .collect();
        for pile in &self.foundations {
            if let Some(top) = pile.top() {
                for value in 1..=top.rank.value() {
                    let rank = Rank::from_value(value).expect("foundation run rank");
                    cards.push((top.suit, rank));
                }
            }
        }
        cards
    }
}

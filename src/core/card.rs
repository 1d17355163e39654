//! Card value types: suits, ranks, colors, and the card itself.
//!
//! A `Card` is pure value data (suit, rank, face-up flag). Empty slots are
//! modeled as *absence* (`Option<Card>`, pile tails), never as a sentinel
//! rank. Highlighting lives in a separate overlay (`highlight` module), not
//! on the card.

use serde::{Deserialize, Serialize};

/// The four suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

/// Suit color, the unit the tableau alternation rule works in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

impl Suit {
    /// All suits, in deck-construction order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// The suit's color: Hearts/Diamonds are red, Clubs/Spades are black.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    /// Symbol used by renderers.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Suit::Hearts => "\u{2665}",
            Suit::Diamonds => "\u{2666}",
            Suit::Clubs => "\u{2663}",
            Suit::Spades => "\u{2660}",
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Card ranks, Ace low through King.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks, Ace first.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Numeric value: Ace = 1 .. King = 13.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8 + 1
    }

    /// Rank with the given numeric value, if any.
    #[must_use]
    pub fn from_value(value: u8) -> Option<Rank> {
        match value {
            1..=13 => Some(Rank::ALL[value as usize - 1]),
            _ => None,
        }
    }

    /// The next rank up, `None` past King.
    #[must_use]
    pub fn succ(self) -> Option<Rank> {
        Rank::from_value(self.value() + 1)
    }

    /// The next rank down, `None` below Ace.
    #[must_use]
    pub fn pred(self) -> Option<Rank> {
        Rank::from_value(self.value() - 1)
    }

    /// Label used by renderers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A playing card.
///
/// Cards are created once per deal and only move between piles afterwards.
/// The face-up flag is only ever raised during play, with one exception:
/// the stock recycle turns the recycled waste face down again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub face_up: bool,
}

impl Card {
    /// A face-down card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    /// A face-up card.
    #[must_use]
    pub const fn face_up(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: true,
        }
    }

    /// The card's color, from its suit.
    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

//! Core value types: cards, positions, input actions, RNG.
//!
//! Everything here is plain data with no knowledge of the board; the
//! stateful aggregates live in `board` and `game`.

pub mod action;
pub mod card;
pub mod pos;
pub mod rng;

pub use action::Action;
pub use card::{Card, Color, Rank, Suit};
pub use pos::{PileKind, Pos};
pub use rng::GameRng;

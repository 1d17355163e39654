//! Stacking legality: the pure predicates every other component defers to.
//!
//! Two target families exist:
//!
//! - **Foundation**: same-suit ascending runs from Ace. An empty pile takes
//!   only an Ace; otherwise the candidate must be the top's suit and rank+1.
//! - **Tableau**: alternating-color descending runs. An empty column takes
//!   only a King; otherwise the candidate must be the opposite color of the
//!   top and rank-1.
//!
//! Waste and Stock are never legal targets, so they never reach these
//! predicates.

use crate::core::{Card, Suit};

/// Whether two suits have opposite colors.
#[must_use]
pub fn is_opposite_color(a: Suit, b: Suit) -> bool {
    a.color() != b.color()
}

/// Whether `candidate` may be placed on `target`.
///
/// `target` is the current pile top, `None` for an empty pile, and
/// `on_foundation` selects the rule family. Face-up state plays no part
/// here; callers gate on visibility before asking.
#[must_use]
pub fn can_stack(candidate: Card, target: Option<Card>, on_foundation: bool) -> bool {
    if on_foundation {
        return match target {
            None => candidate.rank == crate::core::Rank::Ace,
            Some(top) => candidate.suit == top.suit && top.rank.succ() == Some(candidate.rank),
        };
    }
    match target {
        None => candidate.rank == crate::core::Rank::King,
        Some(top) => {
            is_opposite_color(candidate.suit, top.suit) && candidate.rank.succ() == Some(top.rank)
        }
    }
}

//! The game facade: owns the board and the deal RNG, turns input actions
//! into engine calls, and keeps the board consistent between actions.
//!
//! ## Action handling
//!
//! `handle_action` is strictly turn-based: one action is fully processed -
//! navigation or the Confirm/Cancel protocol plus all derived recompute -
//! before control returns. The result is the binary accepted/rejected
//! taxonomy; rejections are ordinary (illegal step, nothing to confirm)
//! and never leave partial state.
//!
//! ## The two-phase protocol
//!
//! Confirm with nothing held picks up the selected card (rejected when it
//! has no legal destination; moved immediately when it has exactly one).
//! Confirm with a hold drops onto a highlighted slot, or releases when
//! aimed at the source itself. Cancel releases. Confirm on the stock draws
//! or, when the stock is out, recycles the waste.

use log::{debug, trace};

use crate::board::Board;
use crate::core::{Action, GameRng, PileKind, Pos};
use crate::cursor;
use crate::highlight::{self, Highlight};
use crate::moves;

/// An in-progress Klondike game.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    rng: GameRng,
}

impl Game {
    /// Deal a game from an explicit seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let board = Board::deal(&mut rng);
        Self { board, rng }
    }

    /// Deal a game seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        let mut rng = GameRng::from_entropy();
        let board = Board::deal(&mut rng);
        Self { board, rng }
    }

    /// The seed behind this game's deals.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Read access to the full board state.
    ///
    /// Renderers hold this reference; all mutation goes through
    /// `handle_action`.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whether every foundation is topped by a King.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.board.is_won()
    }

    /// Abandon the current board and deal a fresh one.
    pub fn redeal(&mut self) {
        self.board = Board::deal(&mut self.rng);
    }

    /// Re-run the derived-state pass: flip rule, highlight overlay,
    /// dangling-hold cancellation. Idempotent; `handle_action` already
    /// ends with it.
    pub fn update(&mut self) {
        highlight::refresh(&mut self.board);
    }

    /// Process one input action; true if it was accepted.
    pub fn handle_action(&mut self, action: Action) -> bool {
        let board = &mut self.board;
        board.flip_exposed();

        let handled = match action {
            Action::Up | Action::Right | Action::Down | Action::Left => {
                cursor::step(board, action)
            }
            Action::Confirm => confirm(board),
            Action::Cancel => cancel(board),
            // Quitting and its dialogs belong to the UI.
            Action::Quit => false,
        };

        highlight::refresh(board);
        if !handled {
            trace!("rejected {action:?} at {}", self.board.selected);
        }
        handled
    }
}

fn confirm(board: &mut Board) -> bool {
    if board.selected.pile == PileKind::Stock {
        return confirm_stock(board);
    }

    if let Some(source) = board.moving {
        // Confirming the source again releases the hold.
        if board.selected == source {
            board.moving = None;
            return true;
        }
        if board.highlights.is_highlighted(board.selected) {
            return moves::execute(board);
        }
        return false;
    }

    // Pick-up phase: the selected slot must hold a card with somewhere to
    // go. A single candidate skips the drop phase entirely.
    let Some(card) = board.card_at(board.selected) else {
        return false;
    };
    let multi =
        board.selected.pile == PileKind::Tableau && board.run_len(board.selected) > 1;
    let count = highlight::mark_targets(board, card, multi);
    if count == 0 {
        return false;
    }

    board.moving = Some(board.selected);
    if count == 1 {
        if let Some(dest) = sole_highlight(board) {
            board.selected = dest;
            return moves::execute(board);
        }
    }
    true
}

fn confirm_stock(board: &mut Board) -> bool {
    if board.moving.is_some() {
        return false;
    }

    if let Some(mut card) = board.stock.pop() {
        card.face_up = true;
        board.waste.push(card);
        board.selected = Pos::waste();
        debug!("drew {card} from stock");
    } else {
        // Recycle by repeatedly taking the waste top: the pile reverses in
        // place, so the next draw sequence repeats the original order.
        debug!("recycling {} waste cards into stock", board.waste.len());
        while let Some(mut card) = board.waste.pop() {
            card.face_up = false;
            board.stock.push(card);
        }
    }
    true
}

fn cancel(board: &mut Board) -> bool {
    if board.moving.is_some() {
        board.moving = None;
        true
    } else {
        false
    }
}

fn sole_highlight(board: &Board) -> Option<Pos> {
    board
        .highlights
        .iter()
        .find(|&(_, tag)| tag == Highlight::Highlighted)
        .map(|(pos, _)| pos)
}

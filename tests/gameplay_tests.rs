//! End-to-end gameplay scenarios through the public API.
//!
//! Everything here drives a `Game` with input actions or works on a
//! `Board` through the public module functions, the way an embedding UI
//! would.

use klondike_core::{
    can_stack, moves, Action, Board, Card, Game, GameRng, PileKind, Pos, Rank, Suit,
};

// =============================================================================
// Deal
// =============================================================================

/// A fresh deal has the classic 1..7 staircase, a 24-card stock, and
/// nothing anywhere else.
#[test]
fn test_fresh_deal_shape() {
    let game = Game::new(42);
    let board = game.board();

    for (column, pile) in board.tableau.iter().enumerate() {
        assert_eq!(pile.len(), column + 1);
        for card in &pile[..column] {
            assert!(!card.face_up, "only the column top may be exposed");
        }
        assert!(pile[column].face_up);
    }

    assert_eq!(board.stock.len(), 24);
    assert!(board.stock.iter().all(|card| !card.face_up));
    assert!(board.waste.is_empty());
    assert!(board.foundations.iter().all(|pile| pile.is_empty()));
    assert_eq!(board.selected, Pos::tableau(0, 0));
    assert!(board.moving.is_none());
}

/// The same seed deals the same game; different seeds differ.
#[test]
fn test_deals_are_reproducible() {
    assert_eq!(Game::new(7).board(), Game::new(7).board());
    assert_ne!(Game::new(7).board(), Game::new(8).board());

    let entropy = Game::from_entropy();
    let replay = Game::new(entropy.seed());
    assert_eq!(entropy.board(), replay.board());
}

// =============================================================================
// Stacking rules
// =============================================================================

/// Alternating descending on the tableau, same-suit ascending from the
/// Ace on foundations.
#[test]
fn test_can_stack_table() {
    let nine_clubs = Card::face_up(Suit::Clubs, Rank::Nine);
    let ten_diamonds = Card::face_up(Suit::Diamonds, Rank::Ten);
    let ten_clubs = Card::face_up(Suit::Clubs, Rank::Ten);

    assert!(can_stack(nine_clubs, Some(ten_diamonds), false));
    assert!(!can_stack(nine_clubs, Some(ten_clubs), false));

    assert!(can_stack(Card::face_up(Suit::Hearts, Rank::Ace), None, true));
    assert!(!can_stack(Card::face_up(Suit::Hearts, Rank::Two), None, true));
}

// =============================================================================
// Stock and waste
// =============================================================================

/// Walk the cursor from the deal position onto the stock.
fn select_stock(game: &mut Game) {
    game.handle_action(Action::Up);
    while game.board().selected != Pos::stock() {
        assert!(game.handle_action(Action::Right));
    }
}

/// Confirm on the stock moves exactly one card to the waste, face up and
/// selected; when the stock runs out, Confirm recycles the waste face
/// down such that a second pass repeats the first draw order.
#[test]
fn test_draw_and_recycle_cycle() {
    let mut game = Game::new(42);
    select_stock(&mut game);

    let mut first_pass = Vec::new();
    for drawn in 1..=24 {
        assert!(game.handle_action(Action::Confirm));
        let board = game.board();
        assert_eq!(board.waste.len(), drawn);
        assert_eq!(board.stock.len(), 24 - drawn);
        assert_eq!(board.selected, Pos::waste());

        let top = board.waste.last().copied().unwrap();
        assert!(top.face_up);
        first_pass.push((top.suit, top.rank));

        // Waste -> Stock is a single step right.
        assert!(game.handle_action(Action::Right));
    }

    // The stock is out; the next Confirm recycles.
    assert!(game.handle_action(Action::Confirm));
    let board = game.board();
    assert!(board.waste.is_empty());
    assert_eq!(board.stock.len(), 24);
    assert!(board.stock.iter().all(|card| !card.face_up));
    assert_eq!(board.selected, Pos::stock());

    let mut second_pass = Vec::new();
    for _ in 0..24 {
        assert!(game.handle_action(Action::Confirm));
        let top = game.board().waste.last().copied().unwrap();
        second_pass.push((top.suit, top.rank));
        assert!(game.handle_action(Action::Right));
    }
    assert_eq!(first_pass, second_pass);
}

// =============================================================================
// Moves
// =============================================================================

/// A King's run moves onto an empty column and its source slots empty out.
#[test]
fn test_king_run_to_empty_column() {
    let mut board = Board::empty();
    board.tableau[6].push(Card::new(Suit::Diamonds, Rank::Three));
    board.tableau[6].push(Card::face_up(Suit::Spades, Rank::King));
    board.tableau[6].push(Card::face_up(Suit::Hearts, Rank::Queen));
    board.tableau[6].push(Card::face_up(Suit::Clubs, Rank::Jack));

    board.moving = Some(Pos::tableau(6, 1));
    board.selected = Pos::tableau(0, 0);
    assert!(moves::execute(&mut board));

    assert_eq!(
        board.tableau[0]
            .iter()
            .map(|card| card.rank)
            .collect::<Vec<_>>(),
        vec![Rank::King, Rank::Queen, Rank::Jack]
    );
    assert_eq!(board.tableau[6].len(), 1);
    assert!(board.tableau[6][0].face_up, "the uncovered card flips");
}

/// Foundations accept single cards only, never a run.
#[test]
fn test_runs_never_reach_foundations() {
    let mut board = Board::empty();
    board.foundations[0].push(Card::new(Suit::Hearts, Rank::Ace));
    board.tableau[2].push(Card::face_up(Suit::Hearts, Rank::Two));
    board.tableau[2].push(Card::face_up(Suit::Spades, Rank::Ace));

    board.moving = Some(Pos::tableau(2, 0));
    board.selected = Pos::foundation(0);
    assert!(!moves::execute(&mut board));
    assert_eq!(board.tableau[2].len(), 2);
    assert_eq!(board.foundations[0].len(), 1);
}

// =============================================================================
// Serialization
// =============================================================================

/// A board survives a JSON round trip.
#[test]
fn test_board_serde_round_trip() {
    let mut board = Board::deal(&mut GameRng::new(11));
    board.foundations[1].push(Card::new(Suit::Diamonds, Rank::Ace));
    board.selected = Pos::foundation(1);

    let json = serde_json::to_string(&board).unwrap();
    let restored: Board = serde_json::from_str(&json).unwrap();

    assert_eq!(board, restored);
    assert_eq!(restored.selected.pile, PileKind::Foundation);
}

//! Session integration tests.
//!
//! These tests drive a full session through clicks and virtual time:
//! - Flip guards (third card, matched cards, delay windows)
//! - Unflip timing and move counting
//! - Single clock per session
//! - A complete game through to the win banner

use std::collections::BTreeMap;

use rust_pairs::cards::{CardFace, CardIndex, SymbolId};
use rust_pairs::core::{BoardSize, GameConfig};
use rust_pairs::input::{ClickResult, ClickTarget};
use rust_pairs::render::HtmlSurface;
use rust_pairs::rules::{FlipOutcome, IgnoreReason};
use rust_pairs::session::GameSession;
use rust_pairs::timers::TaskKind;

fn session(size: usize, seed: u64) -> GameSession<HtmlSurface> {
    let config = GameConfig::new(BoardSize::new(size).unwrap()).with_seed(seed);
    GameSession::new(config, HtmlSurface::new()).unwrap()
}

/// Board positions grouped by symbol.
fn pairs(session: &GameSession<HtmlSurface>) -> BTreeMap<SymbolId, Vec<CardIndex>> {
    let mut pairs: BTreeMap<SymbolId, Vec<CardIndex>> = BTreeMap::new();
    for card in session.board().cards() {
        pairs.entry(card.symbol).or_default().push(card.index);
    }
    pairs
}

/// Two positions holding different symbols.
fn mismatch(session: &GameSession<HtmlSurface>) -> (CardIndex, CardIndex) {
    let groups: Vec<_> = pairs(session).into_values().collect();
    (groups[0][0], groups[1][0])
}

fn face(session: &GameSession<HtmlSurface>, index: CardIndex) -> CardFace {
    session.board().card(index).unwrap().face
}

// =============================================================================
// Flip guards
// =============================================================================

/// A third flip while two cards are up changes nothing.
#[test]
fn test_third_flip_has_no_effect() {
    let mut session = session(4, 1);
    let (a, b) = mismatch(&session);
    session.flip_card(a);
    session.flip_card(b);

    let third = session
        .board()
        .cards()
        .iter()
        .find(|c| c.face == CardFace::FaceDown)
        .map(|c| c.index)
        .unwrap();
    let board_before = session.board().clone();

    let outcome = session.flip_card(third);
    assert_eq!(outcome, FlipOutcome::Ignored(IgnoreReason::PairPending));
    assert_eq!(session.state().flipped_count, 2);
    assert_eq!(session.board(), &board_before);
    assert_eq!(session.surface().card_face(third.raw()), Some(CardFace::FaceDown));
}

/// Even after a match, new flips wait for the unflip to clear the pair.
#[test]
fn test_flips_blocked_until_unflip_fires() {
    let mut session = session(4, 2);
    let groups: Vec<_> = pairs(&session).into_values().collect();
    session.flip_card(groups[0][0]);
    session.flip_card(groups[0][1]);

    session.advance(2999);
    assert_eq!(
        session.flip_card(groups[1][0]),
        FlipOutcome::Ignored(IgnoreReason::PairPending)
    );

    session.advance(1);
    assert_eq!(session.state().flipped_count, 0);
    assert_eq!(session.flip_card(groups[1][0]), FlipOutcome::FirstFlipped(groups[1][0]));
}

/// Matched cards stay face up through later unflips.
#[test]
fn test_matched_cards_stay_revealed() {
    let mut session = session(4, 3);
    let groups: Vec<_> = pairs(&session).into_values().collect();
    let (a, b) = (groups[0][0], groups[0][1]);

    session.flip_card(a);
    let outcome = session.flip_card(b);
    assert!(matches!(outcome, FlipOutcome::Matched { .. }));
    session.advance(3000);

    // A mismatch afterwards unflips only its own cards
    session.flip_card(groups[1][0]);
    session.flip_card(groups[2][0]);
    session.advance(3000);

    assert_eq!(face(&session, a), CardFace::Matched);
    assert_eq!(face(&session, b), CardFace::Matched);
    assert_eq!(face(&session, groups[1][0]), CardFace::FaceDown);
    assert_eq!(face(&session, groups[2][0]), CardFace::FaceDown);

    // Clicking a matched card is dropped
    assert_eq!(
        session.click(ClickTarget::CardFace { card: a, container_flipped: true }),
        ClickResult::Ignored
    );
    assert_eq!(
        session.flip_card(a),
        FlipOutcome::Ignored(IgnoreReason::AlreadyFlipped)
    );
}

/// A mismatch turns back after exactly the unflip delay and counts once.
#[test]
fn test_mismatch_unflips_after_delay() {
    let mut session = session(4, 4);
    let (a, b) = mismatch(&session);

    session.flip_card(a);
    let outcome = session.flip_card(b);
    assert!(matches!(outcome, FlipOutcome::Mismatched { .. }));
    assert_eq!(session.state().total_moves, 1);

    session.advance(2999);
    assert_eq!(face(&session, a), CardFace::Flipped);
    assert_eq!(face(&session, b), CardFace::Flipped);
    assert_eq!(session.state().flipped_count, 2);

    session.advance(1);
    assert_eq!(face(&session, a), CardFace::FaceDown);
    assert_eq!(face(&session, b), CardFace::FaceDown);
    assert_eq!(session.surface().card_face(a.raw()), Some(CardFace::FaceDown));
    assert_eq!(session.state().flipped_count, 0);
    assert_eq!(session.state().total_moves, 1);
}

// =============================================================================
// Clock
// =============================================================================

/// Starting twice still gives one second of game time per second.
#[test]
fn test_single_clock_per_session() {
    let mut session = session(4, 5);

    assert_eq!(session.click(ClickTarget::StartControl { disabled: false }), ClickResult::Started);
    assert!(!session.start_game());
    assert_eq!(
        session.click(ClickTarget::StartControl { disabled: false }),
        ClickResult::Ignored
    );
    assert_eq!(session.scheduler().pending_of(TaskKind::Tick), 1);

    session.advance(5000);
    assert_eq!(session.state().total_time, 5);
    assert_eq!(session.surface().timer(), "time: 5 sec");
}

/// Flipping a card later does not start a second clock either.
#[test]
fn test_flip_after_start_keeps_one_clock() {
    let mut session = session(4, 6);
    session.start_game();
    session.advance(2000);
    session.flip_card(CardIndex::new(0));
    session.advance(3000);

    assert_eq!(session.state().total_time, 5);
}

/// The disabled start control ignores clicks.
#[test]
fn test_disabled_start_control() {
    let mut session = session(2, 7);
    assert_eq!(
        session.click(ClickTarget::StartControl { disabled: true }),
        ClickResult::Ignored
    );
    assert!(!session.state().started);
}

/// The moves counter is refreshed on the tick, not on the move.
#[test]
fn test_moves_display_refreshes_on_tick() {
    let mut session = session(4, 8);
    let (a, b) = mismatch(&session);
    session.flip_card(a);
    session.flip_card(b);

    assert_eq!(session.surface().moves(), "0 moves");
    session.advance(1000);
    assert_eq!(session.surface().moves(), "1 moves");
}

/// Clicks off the board and the start control do nothing.
#[test]
fn test_other_clicks_ignored() {
    let mut session = session(2, 9);
    assert_eq!(session.click(ClickTarget::Other), ClickResult::Ignored);
    assert_eq!(session.click(ClickTarget::card(99)), ClickResult::Ignored);
    assert!(!session.state().started);
}

// =============================================================================
// End to end
// =============================================================================

/// Size 4: match all eight pairs, win after the delay, clock stops.
#[test]
fn test_full_game_on_four_by_four() {
    // Find a deal that includes the snake so it can be matched first.
    let snake = SymbolId::new(0).unwrap();
    let mut session = (0..)
        .map(|seed| session(4, seed))
        .find(|s| s.board().symbol_counts().contains_key(&snake))
        .unwrap();

    assert_eq!(session.board().len(), 16);
    let counts = session.board().symbol_counts();
    assert_eq!(counts.len(), 8);
    assert!(counts.values().all(|&n| n == 2));

    let mut groups = pairs(&session);
    let first = groups.remove(&snake).unwrap();
    let mut order = vec![first];
    order.extend(groups.into_values());

    // Snake pair first
    assert_eq!(
        session.click(ClickTarget::card(order[0][0].raw())),
        ClickResult::Flip(FlipOutcome::FirstFlipped(order[0][0]))
    );
    let outcome = session.click(ClickTarget::card(order[0][1].raw()));
    assert!(matches!(outcome, ClickResult::Flip(FlipOutcome::Matched { .. })));
    assert_eq!(face(&session, order[0][0]), CardFace::Matched);
    assert_eq!(face(&session, order[0][1]), CardFace::Matched);
    assert_eq!(session.state().total_moves, 1);
    session.advance(3000);

    for (i, pair) in order.iter().enumerate().skip(1) {
        session.flip_card(pair[0]);
        let outcome = session.flip_card(pair[1]);
        if i == order.len() - 1 {
            assert!(outcome.is_win());
        } else {
            assert!(matches!(outcome, FlipOutcome::Matched { .. }));
            session.advance(3000);
        }
    }

    assert_eq!(session.state().total_moves, 8);
    assert!(session.win_pending());
    assert!(!session.is_finished());
    assert_eq!(session.state().total_time, 21);

    // Announcement waits for the win delay
    session.advance(999);
    assert!(!session.is_finished());
    assert!(session.surface().win().is_none());

    session.advance(1);
    assert!(session.is_finished());
    assert!(session.surface().finished());

    let summary = session.summary().unwrap();
    assert_eq!(summary.moves, 8);
    assert_eq!(summary.seconds, 22);
    assert_eq!(session.surface().win(), Some(&summary));
    assert!(session.surface().document().contains("board-container flipped"));
    assert!(!session.state().clock_running());

    // Clock stopped
    session.advance(10_000);
    assert_eq!(session.state().total_time, 22);
    assert_eq!(session.scheduler().pending(), 0);
    assert!(session.board().cards().iter().all(|c| c.is_matched()));

    // Finished board takes no more input
    assert_eq!(
        session.flip_card(CardIndex::new(0)),
        FlipOutcome::Ignored(IgnoreReason::Finished)
    );
}

/// The move history mirrors what happened.
#[test]
fn test_history_records_moves() {
    let mut session = session(4, 11);
    let (a, b) = mismatch(&session);
    session.flip_card(a);
    session.flip_card(b);
    session.advance(3000);

    let groups: Vec<_> = pairs(&session).into_values().collect();
    session.flip_card(groups[0][0]);
    session.flip_card(groups[0][1]);

    let history = &session.state().history;
    assert_eq!(history.len(), 2);
    assert!(!history[0].matched);
    assert_eq!(history[0].at_seconds, 0);
    assert!(history[1].matched);
    assert_eq!(history[1].number, 2);
    assert_eq!(history[1].at_seconds, 3);
    assert_eq!(session.state().matches_found(), 1);
}

/// Reset after a win deals a fresh, playable board.
#[test]
fn test_reset_after_win() {
    let mut session = session(2, 12);
    for pair in pairs(&session).into_values() {
        session.flip_card(pair[0]);
        session.flip_card(pair[1]);
        session.advance(3000);
    }
    assert!(session.is_finished());

    session.reset().unwrap();
    assert!(!session.is_finished());
    assert!(session.surface().win().is_none());
    assert!(!session.surface().finished());
    assert_eq!(session.state().total_time, 0);

    assert!(matches!(
        session.flip_card(CardIndex::new(0)),
        FlipOutcome::FirstFlipped(_)
    ));
    assert!(session.state().clock_running());
}

/// Reset while the win is pending drops the announcement.
#[test]
fn test_reset_cancels_pending_win() {
    let mut session = session(2, 13);
    let groups: Vec<_> = pairs(&session).into_values().collect();

    session.flip_card(groups[0][0]);
    session.flip_card(groups[0][1]);
    session.advance(3000);
    session.flip_card(groups[1][0]);
    assert!(session.flip_card(groups[1][1]).is_win());
    assert!(session.win_pending());
    assert_eq!(session.scheduler().pending_of(TaskKind::DeclareWin), 1);

    session.reset().unwrap();
    assert!(!session.win_pending());
    assert_eq!(session.scheduler().pending(), 0);

    session.advance(5000);
    assert!(!session.is_finished());
    assert!(session.surface().win().is_none());
    assert!(!session.surface().finished());
    assert_eq!(
        session.flip_card(CardIndex::new(0)),
        FlipOutcome::FirstFlipped(CardIndex::new(0))
    );
}

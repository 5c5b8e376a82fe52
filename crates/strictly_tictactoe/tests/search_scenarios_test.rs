//! Optimal-play scenarios for the search engine.

use std::collections::HashSet;
use strictly_tictactoe::{
    Action, Board, Player, SearchStrategy, actions, evaluate, initial_state, minimax,
    minimax_exhaustive, player, result, self_play, terminal, utility, winner,
};

/// Plays every possible opponent line against the engine.
///
/// Returns false if any line ends in a win for the opponent.
fn engine_never_loses(board: &Board, engine: Player) -> bool {
    if terminal(board) {
        return winner(board) != Some(engine.opponent());
    }

    if player(board) == engine {
        let action = minimax(board).unwrap().expect("live board has a move");
        engine_never_loses(&result(board, action).unwrap(), engine)
    } else {
        actions(board)
            .into_iter()
            .all(|action| engine_never_loses(&result(board, action).unwrap(), engine))
    }
}

/// Collects every reachable board with at most `max_empty` empty cells.
fn reachable(board: &Board, max_empty: usize, out: &mut HashSet<Board>) {
    if board.empty_count() <= max_empty {
        out.insert(*board);
    }
    if terminal(board) {
        return;
    }
    for action in actions(board) {
        reachable(&result(board, action).unwrap(), max_empty, out);
    }
}

#[test]
fn test_opening_move_is_corner_or_center() {
    let action = minimax(&initial_state()).unwrap().unwrap();
    let corners_and_center = [
        Action::new(0, 0),
        Action::new(0, 2),
        Action::new(1, 1),
        Action::new(2, 0),
        Action::new(2, 2),
    ];
    assert!(corners_and_center.contains(&action));
}

#[test]
fn test_engine_self_play_draws() {
    let outcome = self_play(initial_state(), SearchStrategy::AlphaBeta).unwrap();
    assert!(outcome.outcome().is_draw());
    assert_eq!(utility(outcome.board()), 0);
}

#[test]
fn test_engine_as_x_never_loses() {
    assert!(engine_never_loses(&initial_state(), Player::X));
}

#[test]
fn test_engine_as_o_never_loses() {
    assert!(engine_never_loses(&initial_state(), Player::O));
}

#[test]
fn test_x_completes_winning_row() {
    let board: Board = "XX. OO. ...".parse().unwrap();
    assert_eq!(player(&board), Player::X);
    assert_eq!(minimax(&board).unwrap(), Some(Action::new(0, 2)));
}

#[test]
fn test_o_blocks_open_line() {
    for (text, block) in [
        ("XX. .O. ...", Action::new(0, 2)),
        ("... .O. XX.", Action::new(2, 2)),
        ("X.. .O. X..", Action::new(1, 0)),
    ] {
        let board: Board = text.parse().unwrap();
        assert_eq!(player(&board), Player::O, "{}", text);
        assert_eq!(minimax(&board).unwrap(), Some(block), "{}", text);
    }
}

#[test]
fn test_full_board_has_no_move() {
    let board: Board = "XOX XOO OXX".parse().unwrap();
    assert!(terminal(&board));
    assert_eq!(winner(&board), None);
    assert_eq!(utility(&board), 0);
    assert_eq!(minimax(&board).unwrap(), None);
}

#[test]
fn test_strategies_agree_on_late_positions() {
    let mut boards = HashSet::new();
    reachable(&initial_state(), 5, &mut boards);
    assert!(!boards.is_empty());

    for board in &boards {
        let pruned = evaluate(board, SearchStrategy::AlphaBeta).unwrap();
        let full = evaluate(board, SearchStrategy::Exhaustive).unwrap();
        assert_eq!(pruned.value(), full.value(), "value differs on\n{}", board);
        assert_eq!(pruned.action(), full.action(), "action differs on\n{}", board);
        assert!(pruned.stats().nodes() <= full.stats().nodes());
        assert_eq!(minimax(board).unwrap(), minimax_exhaustive(board).unwrap());
    }
}

#[test]
fn test_chosen_action_achieves_the_value() {
    let mut boards = HashSet::new();
    reachable(&initial_state(), 6, &mut boards);

    for board in boards.iter().filter(|b| !terminal(b)) {
        let eval = evaluate(board, SearchStrategy::AlphaBeta).unwrap();
        let action = eval.action().expect("live board has a move");
        let child = result(board, action).unwrap();
        let child_eval = evaluate(&child, SearchStrategy::AlphaBeta).unwrap();
        assert_eq!(child_eval.value(), eval.value(), "on\n{}", board);
    }
}

#[test]
fn test_evaluation_serializes() {
    let board: Board = "XX. OO. ...".parse().unwrap();
    let eval = evaluate(&board, SearchStrategy::AlphaBeta).unwrap();
    let json = serde_json::to_value(eval).unwrap();
    assert_eq!(json["value"], 1);
    assert_eq!(json["action"]["row"], 0);
    assert_eq!(json["action"]["col"], 2);
    assert!(json["stats"]["nodes"].as_u64().unwrap() >= 2);
}

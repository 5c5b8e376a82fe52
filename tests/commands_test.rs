//! Tests for the command reports.

use strictly_minimax::{
    Board, GameStatus, OutputFormat, Player, SearchStrategy, best_move, render, status_report,
};

#[test]
fn test_status_report_counts_actions() {
    let board: Board = "X.. .O. ...".parse().unwrap();
    let report = status_report(&board);
    assert_eq!(*report.legal_actions(), 7);
    assert_eq!(*report.to_move(), Some(Player::X));
    assert_eq!(*report.status(), GameStatus::InProgress);
}

#[test]
fn test_status_report_json() {
    let board: Board = "XOX XOO OXX".parse().unwrap();
    let json = render(&status_report(&board), OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["status"], "Draw");
    assert_eq!(value["utility"], 0);
    assert!(value["to_move"].is_null());
}

#[test]
fn test_strategies_report_same_move() {
    let board: Board = "X.. .O. ...".parse().unwrap();
    let pruned = best_move(&board, SearchStrategy::AlphaBeta).unwrap();
    let full = best_move(&board, SearchStrategy::Exhaustive).unwrap();
    assert_eq!(pruned.evaluation().action(), full.evaluation().action());
    assert_eq!(pruned.evaluation().value(), full.evaluation().value());
    assert!(pruned.evaluation().stats().nodes() < full.evaluation().stats().nodes());
}

/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use chess_arbiter::{
    fetch_move_path, Board, Camp, ChessError, GameState, Piece, PieceKind, Square,
};

fn white(kind: PieceKind) -> Piece {
    Piece::new(Camp::White, kind)
}

fn black(kind: PieceKind) -> Piece {
    Piece::new(Camp::Black, kind)
}

#[test]
fn test_rook_path_on_empty_board() {
    let path = fetch_move_path(white(PieceKind::Rook), Square::A1, Square::A8).unwrap();
    let expected = ["a2", "a3", "a4", "a5", "a6", "a7", "a8"]
        .map(|code| Square::from_uci(code).unwrap());

    assert_eq!(path.squares(), &expected);
}

#[test]
fn test_rook_blocked_by_own_pawn() {
    let mut board = Board::empty();
    board.place(white(PieceKind::Rook), Square::A1);
    board.place(white(PieceKind::Pawn), Square::A4);
    let before = board;

    let err = board.apply_move(Square::A1, Square::A8).unwrap_err();
    assert!(matches!(err, ChessError::BlockedPath { at, .. } if at == Square::A4));
    assert_eq!(board, before);
}

#[test]
fn test_rook_captures_pawn() {
    let mut board = Board::empty();
    board.place(white(PieceKind::Rook), Square::A1);
    board.place(black(PieceKind::Pawn), Square::A5);

    let captured = board.apply_move(Square::A1, Square::A5).unwrap();
    assert_eq!(captured, black(PieceKind::Pawn));
    assert_eq!(board.get(Square::A1), Piece::EMPTY);
    assert_eq!(board.get(Square::A5), white(PieceKind::Rook));
}

#[test]
fn test_rook_cannot_capture_friend() {
    let mut board = Board::empty();
    board.place(white(PieceKind::Rook), Square::A1);
    board.place(white(PieceKind::Pawn), Square::A5);

    assert_eq!(
        board.apply_move(Square::A1, Square::A5),
        Err(ChessError::FriendlyFire(Square::A5))
    );
}

#[test]
fn test_doubled_pawns_score() {
    let mut board = Board::empty();
    board.place(white(PieceKind::Pawn), Square::A2);
    board.place(white(PieceKind::Pawn), Square::A4);

    let game = GameState::from_board(board, Camp::White);
    assert_eq!(game.score(Camp::White).as_f64(), 1.0);
    assert_eq!(game.scores().white.to_string(), "1.0");
}

#[test]
fn test_king_capture_ends_the_game() {
    let mut game = GameState::new();
    game.initialize().unwrap();

    // Fool's mate, followed by taking the King
    for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4"), ("a2", "a3")] {
        game.apply_move(from, to).unwrap();
    }
    assert!(!game.is_finished());

    let outcome = game.apply_move("h4", "e1").unwrap();
    assert!(outcome.finished);
    assert_eq!(outcome.record.captured, PieceKind::King);
    assert!(game.is_finished());

    assert_eq!(game.apply_move("a3", "a4"), Err(ChessError::NotRunning));
}

#[test]
fn test_paths_stay_on_the_board() {
    for kind in PieceKind::all() {
        for camp in Camp::all() {
            let piece = Piece::new(camp, kind);
            for from in Square::iter() {
                for to in Square::iter() {
                    if let Ok(path) = fetch_move_path(piece, from, to) {
                        assert_eq!(path.target(), to);
                        // Every square is a real square, and none repeats the origin
                        assert!(path.squares().iter().all(|&sq| sq != from));
                        assert!(path.squares().len() <= 7);
                    }
                }
            }
        }
    }
}

#[test]
fn test_rejected_moves_never_change_the_game() {
    let mut game = GameState::new();
    game.initialize().unwrap();
    game.apply_move("e2", "e4").unwrap();
    game.apply_move("d7", "d5").unwrap();

    let before = game.clone();
    for (from, to) in [
        ("d1", "d3"), // blocked by own pawn
        ("e4", "e6"), // double step off the starting rank
        ("e4", "f5"), // diagonal without capture
        ("d5", "d4"), // not Black's turn
        ("f1", "f1"), // zero-length
        ("b1", "d2"), // occupied by own pawn
        ("c1", "c3"), // bishop moving straight
    ] {
        let err = game.apply_move(from, to).unwrap_err();
        assert!(err.is_illegal_move(), "{from}{to}: {err}");
        assert_eq!(game, before, "{from}{to} changed the game");
    }

    // The capture itself is fine
    let outcome = game.apply_move("e4", "d5").unwrap();
    assert_eq!(outcome.record.captured, PieceKind::Pawn);
}

#[test]
fn test_turn_parity_over_a_game() {
    let mut game = GameState::new();
    game.initialize().unwrap();

    let moves = [
        ("e2", "e4"),
        ("e7", "e5"),
        ("g1", "f3"),
        ("b8", "c6"),
        ("f1", "c4"),
        ("g8", "f6"),
        ("d2", "d3"),
        ("f8", "c5"),
    ];

    for (n, (from, to)) in moves.into_iter().enumerate() {
        game.apply_move(from, to).unwrap();
        let played = n + 1;
        assert_eq!(game.turn() == Camp::White, played % 2 == 0);
    }
}

#[test]
fn test_restore_from_stored_snapshot() {
    let mut game = GameState::new();
    game.initialize().unwrap();
    let outcome = game.apply_move("b1", "c3").unwrap();

    let json = serde_json::to_string(&outcome.position).unwrap();
    let stored: chess_arbiter::GameRecord = serde_json::from_str(&json).unwrap();

    let mut resumed = GameState::restore_from(&stored.board, stored.turn.code()).unwrap();
    assert_eq!(resumed.board(), game.board());
    assert_eq!(resumed.turn(), Camp::Black);

    // White cannot move twice in a row after resuming either
    assert!(matches!(
        resumed.apply_move("c3", "e4"),
        Err(ChessError::WrongCamp { .. })
    ));
    resumed.apply_move("g8", "f6").unwrap();
}

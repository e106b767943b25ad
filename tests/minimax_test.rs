//! Tests for the minimax move selector.

use tictac::{Board, Game, GameStatus, Player, Position, Square, best_move};

fn board_with(x: &[Position], o: &[Position]) -> Board {
    let mut board = Board::new();
    for &pos in x {
        board.set(pos, Square::Occupied(Player::X));
    }
    for &pos in o {
        board.set(pos, Square::Occupied(Player::O));
    }
    board
}

#[test]
fn test_takes_immediate_win() {
    // O has TopLeft and TopCenter, completing the top row wins now.
    let board = board_with(
        &[Position::MiddleLeft, Position::Center, Position::BottomCenter],
        &[Position::TopLeft, Position::TopCenter],
    );
    assert_eq!(best_move(&board, Player::O), Some(Position::TopRight));
}

#[test]
fn test_blocks_immediate_threat() {
    // X threatens the top row; the only non-losing reply is TopRight.
    let board = board_with(
        &[Position::TopLeft, Position::TopCenter],
        &[Position::Center],
    );
    assert_eq!(best_move(&board, Player::O), Some(Position::TopRight));
}

#[test]
fn test_tie_break_takes_first_best_square() {
    // Every opening scores a draw under perfect play, so the first square
    // in row-major order wins the tie for either side.
    let board = Board::new();
    assert_eq!(best_move(&board, Player::X), Some(Position::TopLeft));
    assert_eq!(best_move(&board, Player::O), Some(Position::TopLeft));
}

#[test]
fn test_no_move_when_game_is_decided() {
    let board = board_with(
        &[Position::TopLeft, Position::TopCenter, Position::TopRight],
        &[Position::MiddleLeft, Position::Center],
    );
    assert_eq!(best_move(&board, Player::O), None);
}

#[test]
fn test_no_move_on_full_board() {
    // Drawn position with every square taken.
    let board = board_with(
        &[
            Position::TopLeft,
            Position::TopRight,
            Position::MiddleRight,
            Position::BottomCenter,
            Position::BottomLeft,
        ],
        &[
            Position::TopCenter,
            Position::MiddleLeft,
            Position::Center,
            Position::BottomRight,
        ],
    );
    assert_eq!(board.winner(), None);
    assert!(board.is_full());
    assert_eq!(best_move(&board, Player::O), None);
}

/// Plays the selector as O against every X strategy. A correct minimax
/// player can always hold tic-tac-toe to at least a draw, so X must never
/// produce a winning line.
#[test]
fn test_selector_never_loses_as_second_player() {
    fn explore(board: &Board) {
        match board.winner() {
            Some(Player::X) => panic!("X won against the selector:\n{}", board.display()),
            Some(Player::O) => return,
            None => {}
        }
        if board.is_full() {
            return;
        }
        // Branch over every legal X move.
        for x_pos in Position::valid_moves(board) {
            let mut next = board.clone();
            next.set(x_pos, Square::Occupied(Player::X));
            // The selector answers with its single chosen reply.
            if let Some(o_pos) = best_move(&next, Player::O) {
                next.set(o_pos, Square::Occupied(Player::O));
            }
            explore(&next);
        }
    }

    explore(&Board::new());
}

/// End-to-end through the engine: X opens in the center, the selector
/// answers every continuation as O, and no X strategy forces an O loss.
#[test]
fn test_center_opening_cannot_beat_the_selector() {
    fn explore(game: &Game) {
        match game.status() {
            GameStatus::Won(Player::X) => {
                panic!("X forced a win:\n{}", game.board().display())
            }
            GameStatus::Won(Player::O) | GameStatus::Draw => return,
            GameStatus::InProgress => {}
            GameStatus::Idle => unreachable!("game was started"),
        }
        match game.to_move() {
            // O answers with its single selected move.
            Player::O => {
                let mut next = game.clone();
                let pos =
                    best_move(next.board(), Player::O).expect("in-progress board has a move");
                next.play(pos).unwrap();
                explore(&next);
            }
            // X branches over every legal continuation.
            Player::X => {
                for pos in Position::valid_moves(game.board()) {
                    let mut next = game.clone();
                    next.play(pos).unwrap();
                    explore(&next);
                }
            }
        }
    }

    let mut game = Game::new();
    game.start();
    game.play(Position::Center).unwrap();
    explore(&game);
}

//! Exhaustive minimax search for the AI opponent.
//!
//! Scoring is fixed regardless of which side the AI plays: an X win is
//! worth -10, an O win +10, a draw 0. O maximizes and X minimizes. There is
//! no depth discounting; ties between equal-scoring moves resolve to the
//! first position found in row-major order. Memoization and pruning are
//! deliberately absent, the full tree is at most 9! nodes.

use super::position::Position;
use super::rules;
use super::types::{Board, Player, Square};
use tracing::instrument;

const X_WIN: i32 = -10;
const O_WIN: i32 = 10;
const DRAW: i32 = 0;

/// Picks the best move for `player` on the given board.
///
/// Returns `None` when the board is terminal (already won or full).
#[instrument(skip(board))]
pub fn best_move(board: &Board, player: Player) -> Option<Position> {
    if rules::check_winner(board).is_some() {
        return None;
    }

    let mut board = board.clone();
    let mut best: Option<(Position, i32)> = None;

    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        board.set(pos, Square::Occupied(player));
        let score = minimax(&mut board, player.opponent());
        board.set(pos, Square::Empty);

        // Strict comparison keeps the first-found move on ties.
        let improved = match best {
            None => true,
            Some((_, best_score)) => match player {
                Player::O => score > best_score,
                Player::X => score < best_score,
            },
        };
        if improved {
            best = Some((pos, score));
        }
    }

    best.map(|(pos, _)| pos)
}

/// Scores the board for the side to move, searching to the end of the game.
fn minimax(board: &mut Board, to_move: Player) -> i32 {
    if let Some(winner) = rules::check_winner(board) {
        return match winner {
            Player::X => X_WIN,
            Player::O => O_WIN,
        };
    }
    if rules::is_full(board) {
        return DRAW;
    }

    let mut best = match to_move {
        Player::O => i32::MIN,
        Player::X => i32::MAX,
    };

    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        board.set(pos, Square::Occupied(to_move));
        let score = minimax(board, to_move.opponent());
        board.set(pos, Square::Empty);

        best = match to_move {
            Player::O => best.max(score),
            Player::X => best.min(score),
        };
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_is_a_draw_under_optimal_play() {
        let mut board = Board::new();
        assert_eq!(minimax(&mut board, Player::X), DRAW);
    }

    #[test]
    fn test_terminal_scores() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        assert_eq!(minimax(&mut board, Player::O), X_WIN);

        let mut board = Board::new();
        board.set(Position::MiddleLeft, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::O));
        board.set(Position::MiddleRight, Square::Occupied(Player::O));
        assert_eq!(minimax(&mut board, Player::X), O_WIN);
    }

    #[test]
    fn test_best_move_none_on_won_board() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::Center, Square::Occupied(Player::X));
        board.set(Position::BottomRight, Square::Occupied(Player::X));
        assert_eq!(best_move(&board, Player::O), None);
    }

    #[test]
    fn test_best_move_none_on_full_board() {
        let mut board = Board::new();
        // X O X / O O X / X X O, no winner
        let marks = [
            Player::X,
            Player::O,
            Player::X,
            Player::O,
            Player::O,
            Player::X,
            Player::X,
            Player::X,
            Player::O,
        ];
        for (pos, mark) in Position::ALL.into_iter().zip(marks) {
            board.set(pos, Square::Occupied(mark));
        }
        assert_eq!(best_move(&board, Player::X), None);
    }
}

//! Heuristic move picker: win, block, centre, corner, anything.

use rand::Rng;
use rand::seq::IndexedRandom;

use super::{LINES, Mark, TicTacToe};

const CENTER: usize = 5;
const CORNERS: [usize; 4] = [1, 3, 7, 9];

/// A free cell that completes a line for `mark`, 1-based.
pub fn winning_move(board: &TicTacToe, mark: Mark) -> Option<usize> {
    LINES.iter().find_map(|line| {
        let owned = line
            .iter()
            .filter(|&&i| board.cell_at(i) == Some(mark))
            .count();
        let free: Vec<usize> = line
            .iter()
            .copied()
            .filter(|&i| board.cell_at(i).is_none())
            .collect();
        (owned == 2 && free.len() == 1).then(|| free[0] + 1)
    })
}

/// Pick a 1-based cell for `mark`, or `None` once the game is decided.
pub fn choose_move<R: Rng + ?Sized>(board: &TicTacToe, mark: Mark, rng: &mut R) -> Option<usize> {
    if board.outcome().is_some() {
        return None;
    }
    if let Some(cell) = winning_move(board, mark) {
        return Some(cell);
    }
    if let Some(cell) = winning_move(board, mark.opponent()) {
        return Some(cell);
    }
    if board.get(CENTER).is_none() {
        return Some(CENTER);
    }

    let corners: Vec<usize> = CORNERS
        .iter()
        .copied()
        .filter(|&c| board.get(c).is_none())
        .collect();
    if let Some(&cell) = corners.choose(rng) {
        return Some(cell);
    }

    let free: Vec<usize> = board.free_cells().collect();
    free.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::{choose_move, winning_move};
    use crate::tictactoe::{Mark, TicTacToe};

    fn board_from(moves: &[(usize, Mark)]) -> TicTacToe {
        let mut board = TicTacToe::new();
        for &(cell, mark) in moves {
            board.play(cell, mark).unwrap();
        }
        board
    }

    fn rng() -> rand::rngs::StdRng {
        rand::rngs::StdRng::seed_from_u64(0x71C7_AC70)
    }

    #[test]
    fn takes_the_win_over_the_block() {
        let board = board_from(&[
            (1, Mark::O),
            (2, Mark::O),
            (4, Mark::X),
            (5, Mark::X),
        ]);
        assert_eq!(choose_move(&board, Mark::X, &mut rng()), Some(6));
        assert_eq!(choose_move(&board, Mark::O, &mut rng()), Some(3));
    }

    #[test]
    fn blocks_the_opponent() {
        let board = board_from(&[(1, Mark::X), (5, Mark::O), (9, Mark::X), (3, Mark::O)]);
        // O threatens 3-5-7; X has no line of its own.
        assert_eq!(winning_move(&board, Mark::X), None);
        assert_eq!(choose_move(&board, Mark::X, &mut rng()), Some(7));
    }

    #[test]
    fn prefers_centre_then_corner() {
        assert_eq!(choose_move(&TicTacToe::new(), Mark::X, &mut rng()), Some(5));

        let board = board_from(&[(5, Mark::O)]);
        let cell = choose_move(&board, Mark::X, &mut rng()).unwrap();
        assert!([1, 3, 7, 9].contains(&cell));
    }

    #[test]
    fn falls_back_to_an_edge() {
        // X O X
        // . X .
        // O X O
        let board = board_from(&[
            (1, Mark::X),
            (2, Mark::O),
            (3, Mark::X),
            (5, Mark::X),
            (7, Mark::O),
            (8, Mark::X),
            (9, Mark::O),
        ]);
        assert_eq!(winning_move(&board, Mark::X), None);
        assert_eq!(winning_move(&board, Mark::O), None);
        let cell = choose_move(&board, Mark::X, &mut rng()).unwrap();
        assert!([4, 6].contains(&cell));
    }

    #[test]
    fn nothing_to_do_when_decided() {
        let won = board_from(&[(1, Mark::X), (2, Mark::X), (3, Mark::X)]);
        assert_eq!(choose_move(&won, Mark::O, &mut rng()), None);
    }
}

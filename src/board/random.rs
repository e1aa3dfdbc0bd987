use rand::Rng;

use super::error::BoardError;
use super::grid::{Board, cell_count};

/// Board of `height` rows by `width` columns where each cell is alive with
/// probability `prob`.
pub fn random_board<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    prob: f64,
    rng: &mut R,
) -> Result<Board, BoardError> {
    if !(0.0..=1.0).contains(&prob) {
        return Err(BoardError::InvalidProbability(prob));
    }
    let len = cell_count(height, width)?;
    let cells = (0..len)
        .map(|_| rng.random_bool(prob) as u8)
        .collect();
    Ok(Board::from_raw(height, width, cells))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::random_board;
    use crate::board::BoardError;

    #[test]
    fn dimensions_follow_width_and_height() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let board = random_board(5, 3, 0.5, &mut rng).unwrap();
        assert_eq!(board.dims(), (3, 5));
    }

    #[test]
    fn extreme_probabilities_are_exact() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        assert!(random_board(8, 8, 0.0, &mut rng).unwrap().is_empty());
        assert_eq!(random_board(8, 8, 1.0, &mut rng).unwrap().population(), 64);
    }

    #[test]
    fn same_seed_same_board() {
        let a = random_board(16, 16, 0.3, &mut rand::rngs::StdRng::seed_from_u64(42)).unwrap();
        let b = random_board(16, 16, 0.3, &mut rand::rngs::StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_out_of_range_probability() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        assert!(matches!(
            random_board(2, 2, 1.5, &mut rng),
            Err(BoardError::InvalidProbability(p)) if p == 1.5
        ));
        assert!(random_board(2, 2, f64::NAN, &mut rng).is_err());
    }

    #[test]
    fn rejects_overflowing_dimensions() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        assert!(matches!(
            random_board(1 << 63, 2, 0.5, &mut rng),
            Err(BoardError::TooLarge { rows: 2, cols }) if cols == 1 << 63
        ));
    }
}

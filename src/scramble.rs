use rand::{seq::SliceRandom, Rng};

use crate::{board::Board, error::BoardError, moves::Move};

/// Decides solvability from the inversion parity of the tiles.
///
/// On an odd-sized board the inversion count must be even. On an even-sized
/// board the inversion count plus the blank's row must be odd.
pub fn is_solvable(board: &Board) -> bool {
    let inversions = count_inversions(board.tiles());
    let size = board.dimension();
    if size % 2 == 1 {
        inversions % 2 == 0
    } else {
        (inversions + board.blank().0) % 2 == 1
    }
}

fn count_inversions(tiles: &[u32]) -> usize {
    tiles
        .iter()
        .enumerate()
        .filter(|&(_, &val)| val != 0)
        .map(|(i, &val)| {
            tiles[i + 1..]
                .iter()
                .filter(|&&next| next != 0 && next < val)
                .count()
        })
        .sum()
}

/// A uniformly shuffled board, reshuffled until it is solvable.
pub fn shuffled<R: Rng + ?Sized>(dimension: usize, rng: &mut R) -> Result<Board, BoardError> {
    let mut tiles = Board::goal(dimension)?.tiles().to_vec();
    loop {
        tiles.shuffle(rng);
        let board = Board::from_tiles(dimension, tiles.clone())?;
        if is_solvable(&board) {
            return Ok(board);
        }
    }
}

/// A board reached from the goal by `steps` random slides, never undoing
/// the previous slide.
///
/// The result is at most `steps` moves from the goal.
pub fn random_walk<R: Rng + ?Sized>(
    dimension: usize,
    steps: usize,
    rng: &mut R,
) -> Result<Board, BoardError> {
    let mut board = Board::goal(dimension)?;
    let mut last: Option<Move> = None;
    for _ in 0..steps {
        let options: Vec<Move> = Move::ALL
            .into_iter()
            .filter(|&m| last != Some(m.opposite()))
            .filter(|&m| m.target(board.blank(), dimension).is_some())
            .collect();
        let Some(&movement) = options.choose(rng) else {
            break;
        };
        let Some(next) = board.apply(movement) else {
            break;
        };
        last = Some(movement);
        board = next;
    }
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn counts_inversions() {
        assert_eq!(count_inversions(&[1, 2, 3, 0]), 0);
        assert_eq!(count_inversions(&[2, 1, 3, 0]), 1);
        assert_eq!(count_inversions(&[0, 3, 2, 1]), 3);
        assert_eq!(count_inversions(&[8, 1, 3, 4, 0, 2, 7, 6, 5]), 12);
    }

    #[test]
    fn parity_of_goal_and_twin() {
        for n in 2..=5 {
            let goal = Board::goal(n).unwrap();
            assert!(is_solvable(&goal));
            assert!(!is_solvable(&goal.twin().unwrap()));
        }
        assert!(is_solvable(&Board::goal(1).unwrap()));
    }

    #[test]
    fn slides_preserve_parity() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in 2..=5 {
            let board = random_walk(n, 40, &mut rng).unwrap();
            assert!(is_solvable(&board));
            for next in board.neighbors() {
                assert!(is_solvable(&next));
            }
        }
    }

    #[test]
    fn shuffled_boards_are_solvable() {
        let mut rng = StdRng::seed_from_u64(42);
        for n in 1..=4 {
            for _ in 0..20 {
                let board = shuffled(n, &mut rng).unwrap();
                assert_eq!(board.dimension(), n);
                assert!(is_solvable(&board));
            }
        }
    }

    #[test]
    fn random_walk_stays_within_steps() {
        let mut rng = StdRng::seed_from_u64(3);
        for steps in 0..30 {
            let board = random_walk(3, steps, &mut rng).unwrap();
            assert!(board.manhattan() as usize <= steps);
        }
        assert!(random_walk(1, 10, &mut rng).unwrap().is_goal());
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = shuffled(4, &mut StdRng::seed_from_u64(11)).unwrap();
        let b = shuffled(4, &mut StdRng::seed_from_u64(11)).unwrap();
        assert_eq!(a, b);
    }
}

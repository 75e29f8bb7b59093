use std::{
    array, fmt,
    hash::{Hash, Hasher},
    iter::FusedIterator,
    slice,
};

use crate::{error::BoardError, moves::Move};

/// Largest side length accepted by the constructors.
pub const MAX_DIMENSION: usize = 255;

/// An immutable sliding-puzzle position.
///
/// Tiles are stored row-major; `0` is the blank and `1..N²` are the numbered
/// tiles. The goal places tile `v` at row `(v - 1) / N`, column
/// `(v - 1) % N` with the blank in the last cell.
///
/// The Hamming and Manhattan distances to the goal are cached. Boards derived
/// from another board by a single slide update them from the two swapped
/// cells only.
#[derive(Debug, Clone)]
pub struct Board {
    dimension: usize,
    tiles: Vec<u32>,
    blank: (usize, usize),
    hamming: u32,
    manhattan: u32,
}

fn goal_cell(tile: u32, dimension: usize) -> (usize, usize) {
    let index = tile as usize - 1;
    (index / dimension, index % dimension)
}

fn distance(tile: u32, (row, col): (usize, usize), dimension: usize) -> u32 {
    let (goal_row, goal_col) = goal_cell(tile, dimension);
    (row.abs_diff(goal_row) + col.abs_diff(goal_col)) as u32
}

fn check_dimension(dimension: usize) -> Result<(), BoardError> {
    if dimension == 0 {
        return Err(BoardError::Empty);
    }
    if dimension > MAX_DIMENSION {
        return Err(BoardError::DimensionTooLarge {
            dimension,
            max: MAX_DIMENSION,
        });
    }
    Ok(())
}

impl Board {
    /// Builds a board from an `N`-by-`N` grid, where `grid[i][j]` is the tile
    /// in row `i`, column `j`.
    ///
    /// # Errors
    ///
    /// Fails unless the grid is square and holds each of `0..N²` exactly once.
    pub fn new<R: AsRef<[u32]>>(grid: &[R]) -> Result<Self, BoardError> {
        let dimension = grid.len();
        check_dimension(dimension)?;
        for (row, cells) in grid.iter().enumerate() {
            let len = cells.as_ref().len();
            if len != dimension {
                return Err(BoardError::NotSquare {
                    row,
                    len,
                    dimension,
                });
            }
        }
        let tiles = grid
            .iter()
            .flat_map(|row| row.as_ref().iter().copied())
            .collect();
        Self::from_tiles(dimension, tiles)
    }

    /// Builds a board from `dimension²` tiles in row-major order.
    ///
    /// # Errors
    ///
    /// Fails unless `tiles` is a permutation of `0..dimension²`.
    pub fn from_tiles(dimension: usize, tiles: Vec<u32>) -> Result<Self, BoardError> {
        check_dimension(dimension)?;
        let expected = dimension * dimension;
        if tiles.len() != expected {
            return Err(BoardError::WrongTileCount {
                expected,
                found: tiles.len(),
            });
        }
        let Some(blank_index) = tiles.iter().position(|&tile| tile == 0) else {
            return Err(BoardError::MissingBlank);
        };

        let mut seen = vec![false; expected];
        let mut hamming = 0;
        let mut manhattan = 0;
        for (index, &tile) in tiles.iter().enumerate() {
            if tile as usize >= expected {
                return Err(BoardError::TileOutOfRange { tile, dimension });
            }
            if std::mem::replace(&mut seen[tile as usize], true) {
                return Err(BoardError::DuplicateTile { tile });
            }
            if tile != 0 {
                let d = distance(tile, (index / dimension, index % dimension), dimension);
                if d > 0 {
                    hamming += 1;
                    manhattan += d;
                }
            }
        }

        Ok(Self {
            dimension,
            tiles,
            blank: (blank_index / dimension, blank_index % dimension),
            hamming,
            manhattan,
        })
    }

    /// The solved board of the given side length.
    ///
    /// # Errors
    ///
    /// Fails for a zero or oversized dimension.
    pub fn goal(dimension: usize) -> Result<Self, BoardError> {
        check_dimension(dimension)?;
        let cells = (dimension * dimension) as u32;
        let tiles = (1..cells).chain(std::iter::once(0)).collect();
        Self::from_tiles(dimension, tiles)
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of numbered tiles outside their goal cell.
    pub fn hamming(&self) -> u32 {
        self.hamming
    }

    /// Sum of the row and column offsets of every numbered tile from its goal cell.
    pub fn manhattan(&self) -> u32 {
        self.manhattan
    }

    pub fn is_goal(&self) -> bool {
        self.hamming == 0
    }

    /// Tiles in row-major order.
    pub fn tiles(&self) -> &[u32] {
        &self.tiles
    }

    /// Row and column of the blank.
    pub fn blank(&self) -> (usize, usize) {
        self.blank
    }

    /// Tile at `row`, `col`.
    ///
    /// # Panics
    ///
    /// Panics if the cell is outside the board.
    pub fn tile(&self, row: usize, col: usize) -> u32 {
        assert!(row < self.dimension && col < self.dimension);
        self.tiles[row * self.dimension + col]
    }

    /// Returns `true` if the cell holds the numbered tile that belongs there.
    pub fn is_in_place(&self, row: usize, col: usize) -> bool {
        let tile = self.tile(row, col);
        tile != 0 && goal_cell(tile, self.dimension) == (row, col)
    }

    /// Characters needed to print the largest tile.
    pub fn label_width(&self) -> usize {
        (self.tiles.len() - 1).to_string().len()
    }

    pub fn rows(&self) -> slice::Chunks<'_, u32> {
        self.tiles.chunks(self.dimension)
    }

    /// The board reached by making `movement`, or `None` if the slide would
    /// take the blank off the grid.
    pub fn apply(&self, movement: Move) -> Option<Self> {
        let target = movement.target(self.blank, self.dimension)?;
        Some(self.swapped(self.blank, target))
    }

    /// Boards one slide away, in [`Move::ALL`] order.
    pub fn neighbors(&self) -> Neighbors<'_> {
        Neighbors {
            board: self,
            moves: Move::ALL.into_iter(),
        }
    }

    /// The board obtained by exchanging the first two tiles of a row without
    /// the blank.
    ///
    /// Exactly one of a board and its twin can reach the goal. A 1x1 board
    /// has no two tiles to exchange and returns `None`.
    pub fn twin(&self) -> Option<Self> {
        if self.dimension < 2 {
            return None;
        }
        let row = if self.blank.0 == 0 { 1 } else { 0 };
        Some(self.swapped((row, 0), (row, 1)))
    }

    /// The slide that turns `self` into `other`, if they are one slide apart.
    pub fn slide_between(&self, other: &Self) -> Option<Move> {
        if self.dimension != other.dimension {
            return None;
        }
        let movement = Move::between(self.blank, other.blank)?;
        (self.apply(movement).as_ref() == Some(other)).then_some(movement)
    }

    fn index(&self, (row, col): (usize, usize)) -> usize {
        row * self.dimension + col
    }

    fn swapped(&self, p: (usize, usize), q: (usize, usize)) -> Self {
        let (pi, qi) = (self.index(p), self.index(q));
        let moves_blank = self.tiles[pi] == 0 || self.tiles[qi] == 0;
        let mut tiles = self.tiles.clone();
        tiles.swap(pi, qi);

        let mut next = Self {
            dimension: self.dimension,
            tiles,
            blank: self.blank,
            hamming: self.hamming,
            manhattan: self.manhattan,
        };

        if self.is_goal() && moves_blank {
            // A slide out of the goal displaces one tile by one cell.
            next.hamming = 1;
            next.manhattan = 1;
            next.blank = if next.tiles[pi] == 0 { p } else { q };
            return next;
        }

        next.settle(p, q);
        next.settle(q, p);
        next
    }

    /// Accounts for the tile that moved from `from` into `cell`.
    fn settle(&mut self, cell: (usize, usize), from: (usize, usize)) {
        let tile = self.tiles[self.index(cell)];
        if tile == 0 {
            self.blank = cell;
            return;
        }
        let before = distance(tile, from, self.dimension);
        let after = distance(tile, cell, self.dimension);
        self.manhattan = self.manhattan + after - before;
        if after == 0 {
            self.hamming -= 1;
        } else if before == 0 {
            self.hamming += 1;
        }
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.dimension == other.dimension
            && self.hamming == other.hamming
            && self.manhattan == other.manhattan
            && self.tiles == other.tiles
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.dimension.hash(state);
        self.tiles.hash(state);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.dimension)?;
        let width = self.label_width();
        for row in self.rows() {
            for (col, tile) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{tile:>width$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the boards one slide away from a board.
#[derive(Debug, Clone)]
pub struct Neighbors<'a> {
    board: &'a Board,
    moves: array::IntoIter<Move, 4>,
}

impl Iterator for Neighbors<'_> {
    type Item = Board;

    fn next(&mut self) -> Option<Board> {
        self.moves.find_map(|movement| self.board.apply(movement))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.moves.len()))
    }
}

impl FusedIterator for Neighbors<'_> {}

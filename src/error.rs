use std::io;
use thiserror::Error;

/// Reasons a grid cannot be turned into a [`Board`](crate::Board).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Board has no cells")]
    Empty,

    #[error("Board dimension {dimension} exceeds the supported maximum of {max}")]
    DimensionTooLarge { dimension: usize, max: usize },

    #[error("Row {row} has {len} tiles, expected {dimension}")]
    NotSquare {
        row: usize,
        len: usize,
        dimension: usize,
    },

    #[error("Expected {expected} tiles, found {found}")]
    WrongTileCount { expected: usize, found: usize },

    #[error("Board has no blank (0) tile")]
    MissingBlank,

    #[error("Tile {tile} is out of range for a {dimension}x{dimension} board")]
    TileOutOfRange { tile: u32, dimension: usize },

    #[error("Tile {tile} appears more than once")]
    DuplicateTile { tile: u32 },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid board: {0}")]
    InvalidBoard(#[from] BoardError),

    #[error("Invalid integer {token:?} at token {position}")]
    Parse { token: String, position: usize },

    #[error("Unexpected end of input: expected {expected} integers, found {found}")]
    UnexpectedEnd { expected: usize, found: usize },

    #[error("Unexpected trailing input {token:?}")]
    TrailingInput { token: String },

    #[error("Search budget of {limit} expansions exhausted")]
    BudgetExhausted { limit: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

use crate::{
    board::{Board, MAX_DIMENSION},
    error::{BoardError, Error, Result},
};

/// Parses a board written as its dimension `N` followed by `N²` tiles in
/// row-major order, separated by any whitespace.
///
/// ```
/// let board = slider_puzzle::input::parse_board("2\n1 2\n3 0\n")?;
/// assert!(board.is_goal());
/// # Ok::<(), slider_puzzle::Error>(())
/// ```
pub fn parse_board(text: &str) -> Result<Board> {
    let mut tokens = text.split_whitespace().enumerate();
    let mut next_int = |found: usize, expected: usize| -> Result<u32> {
        let (position, token) = tokens
            .next()
            .ok_or(Error::UnexpectedEnd { expected, found })?;
        token.parse().map_err(|_| Error::Parse {
            token: token.to_owned(),
            position,
        })
    };

    let dimension = next_int(0, 1)? as usize;
    if dimension == 0 {
        return Err(BoardError::Empty.into());
    }
    if dimension > MAX_DIMENSION {
        return Err(BoardError::DimensionTooLarge {
            dimension,
            max: MAX_DIMENSION,
        }
        .into());
    }

    let cells = dimension * dimension;
    let tiles = (0..cells)
        .map(|found| next_int(found, cells))
        .collect::<Result<Vec<_>>>()?;

    if let Some((_, token)) = tokens.next() {
        return Err(Error::TrailingInput {
            token: token.to_owned(),
        });
    }

    Ok(Board::from_tiles(dimension, tiles)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_grid_with_free_whitespace() {
        let board = parse_board("3\n 1  2 3\n4 0 6\n\t7 5 8\n").unwrap();
        assert_eq!(board.dimension(), 3);
        assert_eq!(board.tiles(), &[1, 2, 3, 4, 0, 6, 7, 5, 8]);
        assert_eq!(board.manhattan(), 2);
    }

    #[test]
    fn parses_rendered_board() {
        let board = parse_board("4\n 1  2  3  4\n 5  6  7  8\n 9 10 11 12\n13 14 15  0\n").unwrap();
        assert!(board.is_goal());
        assert_eq!(parse_board(&board.to_string()).unwrap(), board);
    }

    #[test]
    fn reports_bad_tokens() {
        assert!(matches!(
            parse_board("2\n1 x\n3 0"),
            Err(Error::Parse { ref token, position: 2 }) if token == "x"
        ));
        assert!(matches!(
            parse_board("-1"),
            Err(Error::Parse { position: 0, .. })
        ));
    }

    #[test]
    fn reports_short_and_long_input() {
        assert!(matches!(
            parse_board(""),
            Err(Error::UnexpectedEnd {
                expected: 1,
                found: 0
            })
        ));
        assert!(matches!(
            parse_board("2\n1 2\n3"),
            Err(Error::UnexpectedEnd {
                expected: 4,
                found: 3
            })
        ));
        assert!(matches!(
            parse_board("2\n1 2\n3 0\n9"),
            Err(Error::TrailingInput { ref token }) if token == "9"
        ));
    }

    #[test]
    fn reports_invalid_boards() {
        assert!(matches!(
            parse_board("0"),
            Err(Error::InvalidBoard(BoardError::Empty))
        ));
        assert!(matches!(
            parse_board("1000"),
            Err(Error::InvalidBoard(BoardError::DimensionTooLarge { .. }))
        ));
        assert!(matches!(
            parse_board("2\n1 2\n2 0"),
            Err(Error::InvalidBoard(BoardError::DuplicateTile { tile: 2 }))
        ));
    }
}

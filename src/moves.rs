use std::fmt;

/// A single slide, named by the direction the numbered tile travels.
///
/// `Move::Up` slides the tile below the blank up into it, so the blank
/// itself moves down one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Left,
    Down,
    Right,
}

impl Move {
    pub const ALL: [Move; 4] = [Move::Up, Move::Left, Move::Down, Move::Right];

    /// Offset `(row, col)` applied to the blank when this slide is made.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (1, 0),
            Move::Left => (0, 1),
            Move::Down => (-1, 0),
            Move::Right => (0, -1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }

    /// Cell the blank lands on when this slide is made from `(row, col)` on
    /// a board of side `dimension`, or `None` if it would leave the grid.
    pub fn target(&self, (row, col): (usize, usize), dimension: usize) -> Option<(usize, usize)> {
        let (dr, dc) = self.as_offset();
        let row = row.checked_add_signed(dr)?;
        let col = col.checked_add_signed(dc)?;
        (row < dimension && col < dimension).then_some((row, col))
    }

    /// The slide that carries the blank from `from` to the adjacent cell `to`.
    pub fn between(from: (usize, usize), to: (usize, usize)) -> Option<Self> {
        let dr = to.0 as isize - from.0 as isize;
        let dc = to.1 as isize - from.1 as isize;
        Move::ALL.into_iter().find(|m| m.as_offset() == (dr, dc))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Left => "Left",
            Move::Down => "Down",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_cancels_offset() {
        for m in Move::ALL {
            let (dr, dc) = m.as_offset();
            let (or, oc) = m.opposite().as_offset();
            assert_eq!((dr + or, dc + oc), (0, 0));
            assert_eq!(m.opposite().opposite(), m);
        }
    }

    #[test]
    fn target_respects_bounds() {
        assert_eq!(Move::Down.target((0, 0), 3), None);
        assert_eq!(Move::Right.target((0, 0), 3), None);
        assert_eq!(Move::Up.target((0, 0), 3), Some((1, 0)));
        assert_eq!(Move::Left.target((0, 0), 3), Some((0, 1)));
        assert_eq!(Move::Up.target((2, 2), 3), None);
        assert_eq!(Move::Left.target((2, 2), 3), None);
    }

    #[test]
    fn between_recovers_move() {
        for m in Move::ALL {
            let to = m.target((1, 1), 3).unwrap();
            assert_eq!(Move::between((1, 1), to), Some(m));
        }
        assert_eq!(Move::between((0, 0), (1, 1)), None);
        assert_eq!(Move::between((0, 0), (0, 0)), None);
    }

    #[test]
    fn display_names() {
        assert_eq!(Move::Up.to_string(), "Up");
        assert_eq!(Move::Right.to_string(), "Right");
    }
}

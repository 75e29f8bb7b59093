use std::io::{self, Write};

use crossterm::style::{style, Color, Stylize};

use crate::{board::Board, solver::Solver};

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Highlight tiles by whether they sit in their goal cell.
    pub color: bool,
    /// Print the slide that leads to each board.
    pub show_slides: bool,
}

/// Writes `board` in its plain text form, optionally colouring tiles that
/// are home green and the rest yellow.
pub fn write_board<W: Write>(out: &mut W, board: &Board, color: bool) -> io::Result<()> {
    if !color {
        return write!(out, "{board}");
    }

    let width = board.label_width();
    writeln!(out, "{}", board.dimension())?;
    for (row, cells) in board.rows().enumerate() {
        for (col, &tile) in cells.iter().enumerate() {
            if col > 0 {
                write!(out, " ")?;
            }
            let label = format!("{tile:>width$}");
            let tint = if tile == 0 {
                Color::DarkGrey
            } else if board.is_in_place(row, col) {
                Color::Green
            } else {
                Color::Yellow
            };
            write!(out, "{}", style(label).with(tint))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Writes the move count and every board of the solution, or a notice that
/// the puzzle has none.
pub fn write_report<W: Write>(out: &mut W, solver: &Solver, options: ReportOptions) -> io::Result<()> {
    let Some(path) = solver.solution() else {
        return writeln!(out, "No solution possible");
    };

    writeln!(out, "Minimum number of moves = {}", path.len() - 1)?;
    let mut previous: Option<&Board> = None;
    for board in path {
        if options.show_slides {
            if let Some(movement) = previous.and_then(|prev| prev.slide_between(board)) {
                writeln!(out, "{movement}")?;
            }
        }
        write_board(out, board, options.color)?;
        writeln!(out)?;
        previous = Some(board);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(solver: &Solver, options: ReportOptions) -> String {
        let mut out = Vec::new();
        write_report(&mut out, solver, options).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn reports_solution_boards() {
        let start = Board::new(&[[1, 2, 3], [4, 0, 6], [7, 5, 8]]).unwrap();
        let solver = Solver::new(start);
        let text = report(&solver, ReportOptions::default());
        assert_eq!(
            text,
            "Minimum number of moves = 2\n\
             3\n1 2 3\n4 0 6\n7 5 8\n\n\
             3\n1 2 3\n4 5 6\n7 0 8\n\n\
             3\n1 2 3\n4 5 6\n7 8 0\n\n"
        );
    }

    #[test]
    fn reports_slides_between_boards() {
        let start = Board::new(&[[1, 2, 3], [4, 0, 6], [7, 5, 8]]).unwrap();
        let solver = Solver::new(start);
        let options = ReportOptions {
            show_slides: true,
            ..ReportOptions::default()
        };
        let text = report(&solver, options);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Minimum number of moves = 2");
        assert_eq!(lines[1], "3");
        assert!(lines.contains(&"Up"));
        assert!(lines.contains(&"Left"));
    }

    #[test]
    fn reports_unsolvable() {
        let start = Board::new(&[[1, 2, 3], [4, 5, 6], [8, 7, 0]]).unwrap();
        let solver = Solver::new(start);
        assert_eq!(report(&solver, ReportOptions::default()), "No solution possible\n");
    }

    #[test]
    fn colored_board_keeps_every_tile() {
        let board = Board::new(&[[1, 2, 3], [4, 0, 6], [7, 5, 8]]).unwrap();
        let mut out = Vec::new();
        write_board(&mut out, &board, true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("3\n"));
        for tile in 0..9 {
            assert!(text.contains(&tile.to_string()));
        }
        assert_eq!(text.lines().count(), 4);
    }
}

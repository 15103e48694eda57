use crate::board::{Board, COLUMNS, Cell, Player, ROWS, parse_row};
use crate::error::{Error, Result};
use crate::search::Strategy;
use std::fmt;
use std::str::FromStr;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// A move request as read from position text: the strategy to run, the player
/// deciding, and the board they decide on.
///
/// The text format is the strategy name on the first line, `R` or `Y` on the
/// second, then six rows of seven `O`/`R`/`Y` tokens from the top down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub strategy: Strategy,
    pub player: Player,
    pub board: Board,
}

impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim_start_matches(BYTE_ORDER_MARK);
        let mut lines = s.lines().map(str::trim);

        let strategy = lines.next().ok_or(Error::MissingLine { line: 1 })?.parse::<Strategy>()?;
        let player = lines.next().ok_or(Error::MissingLine { line: 2 })?.parse::<Player>()?;

        let mut cells = [[Cell::Empty; COLUMNS]; ROWS];
        for (row, cells_row) in cells.iter_mut().enumerate() {
            let line = lines.next().ok_or(Error::MissingLine { line: row + 3 })?;
            parse_row(line, row, cells_row)?;
        }

        Ok(Position {
            strategy,
            player,
            board: Board::from_cells(cells),
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.strategy)?;
        writeln!(f, "{}", self.player)?;
        writeln!(f, "{}", self.board)
    }
}

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Number of columns on a Connect Four board.
pub const COLUMNS: usize = 7;
/// Number of rows on a Connect Four board.
pub const ROWS: usize = 6;

const RUN_LENGTH: usize = 4;

/// (row step, column step) for horizontal, vertical, down-right and down-left lines.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// How a finished game ended.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum GameStatus {
    Won(Player),
    Drawn,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Won(Player::Red) => f.write_str("Red wins!"),
            GameStatus::Won(Player::Yellow) => f.write_str("Yellow wins!"),
            GameStatus::Drawn => f.write_str("It's a draw!"),
        }
    }
}

/// One of the two colors taking turns on the board.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum Player {
    Red,
    Yellow,
}

impl Player {
    /// Returns the player who moves after this one.
    pub fn opponent(self) -> Player {
        match self {
            Player::Red => Player::Yellow,
            Player::Yellow => Player::Red,
        }
    }

    /// The single-letter token used in position text.
    pub fn token(self) -> char {
        match self {
            Player::Red => 'R',
            Player::Yellow => 'Y',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl FromStr for Player {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "R" => Ok(Player::Red),
            "Y" => Ok(Player::Yellow),
            other => Err(Error::InvalidPlayer {
                token: other.to_string(),
            }),
        }
    }
}

/// The content of a single board square.
#[derive(Debug, Default, PartialEq, Eq, Hash, Copy, Clone)]
pub enum Cell {
    #[default]
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// Parses a position-text token: `O` is empty, `R` and `Y` are pieces.
    pub fn from_token(token: char) -> Option<Cell> {
        match token {
            'O' => Some(Cell::Empty),
            'R' => Some(Cell::Red),
            'Y' => Some(Cell::Yellow),
            _ => None,
        }
    }

    pub fn token(self) -> char {
        match self {
            Cell::Empty => 'O',
            Cell::Red => 'R',
            Cell::Yellow => 'Y',
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Red => Cell::Red,
            Player::Yellow => Cell::Yellow,
        }
    }
}

/// A 6x7 Connect Four grid. Row 0 is the top of the board.
///
/// The board is a small `Copy` value: applying a move returns a fresh board and
/// leaves the original untouched, so search branches never share mutable state.
#[derive(Debug, Default, PartialEq, Eq, Hash, Copy, Clone)]
pub struct Board {
    cells: [[Cell; COLUMNS]; ROWS],
}

impl Board {
    /// Creates a board with every cell empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a board from explicit rows, top row first.
    ///
    /// Pieces are taken as given; floating pieces are not rejected.
    pub fn from_cells(cells: [[Cell; COLUMNS]; ROWS]) -> Self {
        Self { cells }
    }

    /// Returns the cell at `row` (0 = top) and `column`, or `None` when out of range.
    pub fn cell(&self, row: usize, column: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(column)).copied()
    }

    /// Returns `true` if a piece can be dropped into `column`.
    pub fn is_legal_move(&self, column: usize) -> Result<bool> {
        if column >= COLUMNS {
            return Err(Error::InvalidColumn { column });
        }
        Ok(self.cells[0][column] == Cell::Empty)
    }

    /// Returns all playable columns in ascending order.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..COLUMNS)
            .filter(|&column| self.cells[0][column] == Cell::Empty)
            .collect()
    }

    /// Returns a copy of this board with `player`'s piece dropped into `column`.
    pub fn apply_move(&self, column: usize, player: Player) -> Result<Board> {
        let mut next = *self;
        next.drop_piece(column, player)?;
        Ok(next)
    }

    /// Drops a piece in place and returns the row it settled on.
    pub(crate) fn drop_piece(&mut self, column: usize, player: Player) -> Result<usize> {
        if column >= COLUMNS {
            return Err(Error::InvalidColumn { column });
        }
        let row = (0..ROWS)
            .rev()
            .find(|&row| self.cells[row][column] == Cell::Empty)
            .ok_or(Error::ColumnFull { column })?;
        self.cells[row][column] = player.into();
        Ok(row)
    }

    /// Returns `true` if `player` owns four contiguous cells in any direction.
    pub fn check_win(&self, player: Player) -> bool {
        let target = Cell::from(player);
        self.cells.iter().enumerate().any(|(row, cells)| {
            cells.iter().enumerate().any(|(column, &cell)| {
                cell == target
                    && DIRECTIONS
                        .iter()
                        .any(|&(dr, dc)| self.run_from(row, column, dr, dc, target))
            })
        })
    }

    fn run_from(&self, row: usize, column: usize, dr: isize, dc: isize, target: Cell) -> bool {
        (0..RUN_LENGTH as isize).all(|step| {
            let r = row as isize + dr * step;
            let c = column as isize + dc * step;
            r >= 0 && c >= 0 && self.cell(r as usize, c as usize) == Some(target)
        })
    }

    /// Returns `true` if every column is full. Does not look at wins.
    pub fn check_draw(&self) -> bool {
        self.cells[0].iter().all(|&cell| cell != Cell::Empty)
    }

    /// The finished state of the game, or `None` while it is still going.
    ///
    /// Wins are checked for both players before the board is considered drawn.
    pub fn status(&self) -> Option<GameStatus> {
        [Player::Red, Player::Yellow]
            .into_iter()
            .find(|&player| self.check_win(player))
            .map(GameStatus::Won)
            .or_else(|| self.check_draw().then_some(GameStatus::Drawn))
    }

    /// Counts the pieces of `player` on the board.
    pub fn piece_count(&self, player: Player) -> usize {
        let target = Cell::from(player);
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == target)
            .count()
    }

    /// The player on move assuming Red opened the game.
    pub fn to_move(&self) -> Player {
        if self.piece_count(Player::Red) > self.piece_count(Player::Yellow) {
            Player::Yellow
        } else {
            Player::Red
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.token())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Parses six lines of seven `O`/`R`/`Y` tokens, top row first.
    fn from_str(s: &str) -> Result<Self> {
        let mut lines = s.lines().map(str::trim);
        let mut cells = [[Cell::Empty; COLUMNS]; ROWS];
        for (row, cells_row) in cells.iter_mut().enumerate() {
            let line = lines.next().ok_or(Error::MissingLine { line: row + 1 })?;
            parse_row(line, row, cells_row)?;
        }
        Ok(Board { cells })
    }
}

pub(crate) fn parse_row(line: &str, row: usize, out: &mut [Cell; COLUMNS]) -> Result<()> {
    let len = line.chars().count();
    if len != COLUMNS {
        return Err(Error::InvalidRowLength { row, len });
    }
    for (column, token) in line.chars().enumerate() {
        out[column] = Cell::from_token(token).ok_or(Error::InvalidCellToken {
            token,
            row,
            column,
        })?;
    }
    Ok(())
}

use std::fmt;
use std::str::FromStr;

use super::types::Mark;

pub const BOARD_SIDE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

/// Nine cells in row-major order: rows are `[0, 1, 2]`, `[3, 4, 5]`, `[6, 7, 8]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_empty_cell(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    /// Writes without any rule checks. Callers own validation.
    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Mark::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    pub fn to_row_col(index: usize) -> (usize, usize) {
        (index / BOARD_SIDE, index % BOARD_SIDE)
    }

    pub fn to_index(row: usize, col: usize) -> Option<usize> {
        if row >= BOARD_SIDE || col >= BOARD_SIDE {
            return None;
        }
        Some(row * BOARD_SIDE + col)
    }
}

impl FromStr for Board {
    type Err = String;

    /// Accepts nine symbols (`X`, `O`, and `_`, `.` or space for empty). Row separators
    /// `/` and `|` are skipped so `"XO_/_X_/__O"` reads naturally.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Mark::Empty; CELL_COUNT];
        let mut count = 0;

        for symbol in s.chars().filter(|c| *c != '/' && *c != '|') {
            let mark = Mark::from_symbol(symbol)
                .ok_or_else(|| format!("Invalid board symbol '{}'", symbol))?;
            if count == CELL_COUNT {
                return Err(format!("Board must have {} cells, got more", CELL_COUNT));
            }
            cells[count] = mark;
            count += 1;
        }

        if count != CELL_COUNT {
            return Err(format!("Board must have {} cells, got {}", CELL_COUNT, count));
        }

        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(BOARD_SIDE).enumerate() {
            if row_index > 0 {
                write!(f, "/")?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.available_moves(), (0..CELL_COUNT).collect::<Vec<_>>());
        assert!(!board.is_full());
        assert_eq!(board.count(Mark::Empty), CELL_COUNT);
    }

    #[test]
    fn test_parse_and_display() {
        let board: Board = "XO_/_X_/__O".parse().unwrap();
        assert_eq!(board.get(0), Some(Mark::X));
        assert_eq!(board.get(1), Some(Mark::O));
        assert_eq!(board.get(4), Some(Mark::X));
        assert_eq!(board.get(8), Some(Mark::O));
        assert_eq!(board.to_string(), "XO_/_X_/__O");
        assert_eq!(board.available_moves(), vec![2, 3, 5, 6, 7]);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!("XO".parse::<Board>().is_err());
        assert!("XOXOXOXOXO".parse::<Board>().is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_symbol() {
        let err = "XO_Z_____".parse::<Board>().unwrap_err();
        assert!(err.contains('Z'));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = Board::new();
        assert_eq!(board.get(9), None);
        assert!(!board.is_empty_cell(9));
    }

    #[test]
    fn test_row_col_conversion() {
        assert_eq!(Board::to_row_col(5), (1, 2));
        assert_eq!(Board::to_index(2, 1), Some(7));
        assert_eq!(Board::to_index(3, 0), None);
    }

    #[test]
    fn test_full_board() {
        let board: Board = "XOXOXOOXO".parse().unwrap();
        assert!(board.is_full());
        assert!(board.available_moves().is_empty());
        assert_eq!(board.count(Mark::X), 4);
        assert_eq!(board.count(Mark::O), 5);
    }
}

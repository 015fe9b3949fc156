use std::fmt;

use crate::error::BoardError;

/// Points awarded by a slot.
pub type Score = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Peg,
}

impl Cell {
    /// Parse a layout character: `.` or space is empty, `o`, `O`, `*` or `●` is a peg.
    pub fn from_char(c: char) -> Result<Cell, BoardError> {
        match c {
            '.' | ' ' => Ok(Cell::Empty),
            'o' | 'O' | '*' | '\u{25cf}' => Ok(Cell::Peg),
            other => Err(BoardError::InvalidCell {
                value: other.to_string(),
            }),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Peg => 'o',
        }
    }
}

/// Raw cell codes: 0 is empty, 1 is a peg.
impl TryFrom<u8> for Cell {
    type Error = BoardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Cell::Empty),
            1 => Ok(Cell::Peg),
            other => Err(BoardError::InvalidCell {
                value: other.to_string(),
            }),
        }
    }
}

/// A grid coordinate. Row 0 is the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub fn new(row: usize, col: usize) -> Self {
        Pos { row, col }
    }
}

impl From<(usize, usize)> for Pos {
    fn from((row, col): (usize, usize)) -> Self {
        Pos { row, col }
    }
}

/// Where a ball can come to rest next: a peg, or the slot under a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Node {
    Peg(Pos),
    Slot(usize),
}

/// What happens to a ball whose chosen branch leaves the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffBoardPolicy {
    /// The ball is pushed back onto the remaining branch; it is only lost
    /// when both branches leave the board.
    #[default]
    Nudge,
    /// The ball is lost whenever the branch it takes leaves the board.
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    fn step(self, col: usize, cols: usize) -> Option<usize> {
        match self {
            Direction::Left => col.checked_sub(1),
            Direction::Right => (col + 1 < cols).then_some(col + 1),
        }
    }
}

/// A rectangular grid of pegs above one scoring slot per column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
    slot_scores: Vec<Score>,
    off_board: OffBoardPolicy,
}

impl Board {
    /// Build a board from row-major cells and one score per column.
    pub fn new(grid: Vec<Vec<Cell>>, slot_scores: Vec<Score>) -> Result<Self, BoardError> {
        let cols = slot_scores.len();
        if cols == 0 {
            return Err(BoardError::NoColumns);
        }
        let rows = grid.len();
        let mut cells = Vec::with_capacity(rows * cols);
        for (row, line) in grid.into_iter().enumerate() {
            if line.len() != cols {
                return Err(if row == 0 {
                    BoardError::ScoreCountMismatch {
                        expected: line.len(),
                        got: cols,
                    }
                } else {
                    BoardError::RaggedGrid {
                        row,
                        expected: cols,
                        got: line.len(),
                    }
                });
            }
            cells.extend(line);
        }
        Ok(Board {
            cells,
            rows,
            cols,
            slot_scores,
            off_board: OffBoardPolicy::default(),
        })
    }

    /// A board with no pegs.
    pub fn empty(rows: usize, slot_scores: Vec<Score>) -> Result<Self, BoardError> {
        let cols = slot_scores.len();
        Self::new(vec![vec![Cell::Empty; cols]; rows], slot_scores)
    }

    pub fn with_off_board_policy(mut self, policy: OffBoardPolicy) -> Self {
        self.off_board = policy;
        self
    }

    pub fn off_board_policy(&self) -> OffBoardPolicy {
        self.off_board
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.cols
    }

    pub fn slot_scores(&self) -> &[Score] {
        &self.slot_scores
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        if self.in_bounds(row, col) {
            Ok(row * self.cols + col)
        } else {
            Err(BoardError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    fn check_column(&self, col: usize) -> Result<(), BoardError> {
        if col < self.cols {
            Ok(())
        } else {
            Err(BoardError::ColumnOutOfRange {
                col,
                cols: self.cols,
            })
        }
    }

    pub fn get_cell(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        Ok(self.cells[self.index(row, col)?])
    }

    pub fn set_cell(&mut self, row: usize, col: usize, value: Cell) -> Result<(), BoardError> {
        let idx = self.index(row, col)?;
        self.cells[idx] = value;
        Ok(())
    }

    /// Set a cell from its raw code. Bounds and value are both checked
    /// before anything is written.
    pub fn set_cell_raw(&mut self, row: usize, col: usize, value: u8) -> Result<(), BoardError> {
        let idx = self.index(row, col)?;
        self.cells[idx] = Cell::try_from(value)?;
        Ok(())
    }

    pub fn add_peg(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        self.set_cell(row, col, Cell::Peg)
    }

    pub fn remove_peg(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        self.set_cell(row, col, Cell::Empty)
    }

    /// Flip a cell between empty and peg, returning its new value.
    pub fn toggle_peg(&mut self, row: usize, col: usize) -> Result<Cell, BoardError> {
        let idx = self.index(row, col)?;
        let next = match self.cells[idx] {
            Cell::Empty => Cell::Peg,
            Cell::Peg => Cell::Empty,
        };
        self.cells[idx] = next;
        Ok(next)
    }

    /// Out-of-bounds coordinates are not pegs.
    pub fn is_peg(&self, row: usize, col: usize) -> bool {
        self.get_cell(row, col) == Ok(Cell::Peg)
    }

    /// Out-of-bounds coordinates are not empty either.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.get_cell(row, col) == Ok(Cell::Empty)
    }

    /// All peg positions in row-major order.
    pub fn pegs(&self) -> Vec<Pos> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Peg)
            .map(|(i, _)| Pos::new(i / self.cols, i % self.cols))
            .collect()
    }

    pub fn slot_score(&self, col: usize) -> Result<Score, BoardError> {
        self.check_column(col)?;
        Ok(self.slot_scores[col])
    }

    /// Fall straight down column `col` starting at `start_row`, passing
    /// through empty cells, until a peg or the bottom of the grid.
    pub(crate) fn fall_from(&self, start_row: usize, col: usize) -> Node {
        (start_row..self.rows)
            .find(|&row| self.cells[row * self.cols + col] == Cell::Peg)
            .map_or(Node::Slot(col), |row| Node::Peg(Pos::new(row, col)))
    }

    /// The first thing a ball dropped into `col` lands on.
    pub fn column_entry(&self, col: usize) -> Result<Node, BoardError> {
        self.check_column(col)?;
        Ok(self.fall_from(0, col))
    }

    /// Where a ball leaving the peg at `pos` in `direction` lands, or `None`
    /// if that branch leaves the board.
    pub fn branch(&self, pos: Pos, direction: Direction) -> Option<Node> {
        let next_col = direction.step(pos.col, self.cols)?;
        Some(self.fall_from(pos.row + 1, next_col))
    }

    /// The left and right landing points of a peg.
    pub fn children_of_peg(
        &self,
        row: usize,
        col: usize,
    ) -> Result<(Option<Node>, Option<Node>), BoardError> {
        if self.get_cell(row, col)? != Cell::Peg {
            return Err(BoardError::NotAPeg { row, col });
        }
        let pos = Pos::new(row, col);
        Ok((
            self.branch(pos, Direction::Left),
            self.branch(pos, Direction::Right),
        ))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            let line: String = row.iter().map(|c| c.to_char()).collect();
            writeln!(f, "{line}")?;
        }
        let scores: Vec<String> = self.slot_scores.iter().map(|s| s.to_string()).collect();
        write!(f, "{}", scores.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_peg_board() -> Board {
        Board::new(vec![vec![Cell::Empty, Cell::Peg, Cell::Empty]], vec![5, 7, 9]).unwrap()
    }

    #[test]
    fn test_new_rejects_ragged_grid() {
        let err = Board::new(
            vec![vec![Cell::Empty; 3], vec![Cell::Empty; 2]],
            vec![1, 2, 3],
        )
        .unwrap_err();
        assert_eq!(
            err,
            BoardError::RaggedGrid {
                row: 1,
                expected: 3,
                got: 2
            }
        );
    }

    #[test]
    fn test_new_rejects_score_mismatch() {
        let err = Board::new(vec![vec![Cell::Empty; 3]], vec![1, 2]).unwrap_err();
        assert!(matches!(err, BoardError::ScoreCountMismatch { .. }));
    }

    #[test]
    fn test_new_rejects_zero_columns() {
        assert_eq!(Board::new(vec![], vec![]), Err(BoardError::NoColumns));
    }

    #[test]
    fn test_get_and_set_cell() {
        let mut board = Board::empty(2, vec![0, 0]).unwrap();
        assert_eq!(board.get_cell(1, 1), Ok(Cell::Empty));
        board.set_cell(1, 1, Cell::Peg).unwrap();
        assert_eq!(board.get_cell(1, 1), Ok(Cell::Peg));
        assert!(matches!(
            board.get_cell(2, 0),
            Err(BoardError::OutOfBounds { .. })
        ));
        assert!(board.set_cell(0, 2, Cell::Peg).is_err());
    }

    #[test]
    fn test_set_cell_raw_validates_before_writing() {
        let mut board = Board::empty(1, vec![0, 0]).unwrap();
        assert!(matches!(
            board.set_cell_raw(0, 0, 7),
            Err(BoardError::InvalidCell { .. })
        ));
        assert_eq!(board.get_cell(0, 0), Ok(Cell::Empty));
        board.set_cell_raw(0, 0, 1).unwrap();
        assert!(board.is_peg(0, 0));
    }

    #[test]
    fn test_toggle_peg() {
        let mut board = Board::empty(1, vec![0]).unwrap();
        assert_eq!(board.toggle_peg(0, 0), Ok(Cell::Peg));
        assert_eq!(board.toggle_peg(0, 0), Ok(Cell::Empty));
        board.add_peg(0, 0).unwrap();
        board.remove_peg(0, 0).unwrap();
        assert!(board.is_empty(0, 0));
    }

    #[test]
    fn test_predicates_are_false_out_of_bounds() {
        let board = single_peg_board();
        assert!(!board.is_peg(5, 1));
        assert!(!board.is_empty(0, 3));
        assert!(!board.in_bounds(1, 0));
        assert!(board.in_bounds(0, 2));
    }

    #[test]
    fn test_pegs_are_row_major() {
        let mut board = Board::empty(3, vec![0, 0, 0]).unwrap();
        board.add_peg(2, 0).unwrap();
        board.add_peg(0, 2).unwrap();
        board.add_peg(0, 1).unwrap();
        assert_eq!(
            board.pegs(),
            vec![Pos::new(0, 1), Pos::new(0, 2), Pos::new(2, 0)]
        );
    }

    #[test]
    fn test_slot_score_bounds() {
        let board = single_peg_board();
        assert_eq!(board.slot_score(2), Ok(9));
        assert_eq!(
            board.slot_score(3),
            Err(BoardError::ColumnOutOfRange { col: 3, cols: 3 })
        );
    }

    #[test]
    fn test_children_of_single_peg() {
        let board = single_peg_board();
        assert_eq!(
            board.children_of_peg(0, 1),
            Ok((Some(Node::Slot(0)), Some(Node::Slot(2))))
        );
    }

    #[test]
    fn test_children_require_a_peg() {
        let board = single_peg_board();
        assert_eq!(
            board.children_of_peg(0, 0),
            Err(BoardError::NotAPeg { row: 0, col: 0 })
        );
    }

    #[test]
    fn test_children_fall_through_empty_cells() {
        // o . .
        // . . .
        // . . .
        // . o .
        let mut board = Board::empty(4, vec![1, 2, 3]).unwrap();
        board.add_peg(0, 0).unwrap();
        board.add_peg(3, 1).unwrap();
        let (left, right) = board.children_of_peg(0, 0).unwrap();
        assert_eq!(left, None);
        assert_eq!(right, Some(Node::Peg(Pos::new(3, 1))));
    }

    #[test]
    fn test_children_skip_pegs_above_branch_row() {
        // A peg in the target column at or above the source row is ignored.
        let mut board = Board::empty(2, vec![1, 2]).unwrap();
        board.add_peg(1, 0).unwrap();
        board.add_peg(0, 1).unwrap();
        let (left, right) = board.children_of_peg(1, 0).unwrap();
        assert_eq!(left, None);
        assert_eq!(right, Some(Node::Slot(1)));
    }

    #[test]
    fn test_column_entry() {
        let board = single_peg_board();
        assert_eq!(board.column_entry(0), Ok(Node::Slot(0)));
        assert_eq!(board.column_entry(1), Ok(Node::Peg(Pos::new(0, 1))));
        assert!(board.column_entry(3).is_err());
    }

    #[test]
    fn test_cell_parsing() {
        assert_eq!(Cell::from_char('o'), Ok(Cell::Peg));
        assert_eq!(Cell::from_char('.'), Ok(Cell::Empty));
        assert!(Cell::from_char('x').is_err());
        assert_eq!(Cell::try_from(1u8), Ok(Cell::Peg));
        assert!(Cell::try_from(2u8).is_err());
    }

    #[test]
    fn test_display() {
        let board = single_peg_board();
        assert_eq!(board.to_string(), ".o.\n5 7 9");
    }
}

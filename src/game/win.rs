//! Win detection around the most recently placed token.
//!
//! Only the four lines through the placed cell are scanned. Each line is
//! extracted as a slice of cells and reduced with [`streak`].

use super::{Board, Cell, Player, COLS, ROWS};

pub const WIN_LENGTH: usize = 4;

/// The four lines through a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
    /// Row and column both increasing (`\`)
    DescendingDiagonal,
    /// Row decreasing while column increases (`/`)
    AscendingDiagonal,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::DescendingDiagonal,
        Axis::AscendingDiagonal,
    ];

    /// Extract the cells along this axis through `(row, col)`, in scan order.
    pub fn line(self, board: &Board, row: usize, col: usize) -> Vec<Cell> {
        match self {
            Axis::Horizontal => {
                let start = col.saturating_sub(WIN_LENGTH - 1);
                let end = (col + WIN_LENGTH).min(COLS);
                (start..end).map(|c| board.get(row, c)).collect()
            }
            Axis::Vertical => {
                let start = row.saturating_sub(WIN_LENGTH - 1);
                let end = (row + WIN_LENGTH).min(ROWS);
                (start..end).map(|r| board.get(r, col)).collect()
            }
            Axis::DescendingDiagonal => {
                let distance = col.min(row).min(WIN_LENGTH - 1);
                let (mut r, mut c) = (row - distance, col - distance);
                let mut cells = Vec::with_capacity(ROWS);
                while r < ROWS && c < COLS {
                    cells.push(board.get(r, c));
                    r += 1;
                    c += 1;
                }
                cells
            }
            Axis::AscendingDiagonal => {
                let distance = col.min(ROWS - 1 - row).min(WIN_LENGTH - 1);
                let (mut r, mut c) = (row + distance, col - distance);
                let mut cells = Vec::with_capacity(ROWS);
                loop {
                    cells.push(board.get(r, c));
                    if r == 0 || c + 1 >= COLS {
                        break;
                    }
                    r -= 1;
                    c += 1;
                }
                cells
            }
        }
    }
}

/// Longest run of consecutive `player` tokens in `cells`.
///
/// Empty cells and opponent tokens both break a run.
pub fn streak(cells: &[Cell], player: Player) -> usize {
    let target = Cell::Occupied(player);
    let mut best = 0;
    let mut current = 0;
    for &cell in cells {
        if cell == target {
            current += 1;
            best = best.max(current);
        } else {
            current = 0;
        }
    }
    best
}

/// First axis through `(row, col)` holding a run of at least four `player` tokens.
pub fn winning_axis(board: &Board, row: usize, col: usize, player: Player) -> Option<Axis> {
    Axis::ALL
        .into_iter()
        .find(|axis| streak(&axis.line(board, row, col), player) >= WIN_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Cell = Cell::Occupied(Player::One);
    const O: Cell = Cell::Occupied(Player::Two);
    const E: Cell = Cell::Empty;

    fn board_with(cells: &[(usize, usize, Cell)]) -> Board {
        let mut board = Board::new();
        for &(row, col, cell) in cells {
            board.set(row, col, cell);
        }
        board
    }

    #[test]
    fn test_streak_counts_longest_run() {
        assert_eq!(streak(&[X, X, E, X, X, X], Player::One), 3);
        assert_eq!(streak(&[X, O, X, O], Player::One), 1);
        assert_eq!(streak(&[O, O, O, O], Player::One), 0);
        assert_eq!(streak(&[], Player::Two), 0);
        assert_eq!(streak(&[E, O, O, O, O], Player::Two), 4);
    }

    #[test]
    fn test_horizontal_window_is_clamped() {
        let board = Board::new();
        assert_eq!(Axis::Horizontal.line(&board, 5, 0).len(), 4);
        assert_eq!(Axis::Horizontal.line(&board, 5, 3).len(), 7);
        assert_eq!(Axis::Horizontal.line(&board, 5, 6).len(), 4);
    }

    #[test]
    fn test_vertical_window_is_clamped() {
        let board = Board::new();
        assert_eq!(Axis::Vertical.line(&board, 0, 0).len(), 4);
        assert_eq!(Axis::Vertical.line(&board, 2, 0).len(), 6);
        assert_eq!(Axis::Vertical.line(&board, 5, 0).len(), 4);
    }

    #[test]
    fn test_diagonal_lines_start_within_three_cells() {
        let board = Board::new();
        // (5,6): descending start is (2,3), walk to (5,6)
        assert_eq!(Axis::DescendingDiagonal.line(&board, 5, 6).len(), 4);
        // (0,0): descending runs the full main diagonal
        assert_eq!(Axis::DescendingDiagonal.line(&board, 0, 0).len(), 6);
        // (5,0): ascending runs up to (0,5)
        assert_eq!(Axis::AscendingDiagonal.line(&board, 5, 0).len(), 6);
        // (0,6): ascending start is (3,3)
        assert_eq!(Axis::AscendingDiagonal.line(&board, 0, 6).len(), 4);
    }

    #[test]
    fn test_horizontal_win_at_right_edge() {
        let board = board_with(&[(5, 3, X), (5, 4, X), (5, 5, X), (5, 6, X)]);
        assert_eq!(winning_axis(&board, 5, 6, Player::One), Some(Axis::Horizontal));
        assert_eq!(winning_axis(&board, 5, 3, Player::One), Some(Axis::Horizontal));
    }

    #[test]
    fn test_vertical_win() {
        let board = board_with(&[(2, 1, O), (3, 1, O), (4, 1, O), (5, 1, O)]);
        assert_eq!(winning_axis(&board, 2, 1, Player::Two), Some(Axis::Vertical));
        assert_eq!(winning_axis(&board, 2, 1, Player::One), None);
    }

    #[test]
    fn test_descending_diagonal_win() {
        let board = board_with(&[(2, 3, X), (3, 4, X), (4, 5, X), (5, 6, X)]);
        assert_eq!(
            winning_axis(&board, 2, 3, Player::One),
            Some(Axis::DescendingDiagonal)
        );
        assert_eq!(
            winning_axis(&board, 5, 6, Player::One),
            Some(Axis::DescendingDiagonal)
        );
    }

    #[test]
    fn test_ascending_diagonal_win() {
        let board = board_with(&[(5, 0, O), (4, 1, O), (3, 2, O), (2, 3, O)]);
        assert_eq!(
            winning_axis(&board, 2, 3, Player::Two),
            Some(Axis::AscendingDiagonal)
        );
        assert_eq!(
            winning_axis(&board, 4, 1, Player::Two),
            Some(Axis::AscendingDiagonal)
        );
    }

    #[test]
    fn test_broken_run_is_not_a_win() {
        let board = board_with(&[(5, 0, X), (5, 1, X), (5, 2, O), (5, 3, X), (5, 4, X)]);
        assert_eq!(winning_axis(&board, 5, 4, Player::One), None);
    }

    #[test]
    fn test_three_is_not_a_win() {
        let board = board_with(&[(5, 0, X), (5, 1, X), (5, 2, X)]);
        assert_eq!(winning_axis(&board, 5, 1, Player::One), None);
    }
}

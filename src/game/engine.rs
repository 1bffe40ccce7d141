use tracing::{debug, info, instrument};

use super::win::winning_axis;
use super::{Board, GameState, GameStatus, Player, COLS, ROWS};
use crate::error::GameError;

/// Where a successful move landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
    pub player: Player,
}

/// Connect Four rules engine: owns the board and drives the turn/status
/// state machine.
///
/// The board is mutated only by [`GameEngine::play_column`] and
/// [`GameEngine::reset`]. Queries hand out copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    /// Lowest free row per column; `None` once the column holds `ROWS` tokens.
    next_free_row: [Option<usize>; COLS],
    state: GameState,
}

impl GameEngine {
    pub fn new() -> Self {
        GameEngine {
            board: Board::new(),
            next_free_row: [Some(ROWS - 1); COLS],
            state: GameState::initial(),
        }
    }

    /// Drop a token into `column`.
    ///
    /// `player` overrides whose token is placed; `None` uses the current turn.
    /// Either way the turn then passes to the opponent of whoever just moved,
    /// and the win check runs for that acting player.
    ///
    /// Checks run in order: game over, column out of range, column full. A
    /// rejected move leaves the engine untouched.
    #[instrument(skip(self), fields(turn = ?self.state.player_turn))]
    pub fn play_column(
        &mut self,
        column: usize,
        player: Option<Player>,
    ) -> Result<Placement, GameError> {
        let row = self.validate_play(column).inspect_err(|err| {
            debug!(%err, "move rejected");
        })?;
        let acting = player.unwrap_or(self.state.player_turn);

        self.board.set(row, column, acting.to_cell());
        self.next_free_row[column] = row.checked_sub(1);
        self.state.player_turn = acting.other();
        debug!(row, column, player = ?acting, "token placed");

        if let Some(axis) = winning_axis(&self.board, row, column, acting) {
            info!(player = ?acting, ?axis, "game won");
            self.state.game_status = GameStatus::Win;
            self.state.winner = Some(acting);
        } else if self.is_board_full() {
            info!("game drawn");
            self.state.game_status = GameStatus::Draw;
        }

        Ok(Placement {
            row,
            column,
            player: acting,
        })
    }

    /// Clear the board and start over with Player One to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
        debug!("game reset");
    }

    /// Independent copy of the current board.
    pub fn grid(&self) -> Board {
        self.board
    }

    /// Snapshot of turn, status and winner.
    pub fn game_state(&self) -> GameState {
        self.state
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Row the next token in `column` would land on, or `None` if the column
    /// is full or out of range.
    pub fn next_free_row(&self, column: usize) -> Option<usize> {
        self.next_free_row.get(column).copied().flatten()
    }

    /// Columns that can still take a token. Empty once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..COLS)
            .filter(|&col| self.next_free_row[col].is_some())
            .collect()
    }

    fn validate_play(&self, column: usize) -> Result<usize, GameError> {
        if self.is_terminal() {
            return Err(GameError::GameOver);
        }

        match self.next_free_row.get(column) {
            None => Err(GameError::InvalidColumn { column }),
            Some(None) => Err(GameError::ColumnFull { column }),
            Some(Some(row)) => Ok(*row),
        }
    }

    fn is_board_full(&self) -> bool {
        self.next_free_row.iter().all(Option::is_none)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

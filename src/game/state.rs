use serde::{Deserialize, Serialize};

use super::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameStatus {
    InProgress,
    Win,
    Draw,
}

impl GameStatus {
    /// `Win` and `Draw` are terminal; only a reset leaves them.
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Immutable snapshot of whose turn it is and how the game stands.
///
/// `winner` is `Some` exactly when `game_status` is [`GameStatus::Win`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub player_turn: Player,
    pub game_status: GameStatus,
    pub winner: Option<Player>,
}

impl GameState {
    /// State of a freshly created or reset game
    pub fn initial() -> Self {
        GameState {
            player_turn: Player::One,
            game_status: GameStatus::InProgress,
            winner: None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.game_status.is_terminal()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

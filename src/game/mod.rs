//! Core Connect Four game logic: board representation, players, win
//! detection, and the engine that owns the turn/status state machine.

mod board;
mod engine;
mod player;
mod state;
pub mod win;

pub use board::{Board, Cell, COLS, ROWS};
pub use engine::{GameEngine, Placement};
pub use player::Player;
pub use state::{GameState, GameStatus};

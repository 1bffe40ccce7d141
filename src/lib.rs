//! # Connect Four
//!
//! Rules engine for Connect Four on the standard 6x7 board, with a plain
//! prompt client and a terminal UI built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, win detection, engine
//! - [`ui`] — Prompt client and terminal UI
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — `tracing` subscriber setup
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;

pub use error::GameError;
pub use game::{Board, Cell, GameEngine, GameState, GameStatus, Player, COLS, ROWS};

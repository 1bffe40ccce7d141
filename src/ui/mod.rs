//! Presentation layers over [`crate::game::GameEngine`]: a line-oriented
//! prompt client and a ratatui terminal UI.

mod app;
pub mod board_widget;
mod game_view;
pub mod plain;

pub use app::App;
pub use plain::PlainClient;

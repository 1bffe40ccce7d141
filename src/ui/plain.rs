//! Line-oriented client: prints the board, reads a column per line.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::config::AppConfig;
use crate::game::{Board, Cell, GameEngine, GameStatus, COLS};

pub struct PlainClient<R, W> {
    engine: GameEngine,
    config: AppConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PlainClient<R, W> {
    pub fn new(config: AppConfig, input: R, output: W) -> Self {
        PlainClient {
            engine: GameEngine::new(),
            config,
            input,
            output,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Play until the user declines another game or input runs out.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to Connect 4!")?;
        self.print_board()?;

        loop {
            let state = self.engine.game_state();

            if state.is_terminal() {
                match (state.game_status, state.winner) {
                    (GameStatus::Win, Some(winner)) => {
                        writeln!(self.output, "{winner} wins!")?
                    }
                    _ => writeln!(self.output, "It's a draw!")?,
                }

                if !self.config.session.ask_play_again {
                    return Ok(());
                }
                let Some(answer) = self.prompt("Play again? (y/n): ")? else {
                    return Ok(());
                };
                if !answer.eq_ignore_ascii_case("y") {
                    return Ok(());
                }
                self.engine.reset();
                self.print_board()?;
                continue;
            }

            let prompt = format!(
                "{} - Choose a column (0-{}): ",
                state.player_turn,
                COLS - 1
            );
            let Some(line) = self.prompt(&prompt)? else {
                return Ok(());
            };

            match line.parse::<usize>() {
                Ok(column) if column < COLS => {
                    if let Err(err) = self.engine.play_column(column, None) {
                        writeln!(self.output, "Cannot play there: {err}")?;
                    }
                }
                _ => {
                    debug!(input = %line, "rejected column input");
                    writeln!(
                        self.output,
                        "Invalid input. Please enter a number between 0 and {}.",
                        COLS - 1
                    )?;
                }
            }
            self.print_board()?;
        }
    }

    /// Write `text` and read one trimmed line. `None` on end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn print_board(&mut self) -> io::Result<()> {
        let text = render_board(&self.engine.grid(), &self.config);
        writeln!(self.output)?;
        writeln!(self.output, "{text}")?;
        writeln!(self.output)
    }
}

/// Text rendering of `board` with the configured glyphs.
pub fn render_board(board: &Board, config: &AppConfig) -> String {
    let display = &config.display;
    let rule = "-".repeat(COLS * 3 - 1);

    let header: Vec<String> = (0..COLS).map(|col| col.to_string()).collect();
    let mut lines = vec![format!(" {} ", header.join("  ")), rule.clone()];
    for row in board.rows() {
        let glyphs: Vec<String> = row
            .iter()
            .map(|cell| match cell {
                Cell::Empty => display.empty_symbol,
                Cell::Occupied(player) => display.symbol_for(*player),
            })
            .map(String::from)
            .collect();
        lines.push(format!(" {} ", glyphs.join("  ")));
    }
    lines.push(rule);
    lines.join("\n")
}

//! Board display collaborators.
//!
//! The engine hands boards and results to a [`BoardRenderer`] purely for
//! observability; nothing a renderer does feeds back into the game.

use alloc::string::String;
use core::fmt::Write as _;

use crate::core::{Board, Cell, Coord, GameResult};

/// Receives boards and end-of-game results for display.
pub trait BoardRenderer {
    /// Show `board` under `label`. Ship cells are drawn only when `reveal` is set.
    fn display_board(&mut self, label: &str, board: &Board, reveal: bool);

    /// Announce the end of a game for `player`.
    fn show_result(&mut self, player: &str, result: GameResult, reason: &str);
}

/// Renderer that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl BoardRenderer for NullRenderer {
    fn display_board(&mut self, _label: &str, _board: &Board, _reveal: bool) {}
    fn show_result(&mut self, _player: &str, _result: GameResult, _reason: &str) {}
}

/// Text picture of a board: column letters across the top, 1-based row
/// numbers down the side.
pub fn render_board(board: &Board, reveal: bool) -> String {
    let mut out = String::new();
    let _ = write!(out, "    ");
    for x in 0..board.width() {
        let _ = write!(out, " {}", (b'A' + x as u8) as char);
    }
    let _ = writeln!(out);
    for y in 0..board.height() {
        let _ = write!(out, "  {:2}", y + 1);
        for x in 0..board.width() {
            let ch = match board.cell(Coord::new(x, y)) {
                Ok(Cell::Hit) => 'X',
                Ok(Cell::Miss) => 'o',
                Ok(Cell::Ship) if reveal => 'S',
                _ => '.',
            };
            let _ = write!(out, " {}", ch);
        }
        let _ = writeln!(out);
    }
    if reveal {
        let _ = writeln!(out, "  Legend: S=Ship  X=Hit  o=Miss  .=Water");
    } else {
        let _ = writeln!(out, "  Legend: X=Hit  o=Miss  .=Unknown");
    }
    out
}

/// Line announcing a result for `player`.
pub fn result_line(player: &str, result: GameResult) -> String {
    match result {
        GameResult::Win => alloc::format!("{} wins the game!", player),
        GameResult::Lose => alloc::format!("{} lost...", player),
        GameResult::Draw => alloc::format!("{} had a draw.", player),
    }
}

#[cfg(feature = "std")]
pub use console::ConsoleRenderer;

#[cfg(feature = "std")]
mod console {
    use std::io::{self, Stdout, Write};

    use super::{render_board, result_line, BoardRenderer};
    use crate::core::{Board, GameResult};

    /// Renderer writing to a text sink, stdout by default.
    pub struct ConsoleRenderer<W: Write = Stdout> {
        out: W,
    }

    impl ConsoleRenderer<Stdout> {
        pub fn new() -> Self {
            Self { out: io::stdout() }
        }
    }

    impl Default for ConsoleRenderer<Stdout> {
        fn default() -> Self {
            Self::new()
        }
    }

    impl<W: Write> ConsoleRenderer<W> {
        /// Render into an arbitrary writer.
        pub fn with_writer(out: W) -> Self {
            Self { out }
        }

        pub fn into_inner(self) -> W {
            self.out
        }
    }

    impl<W: Write> BoardRenderer for ConsoleRenderer<W> {
        fn display_board(&mut self, label: &str, board: &Board, reveal: bool) {
            let text = render_board(board, reveal);
            if !label.is_empty() {
                let _ = writeln!(self.out, "{}", label);
            }
            let _ = write!(self.out, "{}", text);
            let _ = self.out.flush();
        }

        fn show_result(&mut self, player: &str, result: GameResult, reason: &str) {
            let _ = writeln!(self.out, "{}", result_line(player, result));
            let _ = writeln!(self.out, "{}", reason);
            let _ = self.out.flush();
        }
    }
}

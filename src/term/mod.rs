//! Terminal rendering layer.
//!
//! `fb` holds the styled-cell framebuffer, `game_view` maps a game snapshot
//! into it (pure, unit-testable), and `renderer` flushes it to a real
//! terminal via crossterm.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;

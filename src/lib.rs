//! Blockfall: a falling-block puzzle game.
//!
//! `core` holds the pure game engine (board, pieces, collision, controller);
//! `term` renders a game snapshot to the terminal; `input` maps key events to
//! game actions. The engine exposes a synchronous `tick` entry point and never
//! schedules itself, so it can run under a real-time loop or a headless test
//! driver alike.

pub mod core;
pub mod input;
pub mod term;
pub mod types;

//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI, networking, or I/O.

pub mod board;
pub mod catalog;
pub mod clock;
pub mod collision;
pub mod game;
pub mod piece;
pub mod rng;
pub mod shape;
pub mod snapshot;

// Re-export commonly used types
pub use board::Board;
pub use catalog::draw;
pub use clock::FrameClock;
pub use collision::collides;
pub use game::Game;
pub use piece::ActivePiece;
pub use rng::SimpleRng;
pub use shape::Shape;
pub use snapshot::GameSnapshot;

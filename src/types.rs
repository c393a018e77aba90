//! Core types shared across the application.
//! This module contains pure data types with no external dependencies.

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Spawn anchor column for new pieces (`cols / 2 - 1`).
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8 - 1;

/// Game timing constants (in milliseconds)
pub const TICK_MS: u32 = 16;
pub const DROP_INTERVAL_MS: u32 = 1000;

/// Points awarded per cleared line.
pub const POINTS_PER_LINE: u32 = 100;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// All kinds, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Identifying color for this kind, as an RGB triple.
    pub const fn color(self) -> (u8, u8, u8) {
        match self {
            PieceKind::I => (0x00, 0xf0, 0xf0),
            PieceKind::O => (0xf0, 0xf0, 0x00),
            PieceKind::T => (0xa0, 0x00, 0xf0),
            PieceKind::L => (0xf0, 0xa0, 0x00),
            PieceKind::J => (0x00, 0x00, 0xf0),
            PieceKind::S => (0x00, 0xf0, 0x00),
            PieceKind::Z => (0xf0, 0x00, 0x00),
        }
    }
}

/// Cell on the board (None = empty, Some = locked piece kind)
pub type Cell = Option<PieceKind>;

/// Game lifecycle status.
///
/// `Running` is the initial state after start/restart. `Paused` is a
/// reversible toggle. `GameOver` is terminal until an explicit restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Paused,
    GameOver,
}

/// Game actions (the abstract command surface consumed from input handling)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    Rotate,
    SoftDrop,
    TogglePause,
    Restart,
}

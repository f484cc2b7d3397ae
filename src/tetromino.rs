//! Tetromino definitions: the 7 piece types, their colors, and the
//! precomputed rotation-state shape grids.

use ratatui::style::Color;

/// Color of a single board cell. `None` marks an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellColor {
    #[default]
    None,
    Cyan,
    Yellow,
    Purple,
    Green,
    Red,
    Blue,
    Orange,
}

impl CellColor {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellColor::None)
    }

    /// Terminal color used by the renderer.
    pub fn terminal(&self) -> Color {
        match self {
            CellColor::None => Color::Reset,
            CellColor::Cyan => Color::Cyan,
            CellColor::Yellow => Color::Yellow,
            CellColor::Purple => Color::Magenta,
            CellColor::Green => Color::Green,
            CellColor::Red => Color::Red,
            CellColor::Blue => Color::Blue,
            CellColor::Orange => Color::Rgb(255, 165, 0),
        }
    }
}

/// One rotation state: a rectangular 0/1 grid of occupied cells.
pub type Shape = &'static [&'static [u8]];

/// The 7 tetromino types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TetrominoType {
    I, // Cyan - long bar
    O, // Yellow - square
    T, // Purple - T-shape
    S, // Green - S-shape
    Z, // Red - Z-shape
    J, // Blue - J-shape
    L, // Orange - L-shape
}

// The rotation sequences are a fixed hand-authored list, not a matrix
// transform: O repeats one state, I/S/Z alternate between two.
const I_SHAPES: [Shape; 4] = [
    &[&[1, 1, 1, 1]],
    &[&[1], &[1], &[1], &[1]],
    &[&[1, 1, 1, 1]],
    &[&[1], &[1], &[1], &[1]],
];

const O_SHAPES: [Shape; 4] = [
    &[&[1, 1], &[1, 1]],
    &[&[1, 1], &[1, 1]],
    &[&[1, 1], &[1, 1]],
    &[&[1, 1], &[1, 1]],
];

const T_SHAPES: [Shape; 4] = [
    &[&[0, 1, 0], &[1, 1, 1]],
    &[&[1, 0], &[1, 1], &[1, 0]],
    &[&[1, 1, 1], &[0, 1, 0]],
    &[&[0, 1], &[1, 1], &[0, 1]],
];

const S_SHAPES: [Shape; 4] = [
    &[&[0, 1, 1], &[1, 1, 0]],
    &[&[1, 0], &[1, 1], &[0, 1]],
    &[&[0, 1, 1], &[1, 1, 0]],
    &[&[1, 0], &[1, 1], &[0, 1]],
];

const Z_SHAPES: [Shape; 4] = [
    &[&[1, 1, 0], &[0, 1, 1]],
    &[&[0, 1], &[1, 1], &[1, 0]],
    &[&[1, 1, 0], &[0, 1, 1]],
    &[&[0, 1], &[1, 1], &[1, 0]],
];

const J_SHAPES: [Shape; 4] = [
    &[&[1, 0, 0], &[1, 1, 1]],
    &[&[1, 1], &[1, 0], &[1, 0]],
    &[&[1, 1, 1], &[0, 0, 1]],
    &[&[0, 1], &[0, 1], &[1, 1]],
];

const L_SHAPES: [Shape; 4] = [
    &[&[0, 0, 1], &[1, 1, 1]],
    &[&[1, 0], &[1, 0], &[1, 1]],
    &[&[1, 1, 1], &[1, 0, 0]],
    &[&[1, 1], &[0, 1], &[0, 1]],
];

impl TetrominoType {
    /// Get the color for this tetromino
    pub fn color(&self) -> CellColor {
        match self {
            TetrominoType::I => CellColor::Cyan,
            TetrominoType::O => CellColor::Yellow,
            TetrominoType::T => CellColor::Purple,
            TetrominoType::S => CellColor::Green,
            TetrominoType::Z => CellColor::Red,
            TetrominoType::J => CellColor::Blue,
            TetrominoType::L => CellColor::Orange,
        }
    }

    /// Get all tetromino types for random selection
    pub fn all() -> [TetrominoType; 7] {
        [
            TetrominoType::I,
            TetrominoType::O,
            TetrominoType::T,
            TetrominoType::S,
            TetrominoType::Z,
            TetrominoType::J,
            TetrominoType::L,
        ]
    }

    /// The ordered rotation states (0-3) for this type.
    pub fn shapes(&self) -> [Shape; 4] {
        match self {
            TetrominoType::I => I_SHAPES,
            TetrominoType::O => O_SHAPES,
            TetrominoType::T => T_SHAPES,
            TetrominoType::S => S_SHAPES,
            TetrominoType::Z => Z_SHAPES,
            TetrominoType::J => J_SHAPES,
            TetrominoType::L => L_SHAPES,
        }
    }
}

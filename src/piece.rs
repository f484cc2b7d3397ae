//! Active falling piece

use crate::tetromino::{CellColor, Shape, TetrominoType};

/// Spawn anchor in board coordinates.
const SPAWN_X: i32 = 3;
const SPAWN_Y: i32 = 0;

/// A live piece: a catalog shape reference plus its board position.
#[derive(Debug, Clone)]
pub struct Piece {
    /// The type of tetromino
    pub kind: TetrominoType,
    /// Shape grid for the current rotation state
    pub shape: Shape,
    /// Color derived from the type
    pub color: CellColor,
    /// Top-left anchor of the shape grid; x grows right, y grows down
    pub x: i32,
    pub y: i32,
    rotation: usize,
}

impl Piece {
    /// Create a new piece at the spawn position
    pub fn new(kind: TetrominoType) -> Self {
        Self {
            kind,
            shape: kind.shapes()[0],
            color: kind.color(),
            x: SPAWN_X,
            y: SPAWN_Y,
            rotation: 0,
        }
    }

    pub fn rotation(&self) -> usize {
        self.rotation
    }

    /// Advance to the next precomputed rotation state. The anchor stays put,
    /// so the piece can appear to shift when the grid dimensions differ
    /// between states.
    pub fn rotate_forward(&mut self) {
        self.rotation = (self.rotation + 1) % 4;
        self.shape = self.kind.shapes()[self.rotation];
    }

    /// Undo a `rotate_forward` that was rejected by collision.
    pub fn rotate_back(&mut self) {
        self.rotation = (self.rotation + 3) % 4;
        self.shape = self.kind.shapes()[self.rotation];
    }

    /// Occupied (row, col) offsets within the shape grid.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.shape.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .filter(|&(_, cell)| *cell != 0)
                .map(move |(col, _)| (row, col))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawns_at_fixed_anchor() {
        let piece = Piece::new(TetrominoType::T);
        assert_eq!(piece.x, 3);
        assert_eq!(piece.y, 0);
        assert_eq!(piece.rotation(), 0);
        assert_eq!(piece.color, CellColor::Purple);
        assert_eq!(piece.shape, TetrominoType::T.shapes()[0]);
    }

    #[test]
    fn four_forward_rotations_return_to_start() {
        for kind in TetrominoType::all() {
            let mut piece = Piece::new(kind);
            let start = piece.shape;
            for _ in 0..4 {
                piece.rotate_forward();
            }
            assert_eq!(piece.rotation(), 0);
            assert_eq!(piece.shape, start, "{kind:?}");
        }
    }

    #[test]
    fn rotate_back_undoes_rotate_forward() {
        let mut piece = Piece::new(TetrominoType::J);
        let start = piece.shape;
        piece.rotate_forward();
        piece.rotate_back();
        assert_eq!(piece.rotation(), 0);
        assert_eq!(piece.shape, start);
    }

    #[test]
    fn cells_yields_four_offsets_in_every_state() {
        for kind in TetrominoType::all() {
            let mut piece = Piece::new(kind);
            for _ in 0..4 {
                assert_eq!(piece.cells().count(), 4, "{kind:?}");
                piece.rotate_forward();
            }
        }
    }
}

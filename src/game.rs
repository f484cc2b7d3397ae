//! Core game state and logic

use crate::board::Board;
use crate::piece::Piece;
use crate::rng::PieceRng;
use crate::score::Score;

/// Game state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Paused,
    GameOver,
}

/// Input commands the game can process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Rotate,
    SoftDrop,
    HardDrop,
    Pause,
    Quit,
}

/// The main game struct: grid, live pieces, score, and the per-piece state
/// machine (falling, locked, game over).
pub struct Game {
    /// The game board
    pub board: Board,
    /// Current falling piece
    pub current: Piece,
    /// Next piece, always generated one ahead
    pub next: Piece,
    /// Score tracking
    pub score: Score,
    /// Current game state
    pub state: GameState,
    /// Piece randomizer
    rng: PieceRng,
}

impl Game {
    /// Create a new game
    pub fn new() -> Self {
        Self::from_rng(PieceRng::new())
    }

    /// Deterministic construction for tests and replays
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(PieceRng::with_seed(seed))
    }

    fn from_rng(mut rng: PieceRng) -> Self {
        let current = Piece::new(rng.next());
        let next = Piece::new(rng.next());
        Self {
            board: Board::new(),
            current,
            next,
            score: Score::new(),
            state: GameState::Playing,
            rng,
        }
    }

    pub fn is_over(&self) -> bool {
        self.state == GameState::GameOver
    }

    /// Process one discrete command
    pub fn process_action(&mut self, action: Action) {
        match self.state {
            GameState::Paused => {
                if action == Action::Pause {
                    self.state = GameState::Playing;
                }
            }
            GameState::Playing => match action {
                Action::MoveLeft => {
                    self.move_left();
                }
                Action::MoveRight => {
                    self.move_right();
                }
                Action::Rotate => {
                    self.rotate();
                }
                Action::SoftDrop => {
                    self.soft_drop();
                }
                Action::HardDrop => self.hard_drop(),
                Action::Pause => self.state = GameState::Paused,
                // Quit is handled by the event loop
                Action::Quit => {}
            },
            GameState::GameOver => {}
        }
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1, 0)
    }

    /// Tentatively translate the current piece; commit only when the target
    /// position is collision free.
    pub fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        if self.state != GameState::Playing {
            return false;
        }
        let x = self.current.x + dx;
        let y = self.current.y + dy;
        if self.board.collides(&self.current, x, y) {
            return false;
        }
        self.current.x = x;
        self.current.y = y;
        true
    }

    /// Advance the current piece to its next rotation state, reverting in
    /// full when the rotated shape does not fit. No kick offsets are tried.
    pub fn rotate(&mut self) -> bool {
        if self.state != GameState::Playing {
            return false;
        }
        self.current.rotate_forward();
        if self
            .board
            .collides(&self.current, self.current.x, self.current.y)
        {
            self.current.rotate_back();
            return false;
        }
        true
    }

    /// One forced descent step. Returns true while the piece keeps falling;
    /// a blocked step locks the piece and returns false.
    pub fn soft_drop(&mut self) -> bool {
        if self.state != GameState::Playing {
            return false;
        }
        if self.try_move(0, 1) {
            return true;
        }
        self.lock_current();
        false
    }

    /// Drop to rest and lock in one action
    pub fn hard_drop(&mut self) {
        if self.state != GameState::Playing {
            return;
        }
        while self.try_move(0, 1) {}
        self.lock_current();
    }

    /// Row the current piece would settle on, for the landing preview
    pub fn ghost_y(&self) -> i32 {
        let mut y = self.current.y;
        while !self.board.collides(&self.current, self.current.x, y + 1) {
            y += 1;
        }
        y
    }

    /// Commit the current piece, clear lines, score them, and bring in the
    /// next piece
    fn lock_current(&mut self) {
        self.board.lock(&self.current);

        let cleared = self.board.clear_lines();
        if cleared > 0 {
            self.score.add_clear(cleared);
            tracing::debug!(
                cleared,
                lines = self.score.lines,
                level = self.score.level,
                points = self.score.points,
                "lines cleared"
            );
        }

        self.spawn();
    }

    /// Promote `next` and draw a fresh one; a spawn collision ends the game
    fn spawn(&mut self) {
        self.current = std::mem::replace(&mut self.next, Piece::new(self.rng.next()));

        if self
            .board
            .collides(&self.current, self.current.x, self.current.y)
        {
            self.state = GameState::GameOver;
            tracing::info!(
                points = self.score.points,
                lines = self.score.lines,
                "game over"
            );
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BOARD_WIDTH;
    use crate::tetromino::{CellColor, TetrominoType};

    /// Deterministic game with the current piece forced to `kind`
    fn game_with(kind: TetrominoType) -> Game {
        let mut game = Game::with_seed(42);
        game.current = Piece::new(kind);
        game
    }

    fn fill_row_except(game: &mut Game, row: i32, gap: &[i32]) {
        for col in 0..BOARD_WIDTH as i32 {
            if !gap.contains(&col) {
                game.board.set(row, col, CellColor::Red);
            }
        }
    }

    #[test]
    fn seeded_games_agree() {
        let a = Game::with_seed(9);
        let b = Game::with_seed(9);
        assert_eq!(a.current.kind, b.current.kind);
        assert_eq!(a.next.kind, b.next.kind);
    }

    #[test]
    fn failed_move_leaves_position_unchanged() {
        let mut game = game_with(TetrominoType::I);
        // The bar spans columns x..x+3; three moves reach the wall
        assert!(game.move_left());
        assert!(game.move_left());
        assert!(game.move_left());
        assert_eq!(game.current.x, 0);

        assert!(!game.move_left());
        assert_eq!(game.current.x, 0);
        assert_eq!(game.current.y, 0);
    }

    #[test]
    fn rotate_on_o_piece_is_always_accepted() {
        let mut game = game_with(TetrominoType::O);
        let cells: Vec<_> = game.current.cells().collect();
        for _ in 0..4 {
            assert!(game.rotate());
            assert_eq!(game.current.cells().collect::<Vec<_>>(), cells);
        }
    }

    #[test]
    fn rejected_rotation_rolls_back_in_full() {
        let mut game = game_with(TetrominoType::T);
        // State 1 of T at the spawn anchor occupies (2, 3); block it
        game.board.set(2, 3, CellColor::Green);

        let shape = game.current.shape;
        assert!(!game.rotate());
        assert_eq!(game.current.rotation(), 0);
        assert_eq!(game.current.shape, shape);
        assert_eq!(game.current.x, 3);
        assert_eq!(game.current.y, 0);
    }

    #[test]
    fn soft_drop_descends_then_locks() {
        let mut game = game_with(TetrominoType::I);
        assert!(game.soft_drop());
        assert_eq!(game.current.y, 1);

        game.current.y = 19;
        assert!(!game.soft_drop());
        // The bar is committed on the bottom row and a new piece spawned
        for col in 3..7 {
            assert_eq!(game.board.get(19, col), Some(CellColor::Cyan));
        }
        assert_eq!(game.current.y, 0);
    }

    #[test]
    fn hard_drop_rests_at_lowest_free_row() {
        let mut game = game_with(TetrominoType::I);
        game.hard_drop();
        // Maximum collision-free y for a 1x4 bar is the bottom row
        for col in 3..7 {
            assert_eq!(game.board.get(19, col), Some(CellColor::Cyan));
        }
        // Exactly one lock happened: four cells total
        let filled = (0..20)
            .flat_map(|row| (0..10).map(move |col| (row, col)))
            .filter(|&(row, col)| !game.board.get(row, col).unwrap().is_empty())
            .count();
        assert_eq!(filled, 4);
    }

    #[test]
    fn hard_drop_stacks_on_existing_cells() {
        let mut game = game_with(TetrominoType::I);
        fill_row_except(&mut game, 19, &[0]);
        game.hard_drop();
        // Blocked by the partial bottom row, the bar rests one row above
        for col in 3..7 {
            assert_eq!(game.board.get(18, col), Some(CellColor::Cyan));
        }
    }

    #[test]
    fn completing_a_row_clears_and_scores_it() {
        let mut game = game_with(TetrominoType::I);
        fill_row_except(&mut game, 19, &[3, 4, 5, 6]);

        game.hard_drop();

        assert_eq!(game.score.lines, 1);
        assert_eq!(game.score.points, 100);
        assert_eq!(game.score.level, 1);
        // The only occupied row was cleared and an empty row sits on top
        assert!(game.board.is_empty());
        assert_eq!(game.state, GameState::Playing);
    }

    #[test]
    fn double_clear_pays_the_double_bonus() {
        let mut game = game_with(TetrominoType::O);
        fill_row_except(&mut game, 18, &[3, 4]);
        fill_row_except(&mut game, 19, &[3, 4]);

        game.hard_drop();

        assert_eq!(game.score.lines, 2);
        assert_eq!(game.score.points, 300);
        assert!(game.board.is_empty());
    }

    #[test]
    fn clear_bonus_scales_with_level() {
        let mut game = game_with(TetrominoType::I);
        game.score.lines = 25;
        game.score.level = 3;
        fill_row_except(&mut game, 19, &[3, 4, 5, 6]);

        game.hard_drop();
        assert_eq!(game.score.points, 300);
        assert_eq!(game.score.level, 3);
    }

    #[test]
    fn spawn_collision_ends_the_game() {
        let mut game = game_with(TetrominoType::O);
        // Occupy the spawn area so any promoted piece collides
        for row in 0..2 {
            for col in 3..7 {
                game.board.set(row, col, CellColor::Blue);
            }
        }

        game.hard_drop();
        assert_eq!(game.state, GameState::GameOver);
        assert!(game.is_over());
    }

    #[test]
    fn no_mutation_after_game_over() {
        let mut game = game_with(TetrominoType::O);
        for row in 0..2 {
            for col in 3..7 {
                game.board.set(row, col, CellColor::Blue);
            }
        }
        game.hard_drop();
        assert!(game.is_over());

        let x = game.current.x;
        let y = game.current.y;
        let rotation = game.current.rotation();

        assert!(!game.move_left());
        assert!(!game.move_right());
        assert!(!game.rotate());
        assert!(!game.soft_drop());
        game.hard_drop();
        game.process_action(Action::MoveLeft);

        assert_eq!(game.current.x, x);
        assert_eq!(game.current.y, y);
        assert_eq!(game.current.rotation(), rotation);
        assert_eq!(game.state, GameState::GameOver);
    }

    #[test]
    fn ghost_tracks_the_landing_row() {
        let mut game = game_with(TetrominoType::I);
        assert_eq!(game.ghost_y(), 19);

        fill_row_except(&mut game, 19, &[0]);
        assert_eq!(game.ghost_y(), 18);
    }

    #[test]
    fn pause_suspends_piece_mutation() {
        let mut game = game_with(TetrominoType::T);
        game.process_action(Action::Pause);
        assert_eq!(game.state, GameState::Paused);

        let x = game.current.x;
        game.process_action(Action::MoveLeft);
        assert_eq!(game.current.x, x);

        game.process_action(Action::Pause);
        assert_eq!(game.state, GameState::Playing);
    }
}

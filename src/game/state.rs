use super::config::{Difficulty, GameConfig};
use super::direction::{Direction, DirectionController};

/// A cell on the game grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in the given direction. May land out
    /// of bounds; the engine checks bounds before committing the move.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The snake, head first, tail last. Length is always at least 1 and no two
/// cells overlap; a move that would overlap ends the game before committing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: Vec<Position>,
}

impl Snake {
    /// A single-cell snake, the shape every game starts with.
    pub fn spawn_at(head: Position) -> Self {
        Self { body: vec![head] }
    }

    /// Build a snake from explicit cells, head first.
    pub fn from_cells(cells: Vec<Position>) -> Self {
        debug_assert!(!cells.is_empty());
        Self { body: cells }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Membership test over the whole body, tail included.
    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    pub fn cells(&self) -> &[Position] {
        &self.body
    }

    /// Commit a move: prepend the new head, and drop the tail unless the
    /// snake grew this tick.
    pub fn advance(&mut self, new_head: Position, grow: bool) {
        self.body.insert(0, new_head);
        if !grow {
            self.body.pop();
        }
    }
}

/// Lifecycle of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Idle,
    Playing,
    Paused,
    GameOver,
}

impl GameStatus {
    /// Start (and difficulty selection) are only accepted outside a run.
    pub fn accepts_start(self) -> bool {
        matches!(self, GameStatus::Idle | GameStatus::GameOver)
    }
}

/// Complete simulation state, owned by the app loop and threaded explicitly
/// through the engine and the view. The view reads snapshots of this value
/// and never writes it.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub controller: DirectionController,
    pub food: Position,
    pub grid_size: usize,
    pub score: u32,
    /// Current tick interval in milliseconds.
    pub tick_ms: u64,
    pub difficulty: Difficulty,
    pub status: GameStatus,
}

impl GameState {
    /// A fresh Idle state. The caller supplies the food cell so that food
    /// placement stays the engine's responsibility.
    pub fn new(snake: Snake, food: Position, config: &GameConfig) -> Self {
        Self {
            snake,
            controller: DirectionController::new(Direction::Up),
            food,
            grid_size: config.grid_size,
            score: 0,
            tick_ms: config.difficulty.base_tick_ms(),
            difficulty: config.difficulty,
            status: GameStatus::Idle,
        }
    }

    /// The cell a new game's snake starts on.
    pub fn center(grid_size: usize) -> Position {
        Position::new((grid_size / 2) as i32, (grid_size / 2) as i32)
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.x < self.grid_size as i32
            && pos.y >= 0
            && pos.y < self.grid_size as i32
    }

    pub fn occupied(&self, pos: Position) -> bool {
        self.snake.contains(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_step() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.step(Direction::Up), Position::new(5, 4));
        assert_eq!(pos.step(Direction::Down), Position::new(5, 6));
        assert_eq!(pos.step(Direction::Left), Position::new(4, 5));
        assert_eq!(pos.step(Direction::Right), Position::new(6, 5));
    }

    #[test]
    fn test_snake_spawn() {
        let snake = Snake::spawn_at(Position::new(10, 10));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Position::new(10, 10));
    }

    #[test]
    fn test_snake_advance_without_growth() {
        let mut snake = Snake::from_cells(vec![
            Position::new(5, 5),
            Position::new(5, 6),
            Position::new(5, 7),
        ]);
        snake.advance(Position::new(5, 4), false);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(5, 4));
        assert!(!snake.contains(Position::new(5, 7)));
    }

    #[test]
    fn test_snake_advance_with_growth() {
        let mut snake = Snake::from_cells(vec![Position::new(5, 5), Position::new(5, 6)]);
        snake.advance(Position::new(5, 4), true);
        assert_eq!(snake.len(), 3);
        assert!(snake.contains(Position::new(5, 6)));
    }

    #[test]
    fn test_snake_contains_includes_tail() {
        let snake = Snake::from_cells(vec![Position::new(5, 5), Position::new(5, 6)]);
        assert!(snake.contains(Position::new(5, 6)));
        assert!(!snake.contains(Position::new(5, 4)));
    }

    #[test]
    fn test_bounds_checking() {
        let config = GameConfig::default();
        let state = GameState::new(
            Snake::spawn_at(GameState::center(config.grid_size)),
            Position::new(5, 5),
            &config,
        );

        assert!(state.in_bounds(Position::new(0, 0)));
        assert!(state.in_bounds(Position::new(19, 19)));
        assert!(!state.in_bounds(Position::new(-1, 0)));
        assert!(!state.in_bounds(Position::new(0, -1)));
        assert!(!state.in_bounds(Position::new(20, 0)));
        assert!(!state.in_bounds(Position::new(0, 20)));
    }

    #[test]
    fn test_new_state_is_idle() {
        let config = GameConfig::default();
        let state = GameState::new(
            Snake::spawn_at(GameState::center(config.grid_size)),
            Position::new(5, 5),
            &config,
        );
        assert_eq!(state.status, GameStatus::Idle);
        assert_eq!(state.score, 0);
        assert_eq!(state.tick_ms, 150);
        assert_eq!(state.snake.head(), Position::new(10, 10));
    }

    #[test]
    fn test_status_accepts_start() {
        assert!(GameStatus::Idle.accepts_start());
        assert!(GameStatus::GameOver.accepts_start());
        assert!(!GameStatus::Playing.accepts_start());
        assert!(!GameStatus::Paused.accepts_start());
    }
}

use super::config::{Difficulty, FOOD_POINTS, GameConfig, MIN_TICK_MS, SPEED_UP_EVERY};
use super::direction::{Direction, DirectionController};
use super::state::{GameState, GameStatus, Position, Snake};
use rand::Rng;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    /// The head left the grid.
    Wall,
    /// The head landed on the snake's own body.
    SelfHit,
}

/// What a single tick did, for the app loop to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// The snake ate food this tick (and grew by one).
    pub ate_food: bool,
    /// Set when this tick ended the game.
    pub collision: Option<CollisionKind>,
    /// The tick interval shortened this tick; the driver must reschedule.
    pub speed_changed: bool,
}

/// The simulation engine and state machine.
///
/// All game logic lives here, free of I/O and rendering. The engine mutates
/// a [`GameState`] it does not own; the app loop owns the state and decides
/// when ticks run (only while [`GameStatus::Playing`]).
pub struct GameEngine {
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }

    /// Build the Idle state shown before the first game.
    pub fn initial_state(&mut self, config: &GameConfig) -> GameState {
        let snake = Snake::spawn_at(GameState::center(config.grid_size));
        let food = self.spawn_food(&snake, config.grid_size);
        GameState::new(snake, food, config)
    }

    /// Idle/GameOver -> Playing. Resets the snake to a single cell at the
    /// grid center heading Up, score to 0, speed to the difficulty's base
    /// interval, and spawns fresh food. Ignored in Playing and Paused.
    pub fn start(&mut self, state: &mut GameState) {
        if !state.status.accepts_start() {
            return;
        }
        state.snake = Snake::spawn_at(GameState::center(state.grid_size));
        state.controller = DirectionController::new(Direction::Up);
        state.score = 0;
        state.tick_ms = state.difficulty.base_tick_ms();
        state.food = self.spawn_food(&state.snake, state.grid_size);
        state.status = GameStatus::Playing;
    }

    /// Playing <-> Paused. Everything else is preserved; ignored in Idle
    /// and GameOver.
    pub fn toggle_pause(&mut self, state: &mut GameState) {
        state.status = match state.status {
            GameStatus::Playing => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Playing,
            other => other,
        };
    }

    /// Difficulty changes are only accepted while no run is active; they
    /// take effect via the reset on the next start.
    pub fn set_difficulty(&mut self, state: &mut GameState, difficulty: Difficulty) {
        if !state.status.accepts_start() {
            return;
        }
        state.difficulty = difficulty;
        state.tick_ms = difficulty.base_tick_ms();
    }

    /// Forward a turn request to the direction controller. Directional input
    /// outside Playing is silently dropped.
    pub fn request_turn(&mut self, state: &mut GameState, dir: Direction) -> bool {
        if state.status != GameStatus::Playing {
            return false;
        }
        state.controller.request_turn(dir)
    }

    /// Advance the simulation by one tick. No-op unless Playing.
    ///
    /// Collision checks run against the pre-move body, tail included:
    /// moving into the cell the tail is about to vacate is still fatal.
    pub fn tick(&mut self, state: &mut GameState) -> TickOutcome {
        if state.status != GameStatus::Playing {
            return TickOutcome::default();
        }

        let direction = state.controller.begin_tick();
        let new_head = state.snake.head().step(direction);

        if !state.in_bounds(new_head) {
            state.status = GameStatus::GameOver;
            return TickOutcome {
                collision: Some(CollisionKind::Wall),
                ..TickOutcome::default()
            };
        }
        if state.snake.contains(new_head) {
            state.status = GameStatus::GameOver;
            return TickOutcome {
                collision: Some(CollisionKind::SelfHit),
                ..TickOutcome::default()
            };
        }

        let ate_food = new_head == state.food;
        state.snake.advance(new_head, ate_food);

        let mut speed_changed = false;
        if ate_food {
            state.score += FOOD_POINTS;
            state.food = self.spawn_food(&state.snake, state.grid_size);

            if state.score % SPEED_UP_EVERY == 0 {
                let next = state
                    .tick_ms
                    .saturating_sub(state.difficulty.speed_step_ms())
                    .max(MIN_TICK_MS);
                speed_changed = next != state.tick_ms;
                state.tick_ms = next;
            }
        }

        TickOutcome {
            ate_food,
            collision: None,
            speed_changed,
        }
    }

    /// Pick a free cell for food by rejection sampling. Once the sample
    /// count exceeds twice the cell count the board is close to saturated,
    /// so fall back to scanning for the first free cell.
    fn spawn_food(&mut self, snake: &Snake, grid_size: usize) -> Position {
        let side = grid_size as i32;
        let attempts = grid_size * grid_size * 2;

        for _ in 0..attempts {
            let pos = Position::new(self.rng.gen_range(0..side), self.rng.gen_range(0..side));
            if !snake.contains(pos) {
                return pos;
            }
        }

        for y in 0..side {
            for x in 0..side {
                let pos = Position::new(x, y);
                if !snake.contains(pos) {
                    return pos;
                }
            }
        }

        // Full board: unreachable, the run ends before the snake covers the
        // grid. Keep the food where the head is rather than loop forever.
        snake.head()
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

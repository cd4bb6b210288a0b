//! Core game logic: grid, snake, direction handling, the tick engine and
//! the Idle/Playing/Paused/GameOver state machine.
//!
//! Nothing in this module performs I/O or rendering; the app loop owns the
//! [`GameState`] and drives ticks, the view reads snapshots.

pub mod config;
pub mod direction;
pub mod engine;
pub mod state;

pub use config::{Difficulty, GameConfig, FOOD_POINTS, MIN_TICK_MS, SPEED_UP_EVERY};
pub use direction::{Direction, DirectionController};
pub use engine::{CollisionKind, GameEngine, TickOutcome};
pub use state::{GameState, GameStatus, Position, Snake};

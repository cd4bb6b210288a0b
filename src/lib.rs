//! Neon Snake - a terminal arcade snake game
//!
//! This library provides:
//! - Core game logic, free of I/O (game module)
//! - Keyboard and swipe input mapping (input module)
//! - High score persistence (persist module)
//! - TUI rendering (render module)
//! - Session counters (metrics module)
//! - The async app loop driving ticks and events (app module)

pub mod app;
pub mod game;
pub mod input;
pub mod metrics;
pub mod persist;
pub mod render;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval, interval_at};

use crate::game::{GameConfig, GameEngine, GameState, GameStatus};
use crate::input::{InputHandler, KeyAction, SwipeTracker, swipe::DEFAULT_SWIPE_CELLS};
use crate::metrics::SessionStats;
use crate::persist::HighScoreStore;
use crate::render::Renderer;

const RENDER_INTERVAL: Duration = Duration::from_millis(33);

/// Owns the game state and multiplexes the tick timer, input events and the
/// render timer on a single task. Nothing else reads or writes the state,
/// so a tick always sees the direction committed at the instant it fired
/// and input lands between whole ticks.
pub struct App {
    engine: GameEngine,
    state: GameState,
    stats: SessionStats,
    renderer: Renderer,
    input_handler: InputHandler,
    swipe: SwipeTracker,
    high_score: HighScoreStore,
    should_quit: bool,
}

impl App {
    pub fn new(config: GameConfig, high_score: HighScoreStore) -> Self {
        let mut engine = GameEngine::new();
        let state = engine.initial_state(&config);

        Self {
            engine,
            state,
            stats: SessionStats::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            swipe: SwipeTracker::new(DEFAULT_SWIPE_CELLS),
            high_score,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = make_tick_timer(self.state.tick_ms);
        let mut render_timer = interval(RENDER_INTERVAL);

        loop {
            // The tick branch is armed only while a run is live; pausing or
            // dying disarms it on the same loop iteration, so no stale tick
            // fires after the transition.
            let playing = self.state.status == GameStatus::Playing;

            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        if self.handle_event(event) {
                            // Entered Playing or changed speed: schedule the
                            // next tick a full fresh interval from now, with
                            // no replay of ticks missed while paused.
                            tick_timer = make_tick_timer(self.state.tick_ms);
                        }
                    }
                }

                // Game logic tick
                _ = tick_timer.tick(), if playing => {
                    let outcome = self.engine.tick(&mut self.state);
                    if outcome.ate_food {
                        self.high_score.record(self.state.score);
                    }
                    if outcome.speed_changed {
                        tick_timer = make_tick_timer(self.state.tick_ms);
                    }
                    if outcome.collision.is_some() {
                        self.stats.on_game_over();
                    }
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.stats.update();
                    let best = self.high_score.best();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.stats, best);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Apply one terminal event to the game. Returns true when the tick
    /// timer must be rebuilt (a run started or resumed).
    fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match self.input_handler.handle_key_event(key) {
                    KeyAction::Turn(dir) => {
                        self.engine.request_turn(&mut self.state, dir);
                        false
                    }
                    KeyAction::Start => {
                        let could_start = self.state.status.accepts_start();
                        self.engine.start(&mut self.state);
                        if could_start {
                            self.stats.on_game_start();
                        }
                        could_start
                    }
                    KeyAction::TogglePause => {
                        self.engine.toggle_pause(&mut self.state);
                        self.state.status == GameStatus::Playing
                    }
                    KeyAction::SetDifficulty(difficulty) => {
                        self.engine.set_difficulty(&mut self.state, difficulty);
                        false
                    }
                    KeyAction::Quit => {
                        self.should_quit = true;
                        false
                    }
                    KeyAction::None => false,
                }
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => false,
        }
    }

    /// Press/release pairs become swipes, the terminal stand-in for touch
    /// gestures.
    fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        match mouse.kind {
            MouseEventKind::Down(_) => {
                self.swipe.press(mouse.column as i32, mouse.row as i32);
            }
            MouseEventKind::Up(_) => {
                if let Some(dir) = self.swipe.release(mouse.column as i32, mouse.row as i32) {
                    self.engine.request_turn(&mut self.state, dir);
                }
            }
            _ => {}
        }
        false
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

/// A fresh tick timer at the given interval. The first tick is due a full
/// interval from now: `interval` would complete it immediately, which on a
/// rebuild means a free tick on resume and a double-step after a speed-up.
/// Skipped ticks are dropped, not replayed in a burst, matching the
/// best-effort clock the game wants.
fn make_tick_timer(tick_ms: u64) -> Interval {
    let period = Duration::from_millis(tick_ms);
    let mut timer = interval_at(Instant::now() + period, period);
    timer.set_missed_tick_behavior(MissedTickBehavior::Skip);
    timer
}

//! Watch the autopilot play.
//!
//! The planner steers; the keyboard only controls playback: pause, speed,
//! restart, quit. A finished run parks on the game-over screen until `R`
//! starts a fresh one.

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{Interval, interval};

use crate::game::GameConfig;
use crate::metrics::SessionMetrics;
use crate::render::{Hud, Renderer};
use crate::sim::{Pilot, Simulation};

/// Playback speed settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackSpeed {
    /// 2 Hz (500ms per tick)
    Slow,
    /// 8 Hz (125ms per tick) - same pace as manual play
    Normal,
    /// 20 Hz (50ms per tick)
    Fast,
    /// 60 Hz (16ms per tick)
    VeryFast,
}

impl PlaybackSpeed {
    fn tick_interval(&self) -> Duration {
        match self {
            Self::Slow => Duration::from_millis(500),
            Self::Normal => Duration::from_millis(125),
            Self::Fast => Duration::from_millis(50),
            Self::VeryFast => Duration::from_millis(16),
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Slow => "Slow",
            Self::Normal => "Normal",
            Self::Fast => "Fast",
            Self::VeryFast => "Very Fast",
        }
    }
}

pub struct AutoMode {
    sim: Simulation,
    metrics: SessionMetrics,
    renderer: Renderer,
    should_quit: bool,
    paused: bool,
    speed: PlaybackSpeed,
}

impl AutoMode {
    pub fn new(config: GameConfig, seed: Option<u64>) -> Self {
        let sim = match seed {
            Some(seed) => Simulation::seeded(&config, Pilot::Auto, seed),
            None => Simulation::new(&config, Pilot::Auto),
        };

        Self {
            sim,
            metrics: SessionMetrics::new(),
            renderer: Renderer::new(),
            should_quit: false,
            paused: false,
            speed: PlaybackSpeed::Normal,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let result = self.run_event_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(self.speed.tick_interval());

        // Render at 30 FPS regardless of the simulation pace
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Playback controls
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event, &mut tick_timer);
                    }
                }

                // Simulation tick
                _ = tick_timer.tick() => {
                    self.advance_simulation();
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    let hud = self.hud();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, self.sim.state(), &self.metrics, &hud);
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

    fn advance_simulation(&mut self) {
        if self.paused {
            return;
        }

        // A finished run stays frozen on screen until an explicit restart
        let was_running = self.sim.state().is_running();
        let result = self.sim.tick();
        if was_running && result.is_over() {
            self.metrics.on_game_over(result.score);
        }
    }

    fn handle_event(&mut self, event: Event, tick_timer: &mut Interval) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match key.code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Char(' ') => {
                    self.paused = !self.paused;
                }
                KeyCode::Char('r') | KeyCode::Char('R') => {
                    self.sim.restart();
                    self.metrics.on_game_start();
                }
                KeyCode::Char('1') => self.change_speed(PlaybackSpeed::Slow, tick_timer),
                KeyCode::Char('2') => self.change_speed(PlaybackSpeed::Normal, tick_timer),
                KeyCode::Char('3') => self.change_speed(PlaybackSpeed::Fast, tick_timer),
                KeyCode::Char('4') => self.change_speed(PlaybackSpeed::VeryFast, tick_timer),
                _ => {}
            }
        }
    }

    fn change_speed(&mut self, new_speed: PlaybackSpeed, tick_timer: &mut Interval) {
        self.speed = new_speed;
        *tick_timer = interval(self.speed.tick_interval());
    }

    fn hud(&self) -> Hud {
        Hud {
            mode: "AUTOPILOT",
            speed: Some(self.speed.as_str()),
            paused: self.paused,
            controls: "Space pause | 1-4 speed | R restart | Q quit",
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

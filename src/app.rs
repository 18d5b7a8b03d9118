//! Host loop
//!
//! Owns the terminal, the settings, the high-score store, and the game
//! state. Drives the sim at a fixed 30 ms step and renders once per frame.

use std::io::{stdout, Stdout, Write};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::{
    cursor, execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::consts::*;
use crate::highscores::HighScore;
use crate::input::{collect_keys, map_key, AppAction};
use crate::render::{draw_frame, View};
use crate::settings::{project_paths, Paths, Settings};
use crate::sim::{tick, GameState, TickEvent, TickInput};

pub struct App {
    settings: Settings,
    paths: Paths,
    state: GameState,
    high_score: HighScore,
    /// View-only camera rotation; never fed back into the sim
    camera_deg: f32,
    /// Input accumulated since the last simulation step
    pending: TickInput,
    should_quit: bool,
}

impl App {
    fn init() -> Result<Self> {
        let paths = project_paths();
        let settings = Settings::load(&paths.settings_path);
        let high_score = HighScore::load(&paths.score_path);

        let seed = if settings.seed != 0 {
            settings.seed
        } else {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0xC0FFEE)
        };
        log::info!("Session seed: {}", seed);

        Ok(Self {
            settings,
            paths,
            state: GameState::new(seed),
            high_score,
            camera_deg: CAMERA_START_DEG,
            pending: TickInput::default(),
            should_quit: false,
        })
    }

    fn run(&mut self) -> Result<()> {
        let mut term = TerminalGuard::begin()?;

        let tick_step = Duration::from_millis(TICK_MS);
        let mut last_frame = Instant::now();
        let mut accum = Duration::ZERO;

        while !self.should_quit {
            // input
            for key in collect_keys(tick_step)? {
                if let Some(action) = map_key(self.state.phase, key) {
                    self.apply(action);
                }
            }

            // sim fixed-step
            let now = Instant::now();
            accum = accum.saturating_add(now.saturating_duration_since(last_frame));
            last_frame = now;

            while accum >= tick_step {
                let input = self.pending;
                self.pending = TickInput::default();
                for event in tick(&mut self.state, &input) {
                    self.handle_event(event);
                }
                accum = accum.saturating_sub(tick_step);
            }

            // render
            let (cols, rows) = terminal::size()?;
            let view = View {
                cols,
                rows,
                camera_deg: self.camera_deg,
                color: self.settings.color,
                show_fps: self.settings.show_fps,
            };
            draw_frame(&mut term.out, &self.state, &view, self.high_score.best())?;

            // frame cap
            let spent = Instant::now().saturating_duration_since(now);
            if spent < tick_step {
                std::thread::sleep(tick_step - spent);
            }
        }

        if let Err(err) = self.settings.save(&self.paths.settings_path) {
            log::warn!("Failed to save settings: {}", err);
        }
        Ok(())
    }

    fn apply(&mut self, action: AppAction) {
        match action {
            AppAction::Move(dx, dz) => {
                self.pending.move_x += dx as f32 * MOVE_STEP;
                self.pending.move_z += dz as f32 * MOVE_STEP;
            }
            AppAction::RotateCamera(dir) => {
                self.camera_deg += dir as f32 * CAMERA_STEP_DEG;
            }
            AppAction::Start => self.pending.start = true,
            AppAction::Restart => self.pending.restart = true,
            AppAction::Quit => self.should_quit = true,
        }
    }

    fn handle_event(&mut self, event: TickEvent) {
        if let TickEvent::GameOver { score } = event {
            log::info!("Game over after {}s", score);
            self.high_score.record(score);
        }
    }
}

pub fn run() -> Result<()> {
    let mut app = App::init()?;
    app.run()
}

/// Raw-mode/alternate-screen guard; restores the terminal even on panic
struct TerminalGuard {
    out: Stdout,
}

impl TerminalGuard {
    fn begin() -> Result<Self> {
        let mut out = stdout();
        terminal::enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, cursor::Hide)?;
        Ok(Self { out })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(self.out, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        let _ = self.out.flush();
    }
}

//! Game state and core simulation types
//!
//! Everything the tick function reads or mutates lives here. State is owned
//! by one host loop; there are no process-wide singletons.

use glam::{Vec2, Vec3};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, waiting for start input
    Menu,
    /// Active gameplay
    Playing,
    /// Run ended, waiting for restart or quit
    GameOver,
}

/// The player's cube, constrained to the platform plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    /// Horizontal position (x, z); y is always platform level
    pub pos: Vec2,
}

impl Default for Player {
    fn default() -> Self {
        Self { pos: Vec2::ZERO }
    }
}

/// A falling cube
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    /// World position; y is height above the platform and only ever decreases
    pub pos: Vec3,
}

impl Obstacle {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            pos: Vec3::new(x, y, z),
        }
    }
}

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Session RNG (spawn timing and positions)
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Player lives; the session is terminal exactly when this reaches 0
    pub lives: u8,
    /// Difficulty multiplier; starts at 1.0 and never decreases in a session
    pub difficulty: f32,
    /// Height lost by every obstacle per tick (0.07 * difficulty)
    pub fall_speed: f32,
    /// Per-tick spawn probability (0.01 * difficulty, capped at 0.15)
    pub spawn_rate: f32,
    /// Simulation tick counter; elapsed time derives from this
    pub time_ticks: u64,
    /// Elapsed whole seconds at the last ramp check, for edge detection
    pub last_ramp_second: u64,
    /// Survival time in whole seconds, recorded when the session ends
    pub final_score: u64,
    /// The player's cube
    pub player: Player,
    /// Active falling cubes
    pub obstacles: Vec<Obstacle>,
}

impl GameState {
    /// Create a fresh state in the menu phase
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Menu,
            lives: START_LIVES,
            difficulty: 1.0,
            fall_speed: BASE_FALL_SPEED,
            spawn_rate: BASE_SPAWN_RATE,
            time_ticks: 0,
            last_ramp_second: 0,
            final_score: 0,
            player: Player::default(),
            obstacles: Vec::new(),
        }
    }

    /// Reset for a new session (start from menu or restart after game over)
    ///
    /// Lives, difficulty, obstacles, and the clock all go back to their
    /// starting values; the RNG keeps running so consecutive sessions differ.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Playing;
        self.lives = START_LIVES;
        self.difficulty = 1.0;
        self.fall_speed = BASE_FALL_SPEED;
        self.spawn_rate = BASE_SPAWN_RATE;
        self.time_ticks = 0;
        self.last_ramp_second = 0;
        self.final_score = 0;
        self.player = Player::default();
        self.obstacles.clear();
    }

    /// Elapsed session time, truncated to whole seconds
    pub fn elapsed_secs(&self) -> u64 {
        self.time_ticks * TICK_MS / 1000
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_starts_in_menu() {
        let state = GameState::new(7);
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.lives, START_LIVES);
        assert_eq!(state.difficulty, 1.0);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn elapsed_truncates_to_whole_seconds() {
        let mut state = GameState::new(0);
        state.time_ticks = 33; // 990 ms
        assert_eq!(state.elapsed_secs(), 0);
        state.time_ticks = 34; // 1020 ms
        assert_eq!(state.elapsed_secs(), 1);
    }

    #[test]
    fn reset_restores_session_defaults() {
        let mut state = GameState::new(1);
        state.lives = 0;
        state.difficulty = 1.4;
        state.time_ticks = 5000;
        state.final_score = 150;
        state.obstacles.push(Obstacle::new(1.0, 2.0, 3.0));
        state.player.pos = Vec2::new(3.0, -2.0);

        state.reset();

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.lives, START_LIVES);
        assert_eq!(state.difficulty, 1.0);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.final_score, 0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.player.pos, Vec2::ZERO);
    }
}

//! Fixed timestep simulation tick
//!
//! One call advances the session by a single 30 ms step: move the player,
//! advance and spawn falling cubes, resolve hits and bounds, ramp difficulty.

use rand::Rng;

use super::collision;
use super::state::{GamePhase, GameState, Obstacle};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Horizontal movement along x this tick (already scaled by MOVE_STEP)
    pub move_x: f32,
    /// Horizontal movement along z this tick
    pub move_z: f32,
    /// Start a session from the menu
    pub start: bool,
    /// Restart after game over
    pub restart: bool,
}

/// Things that happened during a tick that the host may react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// One or more falling cubes landed on the player (one life lost total)
    CubeHit,
    /// The player stepped off the platform and was pushed back
    LeftPlatform,
    /// Lives hit zero; `score` is the survival time in whole seconds
    GameOver { score: u64 },
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<TickEvent> {
    let mut events = Vec::new();

    match state.phase {
        GamePhase::Menu => {
            if input.start {
                state.reset();
            }
            return events;
        }
        GamePhase::GameOver => {
            if input.restart {
                state.reset();
            }
            return events;
        }
        GamePhase::Playing => {}
    }

    state.time_ticks += 1;

    // Movement is applied unclamped; the bounds check below is what punishes
    // walking off the platform.
    state.player.pos.x += input.move_x;
    state.player.pos.y += input.move_z;

    // Advance every falling cube, then a single Bernoulli draw for a spawn
    for obstacle in &mut state.obstacles {
        obstacle.pos.y -= state.fall_speed;
    }
    if state.rng.random::<f32>() < state.spawn_rate {
        spawn_obstacle(state);
    }

    // Every overlapping cube is removed this tick, but the player loses at
    // most one life to cubes per tick no matter how many land at once.
    let player = state.player.pos;
    let before = state.obstacles.len();
    state
        .obstacles
        .retain(|o| !collision::obstacle_hits_player(o.pos, player));
    if state.obstacles.len() < before {
        state.lives = state.lives.saturating_sub(1);
        events.push(TickEvent::CubeHit);
    }

    // Independent of cube hits; both can fire in the same tick
    if collision::out_of_bounds(state.player.pos) {
        state.lives = state.lives.saturating_sub(1);
        state.player.pos = collision::clamp_to_platform(state.player.pos);
        events.push(TickEvent::LeftPlatform);
    }

    if state.lives == 0 {
        state.phase = GamePhase::GameOver;
        state.final_score = state.elapsed_secs();
        events.push(TickEvent::GameOver {
            score: state.final_score,
        });
        return events;
    }

    ramp_difficulty(state);

    // Cubes that fell past the floor without landing on the player are done
    state.obstacles.retain(|o| o.pos.y >= FLOOR_Y);

    events
}

/// Create one falling cube at a random spot above the platform
fn spawn_obstacle(state: &mut GameState) {
    let x = state.rng.random_range(-SPAWN_RANGE..=SPAWN_RANGE);
    let z = state.rng.random_range(-SPAWN_RANGE..=SPAWN_RANGE);
    state.obstacles.push(Obstacle::new(x, SPAWN_HEIGHT, z));
}

/// Step difficulty when the elapsed-seconds counter crosses a multiple of
/// the ramp interval, then recompute the derived speeds.
///
/// Edge-triggered on the whole-second transition, so each matching second
/// contributes exactly one step.
fn ramp_difficulty(state: &mut GameState) {
    let elapsed = state.elapsed_secs();
    if elapsed != state.last_ramp_second {
        state.last_ramp_second = elapsed;
        if elapsed % RAMP_INTERVAL_SECS == 0 {
            state.difficulty += DIFFICULTY_STEP;
        }
    }
    state.fall_speed = BASE_FALL_SPEED * state.difficulty;
    state.spawn_rate = (BASE_SPAWN_RATE * state.difficulty).min(MAX_SPAWN_RATE);
}

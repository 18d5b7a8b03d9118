//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{clamp_to_platform, obstacle_hits_player, out_of_bounds};
pub use state::{GamePhase, GameState, Obstacle, Player};
pub use tick::{tick, TickEvent, TickInput};

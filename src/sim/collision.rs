//! Collision and bounds checks
//!
//! Axis-aligned overlap between the player cube and falling cubes, plus the
//! platform edge test. Both are pure functions over positions.

use glam::{Vec2, Vec3};

use crate::consts::{HIT_HEIGHT, HIT_RANGE, PLATFORM_LIMIT};

/// Does a falling cube at `obstacle` hit the player at `player`?
///
/// A hit needs horizontal overlap on both axes and the cube to have fallen
/// to player height. Cubes still high in the air pass straight over.
pub fn obstacle_hits_player(obstacle: Vec3, player: Vec2) -> bool {
    (obstacle.x - player.x).abs() < HIT_RANGE
        && (obstacle.z - player.y).abs() < HIT_RANGE
        && obstacle.y <= HIT_HEIGHT
}

/// Is `pos` off the edge of the platform?
pub fn out_of_bounds(pos: Vec2) -> bool {
    pos.x.abs() > PLATFORM_LIMIT || pos.y.abs() > PLATFORM_LIMIT
}

/// Clamp a position back onto the platform
pub fn clamp_to_platform(pos: Vec2) -> Vec2 {
    Vec2::new(
        pos.x.clamp(-PLATFORM_LIMIT, PLATFORM_LIMIT),
        pos.y.clamp(-PLATFORM_LIMIT, PLATFORM_LIMIT),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_within_both_thresholds() {
        // Player at origin, cube overlapping on both axes at ground level
        assert!(obstacle_hits_player(
            Vec3::new(0.2, 0.4, 0.2),
            Vec2::ZERO
        ));
    }

    #[test]
    fn test_no_hit_while_cube_is_high() {
        // Same horizontal overlap, but the cube is still falling
        assert!(!obstacle_hits_player(
            Vec3::new(0.2, 3.0, 0.2),
            Vec2::ZERO
        ));
    }

    #[test]
    fn test_no_hit_outside_x_threshold() {
        assert!(!obstacle_hits_player(
            Vec3::new(0.8, 0.0, 0.0),
            Vec2::ZERO
        ));
    }

    #[test]
    fn test_no_hit_outside_z_threshold() {
        assert!(!obstacle_hits_player(
            Vec3::new(0.0, 0.0, -0.71),
            Vec2::ZERO
        ));
    }

    #[test]
    fn test_hit_threshold_is_exclusive() {
        // Exactly 0.7 apart is a miss; strictly inside is a hit
        assert!(!obstacle_hits_player(
            Vec3::new(0.7, 0.0, 0.0),
            Vec2::ZERO
        ));
        assert!(obstacle_hits_player(
            Vec3::new(0.699, 0.0, 0.0),
            Vec2::ZERO
        ));
    }

    #[test]
    fn test_hit_moves_with_player() {
        let player = Vec2::new(3.0, -2.0);
        assert!(obstacle_hits_player(Vec3::new(3.3, 0.1, -2.4), player));
        assert!(!obstacle_hits_player(Vec3::new(0.0, 0.1, 0.0), player));
    }

    #[test]
    fn test_out_of_bounds() {
        assert!(!out_of_bounds(Vec2::new(4.5, -4.5)));
        assert!(out_of_bounds(Vec2::new(4.6, 0.0)));
        assert!(out_of_bounds(Vec2::new(0.0, -5.0)));
    }

    #[test]
    fn test_clamp_to_platform() {
        assert_eq!(
            clamp_to_platform(Vec2::new(5.0, -6.0)),
            Vec2::new(4.5, -4.5)
        );
        // Positions already on the platform are untouched
        assert_eq!(
            clamp_to_platform(Vec2::new(1.0, -2.0)),
            Vec2::new(1.0, -2.0)
        );
    }
}

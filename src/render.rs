//! Terminal rendering
//!
//! Top-down projection of the platform and cubes into terminal cells, with a
//! camera that rotates around the vertical axis. Pure read of sim state; no
//! feedback into the game.

use std::io::Write;

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};

use crate::consts::{HIT_HEIGHT, PLATFORM_LIMIT};
use crate::sim::{GamePhase, GameState};

/// Columns per world unit (cells are roughly twice as tall as wide)
const X_SCALE: f32 = 2.0;
/// Rows per world unit
const Z_SCALE: f32 = 1.0;

/// Per-frame view parameters owned by the host
#[derive(Debug, Clone, Copy)]
pub struct View {
    pub cols: u16,
    pub rows: u16,
    /// Camera rotation around the platform, in degrees
    pub camera_deg: f32,
    pub color: bool,
    pub show_fps: bool,
}

/// Project a world-plane position (x, z) into a terminal cell
///
/// Rotates by the camera angle, scales, and recenters on the viewport.
/// Returns None when the cell lands outside the terminal.
pub fn project(x: f32, z: f32, view: &View) -> Option<(u16, u16)> {
    let theta = view.camera_deg.to_radians();
    let rx = x * theta.cos() - z * theta.sin();
    let rz = x * theta.sin() + z * theta.cos();

    let col = (view.cols as f32 / 2.0 + rx * X_SCALE).round();
    let row = (view.rows as f32 / 2.0 + rz * Z_SCALE).round();

    if col < 0.0 || row < 0.0 || col >= view.cols as f32 || row >= view.rows as f32 {
        return None;
    }
    Some((col as u16, row as u16))
}

/// Glyph for a falling cube at the given height
fn cube_glyph(y: f32) -> char {
    if y > 4.0 {
        '.'
    } else if y > 2.0 {
        '+'
    } else if y > HIT_HEIGHT {
        'o'
    } else {
        '#'
    }
}

/// Draw one complete frame
pub fn draw_frame(
    out: &mut impl Write,
    state: &GameState,
    view: &View,
    high_score: u64,
) -> std::io::Result<()> {
    queue!(out, Clear(ClearType::All))?;

    draw_platform(out, view)?;

    if state.phase != GamePhase::Menu {
        // Falling cubes, far ones first so low cubes draw on top
        let mut cubes: Vec<_> = state.obstacles.iter().collect();
        cubes.sort_by(|a, b| b.pos.y.total_cmp(&a.pos.y));
        for cube in cubes {
            if let Some((col, row)) = project(cube.pos.x, cube.pos.z, view) {
                set_fg(out, view, Color::Red)?;
                queue!(out, MoveTo(col, row), Print(cube_glyph(cube.pos.y)))?;
            }
        }

        if let Some((col, row)) = project(state.player.pos.x, state.player.pos.y, view) {
            set_fg(out, view, Color::Blue)?;
            queue!(out, MoveTo(col, row), Print('@'))?;
        }

        draw_hud(out, state, view, high_score)?;
    }

    match state.phase {
        GamePhase::Menu => draw_menu(out, view, high_score)?,
        GamePhase::GameOver => draw_game_over(out, state, view, high_score)?,
        GamePhase::Playing => {}
    }

    queue!(out, ResetColor)?;
    out.flush()
}

fn set_fg(out: &mut impl Write, view: &View, color: Color) -> std::io::Result<()> {
    if view.color {
        queue!(out, SetForegroundColor(color))?;
    }
    Ok(())
}

/// Trace the square platform edge, sampled finely enough to stay connected
/// at any camera angle
fn draw_platform(out: &mut impl Write, view: &View) -> std::io::Result<()> {
    set_fg(out, view, Color::DarkGreen)?;
    let l = PLATFORM_LIMIT;
    let steps = 64;
    for i in 0..steps {
        let t = -l + (2.0 * l) * (i as f32 / (steps - 1) as f32);
        for (x, z) in [(t, -l), (t, l), (-l, t), (l, t)] {
            if let Some((col, row)) = project(x, z, view) {
                queue!(out, MoveTo(col, row), Print('.'))?;
            }
        }
    }
    Ok(())
}

fn draw_hud(
    out: &mut impl Write,
    state: &GameState,
    view: &View,
    high_score: u64,
) -> std::io::Result<()> {
    set_fg(out, view, Color::White)?;
    queue!(
        out,
        MoveTo(1, 0),
        Print(format!("Time: {}s", state.elapsed_secs()))
    )?;
    set_fg(out, view, Color::Green)?;
    queue!(out, MoveTo(1, 1), Print(format!("Lives: {}", state.lives)))?;
    set_fg(out, view, Color::Yellow)?;
    queue!(
        out,
        MoveTo(1, 2),
        Print(format!("High Score: {}s", high_score))
    )?;
    if view.show_fps {
        set_fg(out, view, Color::DarkGrey)?;
        queue!(
            out,
            MoveTo(1, 3),
            Print(format!("Tick: {}", state.time_ticks))
        )?;
    }
    Ok(())
}

fn draw_centered(
    out: &mut impl Write,
    view: &View,
    row: u16,
    text: &str,
) -> std::io::Result<()> {
    let col = (view.cols as usize).saturating_sub(text.len()) as u16 / 2;
    queue!(out, MoveTo(col, row), Print(text))
}

fn draw_menu(out: &mut impl Write, view: &View, high_score: u64) -> std::io::Result<()> {
    let mid = view.rows / 2;
    set_fg(out, view, Color::Yellow)?;
    draw_centered(out, view, mid.saturating_sub(3), "C U B E F A L L")?;
    set_fg(out, view, Color::White)?;
    draw_centered(out, view, mid.saturating_sub(1), "Press ENTER to start")?;
    draw_centered(out, view, mid, "Move: W A S D  |  Rotate camera: <- ->")?;
    draw_centered(out, view, mid + 1, "ESC or Q to quit")?;
    set_fg(out, view, Color::Yellow)?;
    draw_centered(out, view, mid + 3, &format!("High Score: {}s", high_score))?;
    Ok(())
}

fn draw_game_over(
    out: &mut impl Write,
    state: &GameState,
    view: &View,
    high_score: u64,
) -> std::io::Result<()> {
    let mid = view.rows / 2;
    set_fg(out, view, Color::Red)?;
    draw_centered(out, view, mid.saturating_sub(2), "G A M E   O V E R")?;
    set_fg(out, view, Color::White)?;
    draw_centered(
        out,
        view,
        mid,
        &format!("You survived {}s", state.final_score),
    )?;
    set_fg(out, view, Color::Yellow)?;
    draw_centered(out, view, mid + 1, &format!("High Score: {}s", high_score))?;
    set_fg(out, view, Color::White)?;
    draw_centered(out, view, mid + 3, "Press R to restart, ESC to quit")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_view(camera_deg: f32) -> View {
        View {
            cols: 80,
            rows: 24,
            camera_deg,
            color: false,
            show_fps: false,
        }
    }

    #[test]
    fn origin_projects_to_viewport_center() {
        let view = test_view(0.0);
        assert_eq!(project(0.0, 0.0, &view), Some((40, 12)));
        // Camera angle never moves the center
        let view = test_view(137.0);
        assert_eq!(project(0.0, 0.0, &view), Some((40, 12)));
    }

    #[test]
    fn quarter_turn_swaps_axes() {
        let view = test_view(90.0);
        // (1, 0) rotated 90 degrees lands where (0, 1) would unrotated
        let rotated = project(1.0, 0.0, &view).unwrap();
        let unrotated = project(0.0, 1.0, &test_view(0.0)).unwrap();
        assert_eq!(rotated, unrotated);
    }

    #[test]
    fn platform_fits_in_a_standard_terminal() {
        let view = test_view(45.0);
        let l = PLATFORM_LIMIT;
        for (x, z) in [(l, l), (l, -l), (-l, l), (-l, -l)] {
            assert!(project(x, z, &view).is_some());
        }
    }

    #[test]
    fn offscreen_positions_are_culled() {
        let view = View {
            cols: 10,
            rows: 6,
            camera_deg: 0.0,
            color: false,
            show_fps: false,
        };
        assert!(project(4.5, 0.0, &view).is_none());
    }

    #[test]
    fn cube_glyph_tracks_height() {
        assert_eq!(cube_glyph(5.5), '.');
        assert_eq!(cube_glyph(3.0), '+');
        assert_eq!(cube_glyph(1.0), 'o');
        assert_eq!(cube_glyph(0.2), '#');
    }

    #[test]
    fn frames_render_in_every_phase() {
        use crate::sim::Obstacle;

        let view = test_view(45.0);
        let mut state = GameState::new(3);
        let mut buf: Vec<u8> = Vec::new();
        draw_frame(&mut buf, &state, &view, 12).unwrap();
        assert!(!buf.is_empty());

        state.reset();
        state.obstacles.push(Obstacle::new(1.0, 3.0, -2.0));
        buf.clear();
        draw_frame(&mut buf, &state, &view, 12).unwrap();
        assert!(!buf.is_empty());

        state.lives = 0;
        state.phase = GamePhase::GameOver;
        buf.clear();
        draw_frame(&mut buf, &state, &view, 12).unwrap();
        let text = String::from_utf8_lossy(&buf);
        assert!(text.contains("G A M E   O V E R"));
    }
}

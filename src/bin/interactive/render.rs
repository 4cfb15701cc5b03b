use macroquad::prelude::*;

use projectile_lab::core::session::Position;
use projectile_lab::core::viewport::{self, MARGIN_PX};

use crate::constants::{
    BACKGROUND, GRID_COLOR, GRID_PITCH_PX, GROUND_COLOR, MARKER_COLOR, MARKER_GLOW_COLOR,
    MARKER_GLOW_RADIUS_PX, MARKER_RADIUS_PX, TRAIL_COLOR, TRAIL_GLOW_COLOR,
    TRAIL_GLOW_THICKNESS_PX, TRAIL_THICKNESS_PX,
};

fn to_screen(pos: Position, screen_h: f32, scale: f32) -> Vec2 {
    let (x, y) = viewport::world_to_screen(pos.x as f32, pos.y as f32, screen_h, scale);
    vec2(x, y)
}

/// Full redraw: background, device-space grid, ground line, trail, marker.
/// Tolerates an empty trail and an absent projectile.
pub(crate) fn draw_scene(
    trail: &[Position],
    current: Option<Position>,
    scale: f32,
    screen_w: f32,
    screen_h: f32,
) {
    clear_background(BACKGROUND);
    draw_grid(screen_w, screen_h);
    draw_ground(screen_w, screen_h);
    draw_trail(trail, screen_h, scale);
    if let Some(pos) = current {
        draw_marker(pos, screen_h, scale);
    }
}

// The grid lives in device space: a fixed 50px pitch, unaffected by the
// simulation scale.
fn draw_grid(screen_w: f32, screen_h: f32) {
    let mut x = 0.0;
    while x < screen_w {
        draw_line(x, 0.0, x, screen_h, 1.0, GRID_COLOR);
        x += GRID_PITCH_PX;
    }

    let mut y = 0.0;
    while y < screen_h {
        draw_line(0.0, y, screen_w, y, 1.0, GRID_COLOR);
        y += GRID_PITCH_PX;
    }
}

fn draw_ground(screen_w: f32, screen_h: f32) {
    let y = screen_h - MARGIN_PX;
    draw_line(0.0, y, screen_w, y, 2.0, GROUND_COLOR);
}

fn draw_trail(trail: &[Position], screen_h: f32, scale: f32) {
    if trail.len() < 2 {
        return;
    }

    // Glow underlay first, solid stroke on top.
    for (thickness, color) in [
        (TRAIL_GLOW_THICKNESS_PX, TRAIL_GLOW_COLOR),
        (TRAIL_THICKNESS_PX, TRAIL_COLOR),
    ] {
        let mut prev = to_screen(trail[0], screen_h, scale);
        for pos in trail.iter().skip(1).copied() {
            let cur = to_screen(pos, screen_h, scale);
            draw_line(prev.x, prev.y, cur.x, cur.y, thickness, color);
            prev = cur;
        }
    }
}

fn draw_marker(pos: Position, screen_h: f32, scale: f32) {
    let p = to_screen(pos, screen_h, scale);
    draw_circle(p.x, p.y, MARKER_GLOW_RADIUS_PX, MARKER_GLOW_COLOR);
    draw_circle(p.x, p.y, MARKER_RADIUS_PX, MARKER_COLOR);
}

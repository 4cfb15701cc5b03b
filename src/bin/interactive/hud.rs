use macroquad::prelude::*;

use crate::constants::{GRAVITY_PRESETS, HEADER_COLOR, HINT_COLOR, STATS_COLOR};
use crate::state::AppRuntime;

pub(crate) fn draw_hud(state: &AppRuntime, screen_w: f32, screen_h: f32) {
    draw_text("Projectile Lab", 18.0, 34.0, 30.0, HEADER_COLOR);
    draw_text(
        "Space: launch | R: reset | edit controls any time",
        18.0,
        56.0,
        18.0,
        HINT_COLOR,
    );

    let config_line = format!(
        "Velocity: {:.1} m/s | Angle: {:.1} deg | Gravity: {} ({:.2} m/s^2)",
        state.speed_mps,
        state.angle_deg,
        state.gravity_name(),
        GRAVITY_PRESETS[state.gravity_idx].1
    );
    draw_text(&config_line, 18.0, screen_h - 14.0, 20.0, HINT_COLOR);

    // Launch-time summary stays fixed for the whole flight; only the
    // elapsed readout moves.
    let (summary_line, elapsed_line) = match state.session.runner() {
        Some(runner) => {
            let summary = runner.summary();
            (
                format!(
                    "Max height: {:.2} m | Max range: {:.2} m | Flight time: {:.2} s",
                    summary.max_height_m, summary.max_range_m, summary.flight_time_s
                ),
                format!(
                    "Elapsed: {:.2} s{}",
                    runner.elapsed_s(),
                    if runner.is_active() { "" } else { " (landed)" }
                ),
            )
        }
        None => (
            "Max height: -- | Max range: -- | Flight time: --".to_string(),
            "Elapsed: --".to_string(),
        ),
    };

    let summary_size = measure_text(&summary_line, None, 20, 1.0);
    draw_text(
        &summary_line,
        screen_w - summary_size.width - 18.0,
        34.0,
        20.0,
        STATS_COLOR,
    );
    let elapsed_size = measure_text(&elapsed_line, None, 20, 1.0);
    draw_text(
        &elapsed_line,
        screen_w - elapsed_size.width - 18.0,
        58.0,
        20.0,
        STATS_COLOR,
    );
}

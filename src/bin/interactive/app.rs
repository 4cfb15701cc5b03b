use macroquad::prelude::*;

use projectile_lab::core::{kinematics, viewport};

use crate::constants::{INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH, MSAA_SAMPLES};
use crate::controls::{draw_control_panel, hotkey_actions};
use crate::hud::draw_hud;
use crate::render::draw_scene;
use crate::state::AppRuntime;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Projectile Lab".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

pub(crate) async fn run() {
    let mut state = AppRuntime::new();

    loop {
        // Resizes just show up as new dimensions here; the full redraw below
        // picks them up without touching the trajectory.
        let screen_w = screen_width();
        let screen_h = screen_height();

        let actions = hotkey_actions().merge(draw_control_panel(&mut state));
        if actions.launch {
            state.session.launch(state.inputs());
        }
        if actions.reset {
            state.session.reset();
        }

        state.session.frame(get_time());

        // The scale tracks the live control values, not the launched
        // trajectory, so it can shift mid-flight when inputs are edited.
        let expected = kinematics::trajectory_summary(state.inputs());
        let scale = viewport::fit_scale(
            screen_w,
            screen_h,
            expected.max_range_m as f32,
            expected.max_height_m as f32,
        );

        let current = state.session.runner().map(|runner| runner.position());
        draw_scene(state.session.trail(), current, scale, screen_w, screen_h);
        draw_hud(&state, screen_w, screen_h);

        next_frame().await;
    }
}

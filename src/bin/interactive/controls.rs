use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};

use crate::constants::{
    ANGLE_MAX_DEG, ANGLE_MIN_DEG, GRAVITY_PRESET_LABELS, VELOCITY_MAX_MPS, VELOCITY_MIN_MPS,
};
use crate::state::AppRuntime;

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) launch: bool,
    pub(crate) reset: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            launch: self.launch || other.launch,
            reset: self.reset || other.reset,
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        launch: is_key_pressed(KeyCode::Space),
        reset: is_key_pressed(KeyCode::R),
    }
}

pub(crate) fn draw_control_panel(state: &mut AppRuntime) -> FrameActions {
    let mut actions = FrameActions::default();
    widgets::Window::new(hash!(), vec2(18.0, 64.0), vec2(330.0, 210.0))
        .label("Launch Controls")
        .ui(&mut *root_ui(), |ui| {
            ui.slider(
                hash!(),
                "Velocity (m/s)",
                VELOCITY_MIN_MPS..VELOCITY_MAX_MPS,
                &mut state.speed_mps,
            );
            ui.slider(
                hash!(),
                "Angle (deg)",
                ANGLE_MIN_DEG..ANGLE_MAX_DEG,
                &mut state.angle_deg,
            );
            ui.combo_box(
                hash!(),
                "Gravity",
                &GRAVITY_PRESET_LABELS,
                &mut state.gravity_idx,
            );
            ui.separator();
            if ui.button(None, "Launch (Space)") {
                actions.launch = true;
            }
            if ui.button(None, "Reset (R)") {
                actions.reset = true;
            }
        });

    actions
}

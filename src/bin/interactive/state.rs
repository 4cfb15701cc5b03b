use projectile_lab::core::kinematics::LaunchInputs;
use projectile_lab::core::session::Session;

use crate::constants::GRAVITY_PRESETS;

pub(crate) struct AppRuntime {
    pub(crate) speed_mps: f32,
    pub(crate) angle_deg: f32,
    pub(crate) gravity_idx: usize,
    pub(crate) session: Session,
}

impl AppRuntime {
    pub(crate) fn new() -> Self {
        Self {
            speed_mps: 20.0,
            angle_deg: 45.0,
            gravity_idx: 0,
            session: Session::new(),
        }
    }

    /// Snapshot of the live control values. A launch copies these into the
    /// runner; editing the controls afterwards never touches an in-flight
    /// trajectory.
    pub(crate) fn inputs(&self) -> LaunchInputs {
        LaunchInputs {
            speed_mps: self.speed_mps as f64,
            angle_deg: self.angle_deg as f64,
            gravity_mps2: GRAVITY_PRESETS[self.gravity_idx].1,
        }
    }

    pub(crate) fn gravity_name(&self) -> &'static str {
        GRAVITY_PRESETS[self.gravity_idx].0
    }
}

//! Closed-form projectile kinematics on flat ground, no drag.
//!
//! Every function here is total: zero or non-finite inputs propagate
//! NaN/Infinity into the results instead of panicking. Validating inputs
//! is the caller's job.

#[derive(Clone, Copy, Debug)]
pub struct LaunchInputs {
    pub speed_mps: f64,
    pub angle_deg: f64,
    pub gravity_mps2: f64,
}

/// Scalar summary of one trajectory, fixed at launch time.
#[derive(Clone, Copy, Debug)]
pub struct TrajectorySummary {
    pub flight_time_s: f64,
    pub max_height_m: f64,
    pub max_range_m: f64,
}

pub fn velocity_components(inputs: LaunchInputs) -> (f64, f64) {
    let theta = inputs.angle_deg.to_radians();
    let vx = inputs.speed_mps * theta.cos();
    let vy = inputs.speed_mps * theta.sin();
    (vx, vy)
}

pub fn position_at_time(inputs: LaunchInputs, time_s: f64) -> (f64, f64) {
    let (vx, vy) = velocity_components(inputs);
    let x = vx * time_s;
    let y = (vy * time_s) - (0.5 * inputs.gravity_mps2 * time_s * time_s);
    (x, y)
}

/// Angles above 90 degrees yield negative range/height. That is the
/// unclamped formula talking, and it is passed through on purpose.
pub fn trajectory_summary(inputs: LaunchInputs) -> TrajectorySummary {
    let theta = inputs.angle_deg.to_radians();
    let v0 = inputs.speed_mps;
    let g = inputs.gravity_mps2;

    TrajectorySummary {
        flight_time_s: (2.0 * v0 * theta.sin()) / g,
        max_height_m: (v0 * v0 * theta.sin() * theta.sin()) / (2.0 * g),
        max_range_m: (v0 * v0 * (2.0 * theta).sin()) / g,
    }
}

pub fn sample_trajectory(
    inputs: LaunchInputs,
    time_of_flight_s: f64,
    samples: usize,
) -> Vec<(f64, f64)> {
    let sample_count = samples.max(2);
    (0..=sample_count)
        .map(|i| {
            let t = (i as f64 * time_of_flight_s) / sample_count as f64;
            position_at_time(inputs, t)
        })
        .collect()
}

//! Trajectory lifecycle: one runner advancing simulated time, a trail of
//! sampled positions, and the frame clock that turns host timestamps into
//! per-frame deltas.

use crate::core::kinematics::{self, LaunchInputs, TrajectorySummary};

/// Simulated seconds per wall-clock second. Flight is deliberately faster
/// than real time so long arcs stay watchable.
pub const TIME_SCALE: f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// One launched trajectory. Summary scalars are fixed at construction;
/// only `elapsed_s` and `active` mutate afterwards, and `active` flips
/// false exactly once when elapsed reaches the flight time.
pub struct TrajectoryRunner {
    inputs: LaunchInputs,
    summary: TrajectorySummary,
    elapsed_s: f64,
    active: bool,
}

impl TrajectoryRunner {
    pub fn new(inputs: LaunchInputs) -> Self {
        Self {
            inputs,
            summary: kinematics::trajectory_summary(inputs),
            elapsed_s: 0.0,
            active: true,
        }
    }

    /// Advance simulated time by `dt_s * TIME_SCALE`, clamped to the total
    /// flight time. No-op once the trajectory has landed.
    pub fn advance(&mut self, dt_s: f64) {
        if !self.active {
            return;
        }

        self.elapsed_s += dt_s * TIME_SCALE;
        if self.elapsed_s >= self.summary.flight_time_s {
            self.elapsed_s = self.summary.flight_time_s;
            self.active = false;
        }
    }

    pub fn position(&self) -> Position {
        let (x, y) = kinematics::position_at_time(self.inputs, self.elapsed_s);
        Position { x, y }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn elapsed_s(&self) -> f64 {
        self.elapsed_s
    }

    pub fn summary(&self) -> TrajectorySummary {
        self.summary
    }

    pub fn inputs(&self) -> LaunchInputs {
        self.inputs
    }
}

/// Turns absolute host timestamps into frame deltas. The first tick after a
/// reset only records the baseline and reports dt = 0.
pub struct FrameClock {
    last_timestamp_s: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_timestamp_s: None,
        }
    }

    pub fn tick(&mut self, timestamp_s: f64) -> f64 {
        let dt = match self.last_timestamp_s {
            Some(last) => timestamp_s - last,
            None => 0.0,
        };
        self.last_timestamp_s = Some(timestamp_s);
        dt
    }

    pub fn reset(&mut self) {
        self.last_timestamp_s = None;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// The single owned simulation object: current runner (if any), its trail,
/// and the frame clock. All mutation goes through `launch`, `reset`, and
/// `frame`; renderers only ever borrow.
pub struct Session {
    runner: Option<TrajectoryRunner>,
    trail: Vec<Position>,
    clock: FrameClock,
}

impl Session {
    pub fn new() -> Self {
        Self {
            runner: None,
            trail: Vec::new(),
            clock: FrameClock::new(),
        }
    }

    /// Replace any in-flight trajectory with a fresh one. Clearing the trail
    /// and clock here is what guarantees no stale-trajectory frame can render
    /// after a relaunch.
    pub fn launch(&mut self, inputs: LaunchInputs) {
        self.runner = Some(TrajectoryRunner::new(inputs));
        self.trail.clear();
        self.clock.reset();
    }

    pub fn reset(&mut self) {
        self.runner = None;
        self.trail.clear();
        self.clock.reset();
    }

    /// One animation tick. While the runner is active this advances it and
    /// appends exactly one trail sample; afterwards it leaves all state
    /// untouched. Returns whether the trajectory advanced this frame.
    pub fn frame(&mut self, timestamp_s: f64) -> bool {
        let dt = self.clock.tick(timestamp_s);

        match self.runner.as_mut() {
            Some(runner) if runner.is_active() => {
                runner.advance(dt);
                self.trail.push(runner.position());
                true
            }
            _ => false,
        }
    }

    pub fn runner(&self) -> Option<&TrajectoryRunner> {
        self.runner.as_ref()
    }

    pub fn trail(&self) -> &[Position] {
        &self.trail
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{Session, TIME_SCALE, TrajectoryRunner};
    use crate::core::kinematics::LaunchInputs;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    fn inputs() -> LaunchInputs {
        LaunchInputs {
            speed_mps: 20.0,
            angle_deg: 45.0,
            gravity_mps2: 9.8,
        }
    }

    #[test]
    fn advance_applies_the_time_scale() {
        let mut runner = TrajectoryRunner::new(inputs());
        runner.advance(0.5);
        assert_close(runner.elapsed_s(), 0.5 * TIME_SCALE, 1e-12);
        assert!(runner.is_active());
    }

    #[test]
    fn elapsed_clamps_to_flight_time_and_deactivates() {
        let mut runner = TrajectoryRunner::new(inputs());
        let flight_time = runner.summary().flight_time_s;

        runner.advance(flight_time);
        assert_close(runner.elapsed_s(), flight_time, 1e-12);
        assert!(!runner.is_active());
    }

    #[test]
    fn advance_is_idempotent_after_landing() {
        let mut runner = TrajectoryRunner::new(inputs());
        let flight_time = runner.summary().flight_time_s;
        runner.advance(flight_time * 2.0);

        let landed_elapsed = runner.elapsed_s();
        runner.advance(1.0);
        runner.advance(100.0);

        assert_close(runner.elapsed_s(), landed_elapsed, 0.0);
        assert!(!runner.is_active());
    }

    #[test]
    fn elapsed_never_decreases() {
        let mut runner = TrajectoryRunner::new(inputs());
        let mut previous = runner.elapsed_s();
        for _ in 0..200 {
            runner.advance(0.016);
            assert!(runner.elapsed_s() >= previous);
            previous = runner.elapsed_s();
        }
    }

    #[test]
    fn landing_position_is_on_the_ground() {
        let mut runner = TrajectoryRunner::new(inputs());
        runner.advance(10.0);

        let landing = runner.position();
        assert_close(landing.y, 0.0, 1e-9);
        assert_close(landing.x, runner.summary().max_range_m, 1e-9);
    }

    #[test]
    fn trail_is_empty_right_after_launch() {
        let mut session = Session::new();
        session.launch(inputs());
        assert!(session.trail().is_empty());
        assert!(session.runner().is_some());
    }

    #[test]
    fn trail_grows_by_one_per_active_frame() {
        let mut session = Session::new();
        session.launch(inputs());

        for i in 0..10 {
            assert!(session.frame(i as f64 * 0.016));
            assert_eq!(session.trail().len(), i + 1);
        }
    }

    #[test]
    fn first_frame_samples_the_launch_point() {
        let mut session = Session::new();
        session.launch(inputs());
        session.frame(123.456);

        let first = session.trail()[0];
        assert_close(first.x, 0.0, 1e-12);
        assert_close(first.y, 0.0, 1e-12);
    }

    #[test]
    fn frames_stop_appending_after_landing() {
        let mut session = Session::new();
        session.launch(inputs());

        session.frame(0.0);
        session.frame(100.0);
        let len_at_landing = session.trail().len();
        assert!(!session.runner().unwrap().is_active());

        assert!(!session.frame(101.0));
        assert!(!session.frame(102.0));
        assert_eq!(session.trail().len(), len_at_landing);
    }

    #[test]
    fn relaunch_discards_the_previous_trajectory() {
        let mut session = Session::new();
        session.launch(inputs());
        session.frame(0.0);
        session.frame(0.5);
        assert_eq!(session.trail().len(), 2);

        session.launch(LaunchInputs {
            speed_mps: 10.0,
            angle_deg: 30.0,
            gravity_mps2: 1.62,
        });
        assert!(session.trail().is_empty());
        let runner = session.runner().unwrap();
        assert_close(runner.elapsed_s(), 0.0, 0.0);
        assert!(runner.is_active());

        // Clock baseline was reset too: the next frame must not see the
        // old timestamps as a huge delta.
        session.frame(7.0);
        assert_close(session.runner().unwrap().elapsed_s(), 0.0, 1e-12);
    }

    #[test]
    fn frame_without_launch_is_a_no_op() {
        let mut session = Session::new();
        assert!(!session.frame(0.0));
        assert!(session.trail().is_empty());
    }

    #[test]
    fn reset_clears_everything() {
        let mut session = Session::new();
        session.launch(inputs());
        session.frame(0.0);
        session.frame(0.1);

        session.reset();
        assert!(session.runner().is_none());
        assert!(session.trail().is_empty());
    }
}

pub mod kinematics;
pub mod session;
pub mod viewport;

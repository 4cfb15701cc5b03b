use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1280;
pub const INITIAL_WINDOW_HEIGHT: i32 = 720;
pub const MSAA_SAMPLES: i32 = 4;

pub const GRID_PITCH_PX: f32 = 50.0;
pub const TRAIL_THICKNESS_PX: f32 = 3.0;
pub const TRAIL_GLOW_THICKNESS_PX: f32 = 9.0;
pub const MARKER_RADIUS_PX: f32 = 6.0;
pub const MARKER_GLOW_RADIUS_PX: f32 = 14.0;

pub const BACKGROUND: Color = Color::new(0.06, 0.09, 0.16, 1.0);
pub const GRID_COLOR: Color = Color::new(0.20, 0.25, 0.33, 1.0);
pub const GROUND_COLOR: Color = Color::new(0.58, 0.64, 0.72, 1.0);
pub const TRAIL_COLOR: Color = Color::new(0.02, 0.71, 0.83, 1.0);
pub const TRAIL_GLOW_COLOR: Color = Color::new(0.02, 0.71, 0.83, 0.30);
pub const MARKER_COLOR: Color = Color::new(0.96, 0.45, 0.71, 1.0);
pub const MARKER_GLOW_COLOR: Color = Color::new(0.96, 0.45, 0.71, 0.30);
pub const HEADER_COLOR: Color = Color::new(0.89, 0.91, 0.94, 1.0);
pub const HINT_COLOR: Color = Color::new(0.58, 0.64, 0.72, 1.0);
pub const STATS_COLOR: Color = Color::new(0.02, 0.71, 0.83, 1.0);

pub const VELOCITY_MIN_MPS: f32 = 1.0;
pub const VELOCITY_MAX_MPS: f32 = 100.0;
pub const ANGLE_MIN_DEG: f32 = 0.0;
pub const ANGLE_MAX_DEG: f32 = 90.0;

pub const GRAVITY_PRESETS: [(&str, f64); 4] = [
    ("Earth", 9.8),
    ("Moon", 1.62),
    ("Mars", 3.71),
    ("Jupiter", 24.79),
];
pub const GRAVITY_PRESET_LABELS: [&str; 4] = [
    "Earth (9.8)",
    "Moon (1.62)",
    "Mars (3.71)",
    "Jupiter (24.79)",
];

use std::env;

use chrono::Local;
use plotters::prelude::*;

use projectile_lab::core::kinematics::{self, LaunchInputs};
use projectile_lab::core::viewport::chart_axis_window;

const CHART_WIDTH_PX: u32 = 1280;
const CHART_HEIGHT_PX: u32 = 720;
const CHART_SAMPLES: usize = 320;

fn parse_f64(value: &str, label: &str) -> Result<f64, String> {
    value
        .parse::<f64>()
        .map_err(|_| format!("Invalid {label}: '{value}'. Expected a number."))
}

fn print_usage(program: &str) {
    println!("Usage:");
    println!("  {program} <velocity_mps> <angle_deg> <gravity_mps2>");
    println!();
    println!("Example:");
    println!("  {program} 20 45 9.8");
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage(&args[0]);
        return Ok(());
    }
    if args.len() != 4 {
        return Err(
            "Expected exactly 3 arguments: <velocity_mps> <angle_deg> <gravity_mps2>.".to_string(),
        );
    }

    let inputs = LaunchInputs {
        speed_mps: parse_f64(&args[1], "velocity")?,
        angle_deg: parse_f64(&args[2], "angle")?,
        gravity_mps2: parse_f64(&args[3], "gravity")?,
    };
    if !inputs.speed_mps.is_finite()
        || !inputs.angle_deg.is_finite()
        || !inputs.gravity_mps2.is_finite()
    {
        return Err("Inputs must be finite numbers.".to_string());
    }
    if inputs.speed_mps < 0.0 {
        return Err("Velocity cannot be negative.".to_string());
    }
    if inputs.gravity_mps2 <= 0.0 {
        return Err("Gravity must be positive.".to_string());
    }

    let summary = kinematics::trajectory_summary(inputs);
    let points = kinematics::sample_trajectory(inputs, summary.flight_time_s, CHART_SAMPLES);
    let (x_span, y_span) = chart_axis_window(summary.max_range_m, summary.max_height_m);

    let filename = format!("trajectory_{}.png", Local::now().format("%Y%m%d_%H%M%S"));
    let root = BitMapBackend::new(&filename, (CHART_WIDTH_PX, CHART_HEIGHT_PX)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| e.to_string())?;

    let caption = format!(
        "v0 = {} m/s, angle = {} deg, g = {} m/s^2",
        inputs.speed_mps, inputs.angle_deg, inputs.gravity_mps2
    );
    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 28))
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(56)
        .build_cartesian_2d(0.0..x_span, 0.0..y_span)
        .map_err(|e| e.to_string())?;

    chart
        .configure_mesh()
        .x_desc("Distance (m)")
        .y_desc("Height (m)")
        .draw()
        .map_err(|e| e.to_string())?;

    chart
        .draw_series(LineSeries::new(points, &BLUE))
        .map_err(|e| e.to_string())?;

    root.present().map_err(|e| e.to_string())?;
    println!(
        "Wrote {filename} (range {:.2} m, height {:.2} m, flight {:.2} s)",
        summary.max_range_m, summary.max_height_m, summary.flight_time_s
    );

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        print_usage("cargo run --bin trajectory_chart --");
        std::process::exit(1);
    }
}

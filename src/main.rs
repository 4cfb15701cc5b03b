use std::env;
use std::io::{self, Write};

use projectile_lab::core::kinematics::{LaunchInputs, trajectory_summary};

fn parse_f64(value: &str, label: &str) -> Result<f64, String> {
    value
        .parse::<f64>()
        .map_err(|_| format!("Invalid {label}: '{value}'. Expected a number."))
}

fn read_f64(prompt: &str) -> Result<f64, String> {
    loop {
        print!("{prompt}");
        io::stdout()
            .flush()
            .map_err(|e| format!("Failed to flush stdout: {e}"))?;

        let mut line = String::new();
        let bytes = io::stdin()
            .read_line(&mut line)
            .map_err(|e| format!("Could not read input: {e}"))?;

        if bytes == 0 {
            return Err("Input ended unexpectedly (EOF).".to_string());
        }

        match line.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => eprintln!("Please enter a valid number (e.g., 45 or 12.5)."),
        }
    }
}

fn get_inputs_from_user() -> Result<LaunchInputs, String> {
    Ok(LaunchInputs {
        speed_mps: read_f64("Velocity (m/s): ")?,
        angle_deg: read_f64("Angle (degrees): ")?,
        gravity_mps2: read_f64("Gravity (m/s^2): ")?,
    })
}

fn get_inputs_from_args(args: &[String]) -> Result<LaunchInputs, String> {
    if args.len() != 4 {
        return Err(
            "Expected exactly 3 arguments: <velocity_mps> <angle_deg> <gravity_mps2>.".to_string(),
        );
    }

    Ok(LaunchInputs {
        speed_mps: parse_f64(&args[1], "velocity")?,
        angle_deg: parse_f64(&args[2], "angle")?,
        gravity_mps2: parse_f64(&args[3], "gravity")?,
    })
}

fn validate_inputs(inputs: LaunchInputs) -> Result<(), String> {
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
    Ok(())
}

fn print_usage(program: &str) {
    println!("Usage:");
    println!("  {program}");
    println!("  {program} <velocity_mps> <angle_deg> <gravity_mps2>");
    println!();
    println!("Examples:");
    println!("  {program}");
    println!("  {program} 20 45 9.81");
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage(&args[0]);
        return Ok(());
    }

    let inputs = if args.len() == 1 {
        get_inputs_from_user()?
    } else {
        get_inputs_from_args(&args)?
    };
    validate_inputs(inputs)?;

    let summary = trajectory_summary(inputs);

    println!("\nMax height: {:.4} m", summary.max_height_m);
    println!("Max range: {:.4} m", summary.max_range_m);
    println!("Flight time: {:.4} s", summary.flight_time_s);

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        print_usage("cargo run --");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{LaunchInputs, get_inputs_from_args, validate_inputs};

    #[test]
    fn parses_three_positional_arguments() {
        let args: Vec<String> = ["prog", "20", "45", "9.8"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let inputs = get_inputs_from_args(&args).expect("parse should succeed");

        assert_eq!(inputs.speed_mps, 20.0);
        assert_eq!(inputs.angle_deg, 45.0);
        assert_eq!(inputs.gravity_mps2, 9.8);
    }

    #[test]
    fn rejects_wrong_argument_count() {
        let args: Vec<String> = ["prog", "20"].iter().map(|s| s.to_string()).collect();
        let err = get_inputs_from_args(&args).expect_err("parse should fail");
        assert!(err.contains("exactly 3 arguments"));
    }

    #[test]
    fn rejects_non_numeric_values() {
        let args: Vec<String> = ["prog", "fast", "45", "9.8"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let err = get_inputs_from_args(&args).expect_err("parse should fail");
        assert!(err.contains("Invalid velocity"));
    }

    #[test]
    fn rejects_zero_gravity_and_negative_velocity() {
        let err = validate_inputs(LaunchInputs {
            speed_mps: 10.0,
            angle_deg: 45.0,
            gravity_mps2: 0.0,
        })
        .expect_err("validation should fail");
        assert!(err.contains("Gravity"));

        let err = validate_inputs(LaunchInputs {
            speed_mps: -1.0,
            angle_deg: 45.0,
            gravity_mps2: 9.8,
        })
        .expect_err("validation should fail");
        assert!(err.contains("Velocity"));
    }
}

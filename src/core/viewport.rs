//! Pixel-space mapping for the interactive canvas, plus the padded axis
//! window used by the offline chart.

pub const MARGIN_PX: f32 = 50.0;
pub const MIN_SCALE: f32 = 0.5;
pub const MAX_SCALE: f32 = 10.0;

const FIT_FRACTION: f32 = 0.8;
const FALLBACK_EXTENT_M: f32 = 10.0;

pub const CHART_DISTANCE_TO_HEIGHT_RATIO: f64 = 2.0; // x:y data window ratio

const CHART_X_PADDING_RATIO: f64 = 0.06;
const CHART_Y_PADDING_RATIO: f64 = 0.10;

/// Pixels-per-meter that fits the expected range into 80% of the width and
/// the expected height into 80% of the height, clamped to [0.5, 10].
///
/// The expected extents come from the *currently configured* inputs, so the
/// scale can shift mid-flight if the user edits them. Zero extents fall back
/// to a 10 m reference window; non-finite extents resolve to an in-range
/// scale rather than poisoning the transform.
pub fn fit_scale(
    canvas_w: f32,
    canvas_h: f32,
    expected_range_m: f32,
    expected_height_m: f32,
) -> f32 {
    let range_m = if expected_range_m == 0.0 || !expected_range_m.is_finite() {
        FALLBACK_EXTENT_M
    } else {
        expected_range_m
    };
    let height_m = if expected_height_m == 0.0 || !expected_height_m.is_finite() {
        FALLBACK_EXTENT_M
    } else {
        expected_height_m
    };

    let scale_x = (canvas_w * FIT_FRACTION) / range_m;
    let scale_y = (canvas_h * FIT_FRACTION) / height_m;
    scale_x.min(scale_y).min(MAX_SCALE).max(MIN_SCALE)
}

/// Meters to device pixels: origin at (margin, canvas_h - margin), y flipped,
/// both axes scaled uniformly.
pub fn world_to_screen(x_m: f32, y_m: f32, canvas_h: f32, scale: f32) -> (f32, f32) {
    let x = MARGIN_PX + (x_m * scale);
    let y = (canvas_h - MARGIN_PX) - (y_m * scale);
    (x, y)
}

/// Padded fixed-ratio axis spans for the chart binary.
pub fn chart_axis_window(raw_max_x: f64, raw_max_y: f64) -> (f64, f64) {
    let raw_x_span = raw_max_x.max(1.0);
    let raw_y_span = raw_max_y.max(1.0);
    let x_pad = raw_x_span * CHART_X_PADDING_RATIO;
    let y_pad = raw_y_span * CHART_Y_PADDING_RATIO;

    let mut x_span = (raw_max_x + x_pad).max(1.0);
    let mut y_span = (raw_max_y + y_pad).max(1.0);

    if x_span / y_span < CHART_DISTANCE_TO_HEIGHT_RATIO {
        x_span = y_span * CHART_DISTANCE_TO_HEIGHT_RATIO;
    } else {
        y_span = x_span / CHART_DISTANCE_TO_HEIGHT_RATIO;
    }

    (x_span, y_span)
}

#[cfg(test)]
mod tests {
    use super::{
        CHART_DISTANCE_TO_HEIGHT_RATIO, MARGIN_PX, MAX_SCALE, MIN_SCALE, chart_axis_window,
        fit_scale, world_to_screen,
    };

    fn assert_close(actual: f32, expected: f32, tolerance: f32) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    #[test]
    fn scale_fits_the_wider_extent() {
        // 80% of 1000px over 100m -> 8 px/m on x; y is looser.
        let scale = fit_scale(1000.0, 800.0, 100.0, 20.0);
        assert_close(scale, 8.0, 1e-6);
    }

    #[test]
    fn scale_clamps_to_bounds() {
        assert_close(fit_scale(1000.0, 800.0, 1.0, 1.0), MAX_SCALE, 0.0);
        assert_close(fit_scale(1000.0, 800.0, 1e6, 1e6), MIN_SCALE, 0.0);
    }

    #[test]
    fn zero_extents_use_the_fallback_window() {
        // Straight-up throw: range 0 -> 10m reference on x.
        let scale = fit_scale(100.0, 80.0, 0.0, 20.0);
        let x_fit = (100.0f32 * 0.8) / 10.0;
        let y_fit = (80.0f32 * 0.8) / 20.0;
        assert_close(scale, x_fit.min(y_fit), 1e-6);
    }

    #[test]
    fn non_finite_extents_still_yield_a_usable_scale() {
        for bad in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let scale = fit_scale(1000.0, 800.0, bad, bad);
            assert!(scale.is_finite());
            assert!((MIN_SCALE..=MAX_SCALE).contains(&scale));
        }
    }

    #[test]
    fn screen_origin_sits_at_the_margin() {
        let (x, y) = world_to_screen(0.0, 0.0, 600.0, 4.0);
        assert_close(x, MARGIN_PX, 0.0);
        assert_close(y, 600.0 - MARGIN_PX, 0.0);
    }

    #[test]
    fn vertical_axis_is_flipped() {
        let (_, y_ground) = world_to_screen(0.0, 0.0, 600.0, 4.0);
        let (_, y_up) = world_to_screen(0.0, 10.0, 600.0, 4.0);
        assert!(y_up < y_ground);
        assert_close(y_ground - y_up, 40.0, 1e-6);
    }

    #[test]
    fn chart_window_keeps_the_fixed_ratio() {
        let (x_span, y_span) = chart_axis_window(40.0, 30.0);
        assert!(x_span >= 40.0);
        assert!(y_span >= 30.0);
        assert!(((x_span / y_span) - CHART_DISTANCE_TO_HEIGHT_RATIO).abs() < 1e-9);
    }
}

//! Growth-trend estimation over a computed h-index series.

use tracing::instrument;

/// Decimal places kept when storing a slope.
const SLOPE_PRECISION: f64 = 1000.0;

/// Fits an ordinary-least-squares line to (year, h-index) points and returns
/// its slope, rounded to three decimal places.
///
/// Year is the independent variable, h-index the dependent one. Every point
/// participates, including zero-valued early years; dropping them would bias
/// the trend upward. A constant series yields 0.0 and a declining one a
/// negative slope. Over the fixed window the independent variable is never
/// degenerate, so the solution is unique; the zero-denominator guard only
/// covers pathological inputs such as a single repeated year.
#[must_use]
#[instrument(skip(points), fields(points = points.len()))]
pub fn trend_slope(points: &[(i32, u32)]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let n = points.len() as f64;

    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_x2 = 0.0;
    for &(year, h) in points {
        let x = f64::from(year);
        let y = f64::from(h);
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x2 += x * x;
    }

    let denominator = n * sum_x2 - sum_x * sum_x;
    if denominator == 0.0 {
        return 0.0;
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    (slope * SLOPE_PRECISION).round() / SLOPE_PRECISION
}

//! Curve helpers for the native chart.
//!
//! egui_plot only draws straight segments, so the Chart.js curve tension is
//! reproduced here by sampling the same cubic Bezier segments Chart.js uses.

pub type Point = [f64; 2];

fn distance(a: Point, b: Point) -> f64 {
    ((b[0] - a[0]).powi(2) + (b[1] - a[1]).powi(2)).sqrt()
}

/// Control points either side of `current`, following Chart.js' `splineCurve`.
fn spline_controls(previous: Point, current: Point, next: Point, tension: f64) -> (Point, Point) {
    let d01 = distance(previous, current);
    let d12 = distance(current, next);
    let total = d01 + d12;
    let (s01, s12) = if total > 0.0 {
        (d01 / total, d12 / total)
    } else {
        (0.0, 0.0)
    };

    let fa = tension * s01;
    let fb = tension * s12;
    let dx = next[0] - previous[0];
    let dy = next[1] - previous[1];

    (
        [current[0] - fa * dx, current[1] - fa * dy],
        [current[0] + fb * dx, current[1] + fb * dy],
    )
}

fn cubic_bezier(p0: Point, c0: Point, c1: Point, p1: Point, t: f64) -> Point {
    let mt = 1.0 - t;
    let a = mt * mt * mt;
    let b = 3.0 * mt * mt * t;
    let c = 3.0 * mt * t * t;
    let d = t * t * t;
    [
        a * p0[0] + b * c0[0] + c * c1[0] + d * p1[0],
        a * p0[1] + b * c0[1] + c * c1[1] + d * p1[1],
    ]
}

/// Returns a polyline that passes through every input point, bending between
/// them by `tension`. Zero tension (or fewer than three points) returns the
/// input unchanged.
pub fn smooth_polyline(points: &[Point], tension: f64, samples_per_segment: usize) -> Vec<Point> {
    let n = points.len();
    if n < 3 || tension <= 0.0 || samples_per_segment < 2 {
        return points.to_vec();
    }

    let controls: Vec<(Point, Point)> = (0..n)
        .map(|i| {
            let previous = points[i.saturating_sub(1)];
            let next = points[(i + 1).min(n - 1)];
            spline_controls(previous, points[i], next, tension)
        })
        .collect();

    let mut out = Vec::with_capacity((n - 1) * samples_per_segment + 1);
    out.push(points[0]);
    for i in 0..n - 1 {
        let (_, c0) = controls[i];
        let (c1, _) = controls[i + 1];
        for step in 1..=samples_per_segment {
            let t = step as f64 / samples_per_segment as f64;
            out.push(cubic_bezier(points[i], c0, c1, points[i + 1], t));
        }
    }
    out
}

/// Index-based x coordinates for a category series.
pub fn indexed_points(series: &[f64]) -> Vec<Point> {
    series
        .iter()
        .enumerate()
        .map(|(i, &y)| [i as f64, y])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn zero_tension_is_identity() {
        let points = indexed_points(&[1.0, 3.0, 2.0, 5.0]);
        assert_eq!(smooth_polyline(&points, 0.0, 8), points);
    }

    #[test]
    fn short_series_are_returned_unchanged() {
        assert!(smooth_polyline(&[], 0.2, 8).is_empty());
        let two = indexed_points(&[1.0, 2.0]);
        assert_eq!(smooth_polyline(&two, 0.2, 8), two);
    }

    #[test]
    fn curve_passes_through_every_data_point() {
        let points = indexed_points(&[98.0, 100.0, 105.0, 101.0, 99.5]);
        let samples = 6;
        let smooth = smooth_polyline(&points, 0.2, samples);

        assert_eq!(smooth.len(), (points.len() - 1) * samples + 1);
        for (i, p) in points.iter().enumerate() {
            let q = smooth[i * samples];
            assert!(close(p[0], q[0]) && close(p[1], q[1]), "point {} moved", i);
        }
    }

    #[test]
    fn collinear_points_stay_on_the_line() {
        let points = indexed_points(&[0.0, 1.0, 2.0, 3.0]);
        for p in smooth_polyline(&points, 0.4, 5) {
            assert!(close(p[0], p[1]));
        }
    }
}

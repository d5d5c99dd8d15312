use itertools::{Itertools, MinMaxResult};

/// Smallest and largest value, ordered with `total_cmp`.
pub fn min_max(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    match values.into_iter().minmax_by(|a, b| a.total_cmp(b)) {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(v) => Some((v, v)),
        MinMaxResult::MinMax(lo, hi) => Some((lo, hi)),
    }
}

/// Bezier control points either side of `cur`.
/// Weights come from the x distances only: x is time, and mixing it with price
/// units would make the curve depend on the axis scale.
fn control_points(
    prev: [f64; 2],
    cur: [f64; 2],
    next: [f64; 2],
    tension: f64,
) -> ([f64; 2], [f64; 2]) {
    let d01 = (cur[0] - prev[0]).abs();
    let d12 = (next[0] - cur[0]).abs();
    let total = d01 + d12;
    let (s01, s12) = if total > 0.0 {
        (d01 / total, d12 / total)
    } else {
        (0.0, 0.0)
    };

    let fa = tension * s01;
    let fb = tension * s12;
    let dx = next[0] - prev[0];
    let dy = next[1] - prev[1];

    (
        [cur[0] - fa * dx, cur[1] - fa * dy],
        [cur[0] + fb * dx, cur[1] + fb * dy],
    )
}

fn cubic_bezier(p0: [f64; 2], c0: [f64; 2], c1: [f64; 2], p1: [f64; 2], t: f64) -> [f64; 2] {
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

/// Samples a cardinal Bezier curve through `points`, the way a line chart with
/// `tension` draws its curve. Every input point is kept (at index
/// `i * samples_per_segment`), with `samples_per_segment - 1` points between
/// each neighbouring pair.
pub fn smooth_series(
    points: &[[f64; 2]],
    tension: f64,
    samples_per_segment: usize,
) -> Vec<[f64; 2]> {
    if points.len() < 3 || tension <= 0.0 || samples_per_segment < 2 {
        return points.to_vec();
    }

    let last = points.len() - 1;
    let controls: Vec<([f64; 2], [f64; 2])> = (0..points.len())
        .map(|i| {
            let prev = points[i.saturating_sub(1)];
            let next = points[(i + 1).min(last)];
            control_points(prev, points[i], next, tension)
        })
        .collect();

    let mut out = Vec::with_capacity(last * samples_per_segment + 1);
    out.push(points[0]);
    for (i, pair) in points.windows(2).enumerate() {
        let c0 = controls[i].1;
        let c1 = controls[i + 1].0;
        for step in 1..samples_per_segment {
            let t = step as f64 / samples_per_segment as f64;
            out.push(cubic_bezier(pair[0], c0, c1, pair[1], t));
        }
        out.push(pair[1]);
    }
    out
}

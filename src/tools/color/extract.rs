//! Dominant color extraction by k-means clustering.

use serde::Serialize;

use crate::models::RgbColor;
use crate::tools::{ToolError, ToolResult};

/// Upper bound on pixels fed to the clustering.
pub const MAX_SAMPLES: usize = 10_000;
/// Upper bound on k-means iterations.
pub const MAX_ITERATIONS: usize = 20;
/// Largest number of colors that can be requested.
pub const MAX_COLORS: usize = 16;
/// Pixels with alpha below this are ignored.
pub const MIN_ALPHA: u8 = 128;

/// One extracted color and the share of sampled pixels it represents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DominantColor {
    /// Cluster center
    pub color: RgbColor,
    /// Share of sampled pixels, in percent (one decimal)
    pub percentage: f64,
}

type Point = [f64; 3];

fn distance_sq(a: &Point, b: &Point) -> f64 {
    (a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2) + (a[2] - b[2]).powi(2)
}

fn luminance(p: &Point) -> f64 {
    0.299 * p[0] + 0.587 * p[1] + 0.114 * p[2]
}

fn nearest(point: &Point, centers: &[Point]) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (i, center) in centers.iter().enumerate() {
        let d = distance_sq(point, center);
        if d < best_distance {
            best = i;
            best_distance = d;
        }
    }
    best
}

/// Moves each sample to its nearest center. Returns true when any moved.
fn assign(samples: &[Point], centers: &[Point], assignments: &mut [usize]) -> bool {
    let mut changed = false;
    for (slot, point) in assignments.iter_mut().zip(samples) {
        let cluster = nearest(point, centers);
        if *slot != cluster {
            *slot = cluster;
            changed = true;
        }
    }
    changed
}

/// Lloyd iterations. The returned assignments always refer to the final
/// centers, also when the iteration cap is hit.
fn cluster(samples: &[Point], centers: &mut [Point], max_iterations: usize) -> Vec<usize> {
    let mut assignments = vec![usize::MAX; samples.len()];
    let mut converged = false;
    for _ in 0..max_iterations {
        if !assign(samples, centers, &mut assignments) {
            converged = true;
            break;
        }

        let mut sums = vec![[0.0f64; 3]; centers.len()];
        let mut counts = vec![0usize; centers.len()];
        for (&slot, point) in assignments.iter().zip(samples) {
            for channel in 0..3 {
                sums[slot][channel] += point[channel];
            }
            counts[slot] += 1;
        }
        for (center, (sum, &count)) in centers.iter_mut().zip(sums.iter().zip(&counts)) {
            if count > 0 {
                let n = count as f64;
                *center = [sum[0] / n, sum[1] / n, sum[2] / n];
            }
        }
    }
    if !converged {
        assign(samples, centers, &mut assignments);
    }
    assignments
}

/// Finds the `k` most representative colors of RGBA8 `pixels`
/// (4 bytes per pixel), most common first.
///
/// Sampling takes every n-th opaque pixel so that at most [`MAX_SAMPLES`]
/// remain. Initial centers are the distinct sampled colors at evenly spread
/// luminance ranks, so the same image always gives the same result.
/// Clustering stops when no pixel changes cluster or after
/// [`MAX_ITERATIONS`].
pub fn extract(pixels: &[u8], k: usize) -> ToolResult<Vec<DominantColor>> {
    if !(1..=MAX_COLORS).contains(&k) {
        return Err(ToolError::invalid_option(format!(
            "color count {k} is outside 1..={MAX_COLORS}"
        )));
    }
    if pixels.len() % 4 != 0 {
        return Err(ToolError::malformed("pixel buffer is not RGBA8"));
    }

    let opaque: Vec<Point> = pixels
        .chunks_exact(4)
        .filter(|px| px[3] >= MIN_ALPHA)
        .map(|px| [f64::from(px[0]), f64::from(px[1]), f64::from(px[2])])
        .collect();
    if opaque.is_empty() {
        return Err(ToolError::EmptyInput { field: "Image" });
    }

    let stride = opaque.len().div_ceil(MAX_SAMPLES);
    let samples: Vec<Point> = opaque.into_iter().step_by(stride).collect();

    let mut distinct: Vec<Point> = samples.clone();
    distinct.sort_by(|a, b| {
        luminance(a)
            .total_cmp(&luminance(b))
            .then_with(|| a[0].total_cmp(&b[0]))
            .then_with(|| a[1].total_cmp(&b[1]))
            .then_with(|| a[2].total_cmp(&b[2]))
    });
    distinct.dedup();
    let mut centers: Vec<Point> = Vec::with_capacity(k);
    for i in 0..k {
        let rank = (2 * i + 1) * distinct.len() / (2 * k);
        let candidate = distinct[rank.min(distinct.len() - 1)];
        if !centers.contains(&candidate) {
            centers.push(candidate);
        }
    }

    let assignments = cluster(&samples, &mut centers, MAX_ITERATIONS);

    let mut counts = vec![0usize; centers.len()];
    for &slot in &assignments {
        counts[slot] += 1;
    }
    let total = samples.len() as f64;
    let mut result: Vec<DominantColor> = centers
        .iter()
        .zip(&counts)
        .filter(|(_, count)| **count > 0)
        .map(|(center, &count)| {
            let channel = |v: f64| v.round().clamp(0.0, 255.0) as u8;
            DominantColor {
                color: RgbColor::new(channel(center[0]), channel(center[1]), channel(center[2])),
                percentage: (count as f64 * 1000.0 / total).round() / 10.0,
            }
        })
        .collect();
    result.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
    Ok(result)
}

//! Summary statistics for the episodes-to-solve distribution.
//!
//! Computes the aggregate view reported by the `stats` subcommand: sample
//! moments, order statistics, and a fixed-bin histogram of how many episodes
//! each trial needed before the solved condition held.

use serde::Serialize;

/// Number of histogram bins over the observed range.
pub const HISTOGRAM_BINS: usize = 40;

#[derive(Serialize, Debug)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: u32,
}

/// Aggregate view of an episodes-to-solve sample.
#[derive(Serialize, Debug)]
pub struct SolveStatistics {
    pub trials: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: usize,
    pub max: usize,
    pub median: usize,
    pub histogram: Vec<HistogramBin>,
}

impl SolveStatistics {
    #[must_use]
    pub fn from_sample(sample: &[usize]) -> Self {
        if sample.is_empty() {
            return Self {
                trials: 0,
                mean: 0.0,
                std_dev: 0.0,
                min: 0,
                max: 0,
                median: 0,
                histogram: Vec::new(),
            };
        }

        let mut sorted = sample.to_vec();
        sorted.sort_unstable();
        let n = sorted.len();
        let mean = sorted.iter().sum::<usize>() as f64 / n as f64;
        let variance = sorted
            .iter()
            .map(|&v| {
                let d = v as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / n as f64;
        let min = sorted[0];
        let max = sorted[n - 1];
        let median = sorted[n / 2];

        // Equal-width bins covering [min, max] inclusive.
        let width = (max - min + 1) as f64 / HISTOGRAM_BINS as f64;
        let mut counts = vec![0u32; HISTOGRAM_BINS];
        for &v in sample {
            let idx = (((v - min) as f64) / width) as usize;
            counts[idx.min(HISTOGRAM_BINS - 1)] += 1;
        }
        let histogram = counts
            .iter()
            .enumerate()
            .map(|(i, &count)| HistogramBin {
                lower: min as f64 + i as f64 * width,
                upper: min as f64 + (i + 1) as f64 * width,
                count,
            })
            .collect();

        Self {
            trials: n,
            mean,
            std_dev: variance.sqrt(),
            min,
            max,
            median,
            histogram,
        }
    }
}

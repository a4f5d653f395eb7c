//! SVG plots of training results: the per-episode score curve and the
//! episodes-to-solve histogram.

use anyhow::Result;
use plotters::prelude::*;
use search::SolveStatistics;
use std::path::Path;

/// Line chart of per-episode returns.
pub fn score_curve(path: &Path, scores: &[f32]) -> Result<()> {
    let root = SVGBackend::new(path, (800, 500)).into_drawing_area();
    root.fill(&WHITE)?;

    let y_max = scores.iter().copied().fold(1.0f32, f32::max) * 1.05;
    let x_max = scores.len().max(1) as u32;
    let mut chart = ChartBuilder::on(&root)
        .caption("episode scores", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0u32..x_max, 0f32..y_max)?;
    chart
        .configure_mesh()
        .x_desc("episode")
        .y_desc("return")
        .draw()?;
    chart.draw_series(LineSeries::new(
        scores.iter().enumerate().map(|(i, &s)| (i as u32, s)),
        &BLUE,
    ))?;

    root.present()?;
    Ok(())
}

/// Bar chart of the episodes-to-solve histogram.
pub fn solve_histogram(path: &Path, summary: &SolveStatistics) -> Result<()> {
    let root = SVGBackend::new(path, (800, 500)).into_drawing_area();
    root.fill(&WHITE)?;

    if summary.histogram.is_empty() {
        root.present()?;
        return Ok(());
    }
    let x_min = summary.histogram[0].lower;
    let x_max = summary.histogram[summary.histogram.len() - 1].upper;
    let y_max = summary
        .histogram
        .iter()
        .map(|b| b.count)
        .max()
        .unwrap_or(1)
        + 1;
    let mut chart = ChartBuilder::on(&root)
        .caption("episodes to solve", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_min..x_max, 0u32..y_max)?;
    chart
        .configure_mesh()
        .x_desc("episodes")
        .y_desc("trials")
        .draw()?;
    chart.draw_series(summary.histogram.iter().map(|b| {
        Rectangle::new([(b.lower, 0u32), (b.upper, b.count)], BLUE.mix(0.5).filled())
    }))?;

    root.present()?;
    Ok(())
}

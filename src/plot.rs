use std::fmt::Display;
use std::path::Path;

use plotters::prelude::*;

use crate::constants::plot::{
    PLOT_CAPTION, PLOT_HEIGHT_PX, PLOT_WIDTH_PX, X_AXIS_LABEL, Y_AXIS_LABEL,
};
use crate::errors::PrepError;
use crate::series::ConvergencePoint;

/// Render the convergence series as a line chart with point markers.
///
/// Percentage on the x-axis, ΔG on the y-axis, grid on. Partial and empty
/// series still render: the axes fall back to a default range when there is
/// no data to size them from.
pub fn render_convergence_plot(
    points: &[ConvergencePoint],
    out_path: &Path,
) -> Result<(), PrepError> {
    let root =
        BitMapBackend::new(out_path, (PLOT_WIDTH_PX, PLOT_HEIGHT_PX)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let (y_min, y_max) = value_range(points);
    let mut chart = ChartBuilder::on(&root)
        .caption(PLOT_CAPTION, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0u32..100u32, y_min..y_max)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc(X_AXIS_LABEL)
        .y_desc(Y_AXIS_LABEL)
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(
            points.iter().map(|point| (point.percent as u32, point.value)),
            &BLUE,
        ))
        .map_err(render_err)?;
    chart
        .draw_series(points.iter().map(|point| {
            Circle::new((point.percent as u32, point.value), 3, BLUE.filled())
        }))
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}

fn value_range(points: &[ConvergencePoint]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for point in points {
        if point.value.is_finite() {
            min = min.min(point.value);
            max = max.max(point.value);
        }
    }
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    let padding = ((max - min) * 0.05).max(0.1);
    (min - padding, max + padding)
}

fn render_err<E: Display>(err: E) -> PrepError {
    PrepError::Render(err.to_string())
}

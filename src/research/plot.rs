use plotters::prelude::*;

use crate::error::{Error, Result};
use super::report::MetricSummary;

use std::fmt;
use std::path::Path;

const SIZE: (u32, u32) = (800, 480);
const COLORS: [RGBColor; 4] = [RED, BLUE, GREEN, MAGENTA];


pub(super) fn plot_test_errors(path: &Path, summaries: &[MetricSummary])
    -> Result<()>
{
    let n_trials = summaries.iter()
        .map(|s| s.records().len())
        .max()
        .unwrap_or(0);

    let root = SVGBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Test error per trial", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0usize..n_trials + 1, 0f64..1f64)
        .map_err(plot_error)?;

    chart.configure_mesh()
        .x_desc("Trial")
        .y_desc("Error rate")
        .draw()
        .map_err(plot_error)?;

    for (k, summary) in summaries.iter().enumerate() {
        let color = COLORS[k % COLORS.len()];
        let points = summary.records()
            .iter()
            .map(|r| (r.trial(), r.test_error()));
        chart.draw_series(LineSeries::new(points, &color))
            .map_err(plot_error)?
            .label(summary.name())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], &color)
            });
    }

    chart.configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(plot_error)?;

    root.present().map_err(plot_error)?;
    Ok(())
}


fn plot_error<E: fmt::Display>(e: E) -> Error {
    Error::Plot(e.to_string())
}

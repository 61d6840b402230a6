//! Line chart rendering for sampled curves.
//!
//! Charts are drawn with [`plotters`] into PNG files. Rendering is a side
//! effect only; nothing computed here feeds back into a model.

use std::path::{Path, PathBuf};

use plotters::prelude::*;
use thiserror::Error;
use tracing::info;

/// File name used when a chart is shown without an explicit save path.
const PREVIEW_FILE: &str = "ibmb_curve.png";

/// Fixed labels of a chart.
#[derive(Debug, Clone, Copy)]
pub struct ChartLabels<'a> {
    /// Chart title.
    pub title: &'a str,

    /// Horizontal axis label.
    pub x: &'a str,

    /// Vertical axis label.
    pub y: &'a str,
}

/// Display and export settings for a chart.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Writes a preview image and reports its location when no save path is given.
    pub show: bool,

    /// Destination of the PNG image, if any.
    pub save_path: Option<PathBuf>,

    /// Image size in pixels.
    pub size: (u32, u32),
}

impl Default for RenderOptions {
    /// A 10 × 7.5 inch chart at 300 DPI, shown but not saved.
    fn default() -> Self {
        Self {
            show: true,
            save_path: None,
            size: (3000, 2250),
        }
    }
}

/// Errors that can occur while rendering a chart.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The series has no points.
    #[error("cannot plot an empty series")]
    EmptySeries,

    /// The x and y sequences differ in length.
    #[error("series length mismatch: {x} x values, {y} y values")]
    LengthMismatch {
        /// Number of x values.
        x: usize,
        /// Number of y values.
        y: usize,
    },

    /// Creating the output directory failed.
    #[error("failed to prepare output directory")]
    Io(#[from] std::io::Error),

    /// The drawing backend failed.
    #[error("drawing failed: {0}")]
    Backend(String),
}

/// Draws `ys` against `xs` as a single line with a grid.
///
/// The chart is written to `options.save_path` when set. Otherwise, if
/// `options.show` is set, it is written to a preview file in the system
/// temporary directory. Returns the path written, or `None` if neither
/// option asked for output.
///
/// # Errors
///
/// Returns a [`RenderError`] if the series is empty or mismatched, or if
/// the image cannot be written.
pub fn render_line(
    xs: &[f64],
    ys: &[f64],
    labels: &ChartLabels<'_>,
    options: &RenderOptions,
) -> Result<Option<PathBuf>, RenderError> {
    if xs.len() != ys.len() {
        return Err(RenderError::LengthMismatch {
            x: xs.len(),
            y: ys.len(),
        });
    }
    if xs.is_empty() {
        return Err(RenderError::EmptySeries);
    }

    let path = match (&options.save_path, options.show) {
        (Some(path), _) => path.clone(),
        (None, true) => std::env::temp_dir().join(PREVIEW_FILE),
        (None, false) => return Ok(None),
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    draw(&path, xs, ys, labels, options.size)?;

    if options.show {
        info!(path = %path.display(), "chart ready for viewing");
    } else {
        info!(path = %path.display(), "chart saved");
    }

    Ok(Some(path))
}

fn draw(
    path: &Path,
    xs: &[f64],
    ys: &[f64],
    labels: &ChartLabels<'_>,
    size: (u32, u32),
) -> Result<(), RenderError> {
    let (x_range, y_range) = (padded_range(xs), padded_range(ys));

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(backend_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(labels.title, ("sans-serif", 64))
        .margin(48)
        .x_label_area_size(140)
        .y_label_area_size(180)
        .build_cartesian_2d(x_range, y_range)
        .map_err(backend_error)?;

    chart
        .configure_mesh()
        .x_desc(labels.x)
        .y_desc(labels.y)
        .label_style(("sans-serif", 40))
        .axis_desc_style(("sans-serif", 48))
        .draw()
        .map_err(backend_error)?;

    chart
        .draw_series(LineSeries::new(
            xs.iter().copied().zip(ys.iter().copied()),
            BLUE.stroke_width(5),
        ))
        .map_err(backend_error)?;

    root.present().map_err(backend_error)?;
    Ok(())
}

fn backend_error(err: impl std::fmt::Display) -> RenderError {
    RenderError::Backend(err.to_string())
}

/// Returns the data range, widened so that flat series still span an axis.
fn padded_range(values: &[f64]) -> std::ops::Range<f64> {
    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    if max > min {
        min..max
    } else {
        (min - 1.0)..(max + 1.0)
    }
}

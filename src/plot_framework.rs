// src/plot_framework.rs

use log::info;
use plotters::backend::BitMapBackend;
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{PathElement, Rectangle, Text};
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, RED, WHITE};
use plotters::style::{Color, IntoFont, RGBColor};

use std::error::Error;
use std::ops::Range;

use crate::constants::{
    FONT_SIZE_ANNOTATION, FONT_SIZE_AXIS_LABEL, FONT_SIZE_CHART_TITLE, FONT_SIZE_LEGEND,
    FONT_SIZE_MAIN_TITLE, FONT_SIZE_MESSAGE, LINE_WIDTH_LEGEND, PLOT_HEIGHT, PLOT_WIDTH,
};

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// Min and max over the finite values of all series, `None` when there are none.
pub fn finite_bounds<'a, I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = &'a f64>,
{
    values
        .into_iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Time and value of the first maximum of a series.
pub fn series_max(data: &[(f64, f64)]) -> Option<(f64, f64)> {
    data.iter()
        .copied()
        .filter(|(_, y)| y.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, point| match acc {
            Some(best) if best.1 >= point.1 => Some(best),
            _ => Some(point),
        })
}

/// Text for the maximum annotation, `t=…, j_max=…`.
pub fn max_annotation(data: &[(f64, f64)], symbol: &str) -> Option<String> {
    series_max(data).map(|(t, v)| format!("t={t:.3}, {symbol}_max={v:.3}"))
}

/// Pairs a time axis with a value series.
pub fn zip_series(times: &[f64], values: &[f64]) -> Vec<(f64, f64)> {
    times.iter().copied().zip(values.iter().copied()).collect()
}

/// Draw a "Data Unavailable" message on a plot area.
pub fn draw_unavailable_message(
    area: &DrawingArea<BitMapBackend, Shift>,
    plot_type: &str,
    reason: &str,
) -> Result<(), Box<dyn Error>> {
    let (x_range, y_range) = area.get_pixel_range();
    let (width, height) = (x_range.end - x_range.start, y_range.end - y_range.start);
    let message = format!("{plot_type} Data Unavailable: {reason}");
    let estimated_width = message.len() as i32 * FONT_SIZE_MESSAGE * 6 / 10;

    let text_style = ("sans-serif", FONT_SIZE_MESSAGE).into_font().color(&RED);
    area.draw(&Text::new(
        message,
        (width / 2 - estimated_width / 2, height / 2),
        text_style,
    ))?;
    Ok(())
}

#[derive(Clone)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
}

#[derive(Clone)]
pub struct PlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub x_label: String,
    pub y_label: String,
    /// Text drawn in a box in the upper left corner of the chart.
    pub annotation: Option<String>,
}

impl PlotConfig {
    /// Builds a config with ranges fitted to the data of all series.
    pub fn fitted(
        title: impl Into<String>,
        series: Vec<PlotSeries>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Option<Self> {
        let (x_min, x_max) =
            finite_bounds(series.iter().flat_map(|s| s.data.iter().map(|p| &p.0)))?;
        let (y_min, y_max) =
            finite_bounds(series.iter().flat_map(|s| s.data.iter().map(|p| &p.1)))?;
        let (y_lo, y_hi) = calculate_range(y_min, y_max);
        let x_range = if x_max > x_min {
            x_min..x_max
        } else {
            x_min..x_min + 1.0
        };
        Some(Self {
            title: title.into(),
            x_range,
            y_range: y_lo..y_hi,
            series,
            x_label: x_label.into(),
            y_label: y_label.into(),
            annotation: None,
        })
    }

    pub fn with_annotation(mut self, annotation: Option<String>) -> Self {
        self.annotation = annotation;
        self
    }
}

/// Draws a single chart using a PlotConfig struct.
fn draw_single_chart(
    area: &DrawingArea<BitMapBackend, Shift>,
    plot_config: &PlotConfig,
) -> Result<(), Box<dyn Error>> {
    let mut chart = ChartBuilder::on(area)
        .caption(&plot_config.title, ("sans-serif", FONT_SIZE_CHART_TITLE))
        .margin(5)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(plot_config.x_range.clone(), plot_config.y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(&plot_config.x_label)
        .y_desc(&plot_config.y_label)
        .x_labels(20)
        .y_labels(10)
        .y_label_formatter(&|y| format!("{y:.2}"))
        .light_line_style(WHITE.mix(0.7))
        .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
        .draw()?;

    let mut legend_series_count = 0;
    for s in &plot_config.series {
        if s.data.is_empty() {
            continue;
        }
        let series = chart.draw_series(LineSeries::new(
            s.data.iter().cloned(),
            s.color.stroke_width(s.stroke_width),
        ))?;
        if !s.label.is_empty() {
            let color = s.color;
            series.label(&s.label).legend(move |(x, y)| {
                PathElement::new(
                    vec![(x, y), (x + 20, y)],
                    color.stroke_width(LINE_WIDTH_LEGEND),
                )
            });
            legend_series_count += 1;
        }
    }

    if legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", FONT_SIZE_LEGEND))
            .draw()?;
    }

    if let Some(annotation) = &plot_config.annotation {
        let (left, top) = chart.plotting_area().get_base_pixel();
        let area_offset = area.get_base_pixel();
        let origin = (left - area_offset.0 + 10, top - area_offset.1 + 10);
        let box_width = annotation.len() as i32 * FONT_SIZE_ANNOTATION * 6 / 10 + 12;
        area.draw(&Rectangle::new(
            [
                origin,
                (origin.0 + box_width, origin.1 + FONT_SIZE_ANNOTATION + 10),
            ],
            WHITE.filled(),
        ))?;
        area.draw(&Rectangle::new(
            [
                origin,
                (origin.0 + box_width, origin.1 + FONT_SIZE_ANNOTATION + 10),
            ],
            BLACK.stroke_width(1),
        ))?;
        area.draw(&Text::new(
            annotation.clone(),
            (origin.0 + 6, origin.1 + 5),
            ("sans-serif", FONT_SIZE_ANNOTATION).into_font().color(&BLACK),
        ))?;
    }

    Ok(())
}

/// Creates a figure with one chart per panel, stacked vertically.
/// Panels without a config get a placeholder message.
pub fn draw_stacked_plot(
    output_filename: &str,
    root_name: &str,
    plot_type_name: &str,
    panels: &[Option<PlotConfig>],
) -> Result<(), Box<dyn Error>> {
    let root_area =
        BitMapBackend::new(output_filename, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;
    root_area.draw(&Text::new(
        root_name,
        (10, 10),
        ("sans-serif", FONT_SIZE_MAIN_TITLE)
            .into_font()
            .color(&BLACK),
    ))?;
    let margined_root_area = root_area.margin(50, 5, 5, 5);
    let sub_plot_areas = margined_root_area.split_evenly((panels.len().max(1), 1));
    let mut any_panel_plotted = false;

    for (area, panel) in sub_plot_areas.iter().zip(panels.iter()) {
        match panel {
            Some(plot_config) => {
                let has_data = plot_config.series.iter().any(|s| !s.data.is_empty());
                let valid_ranges = plot_config.x_range.end > plot_config.x_range.start
                    && plot_config.y_range.end > plot_config.y_range.start;
                if has_data && valid_ranges {
                    draw_single_chart(area, plot_config)?;
                    any_panel_plotted = true;
                } else {
                    let reason = if !has_data {
                        "No data points"
                    } else {
                        "Invalid ranges"
                    };
                    draw_unavailable_message(area, plot_type_name, reason)?;
                }
            }
            None => {
                draw_unavailable_message(area, plot_type_name, "Calculation Failed")?;
            }
        }
    }

    root_area.present()?;
    if any_panel_plotted {
        info!("Plot saved as '{output_filename}'.");
    } else {
        info!("'{output_filename}' contains placeholder messages only: no data available.");
    }
    Ok(())
}


// src/plot_framework.rs

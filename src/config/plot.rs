//! Plot visualization configuration

use crate::models::chart_spec::Rgba;

pub struct PlotConfig {
    /// Line color of the price series
    pub line_color: Rgba,
    /// Area fill under the price series
    pub fill_color: Rgba,
    pub fill_enabled: bool,
    /// Curve tension (0.0 = straight segments)
    pub tension: f32,
    pub line_width: f32,
    /// Interpolated points per segment when tension > 0
    pub smoothing_samples: usize,
    /// Upper bound on labelled ticks along the time axis
    pub max_x_ticks: usize,
    /// Number of price gridlines between min and max
    pub y_axis_divisions: u32,
    pub x_axis_title: &'static str,
    pub y_axis_title: &'static str,
    pub show_legend: bool,
    /// Minimum plot height in points
    pub min_plot_height: f32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    line_color: Rgba::from_rgb(0xb5, 0x2c, 0xff), // Purple
    fill_color: Rgba::from_rgba(0, 123, 255, 26), // Blue at ~10% opacity
    fill_enabled: true,
    tension: 0.4,
    line_width: 2.0,
    smoothing_samples: 8,
    max_x_ticks: 10,
    y_axis_divisions: 5,
    x_axis_title: "Time",
    y_axis_title: "Price (USD)",
    show_legend: false,
    min_plot_height: 320.0,
};

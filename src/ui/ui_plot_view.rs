use std::hash::{Hash, Hasher};

use chrono::Local;
use eframe::egui;
use egui_plot::{AxisHints, Corner, GridMark, HPlacement, Legend, Plot};

use crate::config::{DEBUG_FLAGS, PLOT_CONFIG};
use crate::models::{ChartSpec, TimeAxisSpec, ValueAxisSpec};
use crate::ui::plot_layers::{AreaFillLayer, LayerContext, PlotLayer, PriceLineLayer};
use crate::utils::format::format_axis_price;
use crate::utils::maths_utils;
use crate::utils::time_utils::{TimeUtils, format_plot_x};

/// Geometry derived from a dataset; recomputed only when the dataset changes.
#[derive(Clone)]
pub struct PlotCache {
    pub data_hash: u64,
    /// The (possibly smoothed) curve actually drawn
    pub curve: Vec<[f64; 2]>,
    pub x_min: f64,
    pub x_max: f64,
    /// Lower plot bound; the area fill reaches down to here
    pub y_floor: f64,
    pub y_ceiling: f64,
}

#[derive(Default)]
pub struct PlotView {
    cache: Option<PlotCache>,
    cache_hits: usize,
    cache_misses: usize,
}

impl PlotView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands the chart description to egui_plot.
    pub fn show(&mut self, ui: &mut egui::Ui, spec: &ChartSpec) {
        let Some(cache) = self.calculate_plot_data(spec) else {
            return;
        };

        let utc_offset_secs = i64::from(Local::now().offset().local_minus_utc());
        let x_axis = spec.x_axis;
        let height = ui.available_height().max(PLOT_CONFIG.min_plot_height);

        let mut plot = Plot::new("price_chart")
            .height(height)
            .custom_x_axes(vec![create_x_axis(x_axis)])
            .custom_y_axes(vec![create_y_axis(spec.y_axis)])
            .label_formatter(|_name, value| {
                format!(
                    "{}\n{}",
                    format_plot_x(value.x, &Local, TimeUtils::STANDARD_TIME_FORMAT),
                    format_axis_price(value.y)
                )
            })
            .x_grid_spacer(move |input| {
                let (min, max) = input.bounds;
                let ticks = x_axis.ticks(min, max, PLOT_CONFIG.max_x_ticks, utc_offset_secs);
                ticks
                    .values
                    .into_iter()
                    .map(|value| GridMark {
                        value,
                        step_size: ticks.step,
                    })
                    .collect()
            })
            .y_grid_spacer(|input| {
                let (min, max) = input.bounds;
                let divisions = PLOT_CONFIG.y_axis_divisions.max(1);
                let step = (max - min) / f64::from(divisions);
                if step <= 0.0 || !step.is_finite() {
                    return Vec::new();
                }
                (0..=divisions)
                    .map(|i| GridMark {
                        value: min + step * f64::from(i),
                        step_size: step,
                    })
                    .collect()
            })
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false);

        if spec.show_legend {
            plot = plot.legend(Legend::default().position(Corner::LeftTop));
        }

        plot.show(ui, |plot_ui| {
            plot_ui.set_plot_bounds_x(cache.x_min..=cache.x_max);
            plot_ui.set_plot_bounds_y(cache.y_floor..=cache.y_ceiling);

            let ctx = LayerContext {
                label: &spec.dataset.label,
                style: &spec.dataset.style,
                cache: &cache,
            };

            // Back to front
            let layers: Vec<Box<dyn PlotLayer>> =
                vec![Box::new(AreaFillLayer), Box::new(PriceLineLayer)];
            for layer in layers {
                layer.render(plot_ui, &ctx);
            }
        });
    }

    fn calculate_plot_data(&mut self, spec: &ChartSpec) -> Option<PlotCache> {
        let points = &spec.dataset.points;
        let current_hash = dataset_hash(spec);

        if let Some(cache) = &self.cache {
            if cache.data_hash == current_hash {
                self.cache_hits += 1;
                return Some(cache.clone());
            }
        }
        self.cache_misses += 1;
        if DEBUG_FLAGS.print_plot_cache_stats {
            log::info!(
                "Plot cache miss ({} hits / {} misses)",
                self.cache_hits,
                self.cache_misses
            );
        }

        let (x_min, x_max) = maths_utils::min_max(points.iter().map(|p| p[0]))?;
        let (y_min, y_max) = maths_utils::min_max(points.iter().map(|p| p[1]))?;

        let curve = maths_utils::smooth_series(
            points,
            spec.dataset.style.tension as f64,
            PLOT_CONFIG.smoothing_samples,
        );

        // Headroom so the curve (and any overshoot from smoothing) is not clipped
        let (curve_min, curve_max) =
            maths_utils::min_max(curve.iter().map(|p| p[1])).unwrap_or((y_min, y_max));
        let span = (curve_max - curve_min).max(curve_max.abs() * 0.01).max(f64::EPSILON);
        let padding = span * 0.05;

        let cache = PlotCache {
            data_hash: current_hash,
            curve,
            x_min,
            x_max: if x_max > x_min { x_max } else { x_min + 1.0 },
            y_floor: curve_min - padding,
            y_ceiling: curve_max + padding,
        };

        self.cache = Some(cache.clone());
        Some(cache)
    }
}

fn dataset_hash(spec: &ChartSpec) -> u64 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    let dataset = &spec.dataset;
    dataset.label.hash(&mut hasher);
    dataset.points.len().hash(&mut hasher);
    dataset.style.tension.to_bits().hash(&mut hasher);
    for point in &dataset.points {
        point[0].to_bits().hash(&mut hasher);
        point[1].to_bits().hash(&mut hasher);
    }
    hasher.finish()
}

fn create_x_axis(axis: TimeAxisSpec) -> AxisHints<'static> {
    let format = axis.unit.tick_format();
    AxisHints::new_x()
        .label(axis.title)
        .formatter(move |grid_mark, _range| format_plot_x(grid_mark.value, &Local, format))
}

fn create_y_axis(axis: ValueAxisSpec) -> AxisHints<'static> {
    AxisHints::new_y()
        .label(axis.title)
        .formatter(|grid_mark, _range| format_axis_price(grid_mark.value))
        .placement(HPlacement::Left)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coin, Selection, Timeframe};
    use crate::models::{PriceSeries, RawPricePoint};

    fn spec(prices: &[f64]) -> ChartSpec {
        let raw: Vec<RawPricePoint> = prices
            .iter()
            .enumerate()
            .map(|(i, &p)| RawPricePoint::new(1_700_000_000_000 + i as i64 * 3_600_000, p))
            .collect();
        let series = PriceSeries::from_raw(&raw).unwrap();
        ChartSpec::build(&Selection::new(Coin::Ethereum, Timeframe::OneDay), Some(&series))
    }

    #[test]
    fn bounds_enclose_the_drawn_curve() {
        let mut view = PlotView::new();
        let cache = view.calculate_plot_data(&spec(&[100.0, 150.0, 120.0])).unwrap();

        assert_eq!(cache.x_min, 1_700_000_000.0);
        assert_eq!(cache.x_max, 1_700_007_200.0);
        assert!(cache.curve.iter().all(|p| p[1] > cache.y_floor && p[1] < cache.y_ceiling));
    }

    #[test]
    fn unchanged_dataset_hits_the_cache() {
        let mut view = PlotView::new();
        let data = spec(&[1.0, 2.0, 3.0]);
        view.calculate_plot_data(&data);
        view.calculate_plot_data(&data);
        assert_eq!((view.cache_hits, view.cache_misses), (1, 1));

        view.calculate_plot_data(&spec(&[1.0, 2.0, 4.0]));
        assert_eq!(view.cache_misses, 2);
    }

    #[test]
    fn interior_price_change_redraws_the_curve() {
        let mut view = PlotView::new();
        view.calculate_plot_data(&spec(&[1.0, 2.0, 3.0]));
        let cache = view.calculate_plot_data(&spec(&[1.0, 99.0, 3.0])).unwrap();

        assert_eq!(view.cache_misses, 2);
        assert_eq!(view.cache_hits, 0);
        let middle = cache.curve[cache.curve.len() / 2];
        assert_eq!(middle, [1_700_003_600.0, 99.0]);
    }

    #[test]
    fn empty_dataset_draws_nothing() {
        let mut view = PlotView::new();
        assert!(view.calculate_plot_data(&spec(&[])).is_none());
    }

    #[test]
    fn single_point_gets_a_usable_range() {
        let mut view = PlotView::new();
        let cache = view.calculate_plot_data(&spec(&[42.0])).unwrap();
        assert!(cache.x_max > cache.x_min);
        assert!(cache.y_ceiling > cache.y_floor);
    }
}

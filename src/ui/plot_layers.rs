use eframe::egui::Stroke;
use egui_plot::{Line, PlotPoints, PlotUi, Polygon};

use crate::models::SeriesStyle;
use crate::ui::ui_plot_view::PlotCache;
use crate::ui::utils::to_color32;

/// Context passed to every layer during rendering.
/// This prevents argument explosion.
pub struct LayerContext<'a> {
    pub label: &'a str,
    pub style: &'a SeriesStyle,
    pub cache: &'a PlotCache,
}

/// A standardized layer in the plot stack.
pub trait PlotLayer {
    fn render(&self, ui: &mut PlotUi, ctx: &LayerContext);
}

// ============================================================================
// 1. AREA FILL (under the price curve)
// ============================================================================
pub struct AreaFillLayer;

impl PlotLayer for AreaFillLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if !ctx.style.fill {
            return;
        }
        let color = to_color32(ctx.style.fill_color);
        let floor = ctx.cache.y_floor;

        // One trapezoid per segment: each is convex, unlike the area as a whole.
        for pair in ctx.cache.curve.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let points = PlotPoints::new(vec![[a[0], floor], a, b, [b[0], floor]]);
            let polygon = Polygon::new(ctx.label, points)
                .fill_color(color)
                .stroke(Stroke::NONE);
            plot_ui.polygon(polygon);
        }
    }
}

// ============================================================================
// 2. PRICE LINE
// ============================================================================
pub struct PriceLineLayer;

impl PlotLayer for PriceLineLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let line = Line::new(ctx.label, PlotPoints::new(ctx.cache.curve.clone()))
            .color(to_color32(ctx.style.border_color))
            .width(ctx.style.line_width);
        plot_ui.line(line);
    }
}

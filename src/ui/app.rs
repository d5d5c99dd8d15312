use std::time::Duration;

use eframe::{Frame, egui};

use crate::config::DEBUG_FLAGS;
use crate::engine::ChartEngine;
use crate::ui::config::UI_CONFIG;
use crate::ui::ui_panels::NavTab;
use crate::ui::ui_plot_view::PlotView;

/// The desktop shell around a [`ChartEngine`].
pub struct CoinChartApp {
    pub(super) engine: ChartEngine,
    pub(super) plot_view: PlotView,
    pub(super) is_fullscreen: bool,
    pub(super) active_tab: NavTab,
}

impl CoinChartApp {
    pub fn new(engine: ChartEngine) -> Self {
        Self {
            engine,
            plot_view: PlotView::new(),
            is_fullscreen: false,
            active_tab: NavTab::default(),
        }
    }

    pub fn engine(&self) -> &ChartEngine {
        &self.engine
    }
}

impl eframe::App for CoinChartApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if DEBUG_FLAGS.print_shutdown {
            log::info!(
                "Application shutdown complete ({} fetches still in flight).",
                self.engine.in_flight_count()
            );
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // Apply any completed fetch before drawing
        self.engine.update();

        self.handle_global_shortcuts(ctx);

        self.render_header_panel(ctx);
        self.render_central_panel(ctx);

        // Background threads do not wake egui, so poll while the latest fetch is
        // outstanding (including one just issued by this frame's input)
        if self.engine.is_loading() {
            ctx.request_repaint_after(Duration::from_millis(UI_CONFIG.busy_repaint_ms));
        }
    }
}

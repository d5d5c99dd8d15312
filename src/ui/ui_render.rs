use eframe::egui::{CentralPanel, Context, Frame, Key, Margin, TopBottomPanel, ViewportCommand};

use crate::config::DEBUG_FLAGS;
use crate::models::ChartSpec;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{
    ChartControlEvent, ChartControlsPanel, CoinSelectorPanel, NavigationBar, Panel,
    TimeframePanel, render_price_summary,
};
use crate::ui::utils::spaced_separator;

use super::app::CoinChartApp;

impl CoinChartApp {
    pub(super) fn render_header_panel(&mut self, ctx: &Context) {
        let header_frame = Frame::new()
            .fill(UI_CONFIG.colors.header_panel)
            .inner_margin(Margin::same(12));
        TopBottomPanel::top("header_panel")
            .frame(header_frame)
            .show(ctx, |ui| {
                let mut coin_events = Vec::new();
                ui.horizontal(|ui| {
                    coin_events = CoinSelectorPanel::new(self.engine.selection().coin).render(ui);
                    ui.add_space(24.0);
                    let price_data = self.engine.price_data().map(|data| data.as_ref());
                    render_price_summary(ui, price_data);
                });

                spaced_separator(ui);

                for tab in NavigationBar::new(self.active_tab).render(ui) {
                    self.active_tab = tab;
                }

                for coin in coin_events {
                    self.engine.set_coin(coin);
                }
            });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.central_panel)
            .inner_margin(Margin::same(12));
        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                let mut control_events = Vec::new();
                let mut timeframe_events = Vec::new();
                ui.horizontal(|ui| {
                    control_events = ChartControlsPanel::new(self.is_fullscreen).render(ui);
                    ui.add_space(24.0);
                    timeframe_events =
                        TimeframePanel::new(self.engine.selection().timeframe).render(ui);
                });
                ui.add_space(8.0);

                match self.engine.price_data() {
                    Some(data) => {
                        let spec = ChartSpec::build(&data.selection, Some(&data.series));
                        self.plot_view.show(ui, &spec);
                    }
                    None => {
                        ui.centered_and_justified(|ui| {
                            ui.label_subdued(UI_TEXT.loading_chart);
                        });
                    }
                }

                for event in control_events {
                    match event {
                        ChartControlEvent::ToggleFullscreen => {
                            self.set_fullscreen(ctx, !self.is_fullscreen)
                        }
                    }
                }
                for timeframe in timeframe_events {
                    self.engine.set_timeframe(timeframe);
                }
            });
    }

    pub(super) fn handle_global_shortcuts(&mut self, ctx: &Context) {
        // The window manager can change this behind our back
        if let Some(fullscreen) = ctx.input(|i| i.viewport().fullscreen) {
            self.is_fullscreen = fullscreen;
        }

        let (toggle, escape) =
            ctx.input(|i| (i.key_pressed(Key::F11), i.key_pressed(Key::Escape)));
        if toggle {
            self.set_fullscreen(ctx, !self.is_fullscreen);
        } else if escape && self.is_fullscreen {
            self.set_fullscreen(ctx, false);
        }
    }

    fn set_fullscreen(&mut self, ctx: &Context, fullscreen: bool) {
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("Fullscreen: {}", fullscreen);
        }
        self.is_fullscreen = fullscreen;
        ctx.send_viewport_cmd(ViewportCommand::Fullscreen(fullscreen));
    }
}

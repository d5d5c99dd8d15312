use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub central_panel: Color32,
    pub header_panel: Color32,
    pub price: Color32,
    pub price_up: Color32,
    pub price_down: Color32,
    pub active_tab: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    /// Font size of the current price headline
    pub headline_size: f32,
    /// How often to repaint while a fetch is outstanding
    pub busy_repaint_ms: u64,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::from_rgb(0xb5, 0x2c, 0xff),
        central_panel: Color32::from_rgb(22, 22, 28),
        header_panel: Color32::from_rgb(30, 30, 38),
        price: Color32::WHITE,
        price_up: Color32::from_rgb(80, 200, 120),
        price_down: Color32::from_rgb(230, 90, 90),
        active_tab: Color32::from_rgb(0xb5, 0x2c, 0xff),
    },
    headline_size: 28.0,
    busy_repaint_ms: 50,
};

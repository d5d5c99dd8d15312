use eframe::egui::{Color32, RichText, Ui};

use crate::ui::config::UI_CONFIG;

/// Extension trait to add semantic styling methods directly to `egui::Ui`.
pub trait UiStyleExt {
    /// Renders small, gray text (good for labels like "Choose a coin:").
    fn label_subdued(&mut self, text: impl Into<String>);

    /// Big bold price, with an optional small unit after it.
    fn price_headline(&mut self, price: &str, unit: Option<&str>);

    /// Small colored text: green when up, red when down, gray when unknown.
    fn price_change(&mut self, text: impl Into<String>, is_up: Option<bool>);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).color(Color32::GRAY));
    }

    fn price_headline(&mut self, price: &str, unit: Option<&str>) {
        self.horizontal(|ui| {
            ui.heading(RichText::new(price).strong().color(UI_CONFIG.colors.price));
            if let Some(unit) = unit {
                ui.label(RichText::new(unit).small().color(Color32::GRAY));
            }
        });
    }

    fn price_change(&mut self, text: impl Into<String>, is_up: Option<bool>) {
        let color = match is_up {
            Some(true) => UI_CONFIG.colors.price_up,
            Some(false) => UI_CONFIG.colors.price_down,
            None => Color32::GRAY,
        };
        self.label(RichText::new(text).small().color(color));
    }
}

use eframe::egui::{Color32, Context, FontId, TextStyle, Ui, Visuals};

use crate::models::Rgba;
use crate::ui::config::UI_CONFIG;

/// Configures egui once at startup: theme colors and text sizes.
/// Later frames only read the context's style.
pub fn initialize_rendering(ctx: &Context) {
    setup_custom_visuals(ctx);

    ctx.style_mut(|style| {
        style
            .text_styles
            .insert(TextStyle::Heading, FontId::proportional(UI_CONFIG.headline_size));
        style.spacing.button_padding.x = 10.0;
    });

    log::info!("Rendering initialised");
}

/// Sets up custom visuals for the entire application
fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.header_panel;

    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.selection.bg_fill = UI_CONFIG.colors.active_tab;

    ctx.set_visuals(visuals);
}

/// Creates a separator with standard spacing
pub fn spaced_separator(ui: &mut Ui) {
    ui.add_space(6.0);
    ui.separator();
    ui.add_space(6.0);
}

pub fn to_color32(color: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

use eframe::egui::{Button, ComboBox, RichText, Ui};
use strum::IntoEnumIterator;

use crate::config::DEBUG_FLAGS;
use crate::domain::{Coin, Timeframe};
use crate::models::{PriceData, PriceSummary};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::utils::format::{format_locale, format_signed};

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

// ============================================================================
// COIN SELECTOR
// ============================================================================

pub struct CoinSelectorPanel {
    selected: Coin,
}

impl CoinSelectorPanel {
    pub fn new(selected: Coin) -> Self {
        Self { selected }
    }
}

impl Panel for CoinSelectorPanel {
    type Event = Coin;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let previously_selected = self.selected;

        ui.horizontal(|ui| {
            ui.label_subdued(UI_TEXT.coin_selector_label);
            ComboBox::from_id_salt("coin_select")
                .selected_text(self.selected.display_name())
                .show_ui(ui, |ui| {
                    for coin in Coin::iter() {
                        ui.selectable_value(&mut self.selected, coin, coin.display_name());
                    }
                });
        });

        if self.selected != previously_selected {
            if DEBUG_FLAGS.print_ui_interactions {
                log::info!("Coin selected: {}", self.selected);
            }
            vec![self.selected]
        } else {
            Vec::new()
        }
    }
}

// ============================================================================
// TIMEFRAME BUTTONS
// ============================================================================

pub struct TimeframePanel {
    active: Timeframe,
}

impl TimeframePanel {
    pub fn new(active: Timeframe) -> Self {
        Self { active }
    }
}

impl Panel for TimeframePanel {
    type Event = Timeframe;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        ui.horizontal(|ui| {
            for timeframe in Timeframe::iter() {
                let is_active = timeframe == self.active;
                if ui
                    .selectable_label(is_active, timeframe.button_label())
                    .clicked()
                    && !is_active
                {
                    if DEBUG_FLAGS.print_ui_interactions {
                        log::info!("Timeframe selected: {} days", timeframe.days());
                    }
                    self.active = timeframe;
                    events.push(timeframe);
                }
            }
        });
        events
    }
}

// ============================================================================
// NAVIGATION BAR
// ============================================================================

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, strum_macros::EnumIter)]
pub enum NavTab {
    Summary,
    #[default]
    Chart,
    Statistics,
    Analysis,
    Settings,
}

impl NavTab {
    pub fn label(self) -> &'static str {
        match self {
            NavTab::Summary => "Summary",
            NavTab::Chart => "Chart",
            NavTab::Statistics => "Statistics",
            NavTab::Analysis => "Analysis",
            NavTab::Settings => "Settings",
        }
    }

    /// Only the chart view exists; the rest are placeholders.
    pub fn is_available(self) -> bool {
        self == NavTab::Chart
    }
}

pub struct NavigationBar {
    active: NavTab,
}

impl NavigationBar {
    pub fn new(active: NavTab) -> Self {
        Self { active }
    }
}

impl Panel for NavigationBar {
    type Event = NavTab;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        ui.horizontal(|ui| {
            for tab in NavTab::iter() {
                let text = if tab == self.active {
                    RichText::new(tab.label()).strong().color(UI_CONFIG.colors.active_tab)
                } else {
                    RichText::new(tab.label())
                };
                let response = ui
                    .add_enabled(tab.is_available(), Button::new(text).frame(false))
                    .on_disabled_hover_text(UI_TEXT.tab_unavailable_hover);
                if response.clicked() && tab != self.active {
                    self.active = tab;
                    events.push(tab);
                }
            }
        });
        events
    }
}

// ============================================================================
// CHART CONTROLS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartControlEvent {
    ToggleFullscreen,
}

pub struct ChartControlsPanel {
    is_fullscreen: bool,
}

impl ChartControlsPanel {
    pub fn new(is_fullscreen: bool) -> Self {
        Self { is_fullscreen }
    }
}

impl Panel for ChartControlsPanel {
    type Event = ChartControlEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        ui.horizontal(|ui| {
            let label = if self.is_fullscreen {
                UI_TEXT.exit_fullscreen
            } else {
                UI_TEXT.fullscreen
            };
            if ui.button(label).clicked() {
                events.push(ChartControlEvent::ToggleFullscreen);
            }

            // Extension point for multi-series overlay; no behaviour yet.
            ui.add_enabled(false, Button::new(UI_TEXT.compare))
                .on_disabled_hover_text(UI_TEXT.compare_hover);
        });
        events
    }
}

// ============================================================================
// PRICE SUMMARY
// ============================================================================

/// The text of the summary block, independent of how it is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLines {
    pub price: String,
    pub show_unit: bool,
    pub change: Option<String>,
    pub is_up: Option<bool>,
}

impl SummaryLines {
    pub fn from_price_data(price_data: Option<&PriceData>) -> Self {
        let Some(data) = price_data else {
            return Self {
                price: UI_TEXT.loading.to_string(),
                show_unit: false,
                change: None,
                is_up: None,
            };
        };

        match &data.summary {
            PriceSummary::NoData => Self {
                price: UI_TEXT.no_data.to_string(),
                show_unit: false,
                change: None,
                is_up: None,
            },
            PriceSummary::Available(stats) => {
                let pct = match stats.percentage_change.value() {
                    Some(_) => format!("({}%)", stats.percentage_change),
                    None => format!("({})", stats.percentage_change),
                };
                Self {
                    price: format_locale(stats.current_price),
                    show_unit: true,
                    change: Some(format!("{} {}", format_signed(stats.price_change), pct)),
                    is_up: Some(stats.is_up()),
                }
            }
        }
    }
}

pub fn render_price_summary(ui: &mut Ui, price_data: Option<&PriceData>) {
    let lines = SummaryLines::from_price_data(price_data);
    let unit = lines.show_unit.then_some(UI_TEXT.currency_suffix);

    ui.vertical(|ui| {
        ui.price_headline(&lines.price, unit);
        if let Some(change) = lines.change {
            ui.price_change(change, lines.is_up);
        }
    });
}

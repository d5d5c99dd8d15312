/// Every user-facing string in one place.
pub struct UiText {
    pub window_title: &'static str,
    pub coin_selector_label: &'static str,
    pub loading: &'static str,
    pub loading_chart: &'static str,
    pub no_data: &'static str,
    pub currency_suffix: &'static str,
    pub fullscreen: &'static str,
    pub exit_fullscreen: &'static str,
    pub compare: &'static str,
    pub compare_hover: &'static str,
    pub tab_unavailable_hover: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    window_title: "Coin Chart",
    coin_selector_label: "Choose a coin:",
    loading: "Loading...",
    loading_chart: "Loading chart...",
    no_data: "No data",
    currency_suffix: "USD",
    fullscreen: "Fullscreen",
    exit_fullscreen: "Exit fullscreen",
    compare: "Compare",
    compare_hover: "Comparing several coins is not available yet",
    tab_unavailable_hover: "Coming soon",
};

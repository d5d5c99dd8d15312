//! Debugging feature flags.
//!
//! Toggle individual diagnostics here. Failures are always logged; these only
//! control the chattier informational lines.

pub struct DebugFlags {
    /// Emit UI interaction logs (coin/timeframe switching, control clicks).
    pub print_ui_interactions: bool,
    /// Emit per-fetch timing once a request resolves.
    pub print_fetch_timings: bool,
    /// Emit a line whenever a superseded fetch result is thrown away.
    pub print_stale_discards: bool,
    /// Emit plot cache hit/miss diagnostics while rendering the chart.
    pub print_plot_cache_stats: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_ui_interactions: true,
    print_fetch_timings: true,
    print_stale_discards: true,
    print_plot_cache_stats: false,
    print_shutdown: false,
};

pub const MIN_BAR_WIDTH: u32 = 1;
pub const MAX_BAR_WIDTH: u32 = 5;

/// Bars drawn per day: estimated, applied and precipitation.
const BARS_PER_DAY: usize = 3;

/// Width in pixels of a single bar for a chart `chart_width_px` wide showing `days` days.
pub fn bar_width(chart_width_px: f64, days: usize) -> u32 {
    if days == 0 || !chart_width_px.is_finite() || chart_width_px <= 0.0 {
        return MIN_BAR_WIDTH;
    }

    let width = (chart_width_px / (BARS_PER_DAY * days) as f64).floor();
    width.clamp(MIN_BAR_WIDTH as f64, MAX_BAR_WIDTH as f64) as u32
}

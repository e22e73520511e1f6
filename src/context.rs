//! Context-usage gauge.
//!
//! Maps a used-percentage to a colored label. Zero and absent are rendered
//! as a neutral gray "0%" so an idle session is visually distinct from the
//! lowest live band. Windows above 500K tokens use shifted thresholds, and
//! 95%+ flips to an inverted overflow style past all bands.

use crate::theme::{self, palette, Rgb};

/// Capacity above which the extended threshold set applies.
pub const EXTENDED_MIN: u64 = 500_000;

/// Exclusive upper bounds, first match wins. The final bound (95) is shared
/// so overflow kicks in at the same point for both sets.
const STANDARD_BANDS: [f64; 4] = [50.0, 70.0, 85.0, 95.0];
const EXTENDED_BANDS: [f64; 4] = [65.0, 80.0, 90.0, 95.0];

const BAND_COLORS: [Rgb; 4] = [
    palette::CONTEXT_LOW,
    palette::CONTEXT_MEDIUM,
    palette::CONTEXT_HIGH,
    palette::CONTEXT_CRITICAL,
];

pub fn is_extended(window_size: u64) -> bool {
    window_size > EXTENDED_MIN
}

/// Band color for a non-zero percentage, or None once past every band
/// (overflow).
fn band_color(pct: f64, extended: bool) -> Option<Rgb> {
    let bands = if extended { EXTENDED_BANDS } else { STANDARD_BANDS };
    bands
        .iter()
        .zip(BAND_COLORS)
        .find(|(bound, _)| pct < **bound)
        .map(|(_, color)| color)
}

/// Render the usage label, integer-truncated with a `%` suffix.
pub fn render(used_pct: Option<f64>, extended: bool) -> String {
    let pct = used_pct.unwrap_or(0.0);
    if pct == 0.0 {
        return theme::paint("0%", palette::CONTEXT_ZERO);
    }

    let label = format!("{}%", pct as i64);
    match band_color(pct, extended) {
        Some(color) => theme::paint(&label, color),
        None => theme::paint_on(&label, palette::CONTEXT_OVERFLOW_FG, palette::CONTEXT_OVERFLOW_BG),
    }
}

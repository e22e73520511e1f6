//! Terminal styling: the 24-bit color palette, ANSI helpers, and OSC 8
//! hyperlinks.
//!
//! Claude Code pipes the statusline output through a terminal that supports
//! truecolor; `colored` handles the escape emission and the global
//! force-on/force-off override set by the CLI layer.

use colored::Colorize;

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Named palette. Values mirror the official effort selector and the
/// Anthropic brand colors where one exists.
pub mod palette {
    use super::Rgb;

    // Models
    pub const MODEL_OPUS_1M_FG: Rgb = Rgb::new(0x00, 0x00, 0x00); // black text
    pub const MODEL_OPUS_1M_BG: Rgb = Rgb::new(0xA3, 0x44, 0x55); // muted coral pink
    pub const MODEL_SONNET_1M: Rgb = Rgb::new(0xF5, 0xA8, 0x0B); // amber
    pub const MODEL_SONNET: Rgb = Rgb::new(0xEB, 0x87, 0x5F); // anthropic orange
    pub const MODEL_OPUS: Rgb = Rgb::new(0xFF, 0x6A, 0x82); // coral pink
    pub const MODEL_HAIKU: Rgb = Rgb::new(0xD4, 0xA8, 0xE8); // lavender
    pub const MODEL_UNKNOWN: Rgb = Rgb::new(0xAB, 0xB1, 0xBF); // gray

    // Context usage
    pub const CONTEXT_LOW: Rgb = Rgb::new(0x60, 0xBA, 0x9C); // sea green
    pub const CONTEXT_MEDIUM: Rgb = Rgb::new(0xF0, 0xDC, 0x8E); // amber
    pub const CONTEXT_HIGH: Rgb = Rgb::new(0xE8, 0xA8, 0x62); // orange
    pub const CONTEXT_CRITICAL: Rgb = Rgb::new(0xE0, 0x55, 0x61); // red
    pub const CONTEXT_ZERO: Rgb = Rgb::new(0x99, 0x99, 0x99); // gray
    pub const CONTEXT_OVERFLOW_FG: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);
    pub const CONTEXT_OVERFLOW_BG: Rgb = Rgb::new(0xC4, 0x3D, 0x4B); // dark red

    // Effort bar
    pub const EFFORT_ACTIVE: Rgb = Rgb::new(0xD7, 0x77, 0x57); // anthropic orange
    pub const EFFORT_INACTIVE: Rgb = Rgb::new(0x50, 0x50, 0x50); // dark gray

    // Git
    pub const REPO: Rgb = Rgb::new(0xDA, 0x9B, 0xB8); // pink
    pub const BRANCH: Rgb = Rgb::new(0x89, 0xCF, 0xF0); // sky blue

    // UI
    pub const SEPARATOR: Rgb = Rgb::new(0x99, 0x99, 0x99);
    pub const COST: Rgb = Rgb::new(0xF0, 0xDC, 0x8E);
}

/// Color text with a truecolor foreground.
pub fn paint(text: &str, fg: Rgb) -> String {
    text.truecolor(fg.r, fg.g, fg.b).to_string()
}

/// Color text with foreground and background.
pub fn paint_on(text: &str, fg: Rgb, bg: Rgb) -> String {
    text.truecolor(fg.r, fg.g, fg.b)
        .on_truecolor(bg.r, bg.g, bg.b)
        .to_string()
}

/// Foreground + background + bold, for badge-style fragments.
pub fn paint_badge(text: &str, fg: Rgb, bg: Rgb) -> String {
    text.truecolor(fg.r, fg.g, fg.b)
        .on_truecolor(bg.r, bg.g, bg.b)
        .bold()
        .to_string()
}

pub fn dim(text: &str) -> String {
    text.dimmed().to_string()
}

/// Wrap (already styled) text in OSC 8 hyperlink escapes.
///
/// Terminals without hyperlink support show the text unchanged, so this is
/// safe to emit unconditionally.
pub fn hyperlink(text: &str, url: &str) -> String {
    format!("\x1b]8;;{url}\x1b\\{text}\x1b]8;;\x1b\\")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hyperlink_wraps_text_in_osc8() {
        let link = hyperlink("main", "https://github.com/org/repo/compare/main");
        assert!(link.starts_with("\x1b]8;;https://github.com/org/repo/compare/main\x1b\\"));
        assert!(link.contains("main"));
        assert!(link.ends_with("\x1b]8;;\x1b\\"));
    }

    #[test]
    fn paint_is_plain_when_colors_disabled() {
        colored::control::set_override(false);
        assert_eq!(paint("42%", palette::CONTEXT_LOW), "42%");
        assert_eq!(paint_on("96%", palette::CONTEXT_OVERFLOW_FG, palette::CONTEXT_OVERFLOW_BG), "96%");
    }
}

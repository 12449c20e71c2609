// File: crates/canx-chart/src/theme.rs
// Summary: Light/Dark theming for chart chrome colors and the default series palette.

use skia_safe as skia;

use crate::error::ConfigError;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub legend_background: skia::Color,
    pub legend_text: skia::Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            legend_background: skia::Color::from_argb(200, 28, 28, 32),
            legend_text: skia::Color::from_argb(255, 225, 225, 235),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 100, 100, 110),
            legend_background: skia::Color::from_argb(220, 255, 255, 255),
            legend_text: skia::Color::from_argb(255, 30, 30, 40),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            grid: skia::Color::from_argb(255, 0x22, 0x22, 0x22),
            axis_line: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            axis_label: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            tick: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            legend_background: skia::Color::from_argb(230, 0x10, 0x10, 0x10),
            legend_text: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::dark() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::dark()
}

/// Series colours handed out to watchers, in order.
pub fn default_palette() -> Vec<skia::Color> {
    vec![
        skia::Color::from_rgb(0x40, 0xa0, 0xff),
        skia::Color::from_rgb(0xff, 0x8c, 0x42),
        skia::Color::from_rgb(0x4c, 0xd9, 0x64),
        skia::Color::from_rgb(0xe0, 0x4f, 0x5f),
        skia::Color::from_rgb(0xb3, 0x7f, 0xeb),
        skia::Color::from_rgb(0xf2, 0xd0, 0x24),
        skia::Color::from_rgb(0x2a, 0xc3, 0xc3),
        skia::Color::from_rgb(0xf0, 0x6e, 0xc8),
    ]
}

/// Parse `#RRGGBB` or `#AARRGGBB`.
pub fn parse_hex_color(s: &str) -> Result<skia::Color, ConfigError> {
    let bad = || ConfigError::Color(s.to_string());
    let hex = s.trim().strip_prefix('#').ok_or_else(bad)?;
    let v = u32::from_str_radix(hex, 16).map_err(|_| bad())?;
    match hex.len() {
        6 => Ok(skia::Color::new(0xff00_0000 | v)),
        8 => Ok(skia::Color::new(v)),
        _ => Err(bad()),
    }
}

/// Format a colour as `#RRGGBB` (alpha dropped when opaque).
pub fn to_hex_color(c: skia::Color) -> String {
    if c.a() == 0xff {
        format!("#{:02X}{:02X}{:02X}", c.r(), c.g(), c.b())
    } else {
        format!("#{:02X}{:02X}{:02X}{:02X}", c.a(), c.r(), c.g(), c.b())
    }
}

// File: crates/canx-chart/src/text.rs
// Summary: Text shaper for tick labels and legend rows using Skia textlayout.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Horizontal anchor for a label relative to its x position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Left,
    Center,
    Right,
}

/// Families tried in order for tick values, so digits line up across rows.
const NUMERIC_FAMILIES: &[&str] = &["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"];
/// Families for signal names and units in legends and axis titles.
const LABEL_FAMILIES: &[&str] = &["Segoe UI", "Roboto", "Helvetica", "DejaVu Sans", "sans-serif"];

/// Widest label a chart could need; paragraphs never wrap below this.
const MAX_LABEL_WIDTH: f32 = 10_000.0;

/// Single-line label shaping over the system font manager.
pub struct TextShaper {
    fonts: FontCollection,
    paragraph: ParagraphStyle,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fonts = FontCollection::new();
        fonts.set_default_font_manager(skia::FontMgr::default(), None);
        let mut paragraph = ParagraphStyle::new();
        paragraph.set_text_align(skia::textlayout::TextAlign::Left);
        paragraph.set_max_lines(1);
        Self { fonts, paragraph }
    }

    fn layout(&self, text: &str, size: f32, color: skia::Color, mono_numeric: bool) -> Paragraph {
        let mut style = TextStyle::new();
        style.set_font_size(size.max(1.0));
        style.set_color(color);
        style.set_font_families(if mono_numeric { NUMERIC_FAMILIES } else { LABEL_FAMILIES });

        let mut builder = ParagraphBuilder::new(&self.paragraph, &self.fonts);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(MAX_LABEL_WIDTH);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32, mono_numeric: bool) -> f32 {
        let p = self.layout(text, size, skia::Color::TRANSPARENT, mono_numeric);
        p.longest_line()
    }

    /// Draw `text` with its baseline near `y`, anchored at `x`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        anchor: Anchor,
        size: f32,
        color: skia::Color,
        mono_numeric: bool,
    ) {
        let p = self.layout(text, size, color, mono_numeric);
        let w = p.longest_line();
        let left = match anchor {
            Anchor::Left => x,
            Anchor::Center => x - w * 0.5,
            Anchor::Right => x - w,
        };
        // Paragraph draws from top-left; adjust baseline by glyph height approximation
        p.paint(canvas, (left, y - size * 0.8));
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

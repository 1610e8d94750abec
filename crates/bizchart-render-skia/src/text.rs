// File: crates/bizchart-render-skia/src/text.rs
// Summary: Text measuring and drawing with Skia textlayout paragraphs.

use bizchart_core::{Font, RectF, SizeF, TextAlign};
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};
use skia_safe as skia;

use crate::surface::to_sk_color;

/// Width used when text should not wrap.
const UNBOUNDED: f32 = 10_000.0;

const FALLBACK_FAMILIES: [&str; 5] = ["Segoe UI", "Arial", "Helvetica", "DejaVu Sans", "sans-serif"];

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(font: &Font, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(font.size.max(1.0));
        ts.set_color(color);
        let mut families: Vec<&str> = vec![font.family.as_str()];
        families.extend(FALLBACK_FAMILIES.iter().copied().filter(|f| *f != font.family));
        ts.set_font_families(&families);
        if font.bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &str, font: &Font, color: skia::Color, align: TextAlign, width: f32) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(match align {
            TextAlign::Near => skia::textlayout::TextAlign::Left,
            TextAlign::Center => skia::textlayout::TextAlign::Center,
            TextAlign::Far => skia::textlayout::TextAlign::Right,
        });
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(font, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(width.max(1.0));
        paragraph
    }

    /// Size of `text`, wrapped at `max_width` when given.
    pub fn measure(&self, text: &str, font: &Font, max_width: Option<f32>) -> SizeF {
        let p = self.layout(text, font, skia::Color::TRANSPARENT, TextAlign::Near, max_width.unwrap_or(UNBOUNDED));
        let width = match max_width {
            Some(_) => p.longest_line(),
            None => p.max_intrinsic_width(),
        };
        SizeF::new(width, p.height())
    }

    /// Paint `text` from the top-left of `rect`, aligned within its width.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, font: &Font, color: bizchart_core::Color, rect: RectF, align: TextAlign) {
        let p = self.layout(text, font, to_sk_color(color), align, rect.width());
        p.paint(canvas, (rect.left, rect.top));
    }
}

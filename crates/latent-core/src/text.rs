// File: crates/latent-core/src/text.rs
// Summary: Annotation text shaping (Skia textlayout) and boxed label drawing.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let mut style = TextStyle::new();
        style.set_font_size(size.max(1.0));
        style.set_color(color);
        style.set_font_families(&["DejaVu Sans", "Helvetica", "Arial", "Segoe UI", "sans-serif"]);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure(&self, text: &str, size: f32) -> (f32, f32) {
        let p = self.layout(text, size, skia::Color::TRANSPARENT);
        (p.longest_line(), p.height())
    }

    /// Draw `text` in a rounded box whose lower-left corner sits at `(x, y)`.
    pub fn draw_boxed(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        (x, y): (f32, f32),
        size: f32,
        fill: skia::Color,
        ink: skia::Color,
    ) {
        let pad = size * 0.3;
        let (w, h) = self.measure(text, size);
        let rect = skia::Rect::from_ltrb(x, y - h - 2.0 * pad, x + w + 2.0 * pad, y);

        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(fill);
        canvas.draw_round_rect(rect, pad, pad, &paint);

        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(1.0);
        paint.set_color(ink);
        canvas.draw_round_rect(rect, pad, pad, &paint);

        let mut p = self.layout(text, size, ink);
        p.paint(canvas, (rect.left + pad, rect.top + pad));
    }
}

// File: crates/bizchart-render-skia/src/surface.rs
// Summary: `Surface` implementation drawing onto a Skia canvas.

use bizchart_core::{Color, DashStyle, EndMarker, Font, LineCap, LinearGradient, PointF, RectF, SizeF, Stroke, Surface, TextAlign};
use skia_safe as skia;

use crate::text::TextShaper;

pub(crate) fn to_sk_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn to_sk_rect(r: RectF) -> skia::Rect {
    skia::Rect::from_ltrb(r.left, r.top, r.right, r.bottom)
}

/// Dash intervals in multiples of the stroke width.
fn dash_intervals(dash: DashStyle) -> Option<&'static [f32]> {
    match dash {
        DashStyle::Solid => None,
        DashStyle::Dash => Some(&[3.0, 1.0]),
        DashStyle::Dot => Some(&[1.0, 1.0]),
        DashStyle::DashDot => Some(&[3.0, 1.0, 1.0, 1.0]),
        DashStyle::DashDotDot => Some(&[3.0, 1.0, 1.0, 1.0, 1.0, 1.0]),
    }
}

fn cap_of(cap: LineCap) -> skia::paint::Cap {
    match cap {
        LineCap::Round | LineCap::RoundAnchor => skia::paint::Cap::Round,
        LineCap::Square | LineCap::SquareAnchor => skia::paint::Cap::Square,
        _ => skia::paint::Cap::Butt,
    }
}

pub struct SkiaSurface<'a> {
    canvas: &'a skia::Canvas,
    shaper: &'a TextShaper,
    anti_alias: bool,
}

impl<'a> SkiaSurface<'a> {
    pub fn new(canvas: &'a skia::Canvas, shaper: &'a TextShaper, anti_alias: bool) -> Self {
        Self { canvas, shaper, anti_alias }
    }

    fn fill_paint(&self, color: Color) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(self.anti_alias);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(to_sk_color(color));
        paint
    }

    fn stroke_paint(&self, stroke: &Stroke) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(self.anti_alias);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(stroke.width);
        paint.set_color(to_sk_color(stroke.color));
        paint.set_stroke_cap(cap_of(stroke.start_cap));
        if let Some(intervals) = dash_intervals(stroke.dash) {
            let w = stroke.width.max(1.0);
            let scaled: Vec<f32> = intervals.iter().map(|v| v * w).collect();
            paint.set_path_effect(skia::PathEffect::dash(&scaled, 0.0));
        }
        paint
    }

    fn draw_end_marker(&self, stroke: &Stroke, p1: PointF, p2: PointF) {
        let Some(EndMarker::Diamond { width, height }) = stroke.end_marker else { return };
        let (dx, dy) = (p2.x - p1.x, p2.y - p1.y);
        let len = (dx * dx + dy * dy).sqrt();
        if len <= f32::EPSILON {
            return;
        }
        let (ux, uy) = (dx / len, dy / len);
        let (nx, ny) = (-uy, ux);
        let (hw, hh) = (width / 2.0, height / 2.0);

        let mut path = skia::Path::new();
        path.move_to((p2.x + ux * hh, p2.y + uy * hh));
        path.line_to((p2.x + nx * hw, p2.y + ny * hw));
        path.line_to((p2.x - ux * hh, p2.y - uy * hh));
        path.line_to((p2.x - nx * hw, p2.y - ny * hw));
        path.close();
        self.canvas.draw_path(&path, &self.fill_paint(stroke.color));
    }
}

impl Surface for SkiaSurface<'_> {
    fn draw_line(&mut self, stroke: &Stroke, p1: PointF, p2: PointF) {
        self.canvas.draw_line((p1.x, p1.y), (p2.x, p2.y), &self.stroke_paint(stroke));
        self.draw_end_marker(stroke, p1, p2);
    }

    fn draw_rect(&mut self, stroke: &Stroke, rect: RectF) {
        self.canvas.draw_rect(to_sk_rect(rect), &self.stroke_paint(stroke));
    }

    fn fill_rect(&mut self, color: Color, rect: RectF) {
        self.canvas.draw_rect(to_sk_rect(rect), &self.fill_paint(color));
    }

    fn fill_ellipse(&mut self, color: Color, rect: RectF) {
        self.canvas.draw_oval(to_sk_rect(rect), &self.fill_paint(color));
    }

    fn fill_pie(&mut self, color: Color, rect: RectF, start_angle: f32, sweep_angle: f32) {
        self.canvas.draw_arc(to_sk_rect(rect), start_angle, sweep_angle, true, &self.fill_paint(color));
    }

    fn draw_arc(&mut self, stroke: &Stroke, rect: RectF, start_angle: f32, sweep_angle: f32) {
        self.canvas.draw_arc(to_sk_rect(rect), start_angle, sweep_angle, false, &self.stroke_paint(stroke));
    }

    fn fill_path(&mut self, brush: &LinearGradient, path: &[PointF]) {
        let Some((first, rest)) = path.split_first() else { return };
        let mut sk_path = skia::Path::new();
        sk_path.move_to((first.x, first.y));
        for p in rest {
            sk_path.line_to((p.x, p.y));
        }
        sk_path.close();

        let colors = [to_sk_color(brush.top), to_sk_color(brush.bottom)];
        let shader = skia::Shader::linear_gradient(
            ((brush.rect.left, brush.rect.top), (brush.rect.left, brush.rect.bottom)),
            &colors[..],
            None,
            skia::TileMode::Clamp,
            None,
            None,
        );
        let mut paint = self.fill_paint(brush.bottom);
        paint.set_shader(shader);
        self.canvas.draw_path(&sk_path, &paint);
    }

    fn draw_string(&mut self, text: &str, font: &Font, color: Color, rect: RectF, align: TextAlign) {
        self.shaper.draw(self.canvas, text, font, color, rect, align);
    }

    fn measure_string(&self, text: &str, font: &Font, max_width: Option<f32>) -> SizeF {
        self.shaper.measure(text, font, max_width)
    }

    fn push_clip(&mut self, rect: RectF) {
        self.canvas.save();
        self.canvas.clip_rect(to_sk_rect(rect), None, Some(self.anti_alias));
    }

    fn pop_clip(&mut self) {
        self.canvas.restore();
    }
}

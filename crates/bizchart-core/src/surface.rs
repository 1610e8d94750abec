// File: crates/bizchart-core/src/surface.rs
// Summary: Drawing-surface capability consumed by renderers, plus an in-memory
// recording implementation for tests and headless inspection.

use crate::color::Color;
use crate::geometry::{PointF, RectF, SizeF};
use crate::model::{DashStyle, LineCap};

#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    pub family: String,
    pub size: f32,
    pub bold: bool,
}

impl Default for Font {
    fn default() -> Self {
        Self { family: "sans-serif".to_string(), size: 12.0, bold: false }
    }
}

impl Font {
    pub fn sized(size: f32) -> Self {
        Self { size, ..Self::default() }
    }
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// Horizontal placement of text inside its layout rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Near,
    Center,
    Far,
}

/// Marker drawn at the end point of a line segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EndMarker {
    /// Diamond centered on the end point, `width` across the line and
    /// `height` along it.
    Diamond { width: f32, height: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
    pub dash: DashStyle,
    pub start_cap: LineCap,
    pub end_marker: Option<EndMarker>,
}

impl Stroke {
    pub fn solid(color: Color, width: f32) -> Self {
        Self { color, width, dash: DashStyle::Solid, start_cap: LineCap::Flat, end_marker: None }
    }

    pub fn dotted(color: Color) -> Self {
        Self { dash: DashStyle::Dot, ..Self::solid(color, 1.0) }
    }
}

/// Two-stop gradient running top to bottom across `rect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearGradient {
    pub rect: RectF,
    pub top: Color,
    pub bottom: Color,
}

/// Drawing primitives a chart needs. Angles are in degrees, clockwise from
/// the positive x axis.
pub trait Surface {
    fn draw_line(&mut self, stroke: &Stroke, p1: PointF, p2: PointF);
    fn draw_rect(&mut self, stroke: &Stroke, rect: RectF);
    fn fill_rect(&mut self, color: Color, rect: RectF);
    fn fill_ellipse(&mut self, color: Color, rect: RectF);
    fn fill_pie(&mut self, color: Color, rect: RectF, start_angle: f32, sweep_angle: f32);
    fn draw_arc(&mut self, stroke: &Stroke, rect: RectF, start_angle: f32, sweep_angle: f32);
    /// Fill the closed polygon through `path`.
    fn fill_path(&mut self, brush: &LinearGradient, path: &[PointF]);
    fn draw_string(&mut self, text: &str, font: &Font, color: Color, rect: RectF, align: TextAlign);
    /// Size of `text`; with `max_width` the text wraps at that width.
    fn measure_string(&self, text: &str, font: &Font, max_width: Option<f32>) -> SizeF;
    fn push_clip(&mut self, rect: RectF);
    fn pop_clip(&mut self);
}

/// One recorded primitive call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Line { stroke: Stroke, p1: PointF, p2: PointF },
    Rect { stroke: Stroke, rect: RectF },
    FillRect { color: Color, rect: RectF },
    FillEllipse { color: Color, rect: RectF },
    FillPie { color: Color, rect: RectF, start_angle: f32, sweep_angle: f32 },
    Arc { stroke: Stroke, rect: RectF, start_angle: f32, sweep_angle: f32 },
    FillPath { brush: LinearGradient, path: Vec<PointF> },
    Text { text: String, font: Font, color: Color, rect: RectF, align: TextAlign },
    PushClip { rect: RectF },
    PopClip,
}

/// Surface that records every call. Text is measured with a fixed advance
/// per character so results are deterministic.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
    /// Advance per character at a 12pt font.
    pub char_width: f32,
    /// Line height as a multiple of the font size.
    pub line_spacing: f32,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self { commands: Vec::new(), char_width: 6.0, line_spacing: 1.25 }
    }
}

impl RecordingSurface {
    pub fn new() -> Self { Self::default() }

    pub fn clear(&mut self) { self.commands.clear(); }

    pub fn fill_rects(&self) -> impl Iterator<Item = (Color, RectF)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillRect { color, rect } => Some((*color, *rect)),
            _ => None,
        })
    }

    /// `(color, start_angle, sweep_angle)` of every filled pie slice.
    pub fn pies(&self) -> impl Iterator<Item = (Color, f32, f32)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillPie { color, start_angle, sweep_angle, .. } => Some((*color, *start_angle, *sweep_angle)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (&Stroke, PointF, PointF)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line { stroke, p1, p2 } => Some((stroke, *p1, *p2)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn draw_line(&mut self, stroke: &Stroke, p1: PointF, p2: PointF) {
        self.commands.push(DrawCommand::Line { stroke: *stroke, p1, p2 });
    }
    fn draw_rect(&mut self, stroke: &Stroke, rect: RectF) {
        self.commands.push(DrawCommand::Rect { stroke: *stroke, rect });
    }
    fn fill_rect(&mut self, color: Color, rect: RectF) {
        self.commands.push(DrawCommand::FillRect { color, rect });
    }
    fn fill_ellipse(&mut self, color: Color, rect: RectF) {
        self.commands.push(DrawCommand::FillEllipse { color, rect });
    }
    fn fill_pie(&mut self, color: Color, rect: RectF, start_angle: f32, sweep_angle: f32) {
        self.commands.push(DrawCommand::FillPie { color, rect, start_angle, sweep_angle });
    }
    fn draw_arc(&mut self, stroke: &Stroke, rect: RectF, start_angle: f32, sweep_angle: f32) {
        self.commands.push(DrawCommand::Arc { stroke: *stroke, rect, start_angle, sweep_angle });
    }
    fn fill_path(&mut self, brush: &LinearGradient, path: &[PointF]) {
        self.commands.push(DrawCommand::FillPath { brush: *brush, path: path.to_vec() });
    }
    fn draw_string(&mut self, text: &str, font: &Font, color: Color, rect: RectF, align: TextAlign) {
        self.commands.push(DrawCommand::Text { text: text.to_string(), font: font.clone(), color, rect, align });
    }
    fn measure_string(&self, text: &str, font: &Font, max_width: Option<f32>) -> SizeF {
        let advance = self.char_width * font.size / 12.0;
        let line_height = font.size * self.line_spacing;
        let width = text.chars().count() as f32 * advance;
        match max_width {
            Some(w) if w > 0.0 && width > w => {
                let lines = (width / w).ceil();
                SizeF::new(w, lines * line_height)
            }
            _ => SizeF::new(width, line_height),
        }
    }
    fn push_clip(&mut self, rect: RectF) {
        self.commands.push(DrawCommand::PushClip { rect });
    }
    fn pop_clip(&mut self) {
        self.commands.push(DrawCommand::PopClip);
    }
}

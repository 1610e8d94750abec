// File: crates/bizchart-core/src/render/pie.rs
// Summary: Pie, exploded pie and experimental pseudo-3D pie renderers.
// Notes:
// - Only the first record is drawn. Sweep = value / record_total[0] * 360,
//   slices laid out clockwise from 0 degrees.
// - The exploded variant insets the whole pie by a fixed 20px instead of
//   offsetting each slice outward.

use tracing::debug;

use super::{ChartRenderer, PieSlice, RenderContext};
use crate::chart_type::ChartType;
use crate::color::Color;
use crate::geometry::{PointF, RectF};
use crate::surface::{Stroke, Surface, TextAlign};

const EXPLODE_INSET: i32 = 20;
const LABEL_RADIUS_DIVISOR: f32 = 3.5;

pub struct PieChart;
pub struct ExplodedPieChart;
pub struct Pie3DChart;

/// Sweep angle of `value` within `total`, 0 when the total is zero.
fn sweep_angle(value: f64, total: f64) -> f32 {
    if total == 0.0 {
        0.0
    } else {
        (value * 360.0 / total) as f32
    }
}

pub(super) fn draw_pie_graph<R: ChartRenderer + ?Sized>(
    renderer: &R,
    ctx: &RenderContext<'_>,
    surface: &mut dyn Surface,
) {
    let Some(pie_bounds) = ctx.layout.pie else { return };
    let Some(record) = ctx.source.records.first() else { return };
    if ctx.source.records.len() > 1 {
        debug!(records = ctx.source.records.len(), "pie chart draws the first record only");
    }
    let total = ctx.info().record_total.first().copied().unwrap_or(0.0);

    let mut angle = 0.0f32;
    for (index, entity) in record.entities.iter().enumerate() {
        let sweep = sweep_angle(entity.value, total);
        let slice = PieSlice { record, entity, index, pie_bounds, start_angle: angle, sweep_angle: sweep };
        renderer.draw_entity_slice(ctx, surface, &slice);
        angle += sweep;
    }
}

/// Resolved entity color; the record color covers entities aggregated
/// before pie colors were assigned.
fn slice_color(slice: &PieSlice<'_>) -> Color {
    slice.entity.color().unwrap_or(slice.record.color)
}

/// Entity key at the middle of the slice, a third of the way out.
fn draw_label(ctx: &RenderContext<'_>, surface: &mut dyn Surface, rect: RectF, slice: &PieSlice<'_>, start: f32, sweep: f32) {
    if !ctx.options.show_entity_name {
        return;
    }
    let rx = rect.width() / LABEL_RADIUS_DIVISOR;
    let ry = rect.height() / LABEL_RADIUS_DIVISOR;
    let radian = (start + sweep / 2.0).to_radians();
    let (x, y) = (rx * radian.cos(), ry * radian.sin());
    if !x.is_finite() || !y.is_finite() {
        return;
    }

    let font = &ctx.options.fonts.body;
    let text = slice.entity.key.as_str();
    let size = surface.measure_string(text, font, None);
    let c = rect.center();
    let at = RectF::from_ltwh(c.x + x - size.width / 2.0, c.y + y - size.height / 2.0, size.width, size.height);
    if !at.is_drawable() {
        return;
    }
    surface.draw_string(text, font, ctx.options.theme.text, at, TextAlign::Center);
}

impl ChartRenderer for PieChart {
    fn chart_type(&self) -> ChartType { ChartType::Pie }

    fn draw_entity_slice(&self, ctx: &RenderContext<'_>, surface: &mut dyn Surface, slice: &PieSlice<'_>) {
        if !slice.pie_bounds.is_drawable() {
            return;
        }
        let rect = slice.pie_bounds.to_f32();
        surface.fill_pie(slice_color(slice), rect, slice.start_angle, slice.sweep_angle);
        draw_label(ctx, surface, rect, slice, slice.start_angle, slice.sweep_angle);
    }
}

impl ChartRenderer for ExplodedPieChart {
    fn chart_type(&self) -> ChartType { ChartType::ExplodedPie }

    fn draw_entity_slice(&self, ctx: &RenderContext<'_>, surface: &mut dyn Surface, slice: &PieSlice<'_>) {
        if !slice.pie_bounds.is_drawable() {
            return;
        }
        let rect = slice.pie_bounds.inset(EXPLODE_INSET, EXPLODE_INSET).to_f32();
        surface.fill_pie(slice_color(slice), rect, slice.start_angle, slice.sweep_angle);
        draw_label(ctx, surface, rect, slice, slice.start_angle, slice.sweep_angle);
    }
}

/// Point at `angle` degrees on the ellipse with radii `(rx, ry)` around `origin`.
fn point_at_arc(origin: PointF, rx: f32, ry: f32, angle: f32) -> PointF {
    let r = angle.to_radians();
    PointF::new(origin.x + rx * r.cos(), origin.y + ry * r.sin())
}

/// Angle on a circle matching `angle` on an ellipse with radii `(rx, ry)`.
fn fixed_angle(angle: f32, rx: f32, ry: f32) -> f32 {
    let r = angle.to_radians();
    (r.sin() * ry / rx).atan2(r.cos()).to_degrees()
}

impl ChartRenderer for Pie3DChart {
    fn chart_type(&self) -> ChartType { ChartType::Pie3D }

    /// Outline only: two radial lines from a displaced origin plus the arc.
    fn draw_entity_slice(&self, ctx: &RenderContext<'_>, surface: &mut dyn Surface, slice: &PieSlice<'_>) {
        const DEPTH: f32 = 5.0;
        if !slice.pie_bounds.is_drawable() {
            return;
        }
        let rect = slice.pie_bounds.to_f32();
        let sa = slice.start_angle + 2.0;
        let ea = slice.sweep_angle - 2.0;

        let origin = rect.center();
        let pto = point_at_arc(origin, 2.0 * DEPTH, 2.0 * DEPTH, sa + ea / 2.0);
        let pt1 = point_at_arc(pto, 2.0 * DEPTH, 2.0 * DEPTH, sa);
        let pt2 = point_at_arc(pto, 2.0 * DEPTH, 2.0 * DEPTH, sa + ea);

        let start = fixed_angle(sa - 0.1, DEPTH, DEPTH);
        let end = fixed_angle(sa + ea - 0.1, DEPTH, DEPTH);
        let mut sweep = end - start;
        if sweep < 0.0 {
            sweep += 360.0;
        }

        let outline = Stroke::solid(ctx.options.theme.text, 1.0);
        surface.draw_line(&outline, pto, pt1);
        surface.draw_arc(&outline, rect, start, sweep);
        surface.draw_line(&outline, pt2, pto);

        draw_label(ctx, surface, rect, slice, sa, ea);
    }
}

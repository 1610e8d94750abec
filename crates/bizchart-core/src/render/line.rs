// File: crates/bizchart-core/src/render/line.rs
// Summary: Line, line-with-points and filled line-area renderers.

use super::{ChartRenderer, RenderContext};
use crate::chart_type::ChartType;
use crate::geometry::{PointF, RectF};
use crate::layout::PlotArea;
use crate::model::{Entity, LineCap, Record};
use crate::scale::scaled;
use crate::surface::{EndMarker, LinearGradient, Stroke, Surface, TextAlign};

const POINT_SIZE: f32 = 5.0;
const AREA_TOP_ALPHA: u8 = 50;
const AREA_BOTTOM_ALPHA: u8 = 120;

pub struct LineChart;
pub struct LinePointChart;
pub struct LineAreaChart;

/// Marker for an entity's end cap. Only the diamond anchor draws something;
/// the remaining kinds are accepted and ignored.
pub fn end_cap_marker(cap: LineCap, min_extent: f32) -> Option<EndMarker> {
    match cap {
        LineCap::DiamondAnchor => Some(EndMarker::Diamond { width: min_extent * 0.07, height: min_extent * 0.1 }),
        LineCap::Flat
        | LineCap::Square
        | LineCap::Round
        | LineCap::Triangle
        | LineCap::NoAnchor
        | LineCap::SquareAnchor
        | LineCap::RoundAnchor
        | LineCap::ArrowAnchor
        | LineCap::Custom => None,
    }
}

/// Screen position of every entity of `record`.
fn record_points(ctx: &RenderContext<'_>, area: &PlotArea, record: &Record) -> Vec<PointF> {
    let plot = area.plot.to_f32();
    let y_max = ctx.info().y_rule_max;
    record
        .entities
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let x = plot.left + area.interval / 2.0 + i as f32 * area.interval;
            PointF::new(x, plot.bottom - scaled(e.value, y_max, plot.height()))
        })
        .collect()
}

fn segment_stroke(record: &Record, entity: &Entity, min_extent: f32) -> Stroke {
    let mut stroke = Stroke::solid(record.color, record.line_weight);
    if let Some(style) = entity.style {
        if style.has_custom_end_cap() {
            stroke.end_marker = end_cap_marker(style.end_cap, min_extent);
        }
        stroke.start_cap = style.start_cap;
        stroke.dash = style.line_style;
    }
    stroke
}

fn draw_value(ctx: &RenderContext<'_>, surface: &mut dyn Surface, entity: &Entity, at: PointF) {
    let text = ctx.options.value_format.format(entity.value);
    let font = &ctx.options.fonts.body;
    let size = surface.measure_string(&text, font, None);
    let color = entity.color().unwrap_or(ctx.options.theme.text);
    surface.draw_string(&text, font, color, RectF::from_ltwh(at.x, at.y, size.width, size.height), TextAlign::Near);
}

/// Segments between consecutive points; `marker` runs for every point.
fn draw_polyline(
    ctx: &RenderContext<'_>,
    area: &PlotArea,
    surface: &mut dyn Surface,
    index: usize,
    mut marker: impl FnMut(&mut dyn Surface, &Record, &Entity, PointF),
) {
    let record = &ctx.source.records[index];
    let points = record_points(ctx, area, record);
    let min_extent = area.interval.min(area.plot.height() as f32);

    let mut last: Option<PointF> = None;
    for (entity, &p) in record.entities.iter().zip(&points) {
        if let Some(prev) = last {
            surface.draw_line(&segment_stroke(record, entity, min_extent), prev, p);
        }
        marker(&mut *surface, record, entity, p);
        if ctx.options.show_data_value {
            draw_value(ctx, surface, entity, p);
        }
        last = Some(p);
    }
}

impl ChartRenderer for LineChart {
    fn chart_type(&self) -> ChartType { ChartType::Line }

    fn draw_record(&self, ctx: &RenderContext<'_>, area: &PlotArea, surface: &mut dyn Surface, index: usize) {
        draw_polyline(ctx, area, surface, index, |_, _, _, _| {});
    }
}

impl ChartRenderer for LinePointChart {
    fn chart_type(&self) -> ChartType { ChartType::LinePoint }

    fn draw_record(&self, ctx: &RenderContext<'_>, area: &PlotArea, surface: &mut dyn Surface, index: usize) {
        draw_polyline(ctx, area, surface, index, |surface, record, entity, p| {
            if entity.style.is_some_and(|s| s.has_custom_end_cap()) {
                return;
            }
            let size = (record.line_weight * 0.75 * POINT_SIZE).max(POINT_SIZE);
            let rect = RectF::from_ltwh(p.x - size / 2.0, p.y - size / 2.0, size, size);
            surface.fill_ellipse(record.color, rect);
        });
    }
}

impl ChartRenderer for LineAreaChart {
    fn chart_type(&self) -> ChartType { ChartType::LineArea }

    fn draw_record(&self, ctx: &RenderContext<'_>, area: &PlotArea, surface: &mut dyn Surface, index: usize) {
        let record = &ctx.source.records[index];
        let plot = area.plot.to_f32();
        let curve = record_points(ctx, area, record);
        if curve.len() <= 1 {
            return;
        }

        let min_y = curve.iter().map(|p| p.y).fold(plot.bottom, f32::min);
        let mut polygon = Vec::with_capacity(curve.len() + 2);
        polygon.push(PointF::new(plot.left, plot.bottom));
        polygon.extend_from_slice(&curve);
        polygon.push(PointF::new(plot.right, plot.bottom));

        let light = record.color.lighten();
        let brush = LinearGradient {
            rect: RectF::from_ltrb(plot.left, min_y, plot.right, plot.bottom),
            top: light.with_alpha(AREA_TOP_ALPHA),
            bottom: light.with_alpha(AREA_BOTTOM_ALPHA),
        };
        surface.fill_path(&brush, &polygon);

        let stroke = Stroke::solid(record.color, record.line_weight);
        for pair in polygon.windows(2) {
            surface.draw_line(&stroke, pair[0], pair[1]);
        }

        if ctx.options.show_data_value {
            for (entity, &p) in record.entities.iter().zip(&curve) {
                draw_value(ctx, surface, entity, p);
            }
        }
    }
}

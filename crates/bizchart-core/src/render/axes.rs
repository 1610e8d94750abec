// File: crates/bizchart-core/src/render/axes.rs
// Summary: Shared coordinate-chart drawing: ticks, assist lines, axis labels, then records.

use tracing::trace;

use super::{ChartRenderer, RenderContext};
use crate::geometry::{PointF, RectF};
use crate::layout::PlotArea;
use crate::surface::{Stroke, Surface, TextAlign};

const TICK: f32 = 4.0;

pub(super) fn draw_coordinate_graph<R: ChartRenderer + ?Sized>(
    renderer: &R,
    ctx: &RenderContext<'_>,
    surface: &mut dyn Surface,
) {
    let Some(area) = ctx.layout.coordinate else { return };
    if !area.plot.is_drawable() || ctx.source.records.is_empty() {
        trace!("coordinate graph skipped: nothing to draw");
        return;
    }

    draw_x_axis(ctx, &area, surface);
    draw_y_axis(ctx, &area, surface);

    let plot = area.plot.to_f32();
    let axis = Stroke::solid(ctx.options.theme.axis_line, 1.0);
    surface.draw_line(&axis, PointF::new(plot.left, plot.top), PointF::new(plot.left, plot.bottom));
    surface.draw_line(&axis, PointF::new(plot.left, plot.bottom), PointF::new(plot.right, plot.bottom));

    for index in 0..ctx.source.records.len() {
        renderer.draw_record(ctx, &area, surface, index);
    }
}

fn draw_x_axis(ctx: &RenderContext<'_>, area: &PlotArea, surface: &mut dyn Surface) {
    let plot = area.plot.to_f32();
    let labels = area.column_title.to_f32();
    let theme = &ctx.options.theme;
    let font = &ctx.options.fonts.x_ruler;
    let tick = Stroke::solid(theme.tick, 1.0);
    let assist = Stroke::dotted(theme.assist_line);
    let categories = &ctx.aggregate.categories;

    for i in 0..=categories.len() {
        let x = plot.left + i as f32 * area.interval;
        surface.draw_line(&tick, PointF::new(x, plot.bottom - TICK), PointF::new(x, plot.bottom));
        if ctx.options.x_assist_line {
            surface.draw_line(&assist, PointF::new(x, plot.top), PointF::new(x, plot.bottom - TICK - 1.0));
        }

        let Some(key) = categories.get(i) else { continue };
        let rect = RectF::from_ltwh(x, labels.top, area.interval, labels.height());
        let size = surface.measure_string(key, font, None);
        if size.width > area.interval {
            // Too wide for its slot: draw every other label across two slots.
            if i % 2 == 0 {
                let wide = RectF::from_ltwh(x, labels.top, area.interval * 2.0, labels.height());
                surface.draw_string(key, font, theme.axis_label, wide, TextAlign::Near);
            }
        } else {
            surface.draw_string(key, font, theme.axis_label, rect, TextAlign::Center);
        }
    }
}

fn draw_y_axis(ctx: &RenderContext<'_>, area: &PlotArea, surface: &mut dyn Surface) {
    let plot = area.plot.to_f32();
    let labels = area.row_title.to_f32();
    let theme = &ctx.options.theme;
    let font = &ctx.options.fonts.y_ruler;
    let tick = Stroke::solid(theme.tick, 1.0);
    let assist = Stroke::dotted(theme.assist_line);

    let level = ctx.ruler.level();
    if level < 2 {
        return;
    }
    let row_height = plot.height() / (level - 1) as f32;

    for (i, value) in ctx.ruler.levels.iter().enumerate() {
        let y = plot.bottom - i as f32 * row_height;
        surface.draw_line(&tick, PointF::new(plot.left, y), PointF::new(plot.left + TICK, y));
        if ctx.options.y_assist_line {
            surface.draw_line(&assist, PointF::new(plot.left + TICK + 2.0, y), PointF::new(plot.right, y));
        }

        let text = ctx.options.value_format.format(*value);
        let size = surface.measure_string(&text, font, None);
        let rect = RectF::from_ltwh(labels.left, y - size.height / 2.0, labels.width() - TICK, size.height);
        surface.draw_string(&text, font, theme.axis_label, rect, TextAlign::Far);
    }
}

// File: crates/bizchart-core/src/render/column.rs
// Summary: Grouped, stacked and percent-stacked column renderers.

use super::{ChartRenderer, RenderContext};
use crate::aggregate::DataInfo;
use crate::chart_type::ChartType;
use crate::color::Color;
use crate::geometry::RectF;
use crate::layout::PlotArea;
use crate::scale::scaled;
use crate::surface::Surface;

pub struct ColumnChart;
pub struct StackedColumnChart;
pub struct StackedPercentColumnChart;

/// Fill a bar standing on `bottom`; negative heights hang below it.
/// Zero-height or zero-width bars are skipped.
fn fill_bar(surface: &mut dyn Surface, color: Color, x: f32, bottom: f32, width: f32, height: f32) {
    let top = (bottom - height).min(bottom);
    let bar = RectF::from_ltwh(x, top, width, height.abs());
    if bar.is_drawable() {
        surface.fill_rect(color, bar);
    }
}

impl ChartRenderer for ColumnChart {
    fn chart_type(&self) -> ChartType { ChartType::Column }

    fn draw_record(&self, ctx: &RenderContext<'_>, area: &PlotArea, surface: &mut dyn Surface, index: usize) {
        let record = &ctx.source.records[index];
        let info = ctx.info();
        let plot = area.plot.to_f32();
        let col_width = area.interval * 0.5 / info.record_count.max(1) as f32;

        for (i, entity) in record.entities.iter().enumerate() {
            let band_left = plot.left + i as f32 * area.interval + area.interval / 4.0;
            let x = band_left + index as f32 * col_width;
            let height = scaled(entity.value, info.max_value, plot.height());
            fill_bar(surface, record.color, x, plot.bottom, col_width, height);
        }
    }
}

/// Stack record `index` on top of records `0..index` for every category;
/// `extent(i)` is the value that maps to the full plot height in category `i`.
fn draw_stacked(
    ctx: &RenderContext<'_>,
    area: &PlotArea,
    surface: &mut dyn Surface,
    index: usize,
    extent: impl Fn(&DataInfo, usize) -> f64,
) {
    let records = &ctx.source.records;
    let record = &records[index];
    let info = ctx.info();
    let plot = area.plot.to_f32();
    let half = area.interval / 2.0;
    let bar_width = half * 0.75;

    for (i, entity) in record.entities.iter().enumerate() {
        let e = extent(info, i);
        let x = plot.left + i as f32 * area.interval + half - half * 0.375;
        let offset: f32 = records[..index]
            .iter()
            .filter_map(|r| r.entities.get(i))
            .map(|below| scaled(below.value, e, plot.height()))
            .sum();
        let height = scaled(entity.value, e, plot.height());
        fill_bar(surface, record.color, x, plot.bottom - offset, bar_width, height);
    }
}

impl ChartRenderer for StackedColumnChart {
    fn chart_type(&self) -> ChartType { ChartType::StackedColumn }

    fn ruler_extreme(&self, info: &DataInfo) -> f64 {
        info.column_total_max
    }

    fn draw_record(&self, ctx: &RenderContext<'_>, area: &PlotArea, surface: &mut dyn Surface, index: usize) {
        draw_stacked(ctx, area, surface, index, |info, _| info.column_total_max);
    }
}

impl ChartRenderer for StackedPercentColumnChart {
    fn chart_type(&self) -> ChartType { ChartType::StackedPercentColumn }

    fn ruler_extreme(&self, info: &DataInfo) -> f64 {
        info.column_total_max
    }

    fn draw_record(&self, ctx: &RenderContext<'_>, area: &PlotArea, surface: &mut dyn Surface, index: usize) {
        draw_stacked(ctx, area, surface, index, |info, i| info.column_total.get(i).copied().unwrap_or(0.0));
    }
}

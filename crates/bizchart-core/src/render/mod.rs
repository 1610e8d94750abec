// File: crates/bizchart-core/src/render/mod.rs
// Summary: Chart renderer capability, render context and the per-type factory.
// Notes:
// - Each chart type is a unit struct implementing `ChartRenderer`. Shared axis
//   and pie sequencing live in `axes` and `pie`; variants only override the
//   per-record / per-slice hooks and the ruler extreme.

mod axes;
mod column;
mod line;
mod pie;

use crate::aggregate::{Aggregate, DataInfo};
use crate::chart::ChartOptions;
use crate::chart_type::{ChartFamily, ChartType};
use crate::geometry::Rect;
use crate::layout::{Layout, PlotArea};
use crate::model::{DataSource, Entity, Record};
use crate::scale::Ruler;
use crate::surface::Surface;

pub use column::{ColumnChart, StackedColumnChart, StackedPercentColumnChart};
pub use line::{end_cap_marker, LineAreaChart, LineChart, LinePointChart};
pub use pie::{ExplodedPieChart, Pie3DChart, PieChart};

/// Everything a renderer reads during one draw call.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub source: &'a DataSource,
    pub aggregate: &'a Aggregate,
    pub layout: &'a Layout,
    pub ruler: &'a Ruler,
    pub options: &'a ChartOptions,
}

impl<'a> RenderContext<'a> {
    pub fn info(&self) -> &'a DataInfo {
        &self.aggregate.info
    }
}

/// One pie slice handed to [`ChartRenderer::draw_entity_slice`].
#[derive(Clone, Copy, Debug)]
pub struct PieSlice<'a> {
    pub record: &'a Record,
    pub entity: &'a Entity,
    pub index: usize,
    pub pie_bounds: Rect,
    pub start_angle: f32,
    pub sweep_angle: f32,
}

pub trait ChartRenderer: Sync {
    fn chart_type(&self) -> ChartType;

    fn family(&self) -> ChartFamily {
        self.chart_type().family()
    }

    /// Extreme value the y ruler has to cover.
    fn ruler_extreme(&self, info: &DataInfo) -> f64 {
        info.max_value
    }

    /// Draw record `index` of a coordinate chart.
    fn draw_record(&self, _ctx: &RenderContext<'_>, _area: &PlotArea, _surface: &mut dyn Surface, _index: usize) {}

    /// Draw one slice of a pie-family chart.
    fn draw_entity_slice(&self, _ctx: &RenderContext<'_>, _surface: &mut dyn Surface, _slice: &PieSlice<'_>) {}

    /// Axes and records, or pie slices, depending on the family.
    fn draw_graph(&self, ctx: &RenderContext<'_>, surface: &mut dyn Surface) {
        match self.family() {
            ChartFamily::Coordinate => axes::draw_coordinate_graph(self, ctx, surface),
            ChartFamily::Pie => pie::draw_pie_graph(self, ctx, surface),
        }
    }
}

/// Renderer for a chart type.
pub fn renderer_for(kind: ChartType) -> &'static dyn ChartRenderer {
    match kind {
        ChartType::Line => &LineChart,
        ChartType::LinePoint => &LinePointChart,
        ChartType::LineArea => &LineAreaChart,
        ChartType::Column => &ColumnChart,
        ChartType::StackedColumn => &StackedColumnChart,
        ChartType::StackedPercentColumn => &StackedPercentColumnChart,
        ChartType::Pie => &PieChart,
        ChartType::ExplodedPie => &ExplodedPieChart,
        ChartType::Pie3D => &Pie3DChart,
    }
}

// File: crates/bizchart-core/src/chart.rs
// Summary: Chart host object: owns the dataset, options and the recomputed
// aggregate/layout/ruler/legend snapshots; draws onto any `Surface`.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, trace};

use crate::aggregate::{aggregate, Aggregate, DataInfo};
use crate::chart_type::{ChartFamily, ChartType};
use crate::geometry::Rect;
use crate::layout::{Layout, LayoutParams, PlotArea, DEFAULT_LEGEND_WIDTH};
use crate::legend::Legend;
use crate::model::DataSource;
use crate::render::{renderer_for, RenderContext};
use crate::scale::Ruler;
use crate::surface::{Font, Stroke, Surface, TextAlign};
use crate::theme::Theme;
use crate::types::{Insets, ValueFormat};

#[derive(Clone, Debug, PartialEq)]
pub struct Fonts {
    pub caption: Font,
    pub x_ruler: Font,
    pub y_ruler: Font,
    pub legend: Font,
    /// Pie labels and value labels.
    pub body: Font,
}

impl Default for Fonts {
    fn default() -> Self {
        Self {
            caption: Font::sized(14.0).bold(),
            x_ruler: Font::default(),
            y_ruler: Font::default(),
            legend: Font::default(),
            body: Font::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartOptions {
    pub margin: Insets,
    pub legend_visible: bool,
    pub legend_width: i32,
    /// Entity keys inside pie slices.
    pub show_entity_name: bool,
    /// Values next to line points.
    pub show_data_value: bool,
    pub x_assist_line: bool,
    pub y_assist_line: bool,
    /// Thin frame around the border rectangle.
    pub show_border: bool,
    pub value_format: ValueFormat,
    pub fonts: Fonts,
    pub theme: Theme,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            margin: Insets::default(),
            legend_visible: true,
            legend_width: DEFAULT_LEGEND_WIDTH,
            show_entity_name: false,
            show_data_value: false,
            x_assist_line: true,
            y_assist_line: true,
            show_border: true,
            value_format: ValueFormat::Integer,
            fonts: Fonts::default(),
            theme: Theme::classic(),
        }
    }
}

/// A chart bound to one dataset and one set of bounds.
///
/// Every mutation recomputes its derived state before returning; nothing is
/// patched incrementally. Not synchronized: callers serialize mutation and
/// drawing themselves.
pub struct Chart {
    chart_type: ChartType,
    options: ChartOptions,
    source: Option<DataSource>,
    bounds: Rect,
    aggregate: Aggregate,
    ruler: Ruler,
    layout: Layout,
    legend: Legend,
    rng: StdRng,
}

impl Default for Chart {
    fn default() -> Self {
        Self::new(ChartType::default())
    }
}

impl Chart {
    pub fn new(chart_type: ChartType) -> Self {
        Self::with_rng(chart_type, StdRng::from_entropy())
    }

    /// Chart whose pie color assignment is reproducible.
    pub fn with_seed(chart_type: ChartType, seed: u64) -> Self {
        Self::with_rng(chart_type, StdRng::seed_from_u64(seed))
    }

    fn with_rng(chart_type: ChartType, rng: StdRng) -> Self {
        let mut chart = Self {
            chart_type,
            options: ChartOptions::default(),
            source: None,
            bounds: Rect::EMPTY,
            aggregate: Aggregate::default(),
            ruler: Ruler::default(),
            layout: Layout::default(),
            legend: Legend::default(),
            rng,
        };
        chart.relayout();
        chart
    }

    pub fn chart_type(&self) -> ChartType { self.chart_type }

    /// Switching type re-aggregates: pie colors and ruler extremes depend on it.
    pub fn set_chart_type(&mut self, chart_type: ChartType) {
        if self.chart_type == chart_type {
            return;
        }
        self.chart_type = chart_type;
        self.recompute_data();
    }

    pub fn options(&self) -> &ChartOptions { &self.options }

    pub fn set_options(&mut self, options: ChartOptions) {
        self.options = options;
        self.relayout();
    }

    pub fn set_legend_visible(&mut self, visible: bool) {
        self.options.legend_visible = visible;
        self.relayout();
    }

    pub fn set_margin(&mut self, margin: Insets) {
        self.options.margin = margin;
        self.relayout();
    }

    /// Replace the dataset and recompute aggregate, ruler, legend and layout.
    ///
    /// Pie charts write their auto-assigned colors into the chart's own copy
    /// of `source`, not the caller's. Handing in the same uncolored dataset
    /// again draws fresh colors; pass `data_source().cloned()` back to keep
    /// them, or build the chart with [`Chart::with_seed`] for repeatable ones.
    pub fn set_data_source(&mut self, source: DataSource) {
        self.source = Some(source);
        self.recompute_data();
    }

    pub fn clear_data_source(&mut self) {
        self.source = None;
        self.recompute_data();
    }

    pub fn data_source(&self) -> Option<&DataSource> { self.source.as_ref() }

    /// Replace the outer bounds and recompute the layout.
    pub fn update_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.relayout();
    }

    fn recompute_data(&mut self) {
        let family = self.chart_type.family();
        self.aggregate = match self.source.as_mut() {
            Some(source) => aggregate(source, family, &mut self.rng),
            None => Aggregate::default(),
        };

        self.ruler = match family {
            ChartFamily::Coordinate => {
                let extreme = renderer_for(self.chart_type).ruler_extreme(&self.aggregate.info);
                Ruler::nice(extreme)
            }
            ChartFamily::Pie => Ruler::default(),
        };
        self.aggregate.info.y_rule_max = self.ruler.max();
        self.aggregate.info.y_rule_min = self.ruler.levels.first().copied().unwrap_or(0.0);

        self.legend = self
            .source
            .as_ref()
            .map(|s| Legend::build(s, family))
            .unwrap_or_default();

        debug!(chart_type = %self.chart_type, legend = self.legend.len(), "data recomputed");
        self.relayout();
    }

    fn relayout(&mut self) {
        let params = LayoutParams {
            margin: self.options.margin,
            legend_visible: self.options.legend_visible,
            legend_width: self.options.legend_width,
            category_count: self.aggregate.category_count(),
            family: self.chart_type.family(),
        };
        self.layout = Layout::compute(self.bounds, &params);
    }

    /// Render the current state. Zero-sized bounds draw nothing.
    pub fn draw(&self, surface: &mut dyn Surface, clip: Rect) {
        if !self.layout.bounds.is_drawable() {
            trace!("draw skipped: empty bounds");
            return;
        }
        let opts = &self.options;
        surface.push_clip(clip.to_f32());

        if opts.show_border && self.layout.border.is_drawable() {
            surface.draw_rect(&Stroke::solid(opts.theme.border, 1.0), self.layout.border.to_f32());
        }

        if let Some(source) = &self.source {
            let ctx = RenderContext {
                source,
                aggregate: &self.aggregate,
                layout: &self.layout,
                ruler: &self.ruler,
                options: opts,
            };
            renderer_for(self.chart_type).draw_graph(&ctx, surface);

            if opts.legend_visible {
                self.legend.draw(surface, self.layout.legend, &opts.fonts.legend, &opts.theme);
            }
            if !source.caption.is_empty() && self.layout.caption.is_drawable() {
                surface.draw_string(
                    &source.caption,
                    &opts.fonts.caption,
                    opts.theme.caption,
                    self.layout.caption.to_f32(),
                    TextAlign::Near,
                );
            }
        }

        surface.pop_clip();
        trace!(chart_type = %self.chart_type, "chart drawn");
    }

    pub fn bounds(&self) -> Rect { self.layout.bounds }
    pub fn border_bounds(&self) -> Rect { self.layout.border }
    pub fn caption_bounds(&self) -> Rect { self.layout.caption }
    pub fn legend_bounds(&self) -> Rect { self.layout.legend }
    pub fn graph_bounds(&self) -> Rect { self.layout.graph }
    pub fn plot_area(&self) -> Option<PlotArea> { self.layout.coordinate }
    pub fn pie_bounds(&self) -> Option<Rect> { self.layout.pie }
    pub fn layout(&self) -> &Layout { &self.layout }

    pub fn aggregate(&self) -> &Aggregate { &self.aggregate }
    pub fn data_info(&self) -> &DataInfo { &self.aggregate.info }
    pub fn categories(&self) -> &[String] { &self.aggregate.categories }
    pub fn ruler(&self) -> &Ruler { &self.ruler }
    pub fn legend(&self) -> &Legend { &self.legend }
}

// File: crates/bizchart-core/src/layout.rs
// Summary: Bounds subdivision into border, caption, legend, graph and plot rectangles.
// Notes:
// - Degenerate input is not clamped: margins larger than the bounds produce
//   zero or negative sized rectangles, which drawing code skips.

use tracing::trace;

use crate::chart_type::ChartFamily;
use crate::geometry::Rect;
use crate::types::Insets;

pub const CAPTION_INSET_LEFT: i32 = 20;
pub const CAPTION_INSET_TOP: i32 = 10;
pub const CAPTION_HEIGHT: i32 = 24;
pub const DEFAULT_LEGEND_WIDTH: i32 = 80;
/// Width of the y-axis label strip.
pub const ROW_TITLE_WIDTH: i32 = 40;
/// Height of the x-axis label strip.
pub const COLUMN_TITLE_HEIGHT: i32 = 15;

const GAP: i32 = 10;

/// Inputs besides the outer bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutParams {
    pub margin: Insets,
    pub legend_visible: bool,
    pub legend_width: i32,
    pub category_count: usize,
    pub family: ChartFamily,
}

/// Sub-rectangles of a coordinate chart's graph area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    /// Left strip holding y-axis labels.
    pub row_title: Rect,
    /// Bottom strip holding x-axis labels.
    pub column_title: Rect,
    /// Where data is plotted.
    pub plot: Rect,
    /// Horizontal space per category.
    pub interval: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Layout {
    pub bounds: Rect,
    pub border: Rect,
    pub caption: Rect,
    pub legend: Rect,
    pub graph: Rect,
    pub coordinate: Option<PlotArea>,
    /// 10:7 rectangle centered in the graph area, pie family only.
    pub pie: Option<Rect>,
}

impl Layout {
    /// Recompute every rectangle from scratch.
    pub fn compute(bounds: Rect, params: &LayoutParams) -> Self {
        let m = params.margin;
        let border = Rect::from_ltrb(
            bounds.left + m.left as i32,
            bounds.top + m.top as i32,
            bounds.right - m.right as i32,
            bounds.bottom - m.bottom as i32,
        );

        let caption = Rect::from_ltwh(
            border.left + CAPTION_INSET_LEFT,
            border.top + CAPTION_INSET_TOP,
            border.width() - CAPTION_INSET_LEFT,
            CAPTION_HEIGHT,
        );

        let legend = if params.legend_visible {
            Rect::from_ltwh(
                border.right - params.legend_width - GAP,
                caption.bottom + GAP,
                params.legend_width,
                border.height() - caption.height() - GAP,
            )
        } else {
            Rect::EMPTY
        };

        let graph = Rect::from_ltwh(
            border.left + GAP,
            caption.bottom + GAP,
            border.width() - legend.width() - 3 * GAP,
            border.height() - (caption.bottom - border.top) - GAP,
        );

        let (coordinate, pie) = match params.family {
            ChartFamily::Coordinate => (Some(plot_area(graph, params.category_count)), None),
            ChartFamily::Pie => (None, Some(pie_rect(graph))),
        };

        trace!(?border, ?graph, ?legend, "layout recomputed");

        Self { bounds, border, caption, legend, graph, coordinate, pie }
    }
}

fn plot_area(graph: Rect, category_count: usize) -> PlotArea {
    let row_title = Rect::from_ltwh(graph.left, graph.top, ROW_TITLE_WIDTH, graph.height() - COLUMN_TITLE_HEIGHT);
    let column_title = Rect::from_ltwh(
        graph.left + ROW_TITLE_WIDTH,
        graph.bottom - COLUMN_TITLE_HEIGHT,
        graph.width() - ROW_TITLE_WIDTH,
        COLUMN_TITLE_HEIGHT,
    );
    let plot = Rect::from_ltrb(graph.left + ROW_TITLE_WIDTH, graph.top, graph.right, graph.bottom - COLUMN_TITLE_HEIGHT);
    let interval = if category_count == 0 {
        plot.width() as f32
    } else {
        plot.width() as f32 / category_count as f32
    };
    PlotArea { row_title, column_title, plot, interval }
}

/// Largest 10:7 box that fits, shrunk by 50px per axis, centered.
fn pie_rect(graph: Rect) -> Rect {
    let s = (graph.width() / 10).min(graph.height() / 7);
    let w = s * 10 - 50;
    let h = s * 7 - 50;
    Rect::from_ltwh(graph.left + (graph.width() - w) / 2, graph.top + (graph.height() - h) / 2, w, h)
}

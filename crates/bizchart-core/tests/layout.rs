// File: crates/bizchart-core/tests/layout.rs
// Purpose: Bounds subdivision for coordinate and pie charts.

use bizchart_core::{ChartFamily, Insets, Layout, LayoutParams, Rect};

fn params(family: ChartFamily) -> LayoutParams {
    LayoutParams { margin: Insets::default(), legend_visible: true, legend_width: 80, category_count: 7, family }
}

const BOUNDS: Rect = Rect::from_ltwh(0, 0, 800, 500);

#[test]
fn coordinate_layout_rectangles() {
    let l = Layout::compute(BOUNDS, &params(ChartFamily::Coordinate));
    assert_eq!(l.border, BOUNDS);
    assert_eq!(l.caption, Rect::from_ltwh(20, 10, 780, 24));
    assert_eq!(l.legend, Rect::from_ltwh(710, 44, 80, 466));
    assert_eq!(l.graph, Rect::from_ltwh(10, 44, 690, 456));
    assert!(l.pie.is_none());

    let area = l.coordinate.expect("plot area");
    assert_eq!(area.row_title, Rect::from_ltwh(10, 44, 40, 441));
    assert_eq!(area.column_title, Rect::from_ltwh(50, 485, 650, 15));
    assert_eq!(area.plot, Rect::from_ltrb(50, 44, 700, 485));
    assert!((area.interval - 650.0 / 7.0).abs() < 1e-4);
}

#[test]
fn margin_and_hidden_legend() {
    let mut p = params(ChartFamily::Coordinate);
    p.margin = Insets::new(5, 15, 10, 20);
    p.legend_visible = false;
    let l = Layout::compute(BOUNDS, &p);

    assert_eq!(l.border, Rect::from_ltrb(5, 10, 785, 480));
    assert_eq!(l.legend, Rect::EMPTY);
    assert_eq!(l.graph.width(), l.border.width() - 30);
    assert_eq!(l.graph.left, l.border.left + 10);
    assert_eq!(l.graph.top, l.caption.bottom + 10);
}

#[test]
fn pie_rect_is_ten_by_seven_and_centered() {
    let l = Layout::compute(BOUNDS, &params(ChartFamily::Pie));
    assert!(l.coordinate.is_none());
    let pie = l.pie.expect("pie rect");
    assert_eq!(pie, Rect::from_ltwh(55, 69, 600, 405));
    assert_eq!(pie.left - l.graph.left, l.graph.right - pie.right);
}

#[test]
fn zero_categories_use_full_width() {
    let mut p = params(ChartFamily::Coordinate);
    p.category_count = 0;
    let area = Layout::compute(BOUNDS, &p).coordinate.expect("plot area");
    assert_eq!(area.interval, area.plot.width() as f32);
}

#[test]
fn recompute_is_stable() {
    let p = params(ChartFamily::Coordinate);
    let first = Layout::compute(BOUNDS, &p);
    let second = Layout::compute(BOUNDS, &p);
    assert_eq!(first, second);
}

#[test]
fn oversized_margin_is_not_clamped() {
    let mut p = params(ChartFamily::Coordinate);
    p.margin = Insets::uniform(1000);
    let l = Layout::compute(BOUNDS, &p);
    assert!(!l.border.is_drawable());
    assert!(!l.graph.is_drawable());
    assert!(!l.coordinate.expect("plot area").plot.is_drawable());
}

// File: crates/bizchart-core/tests/chart.rs
// Purpose: Chart host recomputation: idempotence, type switches and bounds updates.

use bizchart_core::{Chart, ChartType, Color, DataSource, Insets, RecordingSurface, Rect, Record};

fn sample() -> DataSource {
    let mut ds = DataSource::new("Sales");
    ds.add_series("Book", [("2005", 300.0), ("2006", 450.0), ("2007", 1330.0)], Some(Color::OLIVE_DRAB));
    ds.add_series("DVD", [("2005", 320.0), ("2006", 410.0)], Some(Color::SADDLE_BROWN));
    ds
}

#[test]
fn resetting_the_same_source_is_idempotent() {
    let mut chart = Chart::with_seed(ChartType::Pie, 5);
    chart.update_bounds(Rect::from_ltwh(0, 0, 800, 500));
    chart.set_data_source(sample());
    let info = chart.data_info().clone();
    let legend = chart.legend().clone();
    let colored = chart.data_source().cloned().expect("source");

    chart.set_data_source(colored);
    assert_eq!(chart.data_info(), &info);
    assert_eq!(chart.legend(), &legend);
}

#[test]
fn switching_type_recomputes_ruler_and_legend() {
    let mut chart = Chart::with_seed(ChartType::Line, 5);
    chart.set_data_source(sample());
    assert_eq!(chart.ruler().max(), 1500.0);
    assert_eq!(chart.legend().len(), 2);
    assert!(chart.plot_area().is_some());

    chart.set_chart_type(ChartType::StackedColumn);
    // column_total_max = 1330 + 0 = 1330 vs 450 + 410 = 860
    assert_eq!(chart.data_info().column_total_max, 1330.0);
    assert_eq!(chart.data_info().y_rule_max, 1500.0);

    chart.set_chart_type(ChartType::Pie);
    assert!(chart.plot_area().is_none());
    assert!(chart.pie_bounds().is_some());
    assert_eq!(chart.legend().len(), 3, "first record entities");
    assert_eq!(chart.data_info().y_rule_max, 0.0);
    let entities = &chart.data_source().expect("source").records[0].entities;
    assert!(entities.iter().all(|e| e.color().is_some()), "pie colors persisted");
}

#[test]
fn bounds_and_margin_drive_layout() {
    let mut chart = Chart::default();
    assert!(!chart.bounds().is_drawable());

    chart.update_bounds(Rect::from_ltwh(0, 0, 400, 300));
    assert_eq!(chart.border_bounds(), Rect::from_ltwh(0, 0, 400, 300));
    chart.set_margin(Insets::uniform(10));
    assert_eq!(chart.border_bounds(), Rect::from_ltrb(10, 10, 390, 290));
    assert_eq!(chart.caption_bounds(), Rect::from_ltwh(30, 20, 360, 24));

    chart.set_legend_visible(false);
    assert_eq!(chart.legend_bounds(), Rect::EMPTY);
    assert_eq!(chart.graph_bounds().width(), 380 - 30);
}

#[test]
fn empty_bounds_draw_nothing() {
    let mut chart = Chart::with_seed(ChartType::Column, 1);
    chart.set_data_source(sample());
    let mut surface = RecordingSurface::new();
    chart.draw(&mut surface, Rect::EMPTY);
    assert!(surface.commands.is_empty());
}

#[test]
fn cleared_source_keeps_only_the_frame() {
    let mut chart = Chart::with_seed(ChartType::Column, 1);
    chart.update_bounds(Rect::from_ltwh(0, 0, 800, 500));
    chart.set_data_source(sample());
    chart.clear_data_source();
    assert!(chart.data_source().is_none());
    assert!(chart.legend().is_empty());
    assert!(chart.categories().is_empty());

    let mut surface = RecordingSurface::new();
    chart.draw(&mut surface, chart.bounds());
    assert_eq!(surface.commands.len(), 3, "clip, border, clip");
}

#[test]
fn categories_follow_longest_record() {
    let mut ds = sample();
    ds.add_record(Record::new("Empty"));
    let mut chart = Chart::with_seed(ChartType::Line, 1);
    chart.set_data_source(ds);
    assert_eq!(chart.categories(), ["2005", "2006", "2007"]);
    assert_eq!(chart.aggregate().category_count(), 3);
}

#[test]
fn pie_colors_live_in_the_chart_copy() {
    let mut ds = DataSource::default();
    ds.add_series("Share", [("a", 1.0), ("b", 2.0), ("c", 3.0)], None);

    let mut chart = Chart::with_seed(ChartType::Pie, 9);
    chart.set_data_source(ds.clone());
    let first = chart.legend().clone();
    assert!(ds.records[0].entities.iter().all(|e| e.color().is_none()), "caller copy untouched");

    // Same seed, same uncolored input: same colors
    let mut twin = Chart::with_seed(ChartType::Pie, 9);
    twin.set_data_source(ds.clone());
    assert_eq!(twin.legend(), &first);

    // Feeding back the colored copy keeps them
    let colored = chart.data_source().cloned().expect("source");
    chart.set_data_source(colored);
    assert_eq!(chart.legend(), &first);
}

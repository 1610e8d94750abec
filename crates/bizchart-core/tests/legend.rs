// File: crates/bizchart-core/tests/legend.rs
// Purpose: Legend construction per chart family and stacked drawing.

use bizchart_core::{ChartFamily, Color, DataSource, Font, Legend, LegendEntry, RecordingSurface, Rect, RectF, Record, Theme};

#[test]
fn duplicate_color_keeps_last_label() {
    let mut ds = DataSource::default();
    ds.add_series("Book", [("2005", 1.0)], Some(Color::RED));
    ds.add_series("DVD", [("2005", 2.0)], Some(Color::BLUE));
    ds.add_series("Tape", [("2005", 3.0)], Some(Color::RED));

    let legend = Legend::build(&ds, ChartFamily::Coordinate);
    assert_eq!(legend.len(), 2);
    assert_eq!(legend.get(Color::RED), Some("Tape"));
    assert_eq!(legend.entries()[0], LegendEntry { color: Color::RED, label: "Tape".into() });
    assert_eq!(legend.entries()[1].label, "DVD");
}

#[test]
fn pie_legend_lists_first_record_entities() {
    let mut ds = DataSource::default();
    let rec = ds.add_record(Record::new("Share").with_color(Color::GRAY));
    rec.push_colored("North", 1.0, Color::ORANGE);
    rec.push("South", 2.0);
    ds.add_series("Ignored", [("East", 3.0)], Some(Color::PINK));

    let legend = Legend::build(&ds, ChartFamily::Pie);
    assert_eq!(legend.len(), 2);
    assert_eq!(legend.get(Color::ORANGE), Some("North"));
    // Uncolored entity falls back to its record color
    assert_eq!(legend.get(Color::GRAY), Some("South"));
    assert_eq!(legend.get(Color::PINK), None);
}

#[test]
fn rows_are_centered_in_bounds() {
    let mut legend = Legend::default();
    legend.insert(Color::RED, "Book");
    legend.insert(Color::BLUE, "DVD");

    let mut surface = RecordingSurface::new();
    legend.draw(&mut surface, Rect::from_ltwh(0, 0, 80, 200), &Font::default(), &Theme::classic());

    let swatches: Vec<_> = surface.fill_rects().collect();
    assert_eq!(
        swatches,
        vec![
            (Color::RED, RectF::from_ltwh(0.0, 80.0, 12.0, 12.0)),
            (Color::BLUE, RectF::from_ltwh(0.0, 100.0, 12.0, 12.0)),
        ]
    );
    assert_eq!(surface.texts().collect::<Vec<_>>(), vec!["Book", "DVD"]);
}

#[test]
fn empty_legend_or_bounds_draw_nothing() {
    let mut surface = RecordingSurface::new();
    Legend::default().draw(&mut surface, Rect::from_ltwh(0, 0, 80, 200), &Font::default(), &Theme::classic());

    let mut legend = Legend::default();
    legend.insert(Color::RED, "Book");
    legend.draw(&mut surface, Rect::EMPTY, &Font::default(), &Theme::classic());
    assert!(surface.commands.is_empty());
}

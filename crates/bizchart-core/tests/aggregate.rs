// File: crates/bizchart-core/tests/aggregate.rs
// Purpose: Aggregation totals, extremes, category resolution and pie color assignment.

use bizchart_core::{aggregate, ChartFamily, Color, DataSource, Record};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn ragged() -> DataSource {
    let mut ds = DataSource::new("Ragged");
    ds.add_series("A", [("a", 1.0), ("b", 2.0), ("c", 3.0)], None);
    ds.add_series("B", [("x", 4.0), ("y", 5.0)], None);
    ds
}

#[test]
fn totals_over_ragged_records() {
    let mut ds = ragged();
    let agg = aggregate(&mut ds, ChartFamily::Coordinate, &mut StdRng::seed_from_u64(1));
    let info = &agg.info;

    assert_eq!(info.max_entity_count, 3);
    assert_eq!(info.record_count, 2);
    assert_eq!(info.column_total, vec![5.0, 7.0, 3.0]);
    assert_eq!(info.column_max, vec![4.0, 5.0, 3.0]);
    assert_eq!(info.column_min, vec![0.0, 0.0, 0.0], "extremes are seeded at zero");
    assert_eq!(info.record_total, vec![6.0, 9.0]);
    assert_eq!(info.record_total.len(), info.record_count);
    assert_eq!(info.column_total.len(), info.max_entity_count);
    assert_eq!(info.total, 15.0);
    assert_eq!(info.max_value, 5.0);
    assert_eq!(info.min_value, 0.0);
    assert_eq!(info.column_total_max, 7.0);
    assert_eq!(agg.categories, vec!["a", "b", "c"]);
}

#[test]
fn negative_values_keep_zero_seeded_extremes() {
    let mut ds = DataSource::default();
    ds.add_series("Loss", [("q1", -1.0), ("q2", -2.0)], None);
    let info = aggregate(&mut ds, ChartFamily::Coordinate, &mut StdRng::seed_from_u64(1)).info;

    assert_eq!(info.max_value, 0.0);
    assert_eq!(info.min_value, -2.0);
    assert_eq!(info.record_max, vec![0.0]);
    assert_eq!(info.record_min, vec![-3.0]);
    assert_eq!(info.column_total_max, 0.0);
}

#[test]
fn categories_prefer_explicit_keys_then_first_longest_record() {
    let mut ds = DataSource::default();
    ds.add_series("A", [("a", 1.0), ("b", 1.0)], None);
    ds.add_series("B", [("c", 1.0), ("d", 1.0)], None);
    let agg = aggregate(&mut ds, ChartFamily::Coordinate, &mut StdRng::seed_from_u64(1));
    assert_eq!(agg.categories, vec!["a", "b"], "first record wins a tie");

    let mut explicit = ragged();
    explicit.category_keys = vec!["Q1".into(), "Q2".into()];
    let agg = aggregate(&mut explicit, ChartFamily::Coordinate, &mut StdRng::seed_from_u64(1));
    assert_eq!(agg.categories, vec!["Q1", "Q2"], "explicit keys used verbatim");
    assert_eq!(agg.info.max_entity_count, 3);
}

#[test]
fn empty_dataset_yields_empty_aggregate() {
    let mut ds = DataSource::default();
    let agg = aggregate(&mut ds, ChartFamily::Pie, &mut StdRng::seed_from_u64(1));
    assert_eq!(agg.info.record_count, 0);
    assert!(agg.info.column_total.is_empty());
    assert!(agg.categories.is_empty());

    // A record with no entities still counts as a record
    ds.add_record(Record::new("Empty"));
    let agg = aggregate(&mut ds, ChartFamily::Coordinate, &mut StdRng::seed_from_u64(1));
    assert_eq!(agg.info.record_count, 1);
    assert_eq!(agg.info.record_total, vec![0.0]);
    assert_eq!(agg.info.max_entity_count, 0);
}

#[test]
fn pie_family_assigns_missing_colors_once() {
    let mut ds = DataSource::default();
    let rec = ds.add_record(Record::new("Share"));
    rec.push("a", 1.0);
    rec.push_colored("b", 2.0, Color::RED);
    rec.push("c", 3.0);

    let mut coordinate = ds.clone();
    aggregate(&mut coordinate, ChartFamily::Coordinate, &mut StdRng::seed_from_u64(3));
    assert!(coordinate.records[0].entities[0].color().is_none(), "coordinate charts assign nothing");

    aggregate(&mut ds, ChartFamily::Pie, &mut StdRng::seed_from_u64(3));
    let entities = &ds.records[0].entities;
    assert!(entities.iter().all(|e| e.color().is_some()));
    assert_eq!(entities[1].color(), Some(Color::RED), "explicit color kept");

    let first_pass = ds.clone();
    aggregate(&mut ds, ChartFamily::Pie, &mut StdRng::seed_from_u64(99));
    assert_eq!(ds, first_pass, "second pass changes nothing");
}

#[test]
fn seeded_rng_is_reproducible() {
    let build = || {
        let mut ds = DataSource::default();
        ds.add_series("Share", [("a", 1.0), ("b", 2.0)], None);
        aggregate(&mut ds, ChartFamily::Pie, &mut StdRng::seed_from_u64(42));
        ds
    };
    assert_eq!(build(), build());
}

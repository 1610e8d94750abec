// File: crates/bizchart-core/src/aggregate.rs
// Summary: Aggregation pass: per-category/per-record totals and extremes, resolved
// category keys, and pie-family color auto-assignment.

use rand::Rng;
use tracing::{debug, warn};

use crate::chart_type::ChartFamily;
use crate::color::Color;
use crate::model::DataSource;

/// Derived totals and extremes used for scaling.
///
/// Column vectors are indexed by category position (length = longest record),
/// record vectors by record position. All extremes are seeded at 0, so datasets
/// that are entirely negative report `max_value == 0` and a `record_max` of 0.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataInfo {
    pub max_entity_count: usize,
    pub record_count: usize,

    pub column_total: Vec<f64>,
    pub column_max: Vec<f64>,
    pub column_min: Vec<f64>,

    pub record_total: Vec<f64>,
    pub record_max: Vec<f64>,
    pub record_min: Vec<f64>,

    pub total: f64,
    pub max_value: f64,
    pub min_value: f64,
    pub column_total_max: f64,

    /// Top gridline value; filled in from the ruler for coordinate charts.
    pub y_rule_max: f64,
    pub y_rule_min: f64,
}

/// Immutable snapshot produced by one aggregation pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Aggregate {
    pub info: DataInfo,
    pub categories: Vec<String>,
}

impl Aggregate {
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }
}

/// Aggregate `source` for a chart of the given family.
///
/// For the pie family every entity without a color gets a uniformly random one
/// from `rng`, persisted into its style. Colors already set are left alone, so a
/// second pass over the same source assigns nothing new.
pub fn aggregate<R: Rng + ?Sized>(source: &mut DataSource, family: ChartFamily, rng: &mut R) -> Aggregate {
    if source.records.is_empty() {
        debug!("aggregate: empty dataset");
        return Aggregate::default();
    }

    if family == ChartFamily::Pie {
        assign_missing_colors(source, rng);
    }

    let max_entity_count = source.records.iter().map(|r| r.entities.len()).max().unwrap_or(0);
    let record_count = source.records.len();

    let mut info = DataInfo {
        max_entity_count,
        record_count,
        column_total: vec![0.0; max_entity_count],
        column_max: vec![0.0; max_entity_count],
        column_min: vec![0.0; max_entity_count],
        record_total: vec![0.0; record_count],
        record_max: vec![0.0; record_count],
        record_min: vec![0.0; record_count],
        ..DataInfo::default()
    };

    for (p, record) in source.records.iter().enumerate() {
        let mut record_total = 0.0;
        for (i, entity) in record.entities.iter().enumerate() {
            let v = entity.value;
            record_total += v;
            info.column_total[i] += v;
            info.column_max[i] = info.column_max[i].max(v);
            info.column_min[i] = info.column_min[i].min(v);
            info.max_value = info.max_value.max(v);
            info.min_value = info.min_value.min(v);
        }
        info.record_total[p] = record_total;
        info.record_max[p] = info.record_max[p].max(record_total);
        info.record_min[p] = info.record_min[p].min(record_total);
        info.total += record_total;
    }

    info.column_total_max = info.column_total.iter().copied().fold(0.0, f64::max);

    let categories = resolve_categories(source);

    debug!(
        records = record_count,
        categories = categories.len(),
        max_value = info.max_value,
        column_total_max = info.column_total_max,
        "aggregated dataset"
    );

    Aggregate { info, categories }
}

/// Explicit keys verbatim, otherwise the keys of the longest record
/// (first one wins on ties).
fn resolve_categories(source: &DataSource) -> Vec<String> {
    if !source.category_keys.is_empty() {
        let longest = source.records.iter().map(|r| r.entities.len()).max().unwrap_or(0);
        if source.category_keys.len() != longest {
            warn!(
                keys = source.category_keys.len(),
                longest_record = longest,
                "explicit category keys do not match the longest record"
            );
        }
        return source.category_keys.clone();
    }

    let mut longest: Option<&crate::model::Record> = None;
    for record in &source.records {
        if longest.map_or(true, |l| record.entities.len() > l.entities.len()) {
            longest = Some(record);
        }
    }
    longest
        .map(|r| r.entities.iter().map(|e| e.key.clone()).collect())
        .unwrap_or_default()
}

fn assign_missing_colors<R: Rng + ?Sized>(source: &mut DataSource, rng: &mut R) {
    let mut assigned = 0usize;
    for entity in source.records.iter_mut().flat_map(|r| r.entities.iter_mut()) {
        let style = entity.style_mut();
        if style.color.is_none() {
            style.color = Some(Color::random(rng));
            assigned += 1;
        }
    }
    if assigned > 0 {
        debug!(assigned, "assigned random pie colors");
    }
}

// File: crates/bizchart-render-skia/tests/smoke.rs
// Purpose: End-to-end render of every chart type to PNG bytes and files.

use bizchart_core::{Chart, ChartType, Color, DataSource};
use bizchart_render_skia::{RenderOptions, RenderToPng};

fn sample() -> DataSource {
    let mut ds = DataSource::new("Smoke");
    let years = ["2005", "2006", "2007", "2008"];
    ds.add_series("Book", years.iter().copied().zip([300.0, 450.0, 500.0, 530.0]), Some(Color::OLIVE_DRAB));
    ds.add_series("DVD", years.iter().copied().zip([320.0, 410.0, 560.0, 595.0]), None);
    ds
}

#[test]
fn every_chart_type_encodes_png() {
    let opts = RenderOptions { width: 320, height: 200, ..RenderOptions::default() };
    for kind in ChartType::ALL {
        let mut chart = Chart::with_seed(kind, 7);
        chart.set_data_source(sample());
        let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
        assert!(bytes.starts_with(&[137, 80, 78, 71]), "{kind}: should be PNG header");

        let img = image::load_from_memory(&bytes).expect("decode png");
        assert_eq!((img.width(), img.height()), (320, 200), "{kind}: size");
    }
}

#[test]
fn render_to_file_and_empty_chart() {
    let out = std::path::PathBuf::from("target/test_out/smoke_line.png");
    let mut chart = Chart::with_seed(ChartType::Line, 1);
    chart.set_data_source(sample());
    chart.render_to_png(&RenderOptions::default(), &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // No dataset: border only, still a valid image
    let mut empty = Chart::default();
    let bytes = empty.render_to_png_bytes(&RenderOptions::default()).expect("render empty");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn zero_size_is_rejected() {
    let mut chart = Chart::default();
    let opts = RenderOptions { width: 0, ..RenderOptions::default() };
    assert!(chart.render_to_png_bytes(&opts).is_err());
}

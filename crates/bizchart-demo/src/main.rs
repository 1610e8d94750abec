// File: crates/bizchart-demo/src/main.rs
// Summary: Demo builds a sales dataset (or loads one from CSV) and renders every chart type to PNGs.

use anyhow::{Context, Result};
use bizchart_core::{theme, Chart, ChartOptions, ChartType, Color, DataSource, LineCap, Record};
use bizchart_render_skia::{RenderOptions, RenderToPng};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Usage: bizchart-demo [csv-path|-] [theme-name]
    let mut args = std::env::args().skip(1);
    let source = match args.next().filter(|a| a != "-") {
        Some(raw) => {
            let path = PathBuf::from(raw);
            load_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => sample_source(),
    };
    let theme = theme::find(args.next().as_deref().unwrap_or("classic"));
    info!(records = source.records.len(), theme = theme.name, "dataset ready");

    if source.is_empty() {
        anyhow::bail!("no records loaded; expected columns record,key,value[,color]");
    }

    let options = ChartOptions { theme, show_entity_name: true, ..ChartOptions::default() };
    let opts = RenderOptions::default();
    let out_dir = PathBuf::from("target/out");

    for kind in ChartType::ALL {
        let mut chart = Chart::new(kind);
        chart.set_options(options.clone());
        chart.set_data_source(source.clone());
        let out = out_dir.join(format!("chart_{}.png", kind.name()));
        chart.render_to_png(&opts, &out)?;
        println!("Wrote {}", out.display());
    }
    Ok(())
}

/// Three product lines over seven years.
fn sample_source() -> DataSource {
    let mut ds = DataSource::new("BizChart Demo Chart");
    ds.x_title = Some("Year".to_string());
    ds.y_title = Some("Count".to_string());

    let years = 2005..=2011;
    let book = ds.add_series(
        "Book",
        years.clone().zip([300.0, 450.0, 500.0, 530.0, 680.0, 890.0, 1330.0]),
        Some(Color::OLIVE_DRAB),
    );
    if let Some(last) = book.entities.get_mut(6) {
        last.style_mut().end_cap = LineCap::DiamondAnchor;
    }
    ds.add_series("Software", years.clone().zip([110.0, 150.0, 180.0, 378.0, 750.0, 1290.0, 1630.0]), Some(Color::ORCHID));
    ds.add_series("DVD", years.zip([320.0, 410.0, 560.0, 595.0, 600.0, 670.0, 820.0]), Some(Color::SADDLE_BROWN));
    ds
}

/// Long-format CSV: one row per entity, records in first-seen order.
fn load_csv(path: &Path) -> Result<DataSource> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let caption = path.file_stem().and_then(|s| s.to_str()).unwrap_or("BizChart").to_string();
    let mut ds = DataSource::new(caption);

    for (line, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let (Some(name), Some(key), Some(raw)) = (rec.get(0), rec.get(1), rec.get(2)) else {
            warn!(line, "short row skipped");
            continue;
        };
        let value: f64 = raw.parse().with_context(|| format!("row {line}: bad value '{raw}'"))?;
        let color = match rec.get(3).filter(|c| !c.is_empty()) {
            Some(c) => Some(c.parse::<Color>().with_context(|| format!("row {line}: bad color '{c}'"))?),
            None => None,
        };

        let idx = match ds.records.iter().position(|r| r.key == name) {
            Some(idx) => idx,
            None => {
                let record = Record::new(name).with_color(color.unwrap_or_else(|| ds.unused_color()));
                ds.add_record(record);
                ds.records.len() - 1
            }
        };
        // A row color also colors its entity (pie slices, value labels)
        match color {
            Some(c) => ds.records[idx].push_colored(key, value, c),
            None => ds.records[idx].push(key, value),
        };
    }
    Ok(ds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_row_colors_reach_entities() {
        let dir = std::env::temp_dir().join(format!("bizchart-demo-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("share.csv");
        std::fs::write(
            &path,
            "record,key,value,color\nShare,North,10,#ff0000\nShare,South,20,#0000ff\nShare,East,30\nOther,North,5\n",
        )
        .unwrap();

        let ds = load_csv(&path).expect("load csv");
        assert_eq!(ds.caption, "share");
        assert_eq!(ds.records.len(), 2);
        let share = &ds.records[0];
        assert_eq!(share.color, Color::RED);
        let colors: Vec<_> = share.entities.iter().map(|e| e.color()).collect();
        assert_eq!(colors, vec![Some(Color::RED), Some(Color::BLUE), None]);
        assert_eq!(ds.records[1].entities[0].value, 5.0);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn bad_value_is_reported() {
        let dir = std::env::temp_dir().join(format!("bizchart-demo-bad-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.csv");
        std::fs::write(&path, "record,key,value\nShare,North,lots\n").unwrap();
        assert!(load_csv(&path).is_err());
        std::fs::remove_dir_all(&dir).ok();
    }
}

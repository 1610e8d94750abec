// File: crates/bizchart-core/tests/model.rs
// Purpose: Parsing and conversion of dataset style values, chart types and options.

use bizchart_core::{theme, ChartError, ChartType, Color, DashStyle, DataSource, LineCap, ValueFormat};

#[test]
fn line_cap_codes_and_names() {
    assert_eq!(LineCap::try_from(0x13u8).unwrap(), LineCap::DiamondAnchor);
    assert_eq!(LineCap::DiamondAnchor.code(), 0x13);
    assert_eq!(LineCap::try_from(0xffu8).unwrap(), LineCap::Custom);
    for cap in [LineCap::Flat, LineCap::Round, LineCap::ArrowAnchor, LineCap::Custom] {
        assert_eq!(LineCap::try_from(cap.code()).unwrap(), cap);
    }

    assert_eq!("Diamond".parse::<LineCap>().unwrap(), LineCap::DiamondAnchor);
    assert_eq!("round_anchor".parse::<LineCap>().unwrap(), LineCap::RoundAnchor);

    let err = LineCap::try_from(0x42u8).unwrap_err();
    assert!(matches!(err, ChartError::InvalidArgument(_)));
    assert!("spiral".parse::<LineCap>().is_err());
}

#[test]
fn dash_style_codes() {
    assert_eq!(DashStyle::try_from(0u8).unwrap(), DashStyle::Solid);
    assert_eq!(DashStyle::try_from(4u8).unwrap(), DashStyle::DashDotDot);
    assert!(DashStyle::try_from(5u8).is_err());
}

#[test]
fn chart_type_names() {
    for kind in ChartType::ALL {
        assert_eq!(kind.name().parse::<ChartType>().unwrap(), kind);
    }
    assert_eq!("StackedPercentColumn".parse::<ChartType>().unwrap(), ChartType::StackedPercentColumn);
    assert_eq!(ChartType::Pie3D.to_string(), "pie-3d");
    assert!(ChartType::ExplodedPie.is_pie());
    assert!(!ChartType::LineArea.is_pie());
    assert!(matches!("donut".parse::<ChartType>(), Err(ChartError::InvalidArgument(_))));
}

#[test]
fn color_parsing() {
    assert_eq!("#6b8e23".parse::<Color>().unwrap(), Color::OLIVE_DRAB);
    assert_eq!("80FF0000".parse::<Color>().unwrap(), Color::RED.with_alpha(0x80));
    assert!("#12345".parse::<Color>().is_err());
    assert!("#gggggg".parse::<Color>().is_err());
}

#[test]
fn lighten_moves_toward_white() {
    let c = Color::from_rgb(0, 100, 200).lighten();
    assert!(c.r > 0 && c.g > 100 && c.b > 200);
    assert_eq!(Color::WHITE.lighten(), Color::WHITE);
}

#[test]
fn series_take_unused_palette_colors() {
    let mut ds = DataSource::default();
    ds.add_series("A", [("x", 1.0)], None);
    ds.add_series("B", [("x", 1.0)], Some(Color::DARK_BLUE));
    ds.add_series("C", [("x", 1.0)], None);
    let colors: Vec<_> = ds.records.iter().map(|r| r.color).collect();
    assert_eq!(colors, vec![Color::ORANGE, Color::DARK_BLUE, Color::DARK_GREEN]);
}

#[test]
fn value_formats() {
    assert_eq!(ValueFormat::Integer.format(1499.9), "1499");
    assert_eq!(ValueFormat::Float2.format(2.5), "2.50");
    assert_eq!(ValueFormat::Double.format(0.125), "0.125");
    assert_eq!(ValueFormat::Percent.format(0.25), "25%");
}

#[test]
fn theme_lookup_falls_back_to_classic() {
    assert_eq!(theme::find("dark").name, "dark");
    assert_eq!(theme::find("no-such-theme"), theme::Theme::classic());
    assert_eq!(theme::presets().len(), 3);
}

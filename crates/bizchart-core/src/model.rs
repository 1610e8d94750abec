// File: crates/bizchart-core/src/model.rs
// Summary: Dataset model: entities (points), records (series) and the data source.
// Notes:
// - Plain records; the only core-driven mutation is the pie-family color
//   assignment written into `EntityStyle::color` during aggregation.

use std::str::FromStr;

use crate::color::{self, Color};
use crate::error::ChartError;

/// Dash pattern of a line segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashStyle {
    #[default]
    Solid,
    Dash,
    Dot,
    DashDot,
    DashDotDot,
}

impl TryFrom<u8> for DashStyle {
    type Error = ChartError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Ok(match code {
            0 => DashStyle::Solid,
            1 => DashStyle::Dash,
            2 => DashStyle::Dot,
            3 => DashStyle::DashDot,
            4 => DashStyle::DashDotDot,
            other => return Err(ChartError::invalid(format!("dash style code {other}"))),
        })
    }
}

/// Line cap kinds. Codes follow the GDI+ numbering so that styles exported
/// from other charting tools map one to one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineCap {
    #[default]
    Flat,
    Square,
    Round,
    Triangle,
    NoAnchor,
    SquareAnchor,
    RoundAnchor,
    DiamondAnchor,
    ArrowAnchor,
    Custom,
}

impl LineCap {
    pub const fn code(&self) -> u8 {
        match self {
            LineCap::Flat => 0x00,
            LineCap::Square => 0x01,
            LineCap::Round => 0x02,
            LineCap::Triangle => 0x03,
            LineCap::NoAnchor => 0x10,
            LineCap::SquareAnchor => 0x11,
            LineCap::RoundAnchor => 0x12,
            LineCap::DiamondAnchor => 0x13,
            LineCap::ArrowAnchor => 0x14,
            LineCap::Custom => 0xff,
        }
    }
}

impl TryFrom<u8> for LineCap {
    type Error = ChartError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Ok(match code {
            0x00 => LineCap::Flat,
            0x01 => LineCap::Square,
            0x02 => LineCap::Round,
            0x03 => LineCap::Triangle,
            0x10 => LineCap::NoAnchor,
            0x11 => LineCap::SquareAnchor,
            0x12 => LineCap::RoundAnchor,
            0x13 => LineCap::DiamondAnchor,
            0x14 => LineCap::ArrowAnchor,
            0xff => LineCap::Custom,
            other => return Err(ChartError::invalid(format!("line cap code {other:#04x}"))),
        })
    }
}

impl FromStr for LineCap {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        Ok(match key.as_str() {
            "flat" => LineCap::Flat,
            "square" => LineCap::Square,
            "round" => LineCap::Round,
            "triangle" => LineCap::Triangle,
            "noanchor" => LineCap::NoAnchor,
            "squareanchor" => LineCap::SquareAnchor,
            "roundanchor" => LineCap::RoundAnchor,
            "diamond" | "diamondanchor" => LineCap::DiamondAnchor,
            "arrowanchor" => LineCap::ArrowAnchor,
            "custom" => LineCap::Custom,
            _ => return Err(ChartError::invalid(format!("line cap '{s}'"))),
        })
    }
}

/// Per-entity drawing overrides.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EntityStyle {
    /// `None` means "not set"; pie-family aggregation fills it in.
    pub color: Option<Color>,
    pub line_style: DashStyle,
    pub start_cap: LineCap,
    pub end_cap: LineCap,
}

impl EntityStyle {
    pub fn with_color(color: Color) -> Self {
        Self { color: Some(color), ..Self::default() }
    }

    /// True when the end cap asks for a marker instead of a flat end.
    pub fn has_custom_end_cap(&self) -> bool {
        self.end_cap != LineCap::Flat
    }
}

/// One named value within a record.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    pub key: String,
    pub value: f64,
    pub comment: Option<String>,
    pub style: Option<EntityStyle>,
}

impl Entity {
    pub fn new(key: impl Into<String>, value: f64) -> Self {
        Self { key: key.into(), value, comment: None, style: None }
    }

    pub fn with_style(mut self, style: EntityStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn color(&self) -> Option<Color> {
        self.style.and_then(|s| s.color)
    }

    /// Mutable style, created with defaults when absent.
    pub fn style_mut(&mut self) -> &mut EntityStyle {
        self.style.get_or_insert_with(EntityStyle::default)
    }
}

/// A series: an ordered, styled collection of entities.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub key: String,
    pub color: Color,
    pub line_weight: f32,
    pub entities: Vec<Entity>,
}

impl Default for Record {
    fn default() -> Self {
        Self { key: String::new(), color: Color::BLUE, line_weight: 1.0, entities: Vec::new() }
    }
}

impl Record {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into(), ..Self::default() }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_line_weight(mut self, weight: f32) -> Self {
        self.line_weight = weight;
        self
    }

    pub fn push(&mut self, key: impl Into<String>, value: f64) -> &mut Entity {
        self.entities.push(Entity::new(key, value));
        let last = self.entities.len() - 1;
        &mut self.entities[last]
    }

    pub fn push_colored(&mut self, key: impl Into<String>, value: f64, color: Color) -> &mut Entity {
        let entity = self.push(key, value);
        entity.style = Some(EntityStyle::with_color(color));
        entity
    }

    pub fn len(&self) -> usize { self.entities.len() }
    pub fn is_empty(&self) -> bool { self.entities.is_empty() }
}

/// The full chart dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct DataSource {
    pub caption: String,
    pub x_title: Option<String>,
    pub y_title: Option<String>,
    /// Explicit category keys; empty means "derive from the longest record".
    pub category_keys: Vec<String>,
    pub records: Vec<Record>,
}

impl Default for DataSource {
    fn default() -> Self {
        Self {
            caption: "BizChart".to_string(),
            x_title: None,
            y_title: None,
            category_keys: Vec::new(),
            records: Vec::new(),
        }
    }
}

impl DataSource {
    pub fn new(caption: impl Into<String>) -> Self {
        Self { caption: caption.into(), ..Self::default() }
    }

    pub fn add_record(&mut self, record: Record) -> &mut Record {
        self.records.push(record);
        let last = self.records.len() - 1;
        &mut self.records[last]
    }

    /// Append a record built from `(key, value)` pairs. Without an explicit
    /// color the first palette color no other record uses is taken.
    pub fn add_series<K, I>(&mut self, title: impl Into<String>, values: I, color: Option<Color>) -> &mut Record
    where
        K: ToString,
        I: IntoIterator<Item = (K, f64)>,
    {
        let color = color.unwrap_or_else(|| self.unused_color());
        let mut record = Record::new(title).with_color(color);
        for (k, v) in values {
            record.push(k.to_string(), v);
        }
        self.add_record(record)
    }

    pub fn unused_color(&self) -> Color {
        let used: Vec<Color> = self.records.iter().map(|r| r.color).collect();
        color::first_unused(&used)
    }

    pub fn is_empty(&self) -> bool { self.records.is_empty() }
}

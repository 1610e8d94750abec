// File: crates/bizchart-core/src/types.rs
// Summary: Shared types and constants (surface sizes, margins, value formats).

/// Default surface width in pixels.
pub const WIDTH: i32 = 800;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 500;

/// Chart margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Same inset on every side.
    pub const fn uniform(v: u32) -> Self {
        Self::new(v, v, v, v)
    }
}

/// How numeric values are rendered as text (axis labels, value labels).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ValueFormat {
    /// Truncated toward zero, no decimals.
    #[default]
    Integer,
    Float2,
    /// Shortest round-trip representation.
    Double,
    /// Value taken as a fraction; `0.25` renders `25%`.
    Percent,
}

impl ValueFormat {
    pub fn format(&self, v: f64) -> String {
        match self {
            ValueFormat::Integer => format!("{}", v.trunc() as i64),
            ValueFormat::Float2 => format!("{:.2}", v),
            ValueFormat::Double => format!("{}", v),
            ValueFormat::Percent => format!("{}%", (v * 100.0).round() as i64),
        }
    }
}

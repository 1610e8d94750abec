// File: crates/bizchart-core/src/lib.rs
// Summary: Core library entry point; exports the dataset model, aggregation,
// layout, ruler, renderers and the chart host object.

pub mod aggregate;
pub mod chart;
pub mod chart_type;
pub mod color;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod legend;
pub mod model;
pub mod render;
pub mod scale;
pub mod surface;
pub mod theme;
pub mod types;

pub use aggregate::{aggregate, Aggregate, DataInfo};
pub use chart::{Chart, ChartOptions, Fonts};
pub use chart_type::{ChartFamily, ChartType};
pub use color::Color;
pub use error::ChartError;
pub use geometry::{PointF, Rect, RectF, SizeF};
pub use layout::{Layout, LayoutParams, PlotArea};
pub use legend::{Legend, LegendEntry};
pub use model::{DashStyle, DataSource, Entity, EntityStyle, LineCap, Record};
pub use render::{renderer_for, ChartRenderer};
pub use scale::{calc_factor, Ruler};
pub use surface::{DrawCommand, EndMarker, Font, LinearGradient, RecordingSurface, Stroke, Surface, TextAlign};
pub use theme::Theme;
pub use types::{Insets, ValueFormat};

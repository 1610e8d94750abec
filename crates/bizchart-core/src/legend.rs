// File: crates/bizchart-core/src/legend.rs
// Summary: Color-to-label legend: construction per chart family and stacked drawing.

use crate::chart_type::ChartFamily;
use crate::color::Color;
use crate::geometry::{Rect, RectF};
use crate::model::DataSource;
use crate::surface::{Font, Surface, TextAlign};
use crate::theme::Theme;

const MIN_ROW_HEIGHT: f32 = 20.0;
const SWATCH: f32 = 12.0;
const TEXT_GUTTER: f32 = 20.0;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegendEntry {
    pub color: Color,
    pub label: String,
}

/// Ordered color-keyed mapping. Inserting a color that is already present
/// replaces its label and keeps its position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Legend {
    entries: Vec<LegendEntry>,
}

impl Legend {
    pub fn insert(&mut self, color: Color, label: impl Into<String>) {
        let label = label.into();
        match self.entries.iter_mut().find(|e| e.color == color) {
            Some(existing) => existing.label = label,
            None => self.entries.push(LegendEntry { color, label }),
        }
    }

    pub fn get(&self, color: Color) -> Option<&str> {
        self.entries.iter().find(|e| e.color == color).map(|e| e.label.as_str())
    }

    pub fn entries(&self) -> &[LegendEntry] { &self.entries }
    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Records for coordinate charts; entities of the first record for pies.
    pub fn build(source: &DataSource, family: ChartFamily) -> Self {
        let mut legend = Legend::default();
        match family {
            ChartFamily::Coordinate => {
                for record in &source.records {
                    legend.insert(record.color, record.key.clone());
                }
            }
            ChartFamily::Pie => {
                if let Some(first) = source.records.first() {
                    for entity in &first.entities {
                        let color = entity.color().unwrap_or(first.color);
                        legend.insert(color, entity.key.clone());
                    }
                }
            }
        }
        legend
    }

    /// Rows stacked top to bottom and centered vertically in `bounds`.
    pub fn draw(&self, surface: &mut dyn Surface, bounds: Rect, font: &Font, theme: &Theme) {
        if self.entries.is_empty() || !bounds.is_drawable() {
            return;
        }
        let b = bounds.to_f32();
        let heights: Vec<f32> = self
            .entries
            .iter()
            .map(|e| surface.measure_string(&e.label, font, Some(b.width() - TEXT_GUTTER)).height.max(MIN_ROW_HEIGHT))
            .collect();
        let total: f32 = heights.iter().sum();

        let mut y = b.top + (b.height() - total) / 2.0;
        for (entry, h) in self.entries.iter().zip(heights) {
            let swatch = RectF::from_ltwh(b.left, y, SWATCH, SWATCH);
            surface.fill_rect(entry.color, swatch);
            let text = RectF::from_ltwh(swatch.right + 2.0, y, b.width(), h);
            surface.draw_string(&entry.label, font, theme.legend_text, text, TextAlign::Near);
            y += h;
        }
    }
}

// File: crates/bizchart-core/src/chart_type.rs
// Summary: Closed enumeration of chart types and their family (coordinate vs pie).

use std::fmt;
use std::str::FromStr;

use crate::error::ChartError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ChartType {
    #[default]
    Line,
    LinePoint,
    LineArea,
    Column,
    StackedColumn,
    StackedPercentColumn,
    Pie,
    ExplodedPie,
    /// Experimental pseudo-depth pie outline.
    Pie3D,
}

/// Charts on shared x/y axes versus the single-record angular charts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartFamily {
    Coordinate,
    Pie,
}

impl ChartType {
    pub const ALL: [ChartType; 9] = [
        ChartType::Line,
        ChartType::LinePoint,
        ChartType::LineArea,
        ChartType::Column,
        ChartType::StackedColumn,
        ChartType::StackedPercentColumn,
        ChartType::Pie,
        ChartType::ExplodedPie,
        ChartType::Pie3D,
    ];

    pub const fn family(&self) -> ChartFamily {
        match self {
            ChartType::Pie | ChartType::ExplodedPie | ChartType::Pie3D => ChartFamily::Pie,
            _ => ChartFamily::Coordinate,
        }
    }

    pub const fn is_pie(&self) -> bool {
        matches!(self.family(), ChartFamily::Pie)
    }

    pub const fn name(&self) -> &'static str {
        match self {
            ChartType::Line => "line",
            ChartType::LinePoint => "line-point",
            ChartType::LineArea => "line-area",
            ChartType::Column => "column",
            ChartType::StackedColumn => "stacked-column",
            ChartType::StackedPercentColumn => "stacked-percent-column",
            ChartType::Pie => "pie",
            ChartType::ExplodedPie => "exploded-pie",
            ChartType::Pie3D => "pie-3d",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChartType {
    type Err = ChartError;

    /// Case-insensitive; `-`, `_` and spaces are ignored ("StackedColumn", "stacked_column").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = |v: &str| -> String {
            v.chars().filter(|c| !matches!(c, '-' | '_' | ' ')).flat_map(char::to_lowercase).collect()
        };
        let wanted = norm(s);
        ChartType::ALL
            .into_iter()
            .find(|t| norm(t.name()) == wanted)
            .ok_or_else(|| ChartError::invalid(format!("chart type '{s}'")))
    }
}

// File: crates/heatmap-core/src/cell.rs
// Summary: Maps one record onto its screen rectangle, fill color and tooltip.

use std::fmt;

use crate::dataset::Record;
use crate::error::Result;
use crate::geometry::RectF;
use crate::palette::{color_for, Rgb};
use crate::scale::Scales;
use crate::types::month_name;

/// Hover text for one cell.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub year: i32,
    pub month_name: &'static str,
    /// Baseline plus variance, rounded to three decimals.
    pub temperature: f64,
    pub variance: f64,
}

impl Tooltip {
    pub fn new(record: &Record, base_temperature: f64) -> Result<Self> {
        Ok(Self {
            year: record.year,
            month_name: month_name(record.year, record.month)?,
            temperature: round3(record.temperature(base_temperature)),
            variance: record.variance,
        })
    }

    pub fn heading(&self) -> String {
        format!("{} - {}", self.year, self.month_name)
    }

    /// Overlay markup: a heading plus temperature and variance lines.
    pub fn html(&self) -> String {
        format!(
            "<h2>{}</h2><h3>Temperature: {:.3}&#8451;</h3><h3>Variance: {}&#8451;</h3>",
            self.heading(),
            self.temperature,
            self.variance
        )
    }
}

impl fmt::Display for Tooltip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\nTemperature: {:.3}℃\nVariance: {}℃",
            self.heading(),
            self.temperature,
            self.variance
        )
    }
}

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub rect: RectF,
    pub color: Rgb,
    pub tooltip: Tooltip,
}

/// Geometry and color for one record.
///
/// The row comes from `record.month`, never from the record's position in the
/// dataset, so irregular or unordered datasets still line up by month.
pub fn map_cell(record: &Record, base_temperature: f64, scales: &Scales) -> Result<Cell> {
    let tooltip = Tooltip::new(record, base_temperature)?;
    let x = scales.x.year_px(record.year)?;
    let y = scales.month_top(record.year, record.month)?;
    Ok(Cell {
        rect: RectF::from_xywh(x, y, scales.column_width, scales.row_height()),
        color: color_for(record.variance),
        tooltip,
    })
}

// File: crates/heatmap-core/src/legend.rs
// Summary: Color legend entries derived from the variance bucket table, plus their layout.

use crate::geometry::RectF;
use crate::palette::{Rgb, BUCKETS};

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    /// Absolute temperature range, e.g. `"6.42 to 6.91"`.
    pub label: String,
    pub color: Rgb,
}

/// One entry per bucket, same order and colors as the cell fills.
/// Labels are absolute temperatures around `base_temperature`.
pub fn entries(base_temperature: f64) -> Vec<LegendEntry> {
    let last = BUCKETS.len() - 1;
    BUCKETS
        .iter()
        .enumerate()
        .map(|(i, b)| {
            let label = if i == 0 {
                format!("< {:.2}", base_temperature + b.upper)
            } else if i == last {
                format!("> {:.2}", base_temperature + BUCKETS[i - 1].upper)
            } else {
                format!(
                    "{:.2} to {:.2}",
                    base_temperature + BUCKETS[i - 1].upper + 0.01,
                    base_temperature + b.upper
                )
            };
            LegendEntry { label, color: b.color }
        })
        .collect()
}

/// Horizontal row of swatches with labels beneath.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendLayout {
    pub origin_x: f64,
    pub origin_y: f64,
    pub swatch_width: f64,
    pub swatch_height: f64,
    pub gap: f64,
}

impl LegendLayout {
    /// Row starting 15px right of the left padding.
    pub fn for_padding(padding: f64, swatch_width: f64) -> Self {
        Self { origin_x: padding + 15.0, origin_y: 10.0, swatch_width, swatch_height: 15.0, gap: 2.0 }
    }

    pub fn swatch(&self, index: usize) -> RectF {
        let x = self.origin_x + index as f64 * (self.swatch_width + self.gap);
        RectF::from_xywh(x, self.origin_y, self.swatch_width, self.swatch_height)
    }

    /// Baseline point for the label under swatch `index` (text centered on x).
    pub fn label_anchor(&self, index: usize) -> (f64, f64) {
        let r = self.swatch(index);
        (r.x + r.width * 0.5, r.bottom() + 13.0)
    }

}

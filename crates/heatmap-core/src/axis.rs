// File: crates/heatmap-core/src/axis.rs
// Summary: Axis model with tick positions and labels for the year and month axes.

use crate::error::Result;
use crate::grid::{integer_ticks, nice_step};
use crate::scale::Scales;
use crate::types::{MONTHS_PER_YEAR, MONTH_NAMES};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Bottom,
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Pixel position along the axis.
    pub pos_px: f64,
    pub label: String,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: Option<String>,
    pub orientation: Orientation,
    pub ticks: Vec<Tick>,
}

/// Default number of year ticks aimed for, as a time axis would pick.
pub const YEAR_TICK_TARGET: usize = 10;

impl Axis {
    /// Bottom axis: January 1st of round years inside the domain.
    pub fn years(scales: &Scales, target: usize) -> Result<Self> {
        let span = (scales.max_year - scales.min_year + 1) as f64;
        let step = nice_step(span, target) as i32;
        let ticks = integer_ticks(scales.min_year, scales.max_year, step)
            .into_iter()
            .map(|year| Ok(Tick { pos_px: scales.x.year_px(year)?, label: year.to_string() }))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { label: Some("Years".to_string()), orientation: Orientation::Bottom, ticks })
    }

    /// Left axis: one month name per band, at the band center.
    pub fn months(scales: &Scales) -> Self {
        let ticks = (0..MONTHS_PER_YEAR)
            .map(|i| Tick { pos_px: scales.y.band_center(i), label: MONTH_NAMES[i].to_string() })
            .collect();
        Self { label: None, orientation: Orientation::Left, ticks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Record;
    use crate::types::Layout;

    #[test]
    fn month_axis_has_twelve_centered_ticks() {
        let scales = Scales::build(&[Record::new(2000, 1, 0.0)], &Layout::default()).unwrap();
        let axis = Axis::months(&scales);
        assert_eq!(axis.ticks.len(), 12);
        assert_eq!(axis.ticks[0].label, "January");
        let h = scales.row_height();
        assert!((axis.ticks[0].pos_px - (50.0 + h / 2.0)).abs() < 1e-9);
    }

    #[test]
    fn year_axis_uses_round_years() {
        let records = [Record::new(1753, 1, 0.0), Record::new(2015, 1, 0.0)];
        let scales = Scales::build(&records, &Layout::default()).unwrap();
        let axis = Axis::years(&scales, YEAR_TICK_TARGET).unwrap();
        let labels: Vec<_> = axis.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels.first(), Some(&"1760"));
        assert_eq!(labels.last(), Some(&"2000"));
        assert!(axis.ticks.windows(2).all(|w| w[0].pos_px < w[1].pos_px));
    }
}

// File: crates/heatmap-core/src/scale.rs
// Summary: Year time scale (X), month band layout (Y) and the builder deriving both from a dataset.

use chrono::NaiveDate;

use crate::dataset::{year_range, Record};
use crate::error::{HeatmapError, Result};
use crate::types::{month_index, Layout, MONTHS_PER_YEAR};

/// January 1st of `year`.
pub fn year_start(year: i32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1).ok_or(HeatmapError::InvalidYear(year))
}

/// December 31st of `year`.
pub fn year_end(year: i32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 12, 31).ok_or(HeatmapError::InvalidYear(year))
}

/// Linear time scale: dates in `[start, end]` map onto `[left_px, right_px]`
/// by elapsed days. Values outside the domain extrapolate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct YearScale {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub left_px: f64,
    pub right_px: f64,
}

impl YearScale {
    pub fn new(start: NaiveDate, end: NaiveDate, left_px: f64, right_px: f64) -> Self {
        Self { start, end, left_px, right_px }
    }

    /// Domain `[Jan 1 min_year, Dec 31 max_year]`.
    pub fn for_years(min_year: i32, max_year: i32, left_px: f64, right_px: f64) -> Result<Self> {
        Ok(Self::new(year_start(min_year)?, year_end(max_year)?, left_px, right_px))
    }

    fn span_days(&self) -> f64 {
        // A one-year domain still spans 364 days; guard degenerate hand-built scales.
        ((self.end - self.start).num_days() as f64).max(1e-9)
    }

    #[inline]
    pub fn to_px(&self, date: NaiveDate) -> f64 {
        let t = (date - self.start).num_days() as f64 / self.span_days();
        self.left_px + t * (self.right_px - self.left_px)
    }

    /// Pixel offset of January 1st of `year`.
    pub fn year_px(&self, year: i32) -> Result<f64> {
        Ok(self.to_px(year_start(year)?))
    }
}

/// Twelve equal horizontal bands, January on top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonthBands {
    pub top_px: f64,
    pub bottom_px: f64,
}

impl MonthBands {
    pub fn new(top_px: f64, bottom_px: f64) -> Self {
        Self { top_px, bottom_px }
    }

    #[inline]
    pub fn band_height(&self) -> f64 {
        (self.bottom_px - self.top_px) / MONTHS_PER_YEAR as f64
    }

    /// Top edge of the band for zero-based `index`.
    #[inline]
    pub fn band_top(&self, index: usize) -> f64 {
        (index % MONTHS_PER_YEAR) as f64 * self.band_height() + self.top_px
    }

    /// Vertical center of the band, where the axis label sits.
    pub fn band_center(&self, index: usize) -> f64 {
        self.band_top(index) + self.band_height() * 0.5
    }

    /// Zero-based band containing `py`, if any.
    pub fn index_at(&self, py: f64) -> Option<usize> {
        if py < self.top_px || py >= self.bottom_px {
            return None;
        }
        Some((((py - self.top_px) / self.band_height()) as usize).min(MONTHS_PER_YEAR - 1))
    }
}

/// Everything derived once per dataset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scales {
    pub x: YearScale,
    pub y: MonthBands,
    pub min_year: i32,
    pub max_year: i32,
    pub num_years: u32,
    /// Width of one year column.
    pub column_width: f64,
}

impl Scales {
    /// Derive the year scale and month bands from all records.
    pub fn build(records: &[Record], layout: &Layout) -> Result<Self> {
        let (min_year, max_year) = year_range(records)?;
        let (left, right) = layout.x_range();
        let x = YearScale::for_years(min_year, max_year, left, right)?;
        let (top, bottom) = layout.y_range();
        let y = MonthBands::new(top, bottom);

        let num_years = (max_year - min_year + 1) as u32;
        let column_width = (layout.width - layout.padding) / num_years as f64;
        tracing::debug!(min_year, max_year, num_years, column_width, "scales derived");

        Ok(Self { x, y, min_year, max_year, num_years, column_width })
    }

    pub fn row_height(&self) -> f64 {
        self.y.band_height()
    }

    /// Top edge of the row for a 1-based calendar month.
    pub fn month_top(&self, year: i32, month: i32) -> Result<f64> {
        Ok(self.y.band_top(month_index(year, month)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_year_domain_is_not_degenerate() {
        let s = YearScale::for_years(2000, 2000, 50.0, 1200.0).unwrap();
        assert_eq!(s.year_px(2000).unwrap(), 50.0);
        assert!((s.to_px(year_end(2000).unwrap()) - 1200.0).abs() < 1e-9);
    }

    #[test]
    fn bands_cover_range_in_month_order() {
        let b = MonthBands::new(50.0, 600.0);
        assert!((b.band_height() - 550.0 / 12.0).abs() < 1e-12);
        assert_eq!(b.band_top(0), 50.0);
        assert!((b.band_top(11) + b.band_height() - 600.0).abs() < 1e-9);
        assert_eq!(b.index_at(50.0), Some(0));
        assert_eq!(b.index_at(599.9), Some(11));
        assert_eq!(b.index_at(49.0), None);
        assert_eq!(b.index_at(600.0), None);
    }

    #[test]
    fn unrepresentable_year_is_rejected() {
        assert!(matches!(year_start(i32::MAX), Err(HeatmapError::InvalidYear(_))));
    }
}

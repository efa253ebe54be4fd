// File: crates/heatmap-core/src/types.rs
// Summary: Shared constants (surface size, paddings) and the calendar month table.

use crate::error::{HeatmapError, Result};

/// Default surface width in pixels.
pub const WIDTH: u32 = 1250;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 650;
/// Padding around the plot area, in pixels.
pub const PADDING: u32 = 50;
/// Offset of the first month band from the top edge (room for the legend).
pub const Y_SPACER: u32 = 50;

/// Element id of the mount point hosting the drawing.
pub const MOUNT_ID: &str = "svg";
/// Page title set once the page is mounted.
pub const PAGE_TITLE: &str = "Heat Map - FCC";

pub const MONTHS_PER_YEAR: usize = 12;

/// Surface dimensions and paddings, in pixels.
/// Contract: `width > 2 * padding` and `height > padding + y_spacer`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub y_spacer: f64,
}

impl Layout {
    pub const fn new(width: f64, height: f64, padding: f64, y_spacer: f64) -> Self {
        Self { width, height, padding, y_spacer }
    }
    /// Horizontal pixel range of the year axis.
    pub fn x_range(&self) -> (f64, f64) { (self.padding, self.width - self.padding) }
    /// Vertical pixel range covered by the twelve month bands.
    pub fn y_range(&self) -> (f64, f64) { (self.y_spacer, self.height - self.padding) }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(WIDTH as f64, HEIGHT as f64, PADDING as f64, Y_SPACER as f64)
    }
}

pub const MONTH_NAMES: [&str; MONTHS_PER_YEAR] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Zero-based band index of a 1-based calendar month.
pub fn month_index(year: i32, month: i32) -> Result<usize> {
    if (1..=MONTHS_PER_YEAR as i32).contains(&month) {
        Ok((month - 1) as usize)
    } else {
        Err(HeatmapError::InvalidMonth { year, month })
    }
}

/// English name of a 1-based calendar month.
pub fn month_name(year: i32, month: i32) -> Result<&'static str> {
    month_index(year, month).map(|i| MONTH_NAMES[i])
}

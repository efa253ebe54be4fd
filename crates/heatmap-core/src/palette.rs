// File: crates/heatmap-core/src/palette.rs
// Summary: RGB color value and the 11-bucket variance color table shared by cells and legend.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Opaque 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed 0xRRGGBB literal.
    pub const fn from_u32(hex: u32) -> Self {
        Self::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// `#RRGGBB`, upper-case.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid color '{0}', expected #RRGGBB")]
pub struct ParseRgbError(pub String);

impl FromStr for Rgb {
    type Err = ParseRgbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ParseRgbError(s.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(Rgb::from_u32)
            .map_err(|_| ParseRgbError(s.to_string()))
    }
}

/// One variance range, `(previous upper, upper]`, and its fill.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bucket {
    /// Inclusive upper bound in °C of variance. The last bucket is unbounded.
    pub upper: f64,
    pub color: Rgb,
}

impl Bucket {
    const fn new(upper: f64, hex: u32) -> Self {
        Self { upper, color: Rgb::from_u32(hex) }
    }

    pub fn is_unbounded(&self) -> bool {
        self.upper == f64::INFINITY
    }
}

/// Ascending bounds; covers the whole real line.
pub const BUCKETS: [Bucket; 11] = [
    Bucket::new(-2.25, 0x550000),
    Bucket::new(-1.75, 0x0500FF),
    Bucket::new(-1.25, 0x00B4FF),
    Bucket::new(-0.75, 0x00FFF4),
    Bucket::new(-0.25, 0x00FF83),
    Bucket::new(0.25, 0x17FF00),
    Bucket::new(0.75, 0xD7FF00),
    Bucket::new(1.25, 0xFFFA00),
    Bucket::new(1.75, 0xFFBE00),
    Bucket::new(2.25, 0xFF0000),
    Bucket::new(f64::INFINITY, 0xFF00D0),
];

/// Index of the first bucket whose upper bound is `>= variance`.
/// NaN compares false against every bound and lands in the last bucket.
pub fn bucket_index(variance: f64) -> usize {
    BUCKETS
        .partition_point(|b| !(variance <= b.upper))
        .min(BUCKETS.len() - 1)
}

pub fn color_for(variance: f64) -> Rgb {
    BUCKETS[bucket_index(variance)].color
}

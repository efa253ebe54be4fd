// File: crates/heatmap-core/src/error.rs
// Summary: Library error type for dataset loading, layout and rendering.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HeatmapError {
    /// No records to derive the year domain from.
    #[error("dataset has no monthly variance records")]
    EmptyDataset,

    #[error("record for year {year} has month {month}; expected 1..=12")]
    InvalidMonth { year: i32, month: i32 },

    #[error("year {0} is outside the supported calendar range")]
    InvalidYear(i32),

    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to parse render config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to format output: {0}")]
    Format(#[from] std::fmt::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = HeatmapError> = std::result::Result<T, E>;

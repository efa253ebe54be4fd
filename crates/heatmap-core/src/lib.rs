// File: crates/heatmap-core/src/lib.rs
// Summary: Core library entry point; exports the dataset model, scales, cell mapping and renderers.

pub mod error;
pub mod types;
pub mod palette;
pub mod dataset;
pub mod source;
pub mod grid;
pub mod geometry;
pub mod scale;
pub mod axis;
pub mod cell;
pub mod legend;
pub mod theme;
pub mod config;
pub mod heatmap;
pub mod svg;
pub mod raster;
pub mod page;

pub use error::{HeatmapError, Result};
pub use dataset::{Dataset, Record};
pub use source::{DataSource, FileSource, ReaderSource, StaticSource};
pub use scale::{MonthBands, Scales, YearScale};
pub use axis::Axis;
pub use cell::{map_cell, Cell, Tooltip};
pub use palette::{color_for, Rgb, BUCKETS};
pub use legend::LegendEntry;
pub use theme::Theme;
pub use config::RenderOptions;
pub use heatmap::HeatMap;
pub use page::{HtmlPage, PageChrome};
pub use types::Layout;

// File: crates/heatmap-core/src/config.rs
// Summary: Render options with defaults matching the original page, loadable from TOML.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::legend::LegendLayout;
use crate::theme::{self, Theme};
use crate::types::{Layout, HEIGHT, PADDING, PAGE_TITLE, WIDTH, Y_SPACER};

/// Everything a render needs besides the dataset.
///
/// Every field falls back to its default when omitted from the TOML file.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub padding: u32,
    pub y_spacer: u32,
    /// Theme preset name; unknown names fall back to light.
    pub theme: String,
    /// Text (axis labels, ticks, legend) on or off; raster snapshots turn it off.
    pub draw_labels: bool,
    pub draw_legend: bool,
    pub legend_swatch_width: f64,
    /// Rough number of year ticks on the bottom axis.
    pub year_ticks: usize,
    pub title: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            padding: PADDING,
            y_spacer: Y_SPACER,
            theme: "light".to_string(),
            draw_labels: true,
            draw_legend: true,
            legend_swatch_width: 100.0,
            year_ticks: crate::axis::YEAR_TICK_TARGET,
            title: PAGE_TITLE.to_string(),
        }
    }
}

impl RenderOptions {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn layout(&self) -> Layout {
        Layout::new(self.width as f64, self.height as f64, self.padding as f64, self.y_spacer as f64)
    }

    pub fn theme(&self) -> Theme {
        theme::find(&self.theme)
    }

    pub fn legend_layout(&self) -> LegendLayout {
        LegendLayout::for_padding(self.padding as f64, self.legend_swatch_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_surface() {
        let o = RenderOptions::default();
        assert_eq!((o.width, o.height, o.padding, o.y_spacer), (1250, 650, 50, 50));
        assert_eq!(o.title, "Heat Map - FCC");
    }

    #[test]
    fn toml_overrides_individual_fields() {
        let o = RenderOptions::from_toml_str("width = 900\ntheme = \"dark\"\n").unwrap();
        assert_eq!(o.width, 900);
        assert_eq!(o.height, 650);
        assert_eq!(o.theme().name, "dark");
        assert!(o.draw_labels);
    }

    #[test]
    fn bad_toml_is_a_config_error() {
        let err = RenderOptions::from_toml_str("width = \"wide\"").unwrap_err();
        assert!(matches!(err, crate::error::HeatmapError::Config(_)));
    }
}

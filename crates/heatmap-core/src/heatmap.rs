// File: crates/heatmap-core/src/heatmap.rs
// Summary: HeatMap ties a validated dataset to its derived scales and produces cells, axes and legend on demand.

use tracing::info;

use crate::axis::Axis;
use crate::cell::{map_cell, Cell};
use crate::config::RenderOptions;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::legend::{self, LegendEntry};
use crate::scale::Scales;
use crate::source::DataSource;

/// A dataset plus the scales derived from it. Cells are recomputed on each
/// call, nothing is cached beyond the scales.
#[derive(Clone, Debug)]
pub struct HeatMap {
    dataset: Dataset,
    scales: Scales,
    options: RenderOptions,
}

impl HeatMap {
    /// Validate `dataset` and derive its scales for the surface in `options`.
    pub fn new(dataset: Dataset, options: RenderOptions) -> Result<Self> {
        dataset.validate()?;
        let scales = Scales::build(dataset.records(), &options.layout())?;
        info!(
            records = dataset.len(),
            first_year = scales.min_year,
            last_year = scales.max_year,
            "heat map ready"
        );
        Ok(Self { dataset, scales, options })
    }

    /// Fetch once from `source` and build. A failed fetch renders nothing.
    pub fn from_source<S: DataSource>(source: S, options: RenderOptions) -> Result<Self> {
        source.subscribe(|ds| Self::new(ds, options))
    }

    pub fn dataset(&self) -> &Dataset { &self.dataset }
    pub fn scales(&self) -> &Scales { &self.scales }
    pub fn options(&self) -> &RenderOptions { &self.options }

    /// One cell per record, in dataset order.
    pub fn cells(&self) -> impl Iterator<Item = Result<Cell>> + '_ {
        let base = self.dataset.base_temperature;
        self.dataset.records().iter().map(move |r| map_cell(r, base, &self.scales))
    }

    pub fn cell(&self, index: usize) -> Option<Result<Cell>> {
        let r = self.dataset.records().get(index)?;
        Some(map_cell(r, self.dataset.base_temperature, &self.scales))
    }

    /// Topmost cell under a pointer position. Later cells paint over earlier
    /// ones, so the last match wins.
    pub fn hit_test(&self, px: f64, py: f64) -> Option<Cell> {
        let band = self.scales.y.index_at(py)?;
        let base = self.dataset.base_temperature;
        self.dataset
            .records()
            .iter()
            .rev()
            .filter(|r| r.month - 1 == band as i32)
            .filter_map(|r| map_cell(r, base, &self.scales).ok())
            .find(|c| c.rect.contains(px, py))
    }

    pub fn x_axis(&self) -> Result<Axis> {
        Axis::years(&self.scales, self.options.year_ticks)
    }

    pub fn y_axis(&self) -> Axis {
        Axis::months(&self.scales)
    }

    pub fn legend(&self) -> Vec<LegendEntry> {
        legend::entries(self.dataset.base_temperature)
    }
}

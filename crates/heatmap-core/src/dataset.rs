// File: crates/heatmap-core/src/dataset.rs
// Summary: Monthly variance records and the dataset envelope, with JSON parsing and validation.

use serde::Deserialize;

use crate::error::{HeatmapError, Result};
use crate::types::month_index;

/// One temperature-anomaly sample.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Record {
    pub year: i32,
    /// Calendar month, 1..=12.
    pub month: i32,
    /// Offset from the baseline, in °C.
    pub variance: f64,
}

impl Record {
    pub const fn new(year: i32, month: i32, variance: f64) -> Self {
        Self { year, month, variance }
    }

    /// Absolute temperature for this sample.
    pub fn temperature(&self, base_temperature: f64) -> f64 {
        base_temperature + self.variance
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub base_temperature: f64,
    pub monthly_variance: Vec<Record>,
}

impl Dataset {
    pub fn new(base_temperature: f64, monthly_variance: Vec<Record>) -> Self {
        Self { base_temperature, monthly_variance }
    }

    /// Parse and validate a dataset from JSON text.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let ds: Dataset = serde_json::from_str(s)?;
        ds.validate()?;
        Ok(ds)
    }

    /// Parse and validate a dataset from any reader.
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        let ds: Dataset = serde_json::from_reader(reader)?;
        ds.validate()?;
        Ok(ds)
    }

    pub fn records(&self) -> &[Record] {
        &self.monthly_variance
    }

    pub fn len(&self) -> usize {
        self.monthly_variance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monthly_variance.is_empty()
    }

    /// Reject empty datasets and any record whose month is outside 1..=12.
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(HeatmapError::EmptyDataset);
        }
        for r in &self.monthly_variance {
            month_index(r.year, r.month)?;
        }
        Ok(())
    }

    /// Inclusive (min, max) year across all records.
    pub fn year_range(&self) -> Result<(i32, i32)> {
        year_range(&self.monthly_variance)
    }

    /// (min, max) variance across all records, ignoring NaN.
    pub fn variance_range(&self) -> Option<(f64, f64)> {
        let mut it = self.monthly_variance.iter().map(|r| r.variance).filter(|v| !v.is_nan());
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}

pub fn year_range(records: &[Record]) -> Result<(i32, i32)> {
    let min = records.iter().map(|r| r.year).min().ok_or(HeatmapError::EmptyDataset)?;
    let max = records.iter().map(|r| r.year).max().ok_or(HeatmapError::EmptyDataset)?;
    Ok((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "baseTemperature": 8.66,
        "monthlyVariance": [
            {"year": 1753, "month": 1, "variance": -1.366},
            {"year": 1753, "month": 2, "variance": -2.223},
            {"year": 1754, "month": 1, "variance": 0.5}
        ]
    }"#;

    #[test]
    fn parses_camel_case_fields() {
        let ds = Dataset::from_json_str(SAMPLE).unwrap();
        assert_eq!(ds.base_temperature, 8.66);
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.records()[1], Record::new(1753, 2, -2.223));
        assert_eq!(ds.year_range().unwrap(), (1753, 1754));
        assert_eq!(ds.variance_range(), Some((-2.223, 0.5)));
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let err = Dataset::from_json_str(r#"{"baseTemperature": 8.0, "monthlyVariance": []}"#).unwrap_err();
        assert!(matches!(err, HeatmapError::EmptyDataset));
    }

    #[test]
    fn bad_month_rejects_whole_dataset() {
        let err = Dataset::from_json_str(
            r#"{"baseTemperature": 8.0, "monthlyVariance": [
                {"year": 2000, "month": 1, "variance": 0.0},
                {"year": 2000, "month": 13, "variance": 0.0}
            ]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, HeatmapError::InvalidMonth { year: 2000, month: 13 }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Dataset::from_json_str(r#"{"baseTemperature": "warm"}"#).unwrap_err();
        assert!(matches!(err, HeatmapError::Parse(_)));
    }
}

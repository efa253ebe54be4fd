// File: crates/heatmap-core/src/source.rs
// Summary: One-shot dataset sources (file, reader, in-memory) behind a small trait.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::PathBuf;

use crate::dataset::Dataset;
use crate::error::Result;

/// Yields the parsed dataset exactly once.
///
/// `fetch` consumes the source, so a second delivery cannot happen. A failed
/// fetch returns the error to the caller and nothing is rendered.
pub trait DataSource {
    fn fetch(self) -> Result<Dataset>;

    /// Fetch and hand the dataset to `on_data`. The callback never runs on failure.
    fn subscribe<F, T>(self, on_data: F) -> Result<T>
    where
        Self: Sized,
        F: FnOnce(Dataset) -> Result<T>,
    {
        let ds = self.fetch()?;
        on_data(ds)
    }
}

/// JSON file on disk.
#[derive(Clone, Debug)]
pub struct FileSource {
    pub path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DataSource for FileSource {
    fn fetch(self) -> Result<Dataset> {
        let file = File::open(&self.path)?;
        let ds = Dataset::from_reader(BufReader::new(file))?;
        tracing::debug!(path = %self.path.display(), records = ds.len(), "dataset loaded");
        Ok(ds)
    }
}

/// Any byte stream carrying the JSON document (stdin, a response body, ...).
pub struct ReaderSource<R: Read> {
    reader: R,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: Read> DataSource for ReaderSource<R> {
    fn fetch(self) -> Result<Dataset> {
        Dataset::from_reader(self.reader)
    }
}

/// Already-parsed dataset; still validated on fetch.
#[derive(Clone, Debug)]
pub struct StaticSource(pub Dataset);

impl DataSource for StaticSource {
    fn fetch(self) -> Result<Dataset> {
        self.0.validate()?;
        Ok(self.0)
    }
}

#![deny(unsafe_code)]

use std::cell::OnceCell;
use std::path::{Path, PathBuf};

use crate::csv_load::read_dataset;
use crate::dataset::Dataset;
use crate::error::Result;

/// A loadable origin for the commune dataset.
///
/// The engine only sees loaded records; injecting the source here keeps
/// data acquisition out of every consumer.
pub trait DatasetSource {
    fn load(&self) -> Result<Dataset>;
}

/// The static CSV asset on disk.
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetSource for CsvFileSource {
    fn load(&self) -> Result<Dataset> {
        read_dataset(&self.path)
    }
}

/// Load-once-then-cache access to a dataset.
///
/// The source is read on first `get`; subsequent calls return the cached
/// snapshot. A failed load is not cached, the next call retries. Reloading
/// means building a fresh store; snapshots are never patched in place.
#[derive(Debug)]
pub struct DatasetStore<S> {
    source: S,
    cache: OnceCell<Dataset>,
}

impl<S: DatasetSource> DatasetStore<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: OnceCell::new(),
        }
    }

    pub fn get(&self) -> Result<&Dataset> {
        if let Some(dataset) = self.cache.get() {
            return Ok(dataset);
        }
        let dataset = self.source.load()?;
        Ok(self.cache.get_or_init(|| dataset))
    }

    pub fn loaded(&self) -> bool {
        self.cache.get().is_some()
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

impl DatasetStore<CsvFileSource> {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(CsvFileSource::new(path))
    }
}

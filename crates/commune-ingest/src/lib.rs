pub mod csv_load;
pub mod dataset;
pub mod error;
pub mod store;

pub use csv_load::{KEY_COLUMN, read_dataset};
pub use dataset::{Dataset, fingerprint};
pub use error::{IngestError, Result};
pub use store::{CsvFileSource, DatasetSource, DatasetStore};

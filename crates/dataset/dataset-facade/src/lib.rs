//! Dataset Facade
//!
//! Unified re-exports for the dataset module.
//!
//! - `dataset_spi` - record model, [`RecordSource`] contract and errors
//! - `dataset_core` - ingestion validation, [`Dataset`], [`CsvSource`]
//!
//! # Example
//!
//! ```rust,ignore
//! use dataset_facade::{CsvSource, Dataset};
//! use std::path::Path;
//!
//! let mut source = CsvSource::from_path(Path::new("data/unified.csv"))?;
//! let dataset = Dataset::from_source(&mut source)?;
//! println!("{:?}", dataset.summary());
//! ```

// Re-export everything from SPI
pub use dataset_spi::*;

// Re-export everything from Core
pub use dataset_core::{csv_source, dataset, ingest};
pub use dataset_core::{
    parse_date, parse_record, CsvSource, Dataset, DatasetSummary, GenderGap,
};

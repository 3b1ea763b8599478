//! Dataset Core
//!
//! Validates raw rows into typed records, holds them in an append-only
//! [`Dataset`], and reads them from CSV.

pub mod csv_source;
pub mod dataset;
pub mod ingest;

// Re-export SPI types for implementations
pub use dataset_spi::{
    ConfidenceLevel, DatasetError, Direction, Event, EvidenceBasis, ImpactLink, MagnitudeClass,
    Observation, RawRecord, Record, RecordSource, RecordType, Result, Target,
};

// Re-export main types
pub use csv_source::CsvSource;
pub use dataset::{Dataset, DatasetSummary, GenderGap};
pub use ingest::{parse_date, parse_record};

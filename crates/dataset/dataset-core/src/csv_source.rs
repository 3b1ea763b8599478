//! CSV record source

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use dataset_spi::{DatasetError, RawRecord, RecordSource, Result};

/// Reads [`RawRecord`]s from unified-schema CSV with a header row
pub struct CsvSource<R: Read> {
    name: String,
    reader: csv::Reader<R>,
}

impl CsvSource<BufReader<File>> {
    /// Open a CSV file
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .map_err(|e| DatasetError::ReadError(format!("{}: {}", path.display(), e)))?;
        Ok(Self::from_reader(
            &path.display().to_string(),
            BufReader::new(file),
        ))
    }
}

impl<R: Read> CsvSource<R> {
    /// Wrap any reader, e.g. an in-memory byte slice
    pub fn from_reader(name: &str, reader: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);
        Self {
            name: name.to_string(),
            reader,
        }
    }
}

impl<R: Read> RecordSource for CsvSource<R> {
    fn read_records(&mut self) -> Result<Vec<RawRecord>> {
        let mut records = Vec::new();
        for (index, row) in self.reader.deserialize::<RawRecord>().enumerate() {
            // +2: one for the header, one for 1-based line numbers
            let record = row.map_err(|e| {
                DatasetError::CsvError(format!("{} line {}: {}", self.name, index + 2, e))
            })?;
            records.push(record);
        }
        Ok(records)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

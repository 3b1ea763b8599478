//! Record source trait

use crate::error::Result;
use crate::model::RawRecord;

/// Anything that can produce raw rows of the unified table
pub trait RecordSource {
    /// Read every raw record the source holds
    fn read_records(&mut self) -> Result<Vec<RawRecord>>;

    /// Human-readable name for logs
    fn name(&self) -> &str;
}

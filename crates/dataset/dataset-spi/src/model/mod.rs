//! Model module containing data structures

mod event;
mod impact_link;
mod observation;
mod raw_record;
mod record;
mod target;
mod vocabulary;

pub use event::Event;
pub use impact_link::ImpactLink;
pub use observation::Observation;
pub use raw_record::RawRecord;
pub use record::Record;
pub use target::Target;
pub use vocabulary::{ConfidenceLevel, Direction, EvidenceBasis, MagnitudeClass, RecordType};

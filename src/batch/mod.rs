pub mod records;
pub mod service;
pub mod tally;

pub use records::{Record, RecordError, RECORD_TOKENS};
pub use service::{score_batch, BatchError};
pub use tally::{Tally, Verdict};

// Library crate for the showdown batch scorer
// This file exposes the public API for the binary and integration tests

pub mod batch;
pub mod cards;

// Re-export commonly used types for easier access in tests
pub use batch::{score_batch, BatchError, Record, RecordError, Tally, Verdict};
pub use cards::{Card, Category, Classification, Comparison, Hand, ParseError, Rank, Suit};

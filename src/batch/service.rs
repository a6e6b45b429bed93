use std::io::BufRead;

use thiserror::Error;

use super::records::{Record, RecordError};
use super::tally::{Tally, Verdict};

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("record {line}: {source}")]
    Record { line: usize, source: RecordError },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Scores every record in the input and accumulates the win/tie tally.
///
/// Records are processed sequentially in input order. Blank lines are
/// skipped; the first malformed record aborts the run, carrying its
/// 1-based line number.
pub fn score_batch<R: BufRead>(reader: R) -> Result<Tally, BatchError> {
    let mut tally = Tally::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let record = Record::parse(&line).map_err(|source| BatchError::Record {
            line: index + 1,
            source,
        })?;

        let comparison = record.first.showdown(&record.second);
        let verdict = Verdict::from(comparison.ordering);
        match comparison.decided_by {
            Some(group) => {
                tracing::debug!(line = index + 1, %verdict, decided_by = %group, "record scored")
            }
            None => tracing::debug!(line = index + 1, %verdict, "record scored"),
        }

        tally = tally.record(verdict);
    }

    tracing::info!(
        records = tally.records(),
        first_wins = tally.first_wins,
        second_wins = tally.second_wins,
        ties = tally.ties,
        "batch scored"
    );

    Ok(tally)
}

use crate::core::errors::Result;
use crate::core::models::record::LogRecord;

/// What happened to a single append.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The record was appended to the log.
    Written,
    /// The record was discarded because it carried no user.
    Dropped,
}

/// Port for the append-only record store.
pub trait LogStore: Send + Sync {
    /// Append one record. Records without a user are dropped, not
    /// written; an I/O failure is recoverable and must never take the
    /// host process down.
    fn append(&self, record: &LogRecord) -> Result<WriteOutcome>;

    /// All records with `min <= timestamp <= max`, ascending.
    ///
    /// A missing file is an empty result, and an I/O failure mid-read
    /// degrades to whatever was recovered so far, so this cannot fail.
    fn read_window(&self, min: i64, max: i64) -> Vec<LogRecord>;
}

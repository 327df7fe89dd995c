use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, TimeZone};

use crate::config::app_config::AppConfig;
use crate::core::errors::Result;
use crate::core::models::record::LogRecord;
use crate::core::traits::store::{LogStore, WriteOutcome};

/// The flat-file record store: tab-delimited lines, strictly appended.
///
/// Writes rely on the filesystem's guarantee that a single bounded
/// append is not interleaved with another process's append; no locking
/// happens here. Reads walk the file backward in fixed-size chunks, so
/// a query near the tail costs roughly the bytes spanning its window
/// no matter how large the log has grown.
pub struct FlatFileLog {
    path: PathBuf,
    chunk_size: u64,
    date_format: String,
}

impl FlatFileLog {
    pub fn new(path: PathBuf, chunk_size: u64, date_format: impl Into<String>) -> Self {
        Self {
            path,
            chunk_size: chunk_size.max(1),
            date_format: date_format.into(),
        }
    }

    /// Build the store for `{data_dir}/{log.file}` as configured.
    pub fn from_config(data_dir: &Path, config: &AppConfig) -> Self {
        Self::new(
            data_dir.join(&config.log.file),
            config.log.chunk_size,
            config.display.date_format.clone(),
        )
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Human-readable timestamp column for a record line.
    fn format_time(&self, timestamp: i64) -> String {
        Local
            .timestamp_opt(timestamp, 0)
            .single()
            .map(|dt| dt.format(&self.date_format).to_string())
            .unwrap_or_default()
    }
}

impl LogStore for FlatFileLog {
    fn append(&self, record: &LogRecord) -> Result<WriteOutcome> {
        if record.user.is_empty() {
            return Ok(WriteOutcome::Dropped);
        }

        if let Some(parent) = self.path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let line = record.to_line(&self.format_time(record.timestamp));

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        // one write call, so the append stays within the filesystem's
        // atomicity guarantee
        file.write_all(line.as_bytes())?;

        Ok(WriteOutcome::Written)
    }

    fn read_window(&self, min: i64, max: i64) -> Vec<LogRecord> {
        let Ok(mut file) = File::open(&self.path) else {
            return Vec::new();
        };
        let Ok(meta) = file.metadata() else {
            return Vec::new();
        };

        let mut pos = meta.len();
        // line fragment continuing into the not-yet-read part of the file
        let mut carry: Vec<u8> = Vec::new();
        // complete lines per chunk, newest chunk first
        let mut batches: Vec<Vec<String>> = Vec::new();

        while pos > 0 {
            let read_len = self.chunk_size.min(pos);
            pos -= read_len;

            if file.seek(SeekFrom::Start(pos)).is_err() {
                break;
            }
            let mut chunk = vec![0u8; read_len as usize];
            if file.read_exact(&mut chunk).is_err() {
                break;
            }
            chunk.extend_from_slice(&carry);

            // split on raw bytes: the chunk boundary may sit inside a
            // UTF-8 sequence, lines decode only once complete
            let mut parts: Vec<Vec<u8>> = chunk.split(|&b| b == b'\n').map(|p| p.to_vec()).collect();

            // with more data ahead of us the first part may be the tail
            // of a line starting in the previous (earlier) chunk
            if pos > 0 {
                carry = parts.remove(0);
            } else {
                carry.clear();
            }

            if parts.is_empty() {
                continue;
            }

            let lines: Vec<String> = parts
                .iter()
                .map(|p| String::from_utf8_lossy(p).into_owned())
                .collect();

            // records ascend in the file, so the chunk's earliest
            // parseable timestamp decides whether the window is reached
            let first_ts = lines.iter().find_map(|l| leading_timestamp(l));
            if let Some(ts) = first_ts
                && ts > max
            {
                continue;
            }

            let done = matches!(first_ts, Some(ts) if ts < min);
            batches.push(lines);
            if done {
                break;
            }
        }

        batches
            .into_iter()
            .rev()
            .flatten()
            .filter_map(|line| LogRecord::parse_line(&line))
            .filter(|r| r.timestamp >= min && r.timestamp <= max)
            .collect()
    }
}

/// The timestamp field of a line, if it has one.
fn leading_timestamp(line: &str) -> Option<i64> {
    line.split('\t').next()?.parse().ok()
}

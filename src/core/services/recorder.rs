use chrono::Utc;

use crate::core::errors::Result;
use crate::core::models::record::LogRecord;
use crate::core::traits::event_sink::EventSink;
use crate::core::traits::store::{LogStore, WriteOutcome};

/// The store-backed [`EventSink`]: stamps each event with the current
/// time and the configured origin address, then appends it.
///
/// User resolution is the caller's job (the CLI falls back to `$USER`);
/// an event that still has no user is dropped here, never written.
pub struct Recorder<'a> {
    store: &'a dyn LogStore,
    origin_ip: String,
}

impl<'a> Recorder<'a> {
    pub fn new(store: &'a dyn LogStore, origin_ip: impl Into<String>) -> Self {
        Self {
            store,
            origin_ip: origin_ip.into(),
        }
    }
}

impl EventSink for Recorder<'_> {
    fn notify(&self, message: &str, user: Option<&str>) -> Result<WriteOutcome> {
        let Some(user) = user.filter(|u| !u.is_empty()) else {
            return Ok(WriteOutcome::Dropped);
        };

        let record = LogRecord {
            timestamp: Utc::now().timestamp(),
            ip: self.origin_ip.clone(),
            user: user.to_string(),
            message: message.to_string(),
        };
        self.store.append(&record)
    }
}

use crate::core::errors::Result;
use crate::core::traits::store::WriteOutcome;

/// Port through which event producers report authentication events.
///
/// Anything that can produce `(message, user)` pairs (a CLI, a session
/// layer, another process's hook) talks to the log through this trait.
pub trait EventSink: Send + Sync {
    /// Record one event. `user` falls back to the sink's environment
    /// when `None`; if no user can be resolved the event is dropped.
    fn notify(&self, message: &str, user: Option<&str>) -> Result<WriteOutcome>;
}

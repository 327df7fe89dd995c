use serde::Serialize;

/// The canonical authentication events and their fixed message strings.
///
/// Producers emitting anything else go through the free-form path and are
/// categorized by substring heuristics on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthEvent {
    LoggedOff,
    LoggedInPermanently,
    LoggedInTemporarily,
    FailedLogin,
    AutoLoggedOff,
}

impl AuthEvent {
    /// The exact message string written to the log for this event.
    pub fn message(&self) -> &'static str {
        match self {
            AuthEvent::LoggedOff => "logged off",
            AuthEvent::LoggedInPermanently => "logged in permanently",
            AuthEvent::LoggedInTemporarily => "logged in temporarily",
            AuthEvent::FailedLogin => "failed login attempt",
            AuthEvent::AutoLoggedOff => "has been automatically logged off",
        }
    }
}

/// Display category of a log message. Serialized as a stable lowercase
/// tag, usable as a style hook by external renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Off,
    Perm,
    Temp,
    Fail,
    Unknown,
}

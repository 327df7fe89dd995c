/// All domain errors for authlog.
///
/// The log engine itself degrades rather than fails (a missing file is an
/// empty page, a torn line is skipped), so most variants belong to the
/// CLI edge: bad flags, bad config, unwritable disk.
#[derive(Debug, thiserror::Error)]
pub enum AuthlogError {
    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error(
        "Invalid reference time '{input}'\n\n  \
         Expected epoch seconds (e.g. 1707307200) or an ISO date (e.g. 2024-02-07).\n  \
         Omit --at to page from the current time."
    )]
    InvalidDate { input: String },

    #[error(
        "Unknown period '{input}'\n\n  \
         Supported periods: day, week, month."
    )]
    InvalidPeriod { input: String },

    #[error("Could not render page: {detail}")]
    RenderError { detail: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AuthlogError>;

use crate::adapters::log::flat_file::FlatFileLog;
use crate::cli::output;
use crate::cli::{RecordEvent, RecordOpts};
use crate::config::app_config::AppConfig;
use crate::core::errors::Result;
use crate::core::models::event::AuthEvent;
use crate::core::services::recorder::Recorder;
use crate::core::traits::event_sink::EventSink;
use crate::core::traits::store::WriteOutcome;

/// Execute the `authlog record` command.
///
/// Maps the event subcommand onto its canonical message and hands it to
/// the sink; a dropped event (no resolvable user) is a warning, not an
/// error, so producer scripts never fail on it.
pub fn execute(event: &RecordEvent, data_dir: Option<&str>) -> Result<()> {
    let dir = crate::cli::context::resolve_data_dir(data_dir)?;
    let config = AppConfig::load(&dir)?;
    let store = FlatFileLog::from_config(&dir, &config);

    let (message, opts) = resolve(event);
    let recorder = Recorder::new(&store, opts.ip.clone());

    match recorder.notify(message, opts.user.as_deref())? {
        WriteOutcome::Written => {
            let user = opts.user.as_deref().unwrap_or("-");
            output::success(&format!("Recorded '{message}' for {user}"));
        }
        WriteOutcome::Dropped => {
            output::warning("Event dropped: no user given and $USER is not set");
        }
    }

    Ok(())
}

/// The canonical message for each event subcommand.
fn resolve(event: &RecordEvent) -> (&str, &RecordOpts) {
    match event {
        RecordEvent::Login {
            permanent: true,
            opts,
        } => (AuthEvent::LoggedInPermanently.message(), opts),
        RecordEvent::Login {
            permanent: false,
            opts,
        } => (AuthEvent::LoggedInTemporarily.message(), opts),
        RecordEvent::Logout { opts } => (AuthEvent::LoggedOff.message(), opts),
        RecordEvent::Failed { opts } => (AuthEvent::FailedLogin.message(), opts),
        RecordEvent::Autologout { opts } => (AuthEvent::AutoLoggedOff.message(), opts),
        RecordEvent::Custom { message, opts } => (message.as_str(), opts),
    }
}

use colored::Colorize;

use crate::adapters::log::flat_file::FlatFileLog;
use crate::cli::output;
use crate::config::app_config::AppConfig;
use crate::core::errors::Result;

/// Execute the `authlog status` command.
///
/// Shows where the log lives and how big it has grown. Rotation is an
/// operational concern outside this tool, so size is the number an
/// operator wants to see.
pub fn execute(data_dir: Option<&str>) -> Result<()> {
    let dir = crate::cli::context::resolve_data_dir(data_dir)?;
    let config = AppConfig::load(&dir)?;
    let store = FlatFileLog::from_config(&dir, &config);

    output::header("authlog status");
    println!("  Log file: {}", store.path().display().to_string().cyan());

    match std::fs::metadata(store.path()) {
        Ok(meta) => output::success(&format!("{} bytes on disk", meta.len())),
        Err(_) => output::warning("No events recorded yet"),
    }

    println!("  Scan chunk size: {} bytes", config.log.chunk_size);
    println!("  Date format: {}", config.display.date_format);

    Ok(())
}

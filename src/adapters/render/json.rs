use crate::core::errors::{AuthlogError, Result};
use crate::core::models::page::LogPage;
use crate::core::traits::renderer::PageRenderer;

/// Emits a log page as pretty-printed JSON on stdout, for scripts and
/// external presentation layers. serde handles the escaping of the raw
/// producer-supplied messages.
pub struct JsonRenderer;

impl PageRenderer for JsonRenderer {
    fn render(&self, page: &LogPage) -> Result<()> {
        let text = serde_json::to_string_pretty(page).map_err(|e| AuthlogError::RenderError {
            detail: format!("Failed to serialize page: {e}"),
        })?;
        println!("{text}");
        Ok(())
    }
}

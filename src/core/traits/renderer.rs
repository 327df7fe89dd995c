use crate::core::errors::Result;
use crate::core::models::page::LogPage;

/// Port for presenting one page of the log.
///
/// v0.3 ships a terminal table and a JSON emitter; an HTML renderer
/// would implement the same trait (and must escape the row messages,
/// which carry raw producer text).
pub trait PageRenderer {
    fn render(&self, page: &LogPage) -> Result<()>;
}

use serde::Serialize;

use crate::core::models::event::EventCategory;
use crate::core::models::window::PeriodUnit;

/// One classified row of a log page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageRow {
    pub timestamp: i64,
    pub ip: String,
    pub user: String,
    pub category: EventCategory,
    /// Display text: a fixed label for canonical events, the raw
    /// producer-supplied message otherwise. Raw text is untrusted;
    /// renderers targeting markup must escape it.
    pub message: String,
}

/// One calendar page of the log, ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogPage {
    pub unit: PeriodUnit,
    pub caption: String,
    /// Inclusive window bounds, epoch seconds.
    pub min: i64,
    pub max: i64,
    /// Reference instants for the older / newer page.
    pub prev: i64,
    pub next: i64,
    /// Rows in ascending timestamp order.
    pub rows: Vec<PageRow>,
}

use chrono::{DateTime, TimeZone};

use crate::core::models::page::{LogPage, PageRow};
use crate::core::models::window::PeriodUnit;
use crate::core::services::{classifier, time_range};
use crate::core::traits::store::LogStore;

/// Builds presentation-ready log pages from the record store.
///
/// One page is one calendar period: the service resolves the period
/// around the reference instant, pulls the matching records via the
/// store's bounded backward scan, and classifies every message.
pub struct PageService<'a> {
    store: &'a dyn LogStore,
}

impl<'a> PageService<'a> {
    pub fn new(store: &'a dyn LogStore) -> Self {
        Self { store }
    }

    /// Assemble the page for the period containing `at`.
    ///
    /// Rows come back ascending by timestamp; renderers wanting the
    /// newest event first iterate in reverse.
    pub fn query_page<Tz: TimeZone>(&self, unit: PeriodUnit, at: &DateTime<Tz>) -> LogPage {
        let window = time_range::range(unit, at);

        let rows = self
            .store
            .read_window(window.min, window.max)
            .into_iter()
            .map(|record| {
                let event = classifier::classify(&record.message);
                PageRow {
                    timestamp: record.timestamp,
                    ip: record.ip,
                    user: record.user,
                    category: event.category,
                    message: event.display,
                }
            })
            .collect();

        LogPage {
            unit,
            caption: window.caption,
            min: window.min,
            max: window.max,
            prev: window.prev,
            next: window.next,
            rows,
        }
    }
}

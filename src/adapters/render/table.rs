use chrono::{Local, TimeZone};
use colored::Colorize;

use crate::cli::output;
use crate::core::errors::Result;
use crate::core::models::event::EventCategory;
use crate::core::models::page::LogPage;
use crate::core::traits::renderer::PageRenderer;

/// Renders a log page as a colored terminal table, newest event first,
/// with older/newer navigation hints below it.
pub struct TableRenderer {
    date_format: String,
}

impl TableRenderer {
    pub fn new(date_format: impl Into<String>) -> Self {
        Self {
            date_format: date_format.into(),
        }
    }

    fn format_time(&self, timestamp: i64) -> String {
        Local
            .timestamp_opt(timestamp, 0)
            .single()
            .map(|dt| dt.format(&self.date_format).to_string())
            .unwrap_or_else(|| timestamp.to_string())
    }
}

impl PageRenderer for TableRenderer {
    fn render(&self, page: &LogPage) -> Result<()> {
        output::header(&format!("authlog: {}", page.caption));
        println!(
            "  {} - {}",
            self.format_time(page.min),
            self.format_time(page.max)
        );

        if page.rows.is_empty() {
            output::warning("No events in this period");
        } else {
            println!();
            for row in page.rows.iter().rev() {
                println!(
                    "  {}  {:<15}  {:<12}  {}",
                    self.format_time(row.timestamp).dimmed(),
                    row.ip,
                    row.user,
                    colorize(row.category, &row.message),
                );
            }
        }

        println!();
        output::hint(&format!(
            "older: authlog view --period {} --at {}",
            page.unit, page.prev
        ));
        // pointing past the present would only ever show an empty page
        if page.next <= Local::now().timestamp() {
            output::hint(&format!(
                "newer: authlog view --period {} --at {}",
                page.unit, page.next
            ));
        }

        Ok(())
    }
}

/// Color an action label by its category.
fn colorize(category: EventCategory, message: &str) -> String {
    match category {
        EventCategory::Perm => message.green().to_string(),
        EventCategory::Temp => message.cyan().to_string(),
        EventCategory::Off => message.yellow().to_string(),
        EventCategory::Fail => message.red().to_string(),
        EventCategory::Unknown => message.magenta().to_string(),
    }
}

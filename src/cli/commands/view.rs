use chrono::{DateTime, Local, NaiveDate, TimeZone};

use crate::adapters::log::flat_file::FlatFileLog;
use crate::adapters::render::json::JsonRenderer;
use crate::adapters::render::table::TableRenderer;
use crate::config::app_config::AppConfig;
use crate::core::errors::{AuthlogError, Result};
use crate::core::models::window::PeriodUnit;
use crate::core::services::page_service::PageService;
use crate::core::traits::renderer::PageRenderer;

/// Execute the `authlog view` command.
pub fn execute(period: &str, at: Option<&str>, json: bool, data_dir: Option<&str>) -> Result<()> {
    let dir = crate::cli::context::resolve_data_dir(data_dir)?;
    let config = AppConfig::load(&dir)?;
    let store = FlatFileLog::from_config(&dir, &config);

    let unit: PeriodUnit = period.parse()?;
    let reference = match at {
        Some(s) => parse_reference(s)?,
        None => Local::now(),
    };

    let page = PageService::new(&store).query_page(unit, &reference);

    if json {
        JsonRenderer.render(&page)
    } else {
        TableRenderer::new(config.display.date_format).render(&page)
    }
}

/// Parse `--at`: raw epoch seconds or an ISO date (`YYYY-MM-DD`).
fn parse_reference(s: &str) -> Result<DateTime<Local>> {
    if let Ok(ts) = s.parse::<i64>() {
        return Local
            .timestamp_opt(ts, 0)
            .single()
            .ok_or_else(|| AuthlogError::InvalidDate {
                input: s.to_string(),
            });
    }

    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| AuthlogError::InvalidDate {
        input: s.to_string(),
    })?;
    Local
        .from_local_datetime(&date.and_hms_opt(0, 0, 0).expect("midnight is always valid"))
        .earliest()
        .ok_or_else(|| AuthlogError::InvalidDate {
            input: s.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_seconds_parse() {
        let dt = parse_reference("1707307200").unwrap();
        assert_eq!(dt.timestamp(), 1707307200);
    }

    #[test]
    fn iso_dates_parse() {
        let dt = parse_reference("2024-02-07").unwrap();
        assert_eq!(dt.date_naive(), NaiveDate::from_ymd_opt(2024, 2, 7).unwrap());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_reference("last tuesday").is_err());
        assert!(parse_reference("2024-13-40").is_err());
        assert!(parse_reference("").is_err());
    }
}

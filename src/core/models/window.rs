use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::core::errors::AuthlogError;

/// Calendar granularity used to bucket the log for pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodUnit {
    Day,
    /// ISO-8601 week, Monday through Sunday.
    Week,
    Month,
}

impl FromStr for PeriodUnit {
    type Err = AuthlogError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "day" => Ok(PeriodUnit::Day),
            "week" => Ok(PeriodUnit::Week),
            "month" => Ok(PeriodUnit::Month),
            other => Err(AuthlogError::InvalidPeriod {
                input: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for PeriodUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PeriodUnit::Day => "day",
            PeriodUnit::Week => "week",
            PeriodUnit::Month => "month",
        };
        f.write_str(s)
    }
}

/// One calendar period resolved to concrete timestamps.
///
/// `min` and `max` are both inclusive. `prev` and `next` are the start
/// instants of the adjacent periods, so repeated navigation always lands
/// on period boundaries instead of drifting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeWindow {
    /// 00:00:00 of the period's first day, epoch seconds.
    pub min: i64,
    /// 23:59:59 of the period's last day, epoch seconds.
    pub max: i64,
    /// Start of the preceding period.
    pub prev: i64,
    /// Start of the following period.
    pub next: i64,
    /// Human-readable label, e.g. "6th week of 2024".
    pub caption: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_periods() {
        assert_eq!("day".parse::<PeriodUnit>().unwrap(), PeriodUnit::Day);
        assert_eq!("week".parse::<PeriodUnit>().unwrap(), PeriodUnit::Week);
        assert_eq!("month".parse::<PeriodUnit>().unwrap(), PeriodUnit::Month);
    }

    #[test]
    fn rejects_unknown_period() {
        assert!("year".parse::<PeriodUnit>().is_err());
        assert!("".parse::<PeriodUnit>().is_err());
    }

    #[test]
    fn display_matches_parse() {
        for unit in [PeriodUnit::Day, PeriodUnit::Week, PeriodUnit::Month] {
            assert_eq!(unit.to_string().parse::<PeriodUnit>().unwrap(), unit);
        }
    }
}

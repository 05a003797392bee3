//! Timeframe and period type definitions.
//!
//! This module defines [`Timeframe`] for intraday price history and
//! [`PeriodType`] for fundamental data periods. Both parse from the strings
//! the providers use, rejecting anything else with
//! [`ValidationError::InvalidEnumValue`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::validate::one_of;

/// Granularity of intraday price bars.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    /// One-minute bars.
    OneMinute,
    /// Five-minute bars.
    FiveMinute,
    /// Fifteen-minute bars.
    FifteenMinute,
    /// Thirty-minute bars.
    ThirtyMinute,
    /// Hourly bars.
    OneHour,
    /// Four-hour bars.
    FourHour,
}

impl Timeframe {
    /// Accepted string forms, in order.
    pub const ACCEPTED: &'static [&'static str] = &["1m", "5m", "15m", "30m", "1h", "4h"];

    /// Returns the path segment used by providers.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OneMinute => "1m",
            Self::FiveMinute => "5m",
            Self::FifteenMinute => "15m",
            Self::ThirtyMinute => "30m",
            Self::OneHour => "1h",
            Self::FourHour => "4h",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match one_of("timeframe", s, Self::ACCEPTED)? {
            "1m" => Self::OneMinute,
            "5m" => Self::FiveMinute,
            "15m" => Self::FifteenMinute,
            "30m" => Self::ThirtyMinute,
            "1h" => Self::OneHour,
            _ => Self::FourHour,
        })
    }
}

/// Period type for fundamental financial data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeriodType {
    /// Annual reporting period.
    #[default]
    Annual,
    /// Quarterly reporting period.
    Quarterly,
}

impl PeriodType {
    /// Accepted string forms, in order.
    pub const ACCEPTED: &'static [&'static str] = &["annual", "quarter"];

    /// Returns the query value used by providers.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::Quarterly => "quarter",
        }
    }
}

impl fmt::Display for PeriodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PeriodType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match one_of("period", s, Self::ACCEPTED)? {
            "annual" => Self::Annual,
            _ => Self::Quarterly,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeframe_parses_accepted() {
        for s in Timeframe::ACCEPTED {
            assert_eq!(s.parse::<Timeframe>().unwrap().as_str(), *s);
        }
    }

    #[test]
    fn test_timeframe_rejects_daily() {
        let err = "1d".parse::<Timeframe>().unwrap_err();
        assert!(err.to_string().contains("[\"1m\", \"5m\", \"15m\", \"30m\", \"1h\", \"4h\"]"));
    }

    #[test]
    fn test_period_type() {
        assert_eq!("quarter".parse::<PeriodType>().unwrap(), PeriodType::Quarterly);
        assert_eq!(PeriodType::default().as_str(), "annual");
        assert!("monthly".parse::<PeriodType>().is_err());
    }
}

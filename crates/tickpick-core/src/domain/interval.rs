use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Bar bucket sizes the brokerage historicals endpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    #[serde(rename = "5minute")]
    FiveMinute,
    #[serde(rename = "10minute")]
    TenMinute,
    #[serde(rename = "hour")]
    Hour,
    #[serde(rename = "day")]
    Day,
}

impl Interval {
    pub const ALL: [Self; 4] = [Self::FiveMinute, Self::TenMinute, Self::Hour, Self::Day];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FiveMinute => "5minute",
            Self::TenMinute => "10minute",
            Self::Hour => "hour",
            Self::Day => "day",
        }
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "5minute" => Ok(Self::FiveMinute),
            "10minute" => Ok(Self::TenMinute),
            "hour" => Ok(Self::Hour),
            "day" => Ok(Self::Day),
            other => Err(ValidationError::InvalidInterval {
                value: other.to_owned(),
            }),
        }
    }
}

/// Lookback windows the brokerage historicals endpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Span {
    Day,
    Week,
    Month,
    Year,
}

impl Span {
    pub const ALL: [Self; 4] = [Self::Day, Self::Week, Self::Month, Self::Year];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Span {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            other => Err(ValidationError::InvalidSpan {
                value: other.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_interval_and_span() {
        assert_eq!(
            Interval::from_str("5minute").expect("must parse"),
            Interval::FiveMinute
        );
        assert_eq!(Span::from_str("Year").expect("must parse"), Span::Year);
    }

    #[test]
    fn rejects_unknown_values() {
        assert!(matches!(
            Interval::from_str("15minute"),
            Err(ValidationError::InvalidInterval { .. })
        ));
        assert!(matches!(
            Span::from_str("decade"),
            Err(ValidationError::InvalidSpan { .. })
        ));
    }
}

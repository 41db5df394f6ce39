use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// The twelve sector names the screener recognizes.
///
/// Display strings are load-bearing: candidate filtering matches them
/// word-by-word against the free-form sector text the brokerage reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sector {
    #[serde(rename = "Communication Services")]
    CommunicationServices,
    #[serde(rename = "Consumer Discretionary")]
    ConsumerDiscretionary,
    #[serde(rename = "Consumer Durables")]
    ConsumerDurables,
    #[serde(rename = "Consumer Staples")]
    ConsumerStaples,
    #[serde(rename = "Energy")]
    Energy,
    #[serde(rename = "Financials")]
    Financials,
    #[serde(rename = "Health Care")]
    HealthCare,
    #[serde(rename = "Industrials")]
    Industrials,
    #[serde(rename = "Information Technology")]
    InformationTechnology,
    #[serde(rename = "Materials")]
    Materials,
    #[serde(rename = "Real Estate")]
    RealEstate,
    #[serde(rename = "Utilities")]
    Utilities,
}

impl Sector {
    pub const ALL: [Self; 12] = [
        Self::CommunicationServices,
        Self::ConsumerDiscretionary,
        Self::ConsumerDurables,
        Self::ConsumerStaples,
        Self::Energy,
        Self::Financials,
        Self::HealthCare,
        Self::Industrials,
        Self::InformationTechnology,
        Self::Materials,
        Self::RealEstate,
        Self::Utilities,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CommunicationServices => "Communication Services",
            Self::ConsumerDiscretionary => "Consumer Discretionary",
            Self::ConsumerDurables => "Consumer Durables",
            Self::ConsumerStaples => "Consumer Staples",
            Self::Energy => "Energy",
            Self::Financials => "Financials",
            Self::HealthCare => "Health Care",
            Self::Industrials => "Industrials",
            Self::InformationTechnology => "Information Technology",
            Self::Materials => "Materials",
            Self::RealEstate => "Real Estate",
            Self::Utilities => "Utilities",
        }
    }

    /// Word-subset match against a provider-reported sector string.
    ///
    /// The candidate matches when any whitespace-separated word of this
    /// sector's name occurs as a substring of the reported text, compared
    /// case-insensitively. Deliberately permissive: "Real Estate" matches
    /// any description containing "real" or "estate". Do not tighten to an
    /// exact comparison; the screener depends on catching provider sector
    /// taxonomies that only loosely align with these twelve names.
    pub fn matches_description(self, reported: &str) -> bool {
        let reported = reported.to_lowercase();
        self.as_str()
            .split_whitespace()
            .any(|word| reported.contains(&word.to_lowercase()))
    }
}

impl Display for Sector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sector {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|sector| sector.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ValidationError::InvalidSector {
                value: trimmed.to_owned(),
            })
    }
}

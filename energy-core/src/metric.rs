use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies one of the numeric measurements carried by every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Consumption,
    Generation,
    PerCapita,
    Emissions,
    RenewableShare,
    FossilShare,
    PriceIndex,
    IndustrialShare,
    HouseholdShare,
}

impl Metric {
    pub const ALL: [Metric; 9] = [
        Metric::Consumption,
        Metric::Generation,
        Metric::PerCapita,
        Metric::Emissions,
        Metric::RenewableShare,
        Metric::FossilShare,
        Metric::PriceIndex,
        Metric::IndustrialShare,
        Metric::HouseholdShare,
    ];

    /// Short identifier used on the command line and in JSON output.
    pub fn key(&self) -> &'static str {
        match self {
            Metric::Consumption => "consumption",
            Metric::Generation => "generation",
            Metric::PerCapita => "per_capita",
            Metric::Emissions => "emissions",
            Metric::RenewableShare => "renewable_share",
            Metric::FossilShare => "fossil_share",
            Metric::PriceIndex => "price_index",
            Metric::IndustrialShare => "industrial_share",
            Metric::HouseholdShare => "household_share",
        }
    }

    /// Header of the dataset column holding this metric.
    pub fn column(&self) -> &'static str {
        match self {
            Metric::Consumption => "Total Energy Consumption (TWh)",
            Metric::Generation => "Total Energy Generation (TWh)",
            Metric::PerCapita => "Per Capita Energy Use (kWh)",
            Metric::Emissions => "Carbon Emissions (Million Tons)",
            Metric::RenewableShare => "Renewable Energy Share (%)",
            Metric::FossilShare => "Fossil Fuel Dependency (%)",
            Metric::PriceIndex => "Energy Price Index (USD/kWh)",
            Metric::IndustrialShare => "Industrial Energy Use (%)",
            Metric::HouseholdShare => "Household Energy Use (%)",
        }
    }

    /// Human-readable name for narrative text.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Consumption => "Total energy consumption",
            Metric::Generation => "Total energy generation",
            Metric::PerCapita => "Per capita energy use",
            Metric::Emissions => "Carbon emissions",
            Metric::RenewableShare => "Renewable energy share",
            Metric::FossilShare => "Fossil fuel dependency",
            Metric::PriceIndex => "Energy price index",
            Metric::IndustrialShare => "Industrial energy use",
            Metric::HouseholdShare => "Household energy use",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Consumption | Metric::Generation => "TWh",
            Metric::PerCapita => "kWh/person",
            Metric::Emissions => "MTons",
            Metric::PriceIndex => "USD/kWh",
            Metric::RenewableShare
            | Metric::FossilShare
            | Metric::IndustrialShare
            | Metric::HouseholdShare => "%",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.key())
    }
}

/// Errors related to metric identifiers.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricError {
    /// The identifier names no known metric.
    Unknown(String),
}

impl fmt::Display for MetricError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricError::Unknown(name) => {
                let known: Vec<&str> = Metric::ALL.iter().map(|m| m.key()).collect();
                write!(f, "unknown metric {name:?} (expected one of: {})", known.join(", "))
            }
        }
    }
}

impl std::error::Error for MetricError {}

impl FromStr for Metric {
    type Err = MetricError;

    /// Accepts either the short key (`per_capita`) or the dataset column header.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Metric::ALL
            .iter()
            .copied()
            .find(|metric| metric.key() == trimmed || metric.column() == trimmed)
            .ok_or_else(|| MetricError::Unknown(s.to_string()))
    }
}

use energy_core::record::EnergyRecord;
use serde::Serialize;
use std::collections::BTreeSet;

/// Values available to the country and year selectors.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterOptions {
    /// Distinct countries, sorted by name.
    pub countries: Vec<String>,
    /// Distinct years, ascending.
    pub years: Vec<i32>,
}

pub fn filter_options(records: &[EnergyRecord]) -> FilterOptions {
    let countries: BTreeSet<&str> = records.iter().map(|r| r.country.as_str()).collect();
    let years: BTreeSet<i32> = records.iter().map(|r| r.year).collect();
    FilterOptions {
        countries: countries.into_iter().map(String::from).collect(),
        years: years.into_iter().collect(),
    }
}

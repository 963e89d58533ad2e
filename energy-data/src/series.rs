use energy_core::metric::Metric;
use energy_core::month::Month;
use energy_core::record::EnergyRecord;
use serde::Serialize;

/// One point of the consumption vs generation line chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonPoint {
    pub country: String,
    pub year: i32,
    pub month: Month,
    pub consumption: f64,
    pub generation: f64,
}

/// Per-record consumption and generation, in input order.
pub fn consumption_vs_generation(records: &[EnergyRecord]) -> Vec<ComparisonPoint> {
    records
        .iter()
        .map(|r| ComparisonPoint {
            country: r.country.clone(),
            year: r.year,
            month: r.month,
            consumption: r.value(Metric::Consumption),
            generation: r.value(Metric::Generation),
        })
        .collect()
}

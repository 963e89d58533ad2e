use energy_core::metric::Metric;
use energy_core::record::EnergyRecord;
use serde::{Deserialize, Serialize};

/// Conjunctive record filter. A `None` field matches every record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Exact, case-sensitive country name.
    pub country: Option<String>,
    pub year: Option<i32>,
    /// Inclusive upper bound on consumption.
    pub max_value: Option<f64>,
}

impl FilterCriteria {
    /// Criteria restricted to country and year, as used by the comparison chart.
    pub fn without_max_value(&self) -> FilterCriteria {
        FilterCriteria {
            max_value: None,
            ..self.clone()
        }
    }

    pub fn matches(&self, record: &EnergyRecord) -> bool {
        self.country
            .as_deref()
            .map_or(true, |country| record.country == country)
            && self.year.map_or(true, |year| record.year == year)
            && self
                .max_value
                .map_or(true, |max| record.value(Metric::Consumption) <= max)
    }
}

/// Keep the records matching every specified criterion, in input order.
pub fn filter(records: &[EnergyRecord], criteria: &FilterCriteria) -> Vec<EnergyRecord> {
    let filtered: Vec<EnergyRecord> = records
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect();
    log::debug!(
        "filter {:?}: {} of {} records kept",
        criteria,
        filtered.len(),
        records.len()
    );
    filtered
}

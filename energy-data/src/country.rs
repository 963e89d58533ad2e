use energy_core::metric::Metric;
use energy_core::record::EnergyRecord;
use std::collections::BTreeMap;

/// Per-country totals keyed by country name. Only countries present in the
/// input have an entry.
pub type CountryTotals = BTreeMap<String, f64>;

/// Sum consumption per country across every year and month in `records`.
pub fn aggregate_by_country(records: &[EnergyRecord]) -> CountryTotals {
    aggregate_metric_by_country(records, Metric::Consumption)
}

/// Sum any metric per country.
pub fn aggregate_metric_by_country(records: &[EnergyRecord], metric: Metric) -> CountryTotals {
    let mut totals = CountryTotals::new();
    for record in records {
        *totals.entry(record.country.clone()).or_insert(0.0) += record.value(metric);
    }
    log::debug!("aggregated {metric} for {} countries", totals.len());
    totals
}

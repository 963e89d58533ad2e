//! The full dashboard view: every chart, caption and card for one filter
//! selection, computed in a single pass over the snapshot.

use crate::filter::{filter, FilterCriteria};
use crate::kpi::{kpi_cards, KpiCard};
use crate::monthly::{aggregate_by_month, monthly_series, MonthlyAggregate};
use crate::summary::{overall_average, summarize, with_unit, MetricSummary};
use energy_core::metric::Metric;
use energy_core::record::EnergyRecord;
use serde::Serialize;

/// Monthly charts that carry a summary caption, with their titles.
pub const CHARTED_METRICS: [(&str, Metric); 3] = [
    ("Total Energy Consumption", Metric::Consumption),
    ("Carbon Emissions", Metric::Emissions),
    ("Per Capita Energy Use", Metric::PerCapita),
];

/// A monthly bar/line chart with its caption.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricChart {
    pub title: &'static str,
    pub metric: Metric,
    /// Twelve monthly means, January first.
    pub series: Vec<f64>,
    pub summary: MetricSummary,
    /// Mean over all filtered records.
    pub average: f64,
    pub narrative: String,
    pub analysis: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    pub criteria: FilterCriteria,
    pub record_count: usize,
    pub kpis: Vec<KpiCard>,
    pub monthly: [MonthlyAggregate; 12],
    pub charts: Vec<MetricChart>,
    /// Renewable vs fossil share caption.
    pub energy_mix: String,
    /// Industrial vs household use caption.
    pub use_breakdown: String,
    /// Per capita, emissions, fossil share and price caption.
    pub indicators: String,
}

pub fn dashboard_report(records: &[EnergyRecord], criteria: &FilterCriteria) -> DashboardReport {
    let filtered = filter(records, criteria);
    let monthly = aggregate_by_month(&filtered);
    let average = |metric: Metric| overall_average(&filtered, metric);

    let charts = CHARTED_METRICS
        .iter()
        .map(|&(title, metric)| {
            let summary = summarize(&monthly, metric);
            let avg = average(metric);
            MetricChart {
                title,
                metric,
                series: monthly_series(&monthly, metric),
                summary,
                average: avg,
                narrative: summary.narrative(avg),
                analysis: summary.analysis(),
            }
        })
        .collect();

    let avg_text = |label: &str, metric: Metric| {
        format!("Average {label}: {}.", with_unit(average(metric), metric))
    };
    let energy_mix = [
        avg_text("renewable energy share", Metric::RenewableShare),
        avg_text("fossil fuel dependency", Metric::FossilShare),
    ]
    .join(" ");
    let use_breakdown = [
        avg_text("industrial energy use", Metric::IndustrialShare),
        avg_text("household energy use", Metric::HouseholdShare),
    ]
    .join(" ");
    let indicators = [
        avg_text("per capita energy use", Metric::PerCapita),
        avg_text("emissions", Metric::Emissions),
        avg_text("fossil fuel dependency", Metric::FossilShare),
        avg_text("energy price index", Metric::PriceIndex),
    ]
    .join(" ");

    log::info!(
        "dashboard report built from {} of {} records",
        filtered.len(),
        records.len()
    );

    DashboardReport {
        criteria: criteria.clone(),
        record_count: filtered.len(),
        kpis: kpi_cards(&filtered),
        monthly,
        charts,
        energy_mix,
        use_breakdown,
        indicators,
    }
}

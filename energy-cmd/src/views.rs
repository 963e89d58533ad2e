//! One function per dashboard view. Each takes the full snapshot plus the
//! filter selection and returns the rendered output.

use crate::OutputFormat;
use energy_core::metric::Metric;
use energy_core::record::EnergyRecord;
use energy_data::bubbles::{bubbles, legend, Bubble, LegendStop};
use energy_data::options::filter_options;
use energy_data::report::dashboard_report;
use energy_data::series::consumption_vs_generation;
use energy_data::summary::overall_average;
use energy_data::{
    aggregate_by_country, aggregate_by_month, build_scales, filter, summarize_named, BubbleScale,
    FilterCriteria,
};
use energy_utils::numbers::fixed2;
use serde::Serialize;
use std::fmt::Write;

fn to_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn monthly(
    records: &[EnergyRecord],
    criteria: &FilterCriteria,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let filtered = filter(records, criteria);
    let aggregates = aggregate_by_month(&filtered);
    if format == OutputFormat::Json {
        return to_json(&aggregates);
    }

    let mut out = String::new();
    write!(out, "{:<5} {:>5}", "Month", "n")?;
    for metric in Metric::ALL {
        write!(out, " {:>16}", metric.key())?;
    }
    for aggregate in &aggregates {
        write!(out, "\n{:<5} {:>5}", aggregate.month, aggregate.count)?;
        for metric in Metric::ALL {
            write!(out, " {:>16}", fixed2(aggregate.value(metric)))?;
        }
    }
    Ok(out)
}

#[derive(Serialize)]
struct SummaryView {
    #[serde(flatten)]
    summary: energy_data::MetricSummary,
    average: f64,
    narrative: String,
    analysis: String,
}

pub fn summary(
    records: &[EnergyRecord],
    criteria: &FilterCriteria,
    metric: &str,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let filtered = filter(records, criteria);
    let aggregates = aggregate_by_month(&filtered);
    let summary = summarize_named(&aggregates, metric)?;
    let average = overall_average(&filtered, summary.metric);
    let view = SummaryView {
        summary,
        average,
        narrative: summary.narrative(average),
        analysis: summary.analysis(),
    };
    match format {
        OutputFormat::Json => to_json(&view),
        OutputFormat::Text => Ok(format!("{}\n{}", view.narrative, view.analysis)),
    }
}

pub fn countries(
    records: &[EnergyRecord],
    criteria: &FilterCriteria,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let totals = aggregate_by_country(&filter(records, criteria));
    if format == OutputFormat::Json {
        return to_json(&totals);
    }
    let mut out = format!("{:<20} {:>14}", "Country", "TWh");
    for (country, total) in &totals {
        write!(out, "\n{:<20} {:>14}", country, fixed2(*total))?;
    }
    Ok(out)
}

#[derive(Serialize)]
struct BubbleMapView {
    scale: BubbleScale,
    legend: [LegendStop; 3],
    bubbles: Vec<Bubble>,
}

pub fn bubble_map(
    records: &[EnergyRecord],
    criteria: &FilterCriteria,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let totals = aggregate_by_country(&filter(records, criteria));
    let scale = build_scales(&totals);
    let view = BubbleMapView {
        scale,
        legend: legend(&scale),
        bubbles: bubbles(&totals, &scale),
    };
    if format == OutputFormat::Json {
        return to_json(&view);
    }

    let mut out = String::from("Legend:");
    for stop in &view.legend {
        write!(out, "\n  {:<4} {:>14}  {}", stop.label, stop.caption, stop.color)?;
    }
    write!(out, "\nBubbles:")?;
    for bubble in &view.bubbles {
        write!(
            out,
            "\n  {:<40} r={:>6}  {}  at ({}, {})",
            bubble.tooltip,
            fixed2(bubble.radius),
            bubble.color.hex(),
            bubble.coordinates.longitude,
            bubble.coordinates.latitude
        )?;
    }
    Ok(out)
}

pub fn filters(records: &[EnergyRecord], format: OutputFormat) -> anyhow::Result<String> {
    let options = filter_options(records);
    match format {
        OutputFormat::Json => to_json(&options),
        OutputFormat::Text => {
            let years: Vec<String> = options.years.iter().map(|y| y.to_string()).collect();
            Ok(format!(
                "Countries: {}\nYears: {}",
                options.countries.join(", "),
                years.join(", ")
            ))
        }
    }
}

pub fn compare(
    records: &[EnergyRecord],
    criteria: &FilterCriteria,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let series = consumption_vs_generation(&filter(records, &criteria.without_max_value()));
    if format == OutputFormat::Json {
        return to_json(&series);
    }
    let mut out = format!(
        "{:<16} {:>4} {:<5} {:>12} {:>12}",
        "Country", "Year", "Month", "Consumption", "Generation"
    );
    for point in &series {
        write!(
            out,
            "\n{:<16} {:>4} {:<5} {:>12} {:>12}",
            point.country,
            point.year,
            point.month,
            fixed2(point.consumption),
            fixed2(point.generation)
        )?;
    }
    Ok(out)
}

pub fn report(
    records: &[EnergyRecord],
    criteria: &FilterCriteria,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let report = dashboard_report(records, criteria);
    if format == OutputFormat::Json {
        return to_json(&report);
    }

    let mut out = format!("Records: {}", report.record_count);
    for card in &report.kpis {
        write!(out, "\n{}: {}", card.label, card.display)?;
    }
    for chart in &report.charts {
        write!(out, "\n\n{}\n{}\n{}", chart.title, chart.narrative, chart.analysis)?;
    }
    write!(
        out,
        "\n\nRenewable vs Fossil Share\n{}\n\nEnergy Use Breakdown\n{}\n\nPrice Index & Other KPIs\n{}",
        report.energy_mix, report.use_breakdown, report.indicators
    )?;
    Ok(out)
}

use crate::monthly::MonthlyAggregate;
use energy_core::metric::{Metric, MetricError};
use energy_core::month::Month;
use energy_core::record::EnergyRecord;
use energy_utils::numbers::{fixed2, mean_or_zero};
use serde::Serialize;
use std::fmt;

/// Relative spread between the lowest and highest month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PercentChange {
    /// `(max - min) / min * 100`
    Defined(f64),
    /// The lowest month is 0, so there is no base to divide by.
    Undefined,
}

impl PercentChange {
    fn between(min_value: f64, max_value: f64) -> PercentChange {
        if min_value == 0.0 {
            PercentChange::Undefined
        } else {
            PercentChange::Defined((max_value - min_value) / min_value * 100.0)
        }
    }
}

impl fmt::Display for PercentChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PercentChange::Defined(v) => write!(f, "{}%", fixed2(*v)),
            PercentChange::Undefined => f.write_str("N/A"),
        }
    }
}

/// Total, extremes and spread of one metric over the twelve monthly means.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricSummary {
    pub metric: Metric,
    /// Sum of the twelve monthly means (unweighted by record count).
    pub total: f64,
    pub min_month: Month,
    pub min_value: f64,
    pub max_month: Month,
    pub max_value: f64,
    pub percent_change: PercentChange,
}

impl MetricSummary {
    /// One-paragraph description for a chart caption.
    ///
    /// `average` is the mean over all filtered records (see [`overall_average`]),
    /// not the mean of the monthly means.
    pub fn narrative(&self, average: f64) -> String {
        let metric = self.metric;
        format!(
            "Analysis of {}: {}. Highest in {} ({}), Lowest in {} ({}), Average: {}.",
            metric.label(),
            with_unit(self.total, metric),
            self.max_month,
            with_unit(self.max_value, metric),
            self.min_month,
            with_unit(self.min_value, metric),
            with_unit(average, metric),
        )
    }

    /// Min/max sentence including the percentage change.
    pub fn analysis(&self) -> String {
        format!(
            "The minimum value was in {} ({}), and the maximum value was in {} ({}). \
             The percentage change throughout the year was {}.",
            self.min_month,
            fixed2(self.min_value),
            self.max_month,
            fixed2(self.max_value),
            self.percent_change,
        )
    }
}

/// Render a value with two decimals followed by the metric's unit.
pub fn with_unit(value: f64, metric: Metric) -> String {
    match metric.unit() {
        "%" => format!("{}%", fixed2(value)),
        unit => format!("{} {unit}", fixed2(value)),
    }
}

/// Summarize one metric over the monthly aggregates.
///
/// Months are ranked with a stable sort, so among tied values the earliest
/// month in calendar order ranks first.
pub fn summarize(aggregates: &[MonthlyAggregate; 12], metric: Metric) -> MetricSummary {
    let mut sorted = *aggregates;
    sorted.sort_by(|a, b| a.value(metric).total_cmp(&b.value(metric)));
    let lowest = sorted[0];
    let highest = sorted[sorted.len() - 1];

    let total: f64 = aggregates.iter().map(|a| a.value(metric)).sum();
    let summary = MetricSummary {
        metric,
        total,
        min_month: lowest.month,
        min_value: lowest.value(metric),
        max_month: highest.month,
        max_value: highest.value(metric),
        percent_change: PercentChange::between(lowest.value(metric), highest.value(metric)),
    };
    log::debug!("summary for {metric}: {summary:?}");
    summary
}

/// [`summarize`] for a metric given by name. Unknown names are rejected.
pub fn summarize_named(
    aggregates: &[MonthlyAggregate; 12],
    metric: &str,
) -> Result<MetricSummary, MetricError> {
    let metric: Metric = metric.parse()?;
    Ok(summarize(aggregates, metric))
}

/// Mean of a metric across every record in the filtered set, or 0 if empty.
pub fn overall_average(records: &[EnergyRecord], metric: Metric) -> f64 {
    mean_or_zero(records.iter().map(|r| r.value(metric)))
}

#[cfg(test)]
mod tests {
    use super::{overall_average, summarize, summarize_named, with_unit, PercentChange};
    use crate::monthly::aggregate_by_month;
    use energy_core::metric::{Metric, MetricError};
    use energy_core::month::Month;
    use energy_core::record::EnergyRecord;

    fn two_months() -> Vec<EnergyRecord> {
        vec![
            EnergyRecord::new("X", 2023, Month::Jan).with(Metric::Consumption, 10.0),
            EnergyRecord::new("X", 2023, Month::Feb).with(Metric::Consumption, 20.0),
        ]
    }

    #[test]
    fn test_two_months() {
        let aggregates = aggregate_by_month(&two_months());
        let summary = summarize(&aggregates, Metric::Consumption);
        assert_eq!(summary.total, 30.0);
        // the zero months rank below Jan; Mar is the first of them
        assert_eq!(summary.min_month, Month::Mar);
        assert_eq!(summary.min_value, 0.0);
        assert_eq!(summary.max_month, Month::Feb);
        assert_eq!(summary.max_value, 20.0);
        assert_eq!(summary.percent_change, PercentChange::Undefined);
    }

    #[test]
    fn test_empty_input_summary() {
        let aggregates = aggregate_by_month(&[]);
        let summary = summarize(&aggregates, Metric::Emissions);
        assert_eq!(summary.total, 0.0);
        assert_eq!(summary.min_month, Month::Jan);
        assert_eq!(summary.max_month, Month::Dec);
        assert_eq!(summary.percent_change, PercentChange::Undefined);
        assert_eq!(summary.percent_change.to_string(), "N/A");
        assert_eq!(overall_average(&[], Metric::Emissions), 0.0);
    }

    #[test]
    fn test_percent_change_defined() {
        let records: Vec<EnergyRecord> = Month::ALL
            .iter()
            .enumerate()
            .map(|(i, month)| {
                EnergyRecord::new("X", 2023, *month).with(Metric::PerCapita, 100.0 + i as f64 * 10.0)
            })
            .collect();
        let aggregates = aggregate_by_month(&records);
        let summary = summarize(&aggregates, Metric::PerCapita);
        assert_eq!(summary.min_month, Month::Jan);
        assert_eq!(summary.max_month, Month::Dec);
        assert_eq!(summary.total, 1200.0 + 660.0);
        match summary.percent_change {
            PercentChange::Defined(v) => assert!((v - 110.0).abs() < 1e-9),
            PercentChange::Undefined => panic!("expected a defined change"),
        }
        assert_eq!(summary.percent_change.to_string(), "110.00%");
    }

    #[test]
    fn test_ties_keep_calendar_order() {
        let records: Vec<EnergyRecord> = Month::ALL
            .iter()
            .map(|month| {
                let value = match month {
                    Month::Apr | Month::Sep => 1.0,
                    Month::Feb | Month::Nov => 9.0,
                    _ => 5.0,
                };
                EnergyRecord::new("X", 2023, *month).with(Metric::FossilShare, value)
            })
            .collect();
        let aggregates = aggregate_by_month(&records);
        for _ in 0..5 {
            let summary = summarize(&aggregates, Metric::FossilShare);
            assert_eq!(summary.min_month, Month::Apr);
            assert_eq!(summary.max_month, Month::Nov);
        }
    }

    #[test]
    fn test_total_is_unweighted_sum_of_means() {
        let records = vec![
            EnergyRecord::new("X", 2021, Month::Jan).with(Metric::Consumption, 10.0),
            EnergyRecord::new("X", 2022, Month::Jan).with(Metric::Consumption, 30.0),
            EnergyRecord::new("X", 2022, Month::Feb).with(Metric::Consumption, 40.0),
        ];
        let aggregates = aggregate_by_month(&records);
        let summary = summarize(&aggregates, Metric::Consumption);
        let expected: f64 = aggregates.iter().map(|a| a.value(Metric::Consumption)).sum();
        assert_eq!(summary.total, expected);
        assert_eq!(summary.total, 60.0);
        // the record-level average weights Jan twice, so it differs
        let average = overall_average(&records, Metric::Consumption);
        assert!((average - 80.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_summarize_named() {
        let aggregates = aggregate_by_month(&two_months());
        let summary = summarize_named(&aggregates, "consumption").unwrap();
        assert_eq!(summary.metric, Metric::Consumption);
        let err = summarize_named(&aggregates, "voltage").unwrap_err();
        assert_eq!(err, MetricError::Unknown("voltage".to_string()));
    }

    #[test]
    fn test_narrative_and_analysis() {
        let records = two_months();
        let aggregates = aggregate_by_month(&records);
        let summary = summarize(&aggregates, Metric::Consumption);
        let average = overall_average(&records, Metric::Consumption);
        assert_eq!(
            summary.narrative(average),
            "Analysis of Total energy consumption: 30.00 TWh. Highest in Feb (20.00 TWh), \
             Lowest in Mar (0.00 TWh), Average: 15.00 TWh."
        );
        assert_eq!(
            summary.analysis(),
            "The minimum value was in Mar (0.00), and the maximum value was in Feb (20.00). \
             The percentage change throughout the year was N/A."
        );
    }

    #[test]
    fn test_with_unit() {
        assert_eq!(with_unit(12.5, Metric::RenewableShare), "12.50%");
        assert_eq!(with_unit(0.131, Metric::PriceIndex), "0.13 USD/kWh");
    }
}

use energy_core::metric::Metric;
use energy_core::month::Month;
use energy_core::record::{EnergyMetrics, EnergyRecord};
use serde::Serialize;

/// Month-of-year means of every metric.
///
/// Observations from different years that share a calendar month are merged
/// into the same bucket, so the twelve aggregates describe a seasonal
/// pattern rather than a chronology.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlyAggregate {
    pub month: Month,
    /// Number of records that fell into this month.
    pub count: usize,
    pub means: EnergyMetrics,
}

impl MonthlyAggregate {
    pub fn value(&self, metric: Metric) -> f64 {
        self.means.get(metric)
    }
}

/// Group records by month label and average each metric.
///
/// Always yields twelve entries, January through December. A month with no
/// records has every mean set to 0.
pub fn aggregate_by_month(records: &[EnergyRecord]) -> [MonthlyAggregate; 12] {
    let mut sums = [EnergyMetrics::default(); 12];
    let mut counts = [0usize; 12];

    for record in records {
        let idx = record.month.index();
        counts[idx] += 1;
        for metric in Metric::ALL {
            let sum = sums[idx].get(metric) + record.value(metric);
            sums[idx].set(metric, sum);
        }
    }

    Month::ALL.map(|month| {
        let idx = month.index();
        let count = counts[idx];
        let mut means = EnergyMetrics::default();
        for metric in Metric::ALL {
            means.set(metric, sums[idx].get(metric) / count.max(1) as f64);
        }
        MonthlyAggregate {
            month,
            count,
            means,
        }
    })
}

/// Values of one metric across the twelve aggregates, in calendar order.
pub fn monthly_series(aggregates: &[MonthlyAggregate], metric: Metric) -> Vec<f64> {
    aggregates.iter().map(|a| a.value(metric)).collect()
}

#[cfg(test)]
mod tests {
    use super::{aggregate_by_month, monthly_series};
    use energy_core::metric::Metric;
    use energy_core::month::Month;
    use energy_core::record::EnergyRecord;

    #[test]
    fn test_empty_input_yields_twelve_zero_months() {
        let aggregates = aggregate_by_month(&[]);
        assert_eq!(aggregates.len(), 12);
        for (aggregate, month) in aggregates.iter().zip(Month::ALL) {
            assert_eq!(aggregate.month, month);
            assert_eq!(aggregate.count, 0);
            for metric in Metric::ALL {
                assert_eq!(aggregate.value(metric), 0.0);
            }
        }
    }

    #[test]
    fn test_two_months_leave_ten_empty() {
        let records = vec![
            EnergyRecord::new("X", 2023, Month::Jan).with(Metric::Consumption, 10.0),
            EnergyRecord::new("X", 2023, Month::Feb).with(Metric::Consumption, 20.0),
        ];
        let aggregates = aggregate_by_month(&records);
        let series = monthly_series(&aggregates, Metric::Consumption);
        assert_eq!(series[0], 10.0);
        assert_eq!(series[1], 20.0);
        assert!(series[2..].iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_years_are_merged_into_one_bucket() {
        let records = vec![
            EnergyRecord::new("X", 2020, Month::Jun)
                .with(Metric::Consumption, 10.0)
                .with(Metric::PriceIndex, 0.1),
            EnergyRecord::new("Y", 2021, Month::Jun)
                .with(Metric::Consumption, 30.0)
                .with(Metric::PriceIndex, 0.3),
            EnergyRecord::new("X", 2022, Month::Jun)
                .with(Metric::Consumption, 50.0)
                .with(Metric::PriceIndex, 0.2),
        ];
        let aggregates = aggregate_by_month(&records);
        let june = aggregates[Month::Jun.index()];
        assert_eq!(june.month, Month::Jun);
        assert_eq!(june.count, 3);
        assert!((june.value(Metric::Consumption) - 30.0).abs() < 1e-9);
        assert!((june.value(Metric::PriceIndex) - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_order_independent_of_input_order() {
        let records = vec![
            EnergyRecord::new("X", 2023, Month::Dec).with(Metric::Emissions, 4.0),
            EnergyRecord::new("X", 2023, Month::Jan).with(Metric::Emissions, 2.0),
        ];
        let aggregates = aggregate_by_month(&records);
        assert_eq!(aggregates[0].month, Month::Jan);
        assert_eq!(aggregates[11].month, Month::Dec);
        assert_eq!(aggregates[0].value(Metric::Emissions), 2.0);
        assert_eq!(aggregates[11].value(Metric::Emissions), 4.0);
    }
}

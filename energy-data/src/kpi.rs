use crate::summary::overall_average;
use energy_core::metric::Metric;
use energy_core::record::EnergyRecord;
use energy_utils::numbers::fixed2;
use serde::Serialize;

/// A headline card: a label and a filtered-set average.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiCard {
    pub label: &'static str,
    pub metric: Metric,
    pub value: f64,
    /// `value` with two decimals.
    pub display: String,
}

const CARDS: [(&str, Metric); 4] = [
    ("Avg. Energy Consumption (TWh)", Metric::Consumption),
    ("Avg. Per Capita (kWh)", Metric::PerCapita),
    ("Avg. Emissions (MTons)", Metric::Emissions),
    ("Avg. Price (USD/kWh)", Metric::PriceIndex),
];

pub fn kpi_cards(records: &[EnergyRecord]) -> Vec<KpiCard> {
    CARDS
        .iter()
        .map(|&(label, metric)| {
            let value = overall_average(records, metric);
            KpiCard {
                label,
                metric,
                value,
                display: fixed2(value),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::kpi_cards;
    use energy_core::metric::Metric;
    use energy_core::month::Month;
    use energy_core::record::EnergyRecord;

    #[test]
    fn test_cards_average_filtered_records() {
        let records = vec![
            EnergyRecord::new("X", 2023, Month::Jan)
                .with(Metric::Consumption, 10.0)
                .with(Metric::PriceIndex, 0.1),
            EnergyRecord::new("X", 2023, Month::Feb)
                .with(Metric::Consumption, 25.0)
                .with(Metric::PriceIndex, 0.2),
        ];
        let cards = kpi_cards(&records);
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].metric, Metric::Consumption);
        assert_eq!(cards[0].display, "17.50");
        assert_eq!(cards[3].metric, Metric::PriceIndex);
        assert_eq!(cards[3].display, "0.15");
    }

    #[test]
    fn test_empty_cards_are_zero() {
        let cards = kpi_cards(&[]);
        assert!(cards.iter().all(|c| c.value == 0.0 && c.display == "0.00"));
    }
}

use crate::country::CountryTotals;
use crate::scale::{BubbleScale, Rgb};
use energy_core::coordinates::{country_coordinates, Coordinates};
use energy_utils::numbers::fixed2;
use serde::Serialize;

/// A placed map marker for one country.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bubble {
    pub country: String,
    pub value: f64,
    pub radius: f64,
    pub color: Rgb,
    pub coordinates: Coordinates,
    pub tooltip: String,
}

/// One labeled stop of the color legend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendStop {
    pub label: &'static str,
    pub value: f64,
    pub color: Rgb,
    /// `value` with two decimals and the TWh unit.
    pub caption: String,
}

/// Place a bubble for every country with a known map position.
/// Countries without coordinates are skipped.
pub fn bubbles(totals: &CountryTotals, scale: &BubbleScale) -> Vec<Bubble> {
    totals
        .iter()
        .filter_map(|(country, &value)| {
            let Some(coordinates) = country_coordinates(country) else {
                log::debug!("no map position for {country}, skipping bubble");
                return None;
            };
            Some(Bubble {
                country: country.clone(),
                value,
                radius: scale.radius(value),
                color: scale.color(value),
                coordinates,
                tooltip: format!("{country}: {} TWh", fixed2(value)),
            })
        })
        .collect()
}

/// Low, mid and high stops of the legend beneath the map.
pub fn legend(scale: &BubbleScale) -> [LegendStop; 3] {
    let stop = |label: &'static str, value: f64| LegendStop {
        label,
        value,
        color: scale.color(value),
        caption: format!("{} TWh", fixed2(value)),
    };
    [
        stop("Low", scale.min_val),
        stop("Mid", scale.mid_val),
        stop("High", scale.max_val),
    ]
}

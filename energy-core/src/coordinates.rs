use serde::Serialize;

/// Map position of a country bubble as (longitude, latitude) in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub longitude: f64,
    pub latitude: f64,
}

/// Countries that have a fixed bubble position on the world map.
const COUNTRY_COORDINATES: [(&str, f64, f64); 11] = [
    ("USA", -100.0, 40.0),
    ("China", 105.0, 35.0),
    ("India", 78.0, 22.0),
    ("Germany", 10.0, 51.0),
    ("Brazil", -51.0, -10.0),
    ("Canada", -106.0, 56.0),
    ("Australia", 133.0, -27.0),
    ("France", 2.0, 46.0),
    ("UK", -1.5, 52.0),
    ("Russia", 105.0, 60.0),
    ("Japan", 138.0, 37.0),
];

/// Look up the bubble position for a country name (exact match).
pub fn country_coordinates(country: &str) -> Option<Coordinates> {
    COUNTRY_COORDINATES
        .iter()
        .find(|(name, _, _)| *name == country)
        .map(|&(_, longitude, latitude)| Coordinates {
            longitude,
            latitude,
        })
}

#[cfg(test)]
mod tests {
    use super::country_coordinates;

    #[test]
    fn test_known_country() {
        let uk = country_coordinates("UK").unwrap();
        assert_eq!(uk.longitude, -1.5);
        assert_eq!(uk.latitude, 52.0);
    }

    #[test]
    fn test_unknown_country() {
        assert!(country_coordinates("Atlantis").is_none());
        assert!(country_coordinates("usa").is_none());
    }
}

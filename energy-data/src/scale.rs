use crate::country::CountryTotals;
use serde::Serialize;
use std::fmt;

/// Smallest bubble radius in pixels.
pub const RADIUS_MIN: f64 = 2.0;
/// Largest bubble radius in pixels.
pub const RADIUS_MAX: f64 = 30.0;

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Channel-wise linear interpolation, `t` in `[0, 1]`.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| {
            let v = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        Rgb {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Low end of the diverging ramp (blue).
pub const COLOR_LOW: Rgb = Rgb::new(49, 54, 149);
/// Center of the diverging ramp (pale yellow).
pub const COLOR_MID: Rgb = Rgb::new(250, 248, 193);
/// High end of the diverging ramp (red).
pub const COLOR_HIGH: Rgb = Rgb::new(165, 0, 38);

/// Radius and color scales for the country bubble map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BubbleScale {
    pub min_val: f64,
    pub mid_val: f64,
    pub max_val: f64,
    /// Built from no totals; both scales are constant.
    pub empty: bool,
}

impl BubbleScale {
    /// Square-root scale from `[0, max_val]` onto `[RADIUS_MIN, RADIUS_MAX]`,
    /// so bubble area grows linearly with the value.
    pub fn radius(&self, value: f64) -> f64 {
        if self.empty || self.max_val <= 0.0 || value.is_nan() {
            return RADIUS_MIN;
        }
        let t = (value / self.max_val).clamp(0.0, 1.0);
        RADIUS_MIN + (RADIUS_MAX - RADIUS_MIN) * t.sqrt()
    }

    /// Three-stop interpolation over `[min_val, mid_val, max_val]`.
    /// Values outside the domain take the nearest endpoint color.
    pub fn color(&self, value: f64) -> Rgb {
        if self.empty || value.is_nan() {
            return COLOR_LOW;
        }
        if self.max_val == self.min_val {
            return COLOR_MID;
        }
        if value <= self.min_val {
            COLOR_LOW
        } else if value >= self.max_val {
            COLOR_HIGH
        } else if value <= self.mid_val {
            let t = (value - self.min_val) / (self.mid_val - self.min_val);
            COLOR_LOW.lerp(COLOR_MID, t)
        } else {
            let t = (value - self.mid_val) / (self.max_val - self.mid_val);
            COLOR_MID.lerp(COLOR_HIGH, t)
        }
    }
}

/// Derive the bubble scales from the range of the country totals.
pub fn build_scales(totals: &CountryTotals) -> BubbleScale {
    let mut values = totals.values().copied();
    let Some(first) = values.next() else {
        log::debug!("no country totals, using constant scales");
        return BubbleScale {
            min_val: 0.0,
            mid_val: 0.0,
            max_val: 0.0,
            empty: true,
        };
    };
    let (min_val, max_val) = values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let scale = BubbleScale {
        min_val,
        mid_val: (min_val + max_val) / 2.0,
        max_val,
        empty: false,
    };
    log::debug!("bubble scale domain [{min_val}, {max_val}]");
    scale
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_countries() -> CountryTotals {
        CountryTotals::from([
            ("A".to_string(), 10.0),
            ("B".to_string(), 30.0),
            ("C".to_string(), 20.0),
        ])
    }

    #[test]
    fn test_domain_from_totals() {
        let scale = build_scales(&three_countries());
        assert_eq!(scale.min_val, 10.0);
        assert_eq!(scale.mid_val, 20.0);
        assert_eq!(scale.max_val, 30.0);
        assert!(!scale.empty);
    }

    #[test]
    fn test_radius_range() {
        let scale = build_scales(&three_countries());
        assert_eq!(scale.radius(30.0), RADIUS_MAX);
        assert_eq!(scale.radius(0.0), RADIUS_MIN);
        // a quarter of the max value gives half the radius span
        assert!((scale.radius(7.5) - 16.0).abs() < 1e-9);
        assert!(scale.radius(10.0) < scale.radius(20.0));
        assert_eq!(scale.radius(-5.0), RADIUS_MIN);
    }

    #[test]
    fn test_color_stops() {
        let scale = build_scales(&three_countries());
        assert_eq!(scale.color(10.0), COLOR_LOW);
        assert_eq!(scale.color(20.0), COLOR_MID);
        assert_eq!(scale.color(30.0), COLOR_HIGH);
    }

    #[test]
    fn test_color_clamps_outside_domain() {
        let scale = build_scales(&three_countries());
        assert_eq!(scale.color(-100.0), COLOR_LOW);
        assert_eq!(scale.color(1e9), COLOR_HIGH);
    }

    #[test]
    fn test_color_interpolates_between_stops() {
        let scale = build_scales(&three_countries());
        // halfway between low and mid
        let c = scale.color(15.0);
        assert_eq!(c, Rgb::new(150, 151, 171));
        // halfway between mid and high
        let c = scale.color(25.0);
        assert_eq!(c, Rgb::new(208, 124, 116));
    }

    #[test]
    fn test_empty_totals_give_constant_scales() {
        let scale = build_scales(&CountryTotals::new());
        assert!(scale.empty);
        for v in [0.0, 1.0, 1e6, -3.0] {
            assert_eq!(scale.radius(v), RADIUS_MIN);
            assert_eq!(scale.color(v), COLOR_LOW);
        }
    }

    #[test]
    fn test_single_country() {
        let totals = CountryTotals::from([("Solo".to_string(), 42.0)]);
        let scale = build_scales(&totals);
        assert_eq!(scale.min_val, 42.0);
        assert_eq!(scale.max_val, 42.0);
        assert_eq!(scale.radius(42.0), RADIUS_MAX);
        assert_eq!(scale.color(42.0), COLOR_MID);
    }

    #[test]
    fn test_equal_totals_use_mid_color() {
        let totals = CountryTotals::from([
            ("A".to_string(), 500.0),
            ("B".to_string(), 500.0),
            ("C".to_string(), 500.0),
        ]);
        let scale = build_scales(&totals);
        assert_eq!(scale.mid_val, 500.0);
        for v in [0.0, 500.0, 1e6] {
            assert_eq!(scale.color(v), COLOR_MID);
        }
        assert_eq!(scale.radius(500.0), RADIUS_MAX);
    }

    #[test]
    fn test_rgb_formatting() {
        assert_eq!(COLOR_MID.to_string(), "rgb(250, 248, 193)");
        assert_eq!(COLOR_HIGH.hex(), "#a50026");
        assert_eq!(COLOR_LOW.hex(), "#313695");
    }
}

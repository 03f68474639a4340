//! Fabric advisor: maps weather conditions to recommended materials
//!
//! Pure decision ladder over (condition text, temperature). Rainy
//! conditions win regardless of temperature; otherwise the temperature
//! selects one of five fixed bands. Boundary values (5, 15, 25, 35)
//! belong to the upper band.

use serde::Serialize;

/// A recommended material with a one-line rationale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FabricSuggestion {
    pub name: &'static str,
    pub rationale: &'static str,
}

const fn suggestion(name: &'static str, rationale: &'static str) -> FabricSuggestion {
    FabricSuggestion { name, rationale }
}

/// Water-resistant set for rain, drizzle, and showers
pub const RAIN_SET: [FabricSuggestion; 3] = [
    suggestion("Nylon", "Water-resistant and quick-drying."),
    suggestion("Polyester", "Durable and moisture-repellent."),
    suggestion("Blended Synthetic", "Comfortable under humidity."),
];

/// Breathable set for temperatures of 35°C and above
pub const HOT_SET: [FabricSuggestion; 3] = [
    suggestion("Cotton", "Highly breathable and absorbs sweat."),
    suggestion("Linen", "Very light and airy for hot climates."),
    suggestion("Rayon", "Soft, smooth, and keeps body cool."),
];

/// Warm-weather set for 25-35°C
pub const WARM_SET: [FabricSuggestion; 3] = [
    suggestion("Cotton", "Soft and comfortable for warm conditions."),
    suggestion("Linen", "Keeps airflow; perfect for moderate heat."),
    suggestion("Chambray", "Light cotton alternative for comfort."),
];

/// Mild-weather set for 15-25°C
pub const MILD_SET: [FabricSuggestion; 3] = [
    suggestion("Denim / Twill", "Holds warmth, yet comfortable."),
    suggestion("Cotton-blend", "Good insulation without heaviness."),
    suggestion("Flannel", "Soft and mild for pleasant weather."),
];

/// Cool-weather set for 5-15°C
pub const COOL_SET: [FabricSuggestion; 3] = [
    suggestion("Wool", "Excellent warmth for cool temperatures."),
    suggestion("Fleece", "Soft, cozy and heat-retaining."),
    suggestion("Acrylic Blend", "Lightweight yet warm fabric."),
];

/// Insulating set for temperatures below 5°C
pub const COLD_SET: [FabricSuggestion; 3] = [
    suggestion("Wool", "Thick insulation for freezing weather."),
    suggestion("Cashmere", "Luxurious and extremely warm."),
    suggestion("Thermal Synthetic", "Best for extreme cold and snow."),
];

const RAIN_MARKERS: [&str; 3] = ["rain", "drizzle", "shower"];

/// Recommend exactly three fabrics for the given weather.
///
/// The condition text is matched case-insensitively; a rainy condition
/// takes priority over every temperature band.
#[must_use]
pub fn recommend(condition: &str, temperature: f64) -> &'static [FabricSuggestion; 3] {
    let condition = condition.to_lowercase();
    if RAIN_MARKERS.iter().any(|marker| condition.contains(marker)) {
        &RAIN_SET
    } else if temperature >= 35.0 {
        &HOT_SET
    } else if temperature >= 25.0 {
        &WARM_SET
    } else if temperature >= 15.0 {
        &MILD_SET
    } else if temperature >= 5.0 {
        &COOL_SET
    } else {
        &COLD_SET
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::hot_boundary(35.0, &HOT_SET)]
    #[case::warm_boundary(25.0, &WARM_SET)]
    #[case::mild_boundary(15.0, &MILD_SET)]
    #[case::cool_boundary(5.0, &COOL_SET)]
    #[case::just_below_hot(34.9, &WARM_SET)]
    #[case::just_below_warm(24.9, &MILD_SET)]
    #[case::just_below_mild(14.9, &COOL_SET)]
    #[case::just_below_cool(4.9, &COLD_SET)]
    #[case::freezing(-10.0, &COLD_SET)]
    #[case::scorching(45.0, &HOT_SET)]
    fn test_temperature_bands(
        #[case] temperature: f64,
        #[case] expected: &'static [FabricSuggestion; 3],
    ) {
        assert_eq!(recommend("Sunny", temperature), expected);
    }

    #[rstest]
    #[case("Light rain")]
    #[case("Patchy light drizzle")]
    #[case("Moderate or heavy rain shower")]
    #[case("RAIN")]
    fn test_rain_overrides_temperature(#[case] condition: &str) {
        // Even at 40°C the water-resistant set wins.
        assert_eq!(recommend(condition, 40.0), &RAIN_SET);
    }

    #[test]
    fn test_recommend_is_deterministic() {
        let first = recommend("Partly cloudy", 18.0);
        let second = recommend("Partly cloudy", 18.0);
        assert_eq!(first, second);
        assert_eq!(first, &MILD_SET);
    }

    #[test]
    fn test_every_set_has_three_entries_with_rationales() {
        for set in [&RAIN_SET, &HOT_SET, &WARM_SET, &MILD_SET, &COOL_SET, &COLD_SET] {
            assert_eq!(set.len(), 3);
            for s in set.iter() {
                assert!(!s.name.is_empty());
                assert!(!s.rationale.is_empty());
            }
        }
    }
}

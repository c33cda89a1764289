use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::FixtureSpec;

/// Lighting power density classes, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EfficiencyRating {
    Excellent,
    #[serde(rename = "Very Good")]
    VeryGood,
    Good,
    Average,
    Poor,
}

impl EfficiencyRating {
    /// Upper bounds (exclusive, W/m²) of every class except `Poor`.
    pub const THRESHOLDS: [(f64, EfficiencyRating); 4] = [
        (5.0, EfficiencyRating::Excellent),
        (8.0, EfficiencyRating::VeryGood),
        (12.0, EfficiencyRating::Good),
        (15.0, EfficiencyRating::Average),
    ];

    pub fn from_power_density(power_density: f64) -> Self {
        Self::THRESHOLDS
            .iter()
            .find(|(limit, _)| power_density < *limit)
            .map(|&(_, rating)| rating)
            .unwrap_or(Self::Poor)
    }
}

impl fmt::Display for EfficiencyRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Excellent => "Excellent",
            Self::VeryGood => "Very Good",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::Poor => "Poor",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyMetrics {
    /// Installed power (W).
    pub total_power: f64,
    /// Installed power per floor area (W/m²).
    pub power_density: f64,
    pub efficiency_rating: EfficiencyRating,
}

/// Electrical power of one lamp.
///
/// Uses the catalog wattage when a matching lamp is known, otherwise
/// assumes `flux / fallback_efficacy`.
pub fn watts_per_lamp(
    flux_per_lamp: f64,
    fixture: Option<&FixtureSpec>,
    fallback_efficacy: f64,
) -> f64 {
    match fixture {
        Some(spec) => spec.wattage,
        None => flux_per_lamp / fallback_efficacy,
    }
}

pub fn energy_metrics(count: usize, floor_area: f64, watts_per_lamp: f64) -> EnergyMetrics {
    let total_power = count as f64 * watts_per_lamp;
    let power_density = total_power / floor_area;
    EnergyMetrics {
        total_power,
        power_density,
        efficiency_rating: EfficiencyRating::from_power_density(power_density),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FixtureCatalog, LampType};

    #[test]
    fn test_rating_thresholds() {
        use EfficiencyRating::*;
        let cases = [
            (0.0, Excellent),
            (4.99, Excellent),
            (5.0, VeryGood),
            (7.99, VeryGood),
            (8.0, Good),
            (11.99, Good),
            (12.0, Average),
            (14.99, Average),
            (15.0, Poor),
            (40.0, Poor),
        ];
        for (density, expected) in cases {
            assert_eq!(EfficiencyRating::from_power_density(density), expected, "{density}");
        }
    }

    #[test]
    fn test_rating_names() -> anyhow::Result<()> {
        assert_eq!(EfficiencyRating::VeryGood.to_string(), "Very Good");
        assert_eq!(serde_json::to_string(&EfficiencyRating::VeryGood)?, "\"Very Good\"");
        assert!(EfficiencyRating::Excellent < EfficiencyRating::Poor);
        Ok(())
    }

    #[test]
    fn test_watts_from_catalog_or_fallback() {
        let catalog = FixtureCatalog::with_presets();
        let panel = catalog.lookup_by_flux(3600.0);
        assert_eq!(watts_per_lamp(3600.0, panel, 100.0), 36.0);
        let t8 = FixtureSpec::new("t8", "T8", 2400.0, 32.0, LampType::Fluorescent);
        assert_eq!(watts_per_lamp(2400.0, Some(&t8), 100.0), 32.0);
        assert!((watts_per_lamp(3000.0, None, 100.0) - 30.0).abs() < 1e-12);
        assert!((watts_per_lamp(3000.0, None, 150.0) - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_energy_metrics_reference_room() {
        let metrics = energy_metrics(20, 80.0, 36.0);
        assert!((metrics.total_power - 720.0).abs() < 1e-12);
        assert!((metrics.power_density - 9.0).abs() < 1e-12);
        assert_eq!(metrics.efficiency_rating, EfficiencyRating::Good);
    }
}
